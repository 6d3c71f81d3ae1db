//! Ports: trait contracts between the application core and its adapters.

mod plan_repository;

pub use plan_repository::PlanRepository;
