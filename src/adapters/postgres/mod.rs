//! PostgreSQL adapter implementations.

mod plan_repository;

pub use plan_repository::PostgresPlanRepository;
