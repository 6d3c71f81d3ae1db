//! In-memory adapter implementations for tests and local development.

mod plan_repository;

pub use plan_repository::InMemoryPlanRepository;
