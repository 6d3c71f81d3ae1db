//! HTTP adapter for plan endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::PlanAppState;
pub use routes::plan_router;
