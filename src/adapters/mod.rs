//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API
//! - `memory` - In-memory repositories for tests and local development
//! - `postgres` - PostgreSQL persistence

pub mod http;
pub mod memory;
pub mod postgres;
