//! Application layer: orchestrates domain logic behind ports.

pub mod handlers;
