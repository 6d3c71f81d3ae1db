//! Application command and query handlers, grouped by aggregate.

pub mod plan;
