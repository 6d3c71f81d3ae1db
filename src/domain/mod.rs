//! Domain layer: pure business logic with no infrastructure concerns.

pub mod foundation;
pub mod generator;
pub mod plan;
pub mod questionnaire;
