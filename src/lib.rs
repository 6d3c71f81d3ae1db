//! Plano Acao - Business Coaching Backend
//!
//! This crate implements a guided business diagnostic (questionnaire wizard)
//! and deterministic action-plan generation from the collected answers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
