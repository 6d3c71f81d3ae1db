//! Route configuration for plan endpoints.
//!
//! Configures Axum router with plan-related routes.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    delete_plan, generate_plan, get_plan, list_plans, update_actions, PlanAppState,
};

/// Creates the plan router with all endpoints.
///
/// Routes:
/// - `POST /api/plans` - Generate a plan from a finalized diagnostic
/// - `GET /api/plans` - List the authenticated user's plans
/// - `GET /api/plans/:id` - Fetch one plan
/// - `PUT /api/plans/:id/actions` - Replace a plan's action list
/// - `DELETE /api/plans/:id` - Delete one plan
pub fn plan_router() -> Router<PlanAppState> {
    Router::new()
        .route("/api/plans", post(generate_plan).get(list_plans))
        .route("/api/plans/:id", get(get_plan).delete(delete_plan))
        .route("/api/plans/:id/actions", put(update_actions))
}
