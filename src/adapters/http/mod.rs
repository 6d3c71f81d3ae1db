//! HTTP adapters - REST API implementations.

pub mod plan;

pub use plan::{plan_router, PlanAppState};

use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Assembles the full application router with cross-cutting middleware.
pub fn app(state: PlanAppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(plan_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPlanRepository;
    use crate::domain::generator::GeneratorConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_endpoint_responds() {
        let state = PlanAppState {
            plan_repository: Arc::new(InMemoryPlanRepository::new()),
            generator_config: GeneratorConfig::default(),
        };
        let app = app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
