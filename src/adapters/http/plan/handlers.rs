//! HTTP handlers for plan endpoints.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::plan::{
    DeletePlanCommand, DeletePlanHandler, GeneratePlanCommand, GeneratePlanHandler, GetPlanHandler,
    GetPlanQuery, ListPlansHandler, ListPlansQuery, UpdateActionsCommand, UpdateActionsHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, PlanId, UserId};
use crate::domain::generator::{GeneratorConfig, PlanGenerator};
use crate::ports::PlanRepository;

use super::dto::{
    ErrorResponse, GeneratePlanRequest, PlanResponse, PlanSummaryResponse, UpdateActionsRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct PlanAppState {
    pub plan_repository: Arc<dyn PlanRepository>,
    pub generator_config: GeneratorConfig,
}

impl PlanAppState {
    pub fn generate_plan_handler(&self) -> GeneratePlanHandler {
        GeneratePlanHandler::new(
            self.plan_repository.clone(),
            PlanGenerator::new(self.generator_config),
        )
    }

    pub fn get_plan_handler(&self) -> GetPlanHandler {
        GetPlanHandler::new(self.plan_repository.clone())
    }

    pub fn list_plans_handler(&self) -> ListPlansHandler {
        ListPlansHandler::new(self.plan_repository.clone())
    }

    pub fn update_actions_handler(&self) -> UpdateActionsHandler {
        UpdateActionsHandler::new(self.plan_repository.clone())
    }

    pub fn delete_plan_handler(&self) -> DeletePlanHandler {
        DeletePlanHandler::new(self.plan_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// User Context
// ════════════════════════════════════════════════════════════════════════════════

/// Authenticated user context extracted from request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Rejection type for AuthenticatedUser extraction.
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::bad_request("Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user_id = parts
                .headers
                .get("X-User-Id")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| UserId::new(s).ok())
                .ok_or(AuthenticationRequired)?;

            Ok(AuthenticatedUser { user_id })
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/plans - Generate a plan from a finalized diagnostic
pub async fn generate_plan(
    State(state): State<PlanAppState>,
    user: AuthenticatedUser,
    Json(request): Json<GeneratePlanRequest>,
) -> Result<impl IntoResponse, PlanApiError> {
    let handler = state.generate_plan_handler();
    let cmd = GeneratePlanCommand {
        user_id: user.user_id,
        company: request.company,
        answers: request.answers,
    };

    let result = handler.handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(PlanResponse::from(&result.plan))))
}

/// GET /api/plans - List the authenticated user's plans
pub async fn list_plans(
    State(state): State<PlanAppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, PlanApiError> {
    let handler = state.list_plans_handler();
    let plans = handler
        .handle(ListPlansQuery {
            user_id: user.user_id,
        })
        .await?;

    let summaries: Vec<PlanSummaryResponse> =
        plans.iter().map(PlanSummaryResponse::from).collect();
    Ok(Json(summaries))
}

/// GET /api/plans/:id - Fetch one plan
pub async fn get_plan(
    State(state): State<PlanAppState>,
    Path(plan_id): Path<String>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, PlanApiError> {
    let plan_id = parse_plan_id(&plan_id)?;
    let handler = state.get_plan_handler();
    let plan = handler
        .handle(GetPlanQuery {
            user_id: user.user_id,
            plan_id,
        })
        .await?;
    Ok(Json(PlanResponse::from(&plan)))
}

/// PUT /api/plans/:id/actions - Replace a plan's action list
pub async fn update_actions(
    State(state): State<PlanAppState>,
    Path(plan_id): Path<String>,
    user: AuthenticatedUser,
    Json(request): Json<UpdateActionsRequest>,
) -> Result<impl IntoResponse, PlanApiError> {
    let plan_id = parse_plan_id(&plan_id)?;
    let handler = state.update_actions_handler();
    let plan = handler
        .handle(UpdateActionsCommand {
            user_id: user.user_id,
            plan_id,
            actions: request.actions,
        })
        .await?;
    Ok(Json(PlanResponse::from(&plan)))
}

/// DELETE /api/plans/:id - Delete one plan
pub async fn delete_plan(
    State(state): State<PlanAppState>,
    Path(plan_id): Path<String>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, PlanApiError> {
    let plan_id = parse_plan_id(&plan_id)?;
    let handler = state.delete_plan_handler();
    handler
        .handle(DeletePlanCommand {
            user_id: user.user_id,
            plan_id,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_plan_id(raw: &str) -> Result<PlanId, PlanApiError> {
    raw.parse().map_err(|_| {
        PlanApiError(DomainError::new(
            ErrorCode::ValidationFailed,
            "Invalid plan ID format",
        ))
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper mapping domain error codes to HTTP status codes.
#[derive(Debug)]
pub struct PlanApiError(pub DomainError);

impl From<DomainError> for PlanApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PlanApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::InvalidPosition => StatusCode::BAD_REQUEST,
            ErrorCode::PlanNotFound | ErrorCode::ActionNotFound | ErrorCode::StepNotFound => {
                StatusCode::NOT_FOUND
            }
            ErrorCode::StepsIncomplete => StatusCode::CONFLICT,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::DatabaseError | ErrorCode::CorruptedRecord | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let error = ErrorResponse {
            code: self.0.code.to_string(),
            message: self.0.message.clone(),
            details: serde_json::to_value(&self.0.details)
                .ok()
                .filter(|v| v.as_object().map(|m| !m.is_empty()).unwrap_or(false)),
        };

        (status, Json(error)).into_response()
    }
}
