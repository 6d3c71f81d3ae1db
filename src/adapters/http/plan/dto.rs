//! HTTP DTOs (Data Transfer Objects) for plan endpoints.
//!
//! These types define the JSON request/response structure for the plan API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::plan::{ActionItem, Plan};
use crate::domain::questionnaire::Answer;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to generate a plan from a finalized diagnostic.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratePlanRequest {
    /// Company label for the plan.
    pub company: String,
    /// The finalized answer set.
    pub answers: Vec<Answer>,
}

/// Request replacing a plan's full action list.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateActionsRequest {
    /// The complete action list after the edit.
    pub actions: Vec<ActionItem>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Full plan response.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    /// Plan ID.
    pub id: String,
    /// Company label.
    pub company: String,
    /// The editable action list.
    pub actions: Vec<ActionItem>,
    /// Completion percentage (0-100).
    pub progress: u8,
    /// When the plan was generated (ISO 8601).
    pub created_at: String,
    /// When the plan was last updated (ISO 8601).
    pub updated_at: String,
}

impl From<&Plan> for PlanResponse {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id().to_string(),
            company: plan.company().to_string(),
            actions: plan.actions().to_vec(),
            progress: plan.progress().value(),
            created_at: plan.created_at().to_string(),
            updated_at: plan.updated_at().to_string(),
        }
    }
}

/// Summary response for plan lists.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummaryResponse {
    /// Plan ID.
    pub id: String,
    /// Company label.
    pub company: String,
    /// Completion percentage (0-100).
    pub progress: u8,
    /// Number of actions in the plan.
    pub action_count: usize,
    /// When the plan was generated (ISO 8601).
    pub created_at: String,
}

impl From<&Plan> for PlanSummaryResponse {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id().to_string(),
            company: plan.company().to_string(),
            progress: plan.progress().value(),
            action_count: plan.actions().len(),
            created_at: plan.created_at().to_string(),
        }
    }
}

/// Error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PlanId, UserId};

    #[test]
    fn generate_request_deserializes_mixed_answer_values() {
        let json = r#"{
            "company": "Padaria do João",
            "answers": [
                {"question_id": "team_size", "value": "1-5", "tag": null},
                {"question_id": "main_challenges", "value": ["Vendas"], "tag": null}
            ]
        }"#;
        let req: GeneratePlanRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.company, "Padaria do João");
        assert_eq!(req.answers.len(), 2);
        assert_eq!(req.answers[0].text(), Some("1-5"));
    }

    #[test]
    fn plan_response_carries_progress_and_actions() {
        let plan = Plan::new(
            PlanId::new(),
            UserId::new("user-1").unwrap(),
            "Padaria do João".to_string(),
            serde_json::json!({}),
            vec![],
        )
        .unwrap();

        let response = PlanResponse::from(&plan);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["company"], "Padaria do João");
        assert_eq!(json["progress"], 0);
        assert!(json["actions"].is_array());
    }

    #[test]
    fn summary_response_counts_actions() {
        let plan = Plan::new(
            PlanId::new(),
            UserId::new("user-1").unwrap(),
            "Mercearia Central".to_string(),
            serde_json::json!({}),
            vec![],
        )
        .unwrap();

        let summary = PlanSummaryResponse::from(&plan);
        assert_eq!(summary.action_count, 0);
        assert_eq!(summary.company, "Mercearia Central");
    }
}
