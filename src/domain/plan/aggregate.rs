//! Plan aggregate entity.
//!
//! A plan is a saved generation result: the company label, the raw diagnostic
//! snapshot it came from, and the action list the user edits afterwards.
//! Mutations replace the action list wholesale; the last write wins.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{DomainError, ErrorCode, Percentage, PlanId, Timestamp, UserId};

use super::action::{ActionItem, ActionStatus};

/// Maximum length for the company label.
pub const MAX_COMPANY_LENGTH: usize = 200;

/// Plan aggregate - one generated action plan owned by one user.
///
/// # Invariants
///
/// - `company` is 1-200 characters, non-empty
/// - `progress` always equals done-actions over total actions
/// - action ids are unique within the list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier for this plan.
    id: PlanId,

    /// User who owns this plan.
    user_id: UserId,

    /// Company label the plan was generated for.
    company: String,

    /// Opaque diagnostic answer snapshot, stored for reference only.
    diagnostic: Value,

    /// The editable action list.
    actions: Vec<ActionItem>,

    /// Completion percentage, recomputed on every action-list write.
    progress: Percentage,

    /// When the plan was generated.
    created_at: Timestamp,

    /// When the plan was last updated.
    updated_at: Timestamp,
}

impl Plan {
    /// Creates a new plan from a generation result.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the company label is empty or too long
    pub fn new(
        id: PlanId,
        user_id: UserId,
        company: String,
        diagnostic: Value,
        actions: Vec<ActionItem>,
    ) -> Result<Self, DomainError> {
        Self::validate_company(&company)?;
        let now = Timestamp::now();
        let progress = Self::progress_of(&actions);
        Ok(Self {
            id,
            user_id,
            company,
            diagnostic,
            actions,
            progress,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a plan from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: PlanId,
        user_id: UserId,
        company: String,
        diagnostic: Value,
        actions: Vec<ActionItem>,
        progress: Percentage,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            company,
            diagnostic,
            actions,
            progress,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the plan ID.
    pub fn id(&self) -> &PlanId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the company label.
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns the stored diagnostic snapshot.
    pub fn diagnostic(&self) -> &Value {
        &self.diagnostic
    }

    /// Returns the action list.
    pub fn actions(&self) -> &[ActionItem] {
        &self.actions
    }

    /// Returns the completion percentage.
    pub fn progress(&self) -> Percentage {
        self.progress
    }

    /// Returns when the plan was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the plan was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Checks if the given user owns this plan.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Replaces the action list wholesale, normalizing each item and
    /// recomputing progress. This is the only mutation path; concurrent
    /// writers clobber each other (last write wins, no merge).
    pub fn replace_actions(&mut self, mut actions: Vec<ActionItem>) {
        for action in &mut actions {
            action.normalize();
        }
        self.progress = Self::progress_of(&actions);
        self.actions = actions;
        self.updated_at = Timestamp::now();
    }

    /// Validates access for a user.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if the user does not own this plan
    pub fn ensure_owner(&self, user_id: &UserId) -> Result<(), DomainError> {
        if !self.is_owner(user_id) {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                format!("User {} does not own plan {}", user_id, self.id),
            ));
        }
        Ok(())
    }

    fn progress_of(actions: &[ActionItem]) -> Percentage {
        let done = actions
            .iter()
            .filter(|a| a.status == ActionStatus::Done)
            .count();
        Percentage::of(done, actions.len())
    }

    fn validate_company(company: &str) -> Result<(), DomainError> {
        if company.trim().is_empty() {
            return Err(DomainError::validation("company", "Company label cannot be empty"));
        }
        if company.len() > MAX_COMPANY_LENGTH {
            return Err(DomainError::validation(
                "company",
                format!("Company label exceeds {} characters", MAX_COMPANY_LENGTH),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::action::Priority;
    use crate::domain::plan::category::Category;
    use serde_json::json;

    fn action(description: &str) -> ActionItem {
        ActionItem::new(
            description,
            Category::Management,
            Priority::High,
            1,
            Timestamp::now(),
            "Gestor",
            "-",
            "-",
            "-",
        )
    }

    fn plan_with(actions: Vec<ActionItem>) -> Plan {
        Plan::new(
            PlanId::new(),
            UserId::new("user-1").unwrap(),
            "Padaria do João".to_string(),
            json!({"team_size": "1-5"}),
            actions,
        )
        .unwrap()
    }

    #[test]
    fn new_plan_computes_initial_progress() {
        let plan = plan_with(vec![action("a"), action("b")]);
        assert_eq!(plan.progress(), Percentage::ZERO);
    }

    #[test]
    fn empty_company_is_rejected() {
        let result = Plan::new(
            PlanId::new(),
            UserId::new("user-1").unwrap(),
            "   ".to_string(),
            json!({}),
            vec![],
        );
        assert!(result.is_err());
    }

    #[test]
    fn oversized_company_is_rejected() {
        let result = Plan::new(
            PlanId::new(),
            UserId::new("user-1").unwrap(),
            "x".repeat(MAX_COMPANY_LENGTH + 1),
            json!({}),
            vec![],
        );
        assert!(result.is_err());
    }

    #[test]
    fn replace_actions_recomputes_progress() {
        let mut plan = plan_with(vec![action("a"), action("b")]);
        let mut actions = plan.actions().to_vec();
        actions[0].set_status(ActionStatus::Done);

        plan.replace_actions(actions);
        assert_eq!(plan.progress(), Percentage::new(50));
    }

    #[test]
    fn replace_actions_normalizes_external_state() {
        let mut plan = plan_with(vec![action("a")]);
        let mut actions = plan.actions().to_vec();
        // Incoherent client state: done without the completion flag.
        actions[0].status = ActionStatus::Done;
        actions[0].completed = false;

        plan.replace_actions(actions);
        assert_eq!(plan.actions()[0].status, ActionStatus::Pending);
    }

    #[test]
    fn replace_actions_bumps_updated_at() {
        let mut plan = plan_with(vec![action("a")]);
        let before = *plan.updated_at();
        plan.replace_actions(vec![]);
        assert!(!plan.updated_at().is_before(&before));
    }

    #[test]
    fn ensure_owner_rejects_other_users() {
        let plan = plan_with(vec![]);
        let intruder = UserId::new("user-2").unwrap();
        let err = plan.ensure_owner(&intruder).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert!(plan.ensure_owner(&UserId::new("user-1").unwrap()).is_ok());
    }

    #[test]
    fn serde_round_trip_preserves_content() {
        let mut plan = plan_with(vec![action("a"), action("b")]);
        let mut actions = plan.actions().to_vec();
        actions[1].set_status(ActionStatus::InProgress);
        plan.replace_actions(actions);

        let json = serde_json::to_string(&plan).unwrap();
        let back: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, back);
    }
}
