//! UpdateActionsHandler - Command handler for replacing a plan's action list.
//!
//! The editor sends the whole action list after every mutation. The handler
//! loads the aggregate, checks ownership, normalizes the incoming list
//! through the aggregate, and writes it back. Concurrent editors clobber
//! each other (last write wins).

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, PlanId, UserId};
use crate::domain::plan::{ActionItem, Plan};
use crate::ports::PlanRepository;

/// Command replacing the full action list of one plan.
#[derive(Debug, Clone)]
pub struct UpdateActionsCommand {
    pub user_id: UserId,
    pub plan_id: PlanId,
    pub actions: Vec<ActionItem>,
}

/// Handler for action-list updates.
pub struct UpdateActionsHandler {
    repository: Arc<dyn PlanRepository>,
}

impl UpdateActionsHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateActionsCommand) -> Result<Plan, DomainError> {
        let mut plan = self
            .repository
            .find_by_id(&cmd.plan_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::PlanNotFound,
                    format!("Plan not found: {}", cmd.plan_id),
                )
            })?;

        plan.ensure_owner(&cmd.user_id)?;
        plan.replace_actions(cmd.actions);
        self.repository.update(&plan).await?;

        info!(
            plan_id = %plan.id(),
            progress = plan.progress().value(),
            "Updated plan actions"
        );

        Ok(plan)
    }
}
