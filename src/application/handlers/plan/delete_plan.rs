//! DeletePlanHandler - Command handler for deleting a plan.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, PlanId, UserId};
use crate::ports::PlanRepository;

/// Command to delete one plan.
#[derive(Debug, Clone)]
pub struct DeletePlanCommand {
    pub user_id: UserId,
    pub plan_id: PlanId,
}

/// Handler for plan deletion, enforcing ownership before the delete.
pub struct DeletePlanHandler {
    repository: Arc<dyn PlanRepository>,
}

impl DeletePlanHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeletePlanCommand) -> Result<(), DomainError> {
        let plan = self
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
        self.repository.delete(&cmd.plan_id).await?;

        info!(plan_id = %cmd.plan_id, "Deleted plan");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::Plan;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct DeletablePlanRepository {
        plan: Mutex<Option<Plan>>,
    }

    #[async_trait]
    impl PlanRepository for DeletablePlanRepository {
        async fn save(&self, _plan: &Plan) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _plan: &Plan) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
            Ok(self
                .plan
                .lock()
                .unwrap()
                .clone()
                .filter(|p| p.id() == id))
        }

        async fn find_by_user_id(&self, _user_id: &UserId) -> Result<Vec<Plan>, DomainError> {
            Ok(vec![])
        }

        async fn delete(&self, _id: &PlanId) -> Result<(), DomainError> {
            *self.plan.lock().unwrap() = None;
            Ok(())
        }
    }

    fn owner() -> UserId {
        UserId::new("owner-1").unwrap()
    }

    fn test_plan() -> Plan {
        Plan::new(
            PlanId::new(),
            owner(),
            "Transportadora Sul".to_string(),
            serde_json::json!({}),
            vec![],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn deletes_owned_plan() {
        let plan = test_plan();
        let repo = Arc::new(DeletablePlanRepository {
            plan: Mutex::new(Some(plan.clone())),
        });
        let handler = DeletePlanHandler::new(repo.clone());

        handler
            .handle(DeletePlanCommand {
                user_id: owner(),
                plan_id: *plan.id(),
            })
            .await
            .unwrap();

        assert!(repo.plan.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn refuses_to_delete_for_non_owner() {
        let plan = test_plan();
        let repo = Arc::new(DeletablePlanRepository {
            plan: Mutex::new(Some(plan.clone())),
        });
        let handler = DeletePlanHandler::new(repo.clone());

        let err = handler
            .handle(DeletePlanCommand {
                user_id: UserId::new("intruder").unwrap(),
                plan_id: *plan.id(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
        assert!(repo.plan.lock().unwrap().is_some());
    }

    #[tokio::test]
    async fn unknown_plan_is_not_found() {
        let repo = Arc::new(DeletablePlanRepository {
            plan: Mutex::new(None),
        });
        let handler = DeletePlanHandler::new(repo);

        let err = handler
            .handle(DeletePlanCommand {
                user_id: owner(),
                plan_id: PlanId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PlanNotFound);
    }
}
