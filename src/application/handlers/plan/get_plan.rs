//! GetPlanHandler - Query handler for fetching one plan.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, PlanId, UserId};
use crate::domain::plan::Plan;
use crate::ports::PlanRepository;

/// Query for one plan by id.
#[derive(Debug, Clone)]
pub struct GetPlanQuery {
    pub user_id: UserId,
    pub plan_id: PlanId,
}

/// Handler for fetching a single plan, enforcing ownership.
pub struct GetPlanHandler {
    repository: Arc<dyn PlanRepository>,
}

impl GetPlanHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetPlanQuery) -> Result<Plan, DomainError> {
        let plan = self
            .repository
            .find_by_id(&query.plan_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::PlanNotFound,
                    format!("Plan not found: {}", query.plan_id),
                )
            })?;

        plan.ensure_owner(&query.user_id)?;
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct SinglePlanRepository {
        plan: Plan,
    }

    #[async_trait]
    impl PlanRepository for SinglePlanRepository {
        async fn save(&self, _plan: &Plan) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _plan: &Plan) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
            Ok((self.plan.id() == id).then(|| self.plan.clone()))
        }

        async fn find_by_user_id(&self, _user_id: &UserId) -> Result<Vec<Plan>, DomainError> {
            Ok(vec![self.plan.clone()])
        }

        async fn delete(&self, _id: &PlanId) -> Result<(), DomainError> {
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
            "Mercearia Central".to_string(),
            serde_json::json!({}),
            vec![],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn returns_plan_for_owner() {
        let plan = test_plan();
        let handler = GetPlanHandler::new(Arc::new(SinglePlanRepository { plan: plan.clone() }));

        let found = handler
            .handle(GetPlanQuery {
                user_id: owner(),
                plan_id: *plan.id(),
            })
            .await
            .unwrap();
        assert_eq!(found.id(), plan.id());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let handler = GetPlanHandler::new(Arc::new(SinglePlanRepository { plan: test_plan() }));

        let err = handler
            .handle(GetPlanQuery {
                user_id: owner(),
                plan_id: PlanId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PlanNotFound);
    }

    #[tokio::test]
    async fn other_user_is_forbidden() {
        let plan = test_plan();
        let handler = GetPlanHandler::new(Arc::new(SinglePlanRepository { plan: plan.clone() }));

        let err = handler
            .handle(GetPlanQuery {
                user_id: UserId::new("intruder").unwrap(),
                plan_id: *plan.id(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
