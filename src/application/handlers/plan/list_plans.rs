//! ListPlansHandler - Query handler for listing a user's plans.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::plan::Plan;
use crate::ports::PlanRepository;

/// Query for all plans owned by one user.
#[derive(Debug, Clone)]
pub struct ListPlansQuery {
    pub user_id: UserId,
}

/// Handler for listing plans. The repository already scopes by owner, so
/// there is no per-plan ownership check here.
pub struct ListPlansHandler {
    repository: Arc<dyn PlanRepository>,
}

impl ListPlansHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListPlansQuery) -> Result<Vec<Plan>, DomainError> {
        self.repository.find_by_user_id(&query.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::PlanId;
    use async_trait::async_trait;

    struct FixedListRepository {
        plans: Vec<Plan>,
    }

    #[async_trait]
    impl PlanRepository for FixedListRepository {
        async fn save(&self, _plan: &Plan) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _plan: &Plan) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &PlanId) -> Result<Option<Plan>, DomainError> {
            Ok(None)
        }

        async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Plan>, DomainError> {
            Ok(self
                .plans
                .iter()
                .filter(|p| p.is_owner(user_id))
                .cloned()
                .collect())
        }

        async fn delete(&self, _id: &PlanId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn plan_for(user: &str) -> Plan {
        Plan::new(
            PlanId::new(),
            UserId::new(user).unwrap(),
            "Oficina do Bairro".to_string(),
            serde_json::json!({}),
            vec![],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn lists_only_the_users_plans() {
        let repo = FixedListRepository {
            plans: vec![plan_for("user-1"), plan_for("user-2"), plan_for("user-1")],
        };
        let handler = ListPlansHandler::new(Arc::new(repo));

        let plans = handler
            .handle(ListPlansQuery {
                user_id: UserId::new("user-1").unwrap(),
            })
            .await
            .unwrap();
        assert_eq!(plans.len(), 2);
    }

    #[tokio::test]
    async fn empty_result_is_not_an_error() {
        let handler = ListPlansHandler::new(Arc::new(FixedListRepository { plans: vec![] }));
        let plans = handler
            .handle(ListPlansQuery {
                user_id: UserId::new("user-1").unwrap(),
            })
            .await
            .unwrap();
        assert!(plans.is_empty());
    }
}
