//! In-Memory Plan Repository
//!
//! Stores plans in a shared map. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, PlanId, UserId};
use crate::domain::plan::Plan;
use crate::ports::PlanRepository;

/// In-memory implementation of PlanRepository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanRepository {
    plans: Arc<RwLock<HashMap<PlanId, Plan>>>,
}

impl InMemoryPlanRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored plans (useful for tests)
    pub async fn clear(&self) {
        self.plans.write().await.clear();
    }

    /// Get the number of stored plans
    pub async fn count(&self) -> usize {
        self.plans.read().await.len()
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn save(&self, plan: &Plan) -> Result<(), DomainError> {
        let mut plans = self.plans.write().await;
        plans.insert(*plan.id(), plan.clone());
        Ok(())
    }

    async fn update(&self, plan: &Plan) -> Result<(), DomainError> {
        let mut plans = self.plans.write().await;
        if !plans.contains_key(plan.id()) {
            return Err(DomainError::new(
                ErrorCode::PlanNotFound,
                format!("Plan not found: {}", plan.id()),
            ));
        }
        plans.insert(*plan.id(), plan.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        let plans = self.plans.read().await;
        Ok(plans.get(id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Plan>, DomainError> {
        let plans = self.plans.read().await;
        let mut owned: Vec<Plan> = plans
            .values()
            .filter(|p| p.is_owner(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(owned)
    }

    async fn delete(&self, id: &PlanId) -> Result<(), DomainError> {
        let mut plans = self.plans.write().await;
        if plans.remove(id).is_none() {
            return Err(DomainError::new(
                ErrorCode::PlanNotFound,
                format!("Plan not found: {}", id),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_for(user: &str) -> Plan {
        Plan::new(
            PlanId::new(),
            UserId::new(user).unwrap(),
            "Loja de Bairro".to_string(),
            serde_json::json!({}),
            vec![],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_and_find_round_trip() {
        let repo = InMemoryPlanRepository::new();
        let plan = plan_for("user-1");

        repo.save(&plan).await.unwrap();
        let found = repo.find_by_id(plan.id()).await.unwrap().unwrap();
        assert_eq!(found, plan);
    }

    #[tokio::test]
    async fn update_requires_existing_plan() {
        let repo = InMemoryPlanRepository::new();
        let plan = plan_for("user-1");

        let err = repo.update(&plan).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PlanNotFound);

        repo.save(&plan).await.unwrap();
        assert!(repo.update(&plan).await.is_ok());
    }

    #[tokio::test]
    async fn find_by_user_scopes_to_owner() {
        let repo = InMemoryPlanRepository::new();
        repo.save(&plan_for("user-1")).await.unwrap();
        repo.save(&plan_for("user-1")).await.unwrap();
        repo.save(&plan_for("user-2")).await.unwrap();

        let plans = repo
            .find_by_user_id(&UserId::new("user-1").unwrap())
            .await
            .unwrap();
        assert_eq!(plans.len(), 2);
    }

    #[tokio::test]
    async fn delete_removes_the_plan() {
        let repo = InMemoryPlanRepository::new();
        let plan = plan_for("user-1");
        repo.save(&plan).await.unwrap();

        repo.delete(plan.id()).await.unwrap();
        assert!(repo.find_by_id(plan.id()).await.unwrap().is_none());

        let err = repo.delete(plan.id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PlanNotFound);
    }
}
