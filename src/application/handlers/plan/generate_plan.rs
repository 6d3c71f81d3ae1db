//! GeneratePlanHandler - Command handler for generating a new action plan.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, PlanId, Timestamp, UserId};
use crate::domain::generator::PlanGenerator;
use crate::domain::plan::Plan;
use crate::domain::questionnaire::Answer;
use crate::ports::PlanRepository;

/// Command to generate a plan from a finalized diagnostic.
#[derive(Debug, Clone)]
pub struct GeneratePlanCommand {
    pub user_id: UserId,
    pub company: String,
    pub answers: Vec<Answer>,
}

/// Result of successful plan generation.
#[derive(Debug, Clone)]
pub struct GeneratePlanResult {
    pub plan: Plan,
}

/// Handler for generating and persisting plans.
pub struct GeneratePlanHandler {
    repository: Arc<dyn PlanRepository>,
    generator: PlanGenerator,
}

impl GeneratePlanHandler {
    pub fn new(repository: Arc<dyn PlanRepository>, generator: PlanGenerator) -> Self {
        Self {
            repository,
            generator,
        }
    }

    pub async fn handle(&self, cmd: GeneratePlanCommand) -> Result<GeneratePlanResult, DomainError> {
        let generated_at = Timestamp::now();
        let actions = self.generator.generate(&cmd.answers, generated_at);

        let diagnostic = serde_json::to_value(&cmd.answers).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to snapshot diagnostic: {}", e),
            )
        })?;

        let plan = Plan::new(PlanId::new(), cmd.user_id, cmd.company, diagnostic, actions)?;
        self.repository.save(&plan).await?;

        info!(
            plan_id = %plan.id(),
            actions = plan.actions().len(),
            "Generated action plan"
        );

        Ok(GeneratePlanResult { plan })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generator::GeneratorConfig;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockPlanRepository {
        saved_plans: Mutex<Vec<Plan>>,
        fail_save: bool,
    }

    impl MockPlanRepository {
        fn new() -> Self {
            Self {
                saved_plans: Mutex::new(Vec::new()),
                fail_save: false,
            }
        }

        fn failing() -> Self {
            Self {
                saved_plans: Mutex::new(Vec::new()),
                fail_save: true,
            }
        }

        fn saved_plans(&self) -> Vec<Plan> {
            self.saved_plans.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PlanRepository for MockPlanRepository {
        async fn save(&self, plan: &Plan) -> Result<(), DomainError> {
            if self.fail_save {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Simulated save failure",
                ));
            }
            self.saved_plans.lock().unwrap().push(plan.clone());
            Ok(())
        }

        async fn update(&self, _plan: &Plan) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &PlanId) -> Result<Option<Plan>, DomainError> {
            Ok(None)
        }

        async fn find_by_user_id(&self, _user_id: &UserId) -> Result<Vec<Plan>, DomainError> {
            Ok(vec![])
        }

        async fn delete(&self, _id: &PlanId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn test_user_id() -> UserId {
        UserId::new("test-user-123").unwrap()
    }

    fn test_command() -> GeneratePlanCommand {
        GeneratePlanCommand {
            user_id: test_user_id(),
            company: "Padaria do João".to_string(),
            answers: vec![
                Answer::new("team_size", "1-5"),
                Answer::new("processes_documented", "Não"),
            ],
        }
    }

    #[tokio::test]
    async fn generates_and_persists_plan() {
        let repo = Arc::new(MockPlanRepository::new());
        let handler =
            GeneratePlanHandler::new(repo.clone(), PlanGenerator::new(GeneratorConfig::default()));

        let result = handler.handle(test_command()).await.unwrap();

        assert_eq!(result.plan.company(), "Padaria do João");
        assert!(!result.plan.actions().is_empty());

        let saved = repo.saved_plans();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id(), result.plan.id());
    }

    #[tokio::test]
    async fn snapshots_answers_into_diagnostic() {
        let repo = Arc::new(MockPlanRepository::new());
        let handler = GeneratePlanHandler::new(repo, PlanGenerator::default());

        let result = handler.handle(test_command()).await.unwrap();

        let snapshot = result.plan.diagnostic();
        assert!(snapshot.is_array());
        assert_eq!(snapshot[0]["question_id"], "team_size");
    }

    #[tokio::test]
    async fn fails_with_empty_company() {
        let repo = Arc::new(MockPlanRepository::new());
        let handler = GeneratePlanHandler::new(repo.clone(), PlanGenerator::default());

        let mut cmd = test_command();
        cmd.company = "  ".to_string();

        let result = handler.handle(cmd).await;
        assert!(result.is_err());
        assert!(repo.saved_plans().is_empty());
    }

    #[tokio::test]
    async fn propagates_save_failure() {
        let repo = Arc::new(MockPlanRepository::failing());
        let handler = GeneratePlanHandler::new(repo, PlanGenerator::default());

        let err = handler.handle(test_command()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
