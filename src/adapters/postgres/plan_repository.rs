//! PostgreSQL implementation of PlanRepository.
//!
//! Persists Plan aggregates to PostgreSQL. The diagnostic snapshot and the
//! action list are stored as JSONB columns; the rest of the aggregate maps
//! to plain columns.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::warn;

use crate::domain::foundation::{DomainError, ErrorCode, Percentage, PlanId, Timestamp, UserId};
use crate::domain::plan::{ActionItem, Plan};
use crate::ports::PlanRepository;

/// PostgreSQL implementation of PlanRepository.
#[derive(Clone)]
pub struct PostgresPlanRepository {
    pool: PgPool,
}

impl PostgresPlanRepository {
    /// Creates a new PostgresPlanRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanRepository for PostgresPlanRepository {
    async fn save(&self, plan: &Plan) -> Result<(), DomainError> {
        let actions = actions_to_json(plan.actions())?;

        sqlx::query(
            r#"
            INSERT INTO plans (
                id, user_id, company, diagnostic, actions, progress, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(plan.id().as_uuid())
        .bind(plan.user_id().as_str())
        .bind(plan.company())
        .bind(plan.diagnostic())
        .bind(actions)
        .bind(plan.progress().value() as i16)
        .bind(plan.created_at().as_datetime())
        .bind(plan.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert plan: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, plan: &Plan) -> Result<(), DomainError> {
        let actions = actions_to_json(plan.actions())?;

        let result = sqlx::query(
            r#"
            UPDATE plans SET
                company = $2,
                actions = $3,
                progress = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(plan.id().as_uuid())
        .bind(plan.company())
        .bind(actions)
        .bind(plan.progress().value() as i16)
        .bind(plan.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update plan: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::PlanNotFound,
                format!("Plan not found: {}", plan.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, company, diagnostic, actions, progress, created_at, updated_at
            FROM plans
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch plan: {}", e),
            )
        })?;

        match row {
            Some(row) => Ok(Some(row_to_plan(row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Plan>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, company, diagnostic, actions, progress, created_at, updated_at
            FROM plans
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch plans by user: {}", e),
            )
        })?;

        // A corrupted row must not take the whole listing down; skip it and
        // leave a trace for operators.
        let mut plans = Vec::with_capacity(rows.len());
        for row in rows {
            match row_to_plan(row) {
                Ok(plan) => plans.push(plan),
                Err(e) if e.code == ErrorCode::CorruptedRecord => {
                    warn!(user_id = %user_id, error = %e, "Skipping corrupted plan row");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(plans)
    }

    async fn delete(&self, id: &PlanId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM plans WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete plan: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::PlanNotFound,
                format!("Plan not found: {}", id),
            ));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn actions_to_json(actions: &[ActionItem]) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(actions).map_err(|e| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Failed to serialize actions: {}", e),
        )
    })
}

fn row_to_plan(row: sqlx::postgres::PgRow) -> Result<Plan, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to get id: {}", e))
    })?;

    let user_id: String = row.try_get("user_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get user_id: {}", e),
        )
    })?;

    let company: String = row.try_get("company").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get company: {}", e),
        )
    })?;

    let diagnostic: serde_json::Value = row.try_get("diagnostic").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get diagnostic: {}", e),
        )
    })?;

    let actions_json: serde_json::Value = row.try_get("actions").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get actions: {}", e),
        )
    })?;
    let actions: Vec<ActionItem> = serde_json::from_value(actions_json).map_err(|e| {
        DomainError::new(
            ErrorCode::CorruptedRecord,
            format!("Corrupted actions for plan {}: {}", id, e),
        )
    })?;

    let progress: i16 = row.try_get("progress").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get progress: {}", e),
        )
    })?;

    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get created_at: {}", e),
        )
    })?;

    let updated_at: chrono::DateTime<chrono::Utc> = row.try_get("updated_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get updated_at: {}", e),
        )
    })?;

    Ok(Plan::reconstitute(
        PlanId::from_uuid(id),
        UserId::new(user_id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
        })?,
        company,
        diagnostic,
        actions,
        Percentage::new(progress.clamp(0, 100) as u8),
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
