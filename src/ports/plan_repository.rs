//! Plan repository port (write side).
//!
//! Defines the contract for persisting and retrieving Plan aggregates.
//! Implementations handle the actual database operations.

use crate::domain::foundation::{DomainError, PlanId, UserId};
use crate::domain::plan::Plan;
use async_trait::async_trait;

/// Repository port for Plan aggregate persistence.
///
/// Plans are user-scoped: every read path filters by owner, and writes
/// replace the whole aggregate (last write wins, no merge).
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Save a new plan.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, plan: &Plan) -> Result<(), DomainError>;

    /// Update an existing plan.
    ///
    /// # Errors
    ///
    /// - `PlanNotFound` if the plan doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, plan: &Plan) -> Result<(), DomainError>;

    /// Find a plan by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError>;

    /// Find all plans belonging to a user.
    ///
    /// Returns plans ordered by created_at descending.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Plan>, DomainError>;

    /// Delete a plan.
    ///
    /// # Errors
    ///
    /// - `PlanNotFound` if the plan doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &PlanId) -> Result<(), DomainError>;
}
