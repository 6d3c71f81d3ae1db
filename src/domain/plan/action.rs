//! Action items: the unit the generator emits and the editor mutates.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActionId, DomainError, ErrorCode, Timestamp};

use super::category::Category;

/// Action priority. Ordering for plan sorting is high before medium before
/// low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: lower sorts earlier.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// Workflow status of an action item.
///
/// `Late` is never derived; only an explicit status change marks an action
/// late.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Pending,
    InProgress,
    Done,
    Late,
}

/// A single recommended task in a generated plan.
///
/// # Invariants
///
/// - `status == Done` ⟺ `completed` ⟺ every step is complete (when steps
///   exist) or the flag was toggled directly (when none)
/// - `steps_completed`, when present, has the same length as `steps`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    /// Synthetic unique identifier.
    pub id: ActionId,
    /// What to do.
    pub description: String,
    /// Category tag.
    pub category: Category,
    /// Priority.
    pub priority: Priority,
    /// Relative deadline in months from generation.
    pub deadline_months: u32,
    /// Absolute due date (generation time plus the month offset).
    pub due_date: Timestamp,
    /// Role responsible for the action.
    pub owner: String,
    /// Resources required.
    pub resources: String,
    /// How success is measured.
    pub metric: String,
    /// Expected benefit.
    pub benefit: String,
    /// Completion flag, kept in sync with `status`.
    pub completed: bool,
    /// Workflow status.
    pub status: ActionStatus,
    /// Week-number hint for scheduling displays.
    pub week: u32,
    /// Ordered implementation steps.
    #[serde(default)]
    pub steps: Vec<String>,
    /// Parallel completion flags for `steps`.
    #[serde(default)]
    pub steps_completed: Option<Vec<bool>>,
}

impl ActionItem {
    /// Creates a fresh action item in its initial state (pending, not
    /// completed, no steps).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        description: impl Into<String>,
        category: Category,
        priority: Priority,
        deadline_months: u32,
        generated_at: Timestamp,
        owner: impl Into<String>,
        resources: impl Into<String>,
        metric: impl Into<String>,
        benefit: impl Into<String>,
    ) -> Self {
        Self {
            id: ActionId::new(),
            description: description.into(),
            category,
            priority,
            deadline_months,
            due_date: generated_at.add_months(deadline_months as i64),
            owner: owner.into(),
            resources: resources.into(),
            metric: metric.into(),
            benefit: benefit.into(),
            completed: false,
            status: ActionStatus::Pending,
            week: deadline_months * 4,
            steps: Vec::new(),
            steps_completed: None,
        }
    }

    /// Attaches implementation steps (all initially incomplete).
    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        let count = steps.len();
        self.steps = steps;
        self.steps_completed = if count > 0 {
            Some(vec![false; count])
        } else {
            None
        };
        self
    }

    /// Renders the relative deadline as a label, e.g. "3 meses".
    pub fn deadline_label(&self) -> String {
        if self.deadline_months == 1 {
            "1 mês".to_string()
        } else {
            format!("{} meses", self.deadline_months)
        }
    }

    /// Flips the completion flag of one step and recomputes the overall
    /// status: done when every step is complete, in-progress when some are,
    /// pending when none are.
    ///
    /// # Errors
    ///
    /// - `StepNotFound` if the index is out of range
    pub fn toggle_step(&mut self, step: usize) -> Result<(), DomainError> {
        if step >= self.steps.len() {
            return Err(DomainError::new(
                ErrorCode::StepNotFound,
                format!("Action {} has no step {}", self.id, step),
            ));
        }
        let flags = self
            .steps_completed
            .get_or_insert_with(|| vec![false; self.steps.len()]);
        flags.resize(self.steps.len(), false);
        flags[step] = !flags[step];
        self.sync_from_steps();
        Ok(())
    }

    /// Toggles the completion flag directly.
    ///
    /// Only permitted when the action has no steps or every step is already
    /// complete; the step gate cannot be bypassed. Un-completing an action
    /// that has steps clears all step flags so the invariant holds.
    ///
    /// # Errors
    ///
    /// - `StepsIncomplete` if steps exist and not all are complete
    pub fn toggle_completed(&mut self) -> Result<(), DomainError> {
        if !self.steps.is_empty() && !self.all_steps_complete() {
            return Err(DomainError::new(
                ErrorCode::StepsIncomplete,
                format!("Action {} still has incomplete steps", self.id),
            ));
        }
        if self.completed {
            self.completed = false;
            self.status = ActionStatus::Pending;
            if let Some(flags) = &mut self.steps_completed {
                flags.iter_mut().for_each(|f| *f = false);
            }
        } else {
            self.completed = true;
            self.status = ActionStatus::Done;
        }
        Ok(())
    }

    /// Sets the workflow status explicitly, keeping the completion flag (and
    /// step flags, when present) consistent.
    pub fn set_status(&mut self, status: ActionStatus) {
        self.status = status;
        self.completed = status == ActionStatus::Done;
        if self.completed {
            if let Some(flags) = &mut self.steps_completed {
                flags.iter_mut().for_each(|f| *f = true);
            } else if !self.steps.is_empty() {
                self.steps_completed = Some(vec![true; self.steps.len()]);
            }
        }
    }

    /// Repairs the invariants after external input (deserialized client
    /// state): clamps the step-flag list to the step count and re-derives
    /// status/completion coherence.
    pub fn normalize(&mut self) {
        if self.steps.is_empty() {
            self.steps_completed = None;
            if self.completed {
                self.status = ActionStatus::Done;
            } else if self.status == ActionStatus::Done {
                self.status = ActionStatus::Pending;
            }
            return;
        }

        let flags = self
            .steps_completed
            .get_or_insert_with(|| vec![false; self.steps.len()]);
        flags.resize(self.steps.len(), false);
        self.sync_from_steps();
    }

    /// Returns true if every step is marked complete (and steps exist).
    pub fn all_steps_complete(&self) -> bool {
        !self.steps.is_empty()
            && self
                .steps_completed
                .as_ref()
                .map(|flags| flags.iter().all(|f| *f))
                .unwrap_or(false)
    }

    fn sync_from_steps(&mut self) {
        let flags = match &self.steps_completed {
            Some(flags) => flags,
            None => return,
        };
        let total = flags.len();
        let done = flags.iter().filter(|f| **f).count();
        if done == total && total > 0 {
            self.completed = true;
            self.status = ActionStatus::Done;
        } else {
            self.completed = false;
            // Late is an explicit state; step progress does not clear it.
            if self.status != ActionStatus::Late {
                self.status = if done > 0 {
                    ActionStatus::InProgress
                } else {
                    ActionStatus::Pending
                };
            }
        }
    }
}
