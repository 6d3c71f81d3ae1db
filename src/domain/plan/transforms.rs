//! Pure transforms over action lists.
//!
//! The editor UI issues one mutation at a time (status change, step toggle,
//! add, delete, reorder). Each transform takes the current list by reference
//! and returns a new list, so every mutation site is auditable and testable
//! without shared-state setup.

use crate::domain::foundation::{ActionId, DomainError, ErrorCode, Timestamp};

use super::action::{ActionItem, ActionStatus};
use super::category::Category;

/// Due-date policy applied when an action is moved to a new position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReorderPolicy {
    /// Keep every action's original due date (diagnostic plan flow).
    #[default]
    PreserveDates,
    /// Re-linearize the schedule: each action's due date becomes the base
    /// time plus 30 days times its new position (strategic planning flow).
    RelinearizeDates,
}

/// Sets the workflow status of one action.
///
/// # Errors
///
/// - `ActionNotFound` if no action has the given id
pub fn set_status(
    actions: &[ActionItem],
    id: ActionId,
    status: ActionStatus,
) -> Result<Vec<ActionItem>, DomainError> {
    let mut next = actions.to_vec();
    let action = find_mut(&mut next, id)?;
    action.set_status(status);
    Ok(next)
}

/// Toggles one step of one action, recomputing the action's status.
///
/// # Errors
///
/// - `ActionNotFound` if no action has the given id
/// - `StepNotFound` if the step index is out of range
pub fn toggle_step(
    actions: &[ActionItem],
    id: ActionId,
    step: usize,
) -> Result<Vec<ActionItem>, DomainError> {
    let mut next = actions.to_vec();
    let action = find_mut(&mut next, id)?;
    action.toggle_step(step)?;
    Ok(next)
}

/// Toggles an action's completion flag directly (gated by its steps).
///
/// # Errors
///
/// - `ActionNotFound` if no action has the given id
/// - `StepsIncomplete` if the action still has incomplete steps
pub fn toggle_completed(
    actions: &[ActionItem],
    id: ActionId,
) -> Result<Vec<ActionItem>, DomainError> {
    let mut next = actions.to_vec();
    let action = find_mut(&mut next, id)?;
    action.toggle_completed()?;
    Ok(next)
}

/// Appends an ad-hoc action to the end of the list.
pub fn add(actions: &[ActionItem], item: ActionItem) -> Vec<ActionItem> {
    let mut next = actions.to_vec();
    next.push(item);
    next
}

/// Removes one action. Removal is only ever by explicit user command.
///
/// # Errors
///
/// - `ActionNotFound` if no action has the given id
pub fn remove(actions: &[ActionItem], id: ActionId) -> Result<Vec<ActionItem>, DomainError> {
    let position = actions
        .iter()
        .position(|a| a.id == id)
        .ok_or_else(|| not_found(id))?;
    let mut next = actions.to_vec();
    next.remove(position);
    Ok(next)
}

/// Relocates the action at `from` to position `to`, applying the due-date
/// policy to the resulting order.
///
/// # Errors
///
/// - `InvalidPosition` if either index is out of range
pub fn relocate(
    actions: &[ActionItem],
    from: usize,
    to: usize,
    policy: ReorderPolicy,
    base: Timestamp,
) -> Result<Vec<ActionItem>, DomainError> {
    if from >= actions.len() || to >= actions.len() {
        return Err(DomainError::new(
            ErrorCode::InvalidPosition,
            format!(
                "Cannot move action from {} to {} in a list of {}",
                from,
                to,
                actions.len()
            ),
        ));
    }
    let mut next = actions.to_vec();
    let item = next.remove(from);
    next.insert(to, item);

    if policy == ReorderPolicy::RelinearizeDates {
        for (position, action) in next.iter_mut().enumerate() {
            action.due_date = base.add_days(30 * position as i64);
        }
    }
    Ok(next)
}

/// Filters by category and/or status. Category matching goes through the
/// shared alias normalization, so legacy names select the same actions as
/// their replacements.
pub fn filter<'a>(
    actions: &'a [ActionItem],
    category: Option<Category>,
    status: Option<ActionStatus>,
) -> Vec<&'a ActionItem> {
    actions
        .iter()
        .filter(|a| category.map(|c| a.category == c).unwrap_or(true))
        .filter(|a| status.map(|s| a.status == s).unwrap_or(true))
        .collect()
}

fn find_mut(actions: &mut [ActionItem], id: ActionId) -> Result<&mut ActionItem, DomainError> {
    actions
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| not_found(id))
}

fn not_found(id: ActionId) -> DomainError {
    DomainError::new(ErrorCode::ActionNotFound, format!("Action not found: {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::action::Priority;

    fn sample(description: &str, category: Category) -> ActionItem {
        ActionItem::new(
            description,
            category,
            Priority::Medium,
            2,
            Timestamp::now(),
            "Gestor",
            "Equipe",
            "Métrica",
            "Benefício",
        )
    }

    fn sample_list() -> Vec<ActionItem> {
        vec![
            sample("Primeira", Category::Commercial),
            sample("Segunda", Category::Marketing),
            sample("Terceira", Category::Finance),
        ]
    }

    #[test]
    fn set_status_returns_new_list() {
        let actions = sample_list();
        let id = actions[1].id;
        let next = set_status(&actions, id, ActionStatus::InProgress).unwrap();

        assert_eq!(next[1].status, ActionStatus::InProgress);
        // Input untouched
        assert_eq!(actions[1].status, ActionStatus::Pending);
    }

    #[test]
    fn set_status_unknown_id_fails() {
        let actions = sample_list();
        let err = set_status(&actions, ActionId::new(), ActionStatus::Done).unwrap_err();
        assert_eq!(err.code, ErrorCode::ActionNotFound);
    }

    #[test]
    fn toggle_step_recomputes_status() {
        let mut actions = sample_list();
        actions[0] = sample("Com etapas", Category::Management)
            .with_steps(vec!["a".to_string(), "b".to_string()]);
        let id = actions[0].id;

        let next = toggle_step(&actions, id, 0).unwrap();
        assert_eq!(next[0].status, ActionStatus::InProgress);

        let done = toggle_step(&next, id, 1).unwrap();
        assert_eq!(done[0].status, ActionStatus::Done);
        assert!(done[0].completed);
    }

    #[test]
    fn toggle_completed_gated_by_steps() {
        let mut actions = sample_list();
        actions[0] = sample("Com etapas", Category::Management)
            .with_steps(vec!["a".to_string(), "b".to_string()]);
        let id = actions[0].id;

        let err = toggle_completed(&actions, id).unwrap_err();
        assert_eq!(err.code, ErrorCode::StepsIncomplete);
    }

    #[test]
    fn add_appends_at_end() {
        let actions = sample_list();
        let extra = sample("Extra", Category::Technology);
        let next = add(&actions, extra.clone());
        assert_eq!(next.len(), 4);
        assert_eq!(next[3].id, extra.id);
    }

    #[test]
    fn remove_deletes_only_target() {
        let actions = sample_list();
        let id = actions[1].id;
        let next = remove(&actions, id).unwrap();
        assert_eq!(next.len(), 2);
        assert!(!next.iter().any(|a| a.id == id));
    }

    #[test]
    fn relocate_preserves_dates_by_default() {
        let actions = sample_list();
        let original_dates: Vec<_> = actions.iter().map(|a| (a.id, a.due_date)).collect();

        let next = relocate(&actions, 2, 0, ReorderPolicy::PreserveDates, Timestamp::now())
            .unwrap();

        assert_eq!(next[0].description, "Terceira");
        for action in &next {
            let (_, original) = original_dates.iter().find(|(id, _)| *id == action.id).unwrap();
            assert_eq!(action.due_date, *original);
        }
    }

    #[test]
    fn relocate_relinearizes_when_asked() {
        let actions = sample_list();
        let base = Timestamp::now();
        let next = relocate(&actions, 0, 2, ReorderPolicy::RelinearizeDates, base).unwrap();

        for (position, action) in next.iter().enumerate() {
            assert_eq!(action.due_date, base.add_days(30 * position as i64));
        }
    }

    #[test]
    fn relocate_rejects_out_of_range() {
        let actions = sample_list();
        let err = relocate(&actions, 0, 9, ReorderPolicy::PreserveDates, Timestamp::now())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPosition);
    }

    #[test]
    fn filter_by_category_and_status() {
        let mut actions = sample_list();
        actions[0].set_status(ActionStatus::Done);

        let done = filter(&actions, None, Some(ActionStatus::Done));
        assert_eq!(done.len(), 1);

        let marketing = filter(&actions, Some(Category::Marketing), None);
        assert_eq!(marketing.len(), 1);
        assert_eq!(marketing[0].description, "Segunda");

        let both = filter(
            &actions,
            Some(Category::Marketing),
            Some(ActionStatus::Done),
        );
        assert!(both.is_empty());
    }

    #[test]
    fn filter_with_legacy_alias_selects_same_actions() {
        let actions = vec![sample("RH", Category::HumanResources)];
        let category: Category = "human_resources".parse().unwrap();
        let matched = filter(&actions, Some(category), None);
        assert_eq!(matched.len(), 1);
    }
}
