//! Action plans: items, categories, list transforms, and the plan aggregate.

mod action;
mod aggregate;
mod category;
pub mod transforms;

pub use action::{ActionItem, ActionStatus, Priority};
pub use aggregate::{Plan, MAX_COMPANY_LENGTH};
pub use category::{Category, CategoryMeta};
pub use transforms::ReorderPolicy;
