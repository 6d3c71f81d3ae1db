//! Plan command and query handlers.

mod delete_plan;
mod generate_plan;
mod get_plan;
mod list_plans;
mod update_actions;

pub use delete_plan::{DeletePlanCommand, DeletePlanHandler};
pub use generate_plan::{GeneratePlanCommand, GeneratePlanHandler, GeneratePlanResult};
pub use get_plan::{GetPlanHandler, GetPlanQuery};
pub use list_plans::{ListPlansHandler, ListPlansQuery};
pub use update_actions::{UpdateActionsCommand, UpdateActionsHandler};
