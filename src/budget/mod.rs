//! Budgets, the named spending plans of a household.

mod core;
mod db;
mod handlers;

pub use core::{Budget, BudgetId, create_budget_table};
pub use db::{add_budget, delete_budget, get_budgets};
pub use handlers::{add_budget_endpoint, delete_budget_endpoint, get_budgets_endpoint};
