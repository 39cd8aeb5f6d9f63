//! Budget items, the categories of a budget with an allocated amount.

mod core;
mod db;
mod handlers;

pub use core::{BudgetItem, BudgetItemId, create_budget_item_table};
pub use db::{add_budget_item, delete_budget_item, get_budget_items};
pub use handlers::{
    add_budget_item_endpoint, delete_budget_item_endpoint, get_budget_items_endpoint,
};
