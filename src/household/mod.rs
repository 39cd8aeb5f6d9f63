//! Households, the root entity that owns accounts and budgets.

mod core;
mod db;
mod handlers;

pub use core::{Household, HouseholdId, create_household_table};
pub use db::{add_household, delete_household, get_household};
pub use handlers::{add_household_endpoint, delete_household_endpoint, get_household_endpoint};
