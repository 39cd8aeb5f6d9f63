//! Accounts, the pools of money that transactions post against.

mod core;
mod db;
mod handlers;

pub use core::{Account, AccountId, create_account_table};
pub use db::{add_account, delete_account, get_accounts};
pub use handlers::{add_account_endpoint, delete_account_endpoint, get_accounts_endpoint};
