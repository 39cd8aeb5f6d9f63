//! Transactions, the deposits and withdrawals posted to an account.

mod core;
mod db;
mod handlers;

pub use core::{
    DEPOSIT, NewTransaction, Transaction, TransactionId, TransactionTypeId, WITHDRAW,
    create_transaction_table,
};
pub use db::{
    add_transaction, delete_transaction, get_account_transactions, get_all_transactions,
};
pub use handlers::{
    add_transaction_endpoint, delete_transaction_endpoint, get_account_transactions_endpoint,
    get_all_transactions_endpoint,
};
