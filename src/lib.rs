//! Household finance bookkeeping API.
//!
//! Households own accounts and budgets, accounts hold transactions, and
//! budget items categorize planned spending. Every route maps onto exactly one
//! data-access call against a SQLite database and responds with JSON.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod account;
mod app_state;
mod budget;
mod budget_item;
mod database_id;
mod db;
pub mod endpoints;
mod error;
mod household;
mod logging;
mod query;
mod routing;
#[cfg(test)]
mod test_utils;
mod transaction;

pub use account::{Account, AccountId, add_account, delete_account, get_accounts};
pub use app_state::AppState;
pub use budget::{Budget, BudgetId, add_budget, delete_budget, get_budgets};
pub use budget_item::{
    BudgetItem, BudgetItemId, add_budget_item, delete_budget_item, get_budget_items,
};
pub use database_id::DatabaseId;
pub use db::{RowsAffected, initialize as initialize_db};
pub use error::Error;
pub use household::{Household, HouseholdId, add_household, delete_household, get_household};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use query::QueryParams;
pub use routing::build_router;
pub use transaction::{
    DEPOSIT, NewTransaction, Transaction, TransactionId, TransactionTypeId, WITHDRAW,
    add_transaction, delete_transaction, get_account_transactions, get_all_transactions,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
