//! Schema initialization and shared helpers for the data-access functions.

use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{
    Error, account::create_account_table, budget::create_budget_table,
    budget_item::create_budget_item_table, household::create_household_table,
    transaction::create_transaction_table,
};

/// The number of rows changed by an insert or delete.
pub type RowsAffected = usize;

/// Create all of the application's tables and triggers if they do not exist.
///
/// Parent tables are created before their children because the referential
/// triggers on the child tables read from them.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_household_table(&transaction)?;
    create_account_table(&transaction)?;
    create_budget_table(&transaction)?;
    create_budget_item_table(&transaction)?;
    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Lock the shared connection for a single data-access call.
///
/// The guard releases the lock when it is dropped, so the connection is freed
/// on every exit path of the caller.
pub(crate) fn lock_connection(
    db_connection: &Mutex<Connection>,
) -> Result<MutexGuard<'_, Connection>, Error> {
    db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })
}
