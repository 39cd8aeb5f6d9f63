//! Database operations for transactions.

use rusqlite::Connection;
use time::OffsetDateTime;

use crate::{
    Error,
    account::AccountId,
    db::RowsAffected,
    household::HouseholdId,
    transaction::{NewTransaction, Transaction, TransactionId, core::map_row_to_transaction},
};

/// Retrieve the transactions posted to an account.
pub fn get_account_transactions(
    account_id: AccountId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, account_id, transaction_type_id, budget_item_id, entered_by_id, created,
                amount, is_reconciled, reconciled_amount, is_void, name, description
            FROM \"transaction\" WHERE account_id = :account_id",
        )?
        .query_map(&[(":account_id", &account_id)], map_row_to_transaction)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Retrieve the transactions of every account that belongs to a household.
pub fn get_all_transactions(
    household_id: HouseholdId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT t.id, t.account_id, t.transaction_type_id, t.budget_item_id, t.entered_by_id,
                t.created, t.amount, t.is_reconciled, t.reconciled_amount, t.is_void, t.name,
                t.description
            FROM \"transaction\" t
            INNER JOIN account a ON a.id = t.account_id
            WHERE a.household_id = :household_id",
        )?
        .query_map(&[(":household_id", &household_id)], map_row_to_transaction)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Record a transaction, stamped with the current UTC time.
///
/// The account balance is not changed.
///
/// # Errors
/// Returns [Error::ConstraintViolation] if the account or budget item does not exist.
pub fn add_transaction(
    transaction: &NewTransaction,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "INSERT INTO \"transaction\" (account_id, transaction_type_id, budget_item_id,
                entered_by_id, created, amount, name, description)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            (
                transaction.account_id,
                transaction.transaction_type_id,
                transaction.budget_item_id,
                &transaction.entered_by_id,
                OffsetDateTime::now_utc(),
                transaction.amount,
                &transaction.name,
                &transaction.description,
            ),
        )
        .map_err(Error::from)
}

/// Delete a transaction by ID.
pub fn delete_transaction(
    transaction_id: TransactionId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "DELETE FROM \"transaction\" WHERE id = :id",
            &[(":id", &transaction_id)],
        )
        .map_err(Error::from)
}
