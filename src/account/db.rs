//! Database operations for accounts.

use rusqlite::Connection;

use crate::{
    Error,
    account::{Account, AccountId, core::map_row_to_account},
    db::RowsAffected,
    household::HouseholdId,
};

/// Retrieve all accounts belonging to a household.
pub fn get_accounts(
    household_id: HouseholdId,
    connection: &Connection,
) -> Result<Vec<Account>, Error> {
    connection
        .prepare(
            "SELECT id, household_id, name, balance, reconciled_balance, deleted
            FROM account WHERE household_id = :household_id",
        )?
        .query_map(&[(":household_id", &household_id)], map_row_to_account)?
        .map(|maybe_account| maybe_account.map_err(Error::from))
        .collect()
}

/// Create an account with an opening `balance`.
///
/// # Errors
/// Returns [Error::ConstraintViolation] if `household_id` does not refer to a household.
pub fn add_account(
    household_id: HouseholdId,
    name: &str,
    balance: f64,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "INSERT INTO account (household_id, name, balance, reconciled_balance)
            VALUES (?1, ?2, ?3, ?3)",
            (household_id, name, balance),
        )
        .map_err(Error::from)
}

/// Mark an account as deleted.
///
/// The row is kept and still listed by [get_accounts] with `deleted` set, and
/// its transactions are left in place. Zero rows are affected if the account
/// does not exist or was already deleted.
pub fn delete_account(
    account_id: AccountId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "UPDATE account SET deleted = 1 WHERE id = :id AND deleted = 0",
            &[(":id", &account_id)],
        )
        .map_err(Error::from)
}
