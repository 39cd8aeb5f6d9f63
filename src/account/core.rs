use rusqlite::{Connection, Row};
use serde::Serialize;

use crate::{database_id::DatabaseId, household::HouseholdId};

/// Alias for the database ID of an account.
pub type AccountId = DatabaseId;

/// The amount of money available for a bank account or credit card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The id for the account.
    pub id: AccountId,
    /// The household that owns the account.
    pub household_id: HouseholdId,
    /// The name of the account, e.g. "Checking".
    pub name: String,
    /// The live balance.
    pub balance: f64,
    /// The balance according to the bank, starts out equal to the opening balance.
    pub reconciled_balance: f64,
    /// Soft-delete marker.
    pub deleted: bool,
}

/// Create the account table.
///
/// Inserting an account for a household that does not exist is rejected with
/// a constraint error. Deleting a household does not touch its accounts.
pub fn create_account_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS account (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            household_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            balance REAL NOT NULL,
            reconciled_balance REAL NOT NULL,
            deleted INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_account_household_id ON account(household_id);

        CREATE TRIGGER IF NOT EXISTS account_household_exists
        BEFORE INSERT ON account
        WHEN NOT EXISTS (SELECT 1 FROM household WHERE id = NEW.household_id)
        BEGIN
            SELECT RAISE(ABORT, 'account.household_id does not refer to a household');
        END;",
    )?;

    Ok(())
}

pub(super) fn map_row_to_account(row: &Row) -> Result<Account, rusqlite::Error> {
    let id = row.get(0)?;
    let household_id = row.get(1)?;
    let name = row.get(2)?;
    let balance = row.get(3)?;
    let reconciled_balance = row.get(4)?;
    let deleted = row.get(5)?;

    Ok(Account {
        id,
        household_id,
        name,
        balance,
        reconciled_balance,
        deleted,
    })
}
