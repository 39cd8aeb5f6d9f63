use rusqlite::{Connection, Row};
use serde::Serialize;

use crate::database_id::DatabaseId;

/// Alias for the database ID of a household.
pub type HouseholdId = DatabaseId;

/// A household groups the accounts and budgets of the people who share them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    /// The id for the household.
    pub id: HouseholdId,
    /// The display name, e.g. "Smith Family".
    pub name: String,
}

pub fn create_household_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS household (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

pub(super) fn map_row_to_household(row: &Row) -> Result<Household, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;

    Ok(Household { id, name })
}
