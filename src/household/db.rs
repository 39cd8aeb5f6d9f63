//! Database operations for households.

use rusqlite::{Connection, OptionalExtension};

use crate::{
    Error,
    db::RowsAffected,
    household::{Household, HouseholdId, core::map_row_to_household},
};

/// Retrieve a single household by ID, or `None` if there is no such household.
pub fn get_household(
    household_id: HouseholdId,
    connection: &Connection,
) -> Result<Option<Household>, Error> {
    connection
        .prepare("SELECT id, name FROM household WHERE id = :id")?
        .query_row(&[(":id", &household_id)], map_row_to_household)
        .optional()
        .map_err(Error::from)
}

/// Create a household named `name`.
pub fn add_household(name: &str, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("INSERT INTO household (name) VALUES (?1)", (name,))
        .map_err(Error::from)
}

/// Delete a household by ID.
///
/// Accounts and budgets belonging to the household are left in place.
pub fn delete_household(
    household_id: HouseholdId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM household WHERE id = :id", &[(":id", &household_id)])
        .map_err(Error::from)
}
