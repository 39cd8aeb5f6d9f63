use rusqlite::{Connection, Row};
use serde::Serialize;

use crate::{database_id::DatabaseId, household::HouseholdId};

/// Alias for the database ID of a budget.
pub type BudgetId = DatabaseId;

/// A named spending plan, e.g. "January" or "Holiday".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// The id for the budget.
    pub id: BudgetId,
    /// The household that owns the budget.
    pub household_id: HouseholdId,
    /// The title of the budget.
    pub name: String,
    /// Free-form notes, may be empty.
    pub description: String,
}

/// Create the budget table and the trigger that rejects budgets for unknown households.
pub fn create_budget_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS budget (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            household_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_budget_household_id ON budget(household_id);

        CREATE TRIGGER IF NOT EXISTS budget_household_exists
        BEFORE INSERT ON budget
        WHEN NOT EXISTS (SELECT 1 FROM household WHERE id = NEW.household_id)
        BEGIN
            SELECT RAISE(ABORT, 'budget.household_id does not refer to a household');
        END;",
    )?;

    Ok(())
}

pub(super) fn map_row_to_budget(row: &Row) -> Result<Budget, rusqlite::Error> {
    Ok(Budget {
        id: row.get(0)?,
        household_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
    })
}
