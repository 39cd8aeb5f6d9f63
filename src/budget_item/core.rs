use rusqlite::{Connection, Row};
use serde::Serialize;

use crate::{budget::BudgetId, database_id::DatabaseId};

/// Alias for the database ID of a budget item.
pub type BudgetItemId = DatabaseId;

/// A sub-category of a budget (e.g. groceries, fuel) and the money set aside for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    /// The id for the budget item.
    pub id: BudgetItemId,
    /// The budget the item belongs to. The budget may since have been deleted.
    pub budget_id: BudgetId,
    /// How much money is allocated to the item.
    pub amount: f64,
    /// The name of the item, e.g. "Groceries".
    pub name: String,
    /// Free-form notes, may be empty.
    pub description: String,
}

/// Create the budget item table.
///
/// New items must refer to an existing budget, but deleting a budget leaves
/// its items in place.
pub fn create_budget_item_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS budget_item (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            budget_id INTEGER NOT NULL,
            amount REAL NOT NULL,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_budget_item_budget_id ON budget_item(budget_id);

        CREATE TRIGGER IF NOT EXISTS budget_item_budget_exists
        BEFORE INSERT ON budget_item
        WHEN NOT EXISTS (SELECT 1 FROM budget WHERE id = NEW.budget_id)
        BEGIN
            SELECT RAISE(ABORT, 'budget_item.budget_id does not refer to a budget');
        END;",
    )?;

    Ok(())
}

pub(super) fn map_row_to_budget_item(row: &Row) -> Result<BudgetItem, rusqlite::Error> {
    let id = row.get(0)?;
    let budget_id = row.get(1)?;
    let amount = row.get(2)?;
    let name = row.get(3)?;
    let description = row.get(4)?;

    Ok(BudgetItem {
        id,
        budget_id,
        amount,
        name,
        description,
    })
}
