//! Database operations for budgets.

use rusqlite::Connection;

use crate::{
    Error,
    budget::{Budget, BudgetId, core::map_row_to_budget},
    db::RowsAffected,
    household::HouseholdId,
};

/// Retrieve all budgets belonging to a household.
pub fn get_budgets(
    household_id: HouseholdId,
    connection: &Connection,
) -> Result<Vec<Budget>, Error> {
    connection
        .prepare(
            "SELECT id, household_id, name, description FROM budget
            WHERE household_id = :household_id",
        )?
        .query_map(&[(":household_id", &household_id)], map_row_to_budget)?
        .map(|maybe_budget| maybe_budget.map_err(Error::from))
        .collect()
}

/// Create a budget for a household.
///
/// # Errors
/// Returns [Error::ConstraintViolation] if `household_id` does not refer to a household.
pub fn add_budget(
    household_id: HouseholdId,
    name: &str,
    description: &str,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "INSERT INTO budget (household_id, name, description) VALUES (?1, ?2, ?3)",
            (household_id, name, description),
        )
        .map_err(Error::from)
}

/// Delete a budget by ID.
///
/// The items of the budget are not deleted and can still be listed by the
/// old budget ID.
pub fn delete_budget(budget_id: BudgetId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM budget WHERE id = :id", &[(":id", &budget_id)])
        .map_err(Error::from)
}
