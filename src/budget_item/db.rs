//! Database operations for budget items.

use rusqlite::Connection;

use crate::{
    Error,
    budget::BudgetId,
    budget_item::{BudgetItem, BudgetItemId, core::map_row_to_budget_item},
    db::RowsAffected,
};

/// Retrieve the items of a budget, including those orphaned by deleting the budget.
pub fn get_budget_items(
    budget_id: BudgetId,
    connection: &Connection,
) -> Result<Vec<BudgetItem>, Error> {
    connection
        .prepare(
            "SELECT id, budget_id, amount, name, description FROM budget_item
            WHERE budget_id = :budget_id",
        )?
        .query_map(&[(":budget_id", &budget_id)], map_row_to_budget_item)?
        .map(|maybe_item| maybe_item.map_err(Error::from))
        .collect()
}

/// Create a budget item that allocates `amount` within a budget.
///
/// # Errors
/// Returns [Error::ConstraintViolation] if `budget_id` does not refer to a budget.
pub fn add_budget_item(
    budget_id: BudgetId,
    amount: f64,
    name: &str,
    description: &str,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "INSERT INTO budget_item (budget_id, amount, name, description)
            VALUES (?1, ?2, ?3, ?4)",
            (budget_id, amount, name, description),
        )
        .map_err(Error::from)
}

/// Delete a budget item by ID.
pub fn delete_budget_item(
    budget_item_id: BudgetItemId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "DELETE FROM budget_item WHERE id = :id",
            &[(":id", &budget_item_id)],
        )
        .map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        budget_item::{BudgetItem, add_budget_item, delete_budget_item, get_budget_items},
        test_utils::{get_test_connection, seed_budget, seed_budget_item, seed_household},
    };

    #[test]
    fn add_budget_item_then_get_items() {
        let connection = get_test_connection();
        let household_id = seed_household("Smith Family", &connection);
        let budget_id = seed_budget(household_id, "January", &connection);

        let rows_affected =
            add_budget_item(budget_id, 250.5, "Fuel", "Both cars", &connection).unwrap();

        assert_eq!(rows_affected, 1);
        assert_eq!(
            get_budget_items(budget_id, &connection),
            Ok(vec![BudgetItem {
                id: connection.last_insert_rowid(),
                budget_id,
                amount: 250.5,
                name: "Fuel".to_owned(),
                description: "Both cars".to_owned(),
            }])
        );
    }

    #[test]
    fn add_budget_item_with_missing_budget_fails() {
        let connection = get_test_connection();

        let result = add_budget_item(99, 10.0, "Fuel", "", &connection);

        assert!(
            matches!(result, Err(Error::ConstraintViolation(_))),
            "want constraint violation, got {result:?}"
        );
    }

    #[test]
    fn get_items_for_missing_budget_is_empty() {
        let connection = get_test_connection();

        assert_eq!(get_budget_items(99, &connection), Ok(vec![]));
    }

    #[test]
    fn delete_budget_item_removes_only_that_item() {
        let connection = get_test_connection();
        let household_id = seed_household("Smith Family", &connection);
        let budget_id = seed_budget(household_id, "January", &connection);
        let fuel_id = seed_budget_item(budget_id, "Fuel", 120.0, &connection);
        seed_budget_item(budget_id, "Groceries", 400.0, &connection);

        let rows_affected = delete_budget_item(fuel_id, &connection).unwrap();

        assert_eq!(rows_affected, 1);
        let items = get_budget_items(budget_id, &connection).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Groceries");
    }

    #[test]
    fn delete_missing_budget_item_affects_no_rows() {
        let connection = get_test_connection();

        assert_eq!(delete_budget_item(99, &connection), Ok(0));
    }
}
