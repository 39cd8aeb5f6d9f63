//! Route handlers for listing, adding and deleting budgets.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error,
    budget::{Budget, BudgetId, add_budget, delete_budget, get_budgets},
    db::lock_connection,
    household::HouseholdId,
    query::QueryParams,
};

/// The state needed to manage budgets.
#[derive(Debug, Clone)]
pub struct BudgetState {
    /// The database connection for managing budgets.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for BudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters for listing the budgets of a household.
#[derive(Debug, Deserialize)]
pub struct BudgetsQuery {
    /// The household ID.
    #[serde(rename = "hhId")]
    pub household_id: HouseholdId,
}

/// The query parameters for creating a budget.
#[derive(Debug, Deserialize)]
pub struct AddBudgetQuery {
    /// The household that will own the budget.
    #[serde(rename = "hhId")]
    pub household_id: HouseholdId,
    /// The budget title.
    pub name: String,
    /// Optional notes, defaults to an empty string.
    #[serde(default)]
    pub description: String,
}

/// The query parameters for deleting a budget.
#[derive(Debug, Deserialize)]
pub struct DeleteBudgetQuery {
    /// The budget ID.
    #[serde(rename = "budgetId")]
    pub budget_id: BudgetId,
}

/// A route handler for listing the budgets of a household.
pub async fn get_budgets_endpoint(
    State(state): State<BudgetState>,
    QueryParams(query): QueryParams<BudgetsQuery>,
) -> Result<Json<Vec<Budget>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_budgets(query.household_id, &connection).map(Json)
}

/// A route handler for creating a budget.
pub async fn add_budget_endpoint(
    State(state): State<BudgetState>,
    QueryParams(query): QueryParams<AddBudgetQuery>,
) -> Result<StatusCode, Error> {
    let connection = lock_connection(&state.db_connection)?;

    add_budget(
        query.household_id,
        &query.name,
        &query.description,
        &connection,
    )?;

    Ok(StatusCode::OK)
}

/// A route handler for deleting a budget, responds with 404 if it does not exist.
pub async fn delete_budget_endpoint(
    State(state): State<BudgetState>,
    QueryParams(query): QueryParams<DeleteBudgetQuery>,
) -> Result<StatusCode, Error> {
    let connection = lock_connection(&state.db_connection)?;

    match delete_budget(query.budget_id, &connection)? {
        0 => Err(Error::NotFound),
        _ => Ok(StatusCode::OK),
    }
}
