//! Route handlers for listing, adding and deleting budget items.

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
    budget::BudgetId,
    budget_item::{
        BudgetItem, BudgetItemId, add_budget_item, delete_budget_item, get_budget_items,
    },
    db::lock_connection,
    query::QueryParams,
};

/// The state needed to manage budget items.
#[derive(Debug, Clone)]
pub struct BudgetItemState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for BudgetItemState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters for listing the items of a budget.
#[derive(Debug, Deserialize)]
pub struct BudgetItemsQuery {
    #[serde(rename = "budgetId")]
    pub budget_id: BudgetId,
}

/// The query parameters for creating a budget item.
#[derive(Debug, Deserialize)]
pub struct AddBudgetItemQuery {
    #[serde(rename = "budgetId")]
    pub budget_id: BudgetId,
    pub amount: f64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// The query parameters for deleting a budget item.
#[derive(Debug, Deserialize)]
pub struct DeleteBudgetItemQuery {
    #[serde(rename = "budgetItemId")]
    pub budget_item_id: BudgetItemId,
}

/// A route handler for listing the items of a budget.
pub async fn get_budget_items_endpoint(
    State(state): State<BudgetItemState>,
    QueryParams(query): QueryParams<BudgetItemsQuery>,
) -> Result<Json<Vec<BudgetItem>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_budget_items(query.budget_id, &connection).map(Json)
}

/// A route handler for creating a budget item.
pub async fn add_budget_item_endpoint(
    State(state): State<BudgetItemState>,
    QueryParams(query): QueryParams<AddBudgetItemQuery>,
) -> Result<StatusCode, Error> {
    let connection = lock_connection(&state.db_connection)?;

    add_budget_item(
        query.budget_id,
        query.amount,
        &query.name,
        &query.description,
        &connection,
    )?;

    Ok(StatusCode::OK)
}

/// A route handler for deleting a budget item, responds with 404 if it does not exist.
pub async fn delete_budget_item_endpoint(
    State(state): State<BudgetItemState>,
    QueryParams(query): QueryParams<DeleteBudgetItemQuery>,
) -> Result<StatusCode, Error> {
    let connection = lock_connection(&state.db_connection)?;

    match delete_budget_item(query.budget_item_id, &connection)? {
        0 => Err(Error::NotFound),
        _ => Ok(StatusCode::OK),
    }
}
