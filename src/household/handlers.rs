//! Route handlers for getting, adding and deleting households.

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
    db::lock_connection,
    household::{Household, HouseholdId, add_household, delete_household, get_household},
    query::QueryParams,
};

/// The state needed to manage households.
#[derive(Debug, Clone)]
pub struct HouseholdState {
    /// The database connection for managing households.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for HouseholdState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters that select a household.
#[derive(Debug, Deserialize)]
pub struct HouseholdQuery {
    /// The household ID.
    #[serde(rename = "hhId")]
    pub household_id: HouseholdId,
}

/// The query parameters for creating a household.
#[derive(Debug, Deserialize)]
pub struct AddHouseholdQuery {
    /// The name of the new household.
    pub name: String,
}

/// A route handler for getting a household, responds with `null` if it does not exist.
pub async fn get_household_endpoint(
    State(state): State<HouseholdState>,
    QueryParams(query): QueryParams<HouseholdQuery>,
) -> Result<Json<Option<Household>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_household(query.household_id, &connection).map(Json)
}

/// A route handler for creating a household, responds with an empty 200 OK on success.
pub async fn add_household_endpoint(
    State(state): State<HouseholdState>,
    QueryParams(query): QueryParams<AddHouseholdQuery>,
) -> Result<StatusCode, Error> {
    let connection = lock_connection(&state.db_connection)?;

    add_household(&query.name, &connection)?;

    Ok(StatusCode::OK)
}

/// A route handler for deleting a household, responds with 404 if it does not exist.
pub async fn delete_household_endpoint(
    State(state): State<HouseholdState>,
    QueryParams(query): QueryParams<HouseholdQuery>,
) -> Result<StatusCode, Error> {
    let connection = lock_connection(&state.db_connection)?;

    match delete_household(query.household_id, &connection)? {
        0 => Err(Error::NotFound),
        _ => Ok(StatusCode::OK),
    }
}
