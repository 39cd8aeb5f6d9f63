//! Route handlers for listing, adding and deleting accounts.

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
    account::{Account, AccountId, add_account, delete_account, get_accounts},
    db::lock_connection,
    household::HouseholdId,
    query::QueryParams,
};

/// The state needed to manage accounts.
#[derive(Debug, Clone)]
pub struct AccountState {
    /// The database connection for managing accounts.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for AccountState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters for listing the accounts of a household.
#[derive(Debug, Deserialize)]
pub struct AccountsQuery {
    /// The household ID.
    #[serde(rename = "hhId")]
    pub household_id: HouseholdId,
}

/// The query parameters for creating an account.
#[derive(Debug, Deserialize)]
pub struct AddAccountQuery {
    /// The household that will own the account.
    #[serde(rename = "hhId")]
    pub household_id: HouseholdId,
    /// The account name, e.g. "Checking".
    pub name: String,
    /// The opening balance.
    pub balance: f64,
}

/// The query parameters for deleting an account.
#[derive(Debug, Deserialize)]
pub struct DeleteAccountQuery {
    /// The account ID.
    #[serde(rename = "acctId")]
    pub account_id: AccountId,
}

/// A route handler for listing the accounts of a household.
pub async fn get_accounts_endpoint(
    State(state): State<AccountState>,
    QueryParams(query): QueryParams<AccountsQuery>,
) -> Result<Json<Vec<Account>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_accounts(query.household_id, &connection).map(Json)
}

/// A route handler for creating an account.
///
/// Responds with 400 Bad Request if the household does not exist.
pub async fn add_account_endpoint(
    State(state): State<AccountState>,
    QueryParams(query): QueryParams<AddAccountQuery>,
) -> Result<StatusCode, Error> {
    let connection = lock_connection(&state.db_connection)?;

    add_account(query.household_id, &query.name, query.balance, &connection)?;

    Ok(StatusCode::OK)
}

/// A route handler for deleting an account, responds with 404 if it does not exist.
pub async fn delete_account_endpoint(
    State(state): State<AccountState>,
    QueryParams(query): QueryParams<DeleteAccountQuery>,
) -> Result<StatusCode, Error> {
    let connection = lock_connection(&state.db_connection)?;

    match delete_account(query.account_id, &connection)? {
        0 => Err(Error::NotFound),
        _ => Ok(StatusCode::OK),
    }
}
