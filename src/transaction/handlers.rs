//! Route handlers for listing, adding and deleting transactions.

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
    account::AccountId,
    db::lock_connection,
    household::HouseholdId,
    query::QueryParams,
    transaction::{
        NewTransaction, Transaction, TransactionId, add_transaction, delete_transaction,
        get_account_transactions, get_all_transactions,
    },
};

/// The state needed to manage transactions.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters for listing the transactions of an account.
#[derive(Debug, Deserialize)]
pub struct AccountTransactionsQuery {
    /// The account to list transactions for.
    #[serde(rename = "acctId")]
    pub account_id: AccountId,
}

/// The query parameters for listing the transactions of a household.
#[derive(Debug, Deserialize)]
pub struct AllTransactionsQuery {
    /// The household whose accounts to list transactions for.
    #[serde(rename = "hhId")]
    pub household_id: HouseholdId,
}

/// The query parameters for deleting a transaction.
#[derive(Debug, Deserialize)]
pub struct DeleteTransactionQuery {
    /// The transaction to delete.
    #[serde(rename = "tranId")]
    pub transaction_id: TransactionId,
}

/// A route handler for listing the transactions posted to an account.
pub async fn get_account_transactions_endpoint(
    State(state): State<TransactionState>,
    QueryParams(query): QueryParams<AccountTransactionsQuery>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_account_transactions(query.account_id, &connection).map(Json)
}

/// A route handler for listing the transactions across all accounts of a household.
pub async fn get_all_transactions_endpoint(
    State(state): State<TransactionState>,
    QueryParams(query): QueryParams<AllTransactionsQuery>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_all_transactions(query.household_id, &connection).map(Json)
}

/// A route handler for recording a transaction.
///
/// Responds with 400 Bad Request if the account or budget item does not exist.
pub async fn add_transaction_endpoint(
    State(state): State<TransactionState>,
    QueryParams(new_transaction): QueryParams<NewTransaction>,
) -> Result<StatusCode, Error> {
    let connection = lock_connection(&state.db_connection)?;

    add_transaction(&new_transaction, &connection)?;

    Ok(StatusCode::OK)
}

/// A route handler for deleting a transaction, responds with 404 if it does not exist.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    QueryParams(query): QueryParams<DeleteTransactionQuery>,
) -> Result<StatusCode, Error> {
    let connection = lock_connection(&state.db_connection)?;

    match delete_transaction(query.transaction_id, &connection)? {
        0 => Err(Error::NotFound),
        _ => Ok(StatusCode::OK),
    }
}
