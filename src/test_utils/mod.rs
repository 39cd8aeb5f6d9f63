#![allow(missing_docs)]

use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use rusqlite::Connection;

use crate::{
    AppState, DEPOSIT, DatabaseId, NewTransaction, account::add_account, budget::add_budget,
    budget_item::add_budget_item, build_router, db::initialize, household::add_household,
    transaction::add_transaction,
};

pub(crate) fn get_test_connection() -> Connection {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    initialize(&connection).expect("Could not initialize database");
    connection
}

pub(crate) fn get_test_db_connection() -> Arc<Mutex<Connection>> {
    Arc::new(Mutex::new(get_test_connection()))
}

pub(crate) fn get_test_server() -> TestServer {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    let state = AppState::new(connection).expect("Could not create app state");

    TestServer::try_new(build_router(state)).expect("Could not create test server")
}

#[track_caller]
pub(crate) fn seed_household(name: &str, connection: &Connection) -> DatabaseId {
    add_household(name, connection).expect("Could not create test household");
    connection.last_insert_rowid()
}

#[track_caller]
pub(crate) fn seed_account(
    household_id: DatabaseId,
    name: &str,
    balance: f64,
    connection: &Connection,
) -> DatabaseId {
    add_account(household_id, name, balance, connection).expect("Could not create test account");
    connection.last_insert_rowid()
}

#[track_caller]
pub(crate) fn seed_budget(
    household_id: DatabaseId,
    name: &str,
    connection: &Connection,
) -> DatabaseId {
    add_budget(household_id, name, "", connection).expect("Could not create test budget");
    connection.last_insert_rowid()
}

#[track_caller]
pub(crate) fn seed_budget_item(
    budget_id: DatabaseId,
    name: &str,
    amount: f64,
    connection: &Connection,
) -> DatabaseId {
    add_budget_item(budget_id, amount, name, "", connection)
        .expect("Could not create test budget item");
    connection.last_insert_rowid()
}

/// Create a household with one account, budget and budget item.
///
/// Returns the IDs as `(household, account, budget, budget item)`.
#[track_caller]
pub(crate) fn seed_household_tree(
    connection: &Connection,
) -> (DatabaseId, DatabaseId, DatabaseId, DatabaseId) {
    let household_id = seed_household("Smith Family", connection);
    let account_id = seed_account(household_id, "Checking", 500.0, connection);
    let budget_id = seed_budget(household_id, "January", connection);
    let budget_item_id = seed_budget_item(budget_id, "Groceries", 400.0, connection);

    (household_id, account_id, budget_id, budget_item_id)
}

#[track_caller]
pub(crate) fn seed_transaction(
    account_id: DatabaseId,
    budget_item_id: DatabaseId,
    amount: f64,
    connection: &Connection,
) -> DatabaseId {
    add_transaction(
        &NewTransaction {
            account_id,
            transaction_type_id: DEPOSIT,
            budget_item_id,
            entered_by_id: "9f1c2d8e-0000-4000-8000-000000000001".to_owned(),
            amount,
            name: "Paycheck".to_owned(),
            description: String::new(),
        },
        connection,
    )
    .expect("Could not create test transaction");
    connection.last_insert_rowid()
}
