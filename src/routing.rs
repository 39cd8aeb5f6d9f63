//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::{
    AppState,
    account::{add_account_endpoint, delete_account_endpoint, get_accounts_endpoint},
    budget::{add_budget_endpoint, delete_budget_endpoint, get_budgets_endpoint},
    budget_item::{
        add_budget_item_endpoint, delete_budget_item_endpoint, get_budget_items_endpoint,
    },
    endpoints,
    household::{add_household_endpoint, delete_household_endpoint, get_household_endpoint},
    transaction::{
        add_transaction_endpoint, delete_transaction_endpoint, get_account_transactions_endpoint,
        get_all_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let read_routes = Router::new()
        .route(endpoints::GET_HOUSEHOLD, get(get_household_endpoint))
        .route(endpoints::GET_ACCOUNTS, get(get_accounts_endpoint))
        .route(
            endpoints::GET_ACCOUNT_TRANSACTIONS,
            get(get_account_transactions_endpoint),
        )
        .route(
            endpoints::GET_ALL_TRANSACTIONS,
            get(get_all_transactions_endpoint),
        )
        .route(endpoints::GET_BUDGETS, get(get_budgets_endpoint))
        .route(endpoints::GET_BUDGET_ITEMS, get(get_budget_items_endpoint));

    let write_routes = Router::new()
        .route(endpoints::ADD_HOUSEHOLD, post(add_household_endpoint))
        .route(endpoints::ADD_ACCOUNT, post(add_account_endpoint))
        .route(endpoints::ADD_BUDGET, post(add_budget_endpoint))
        .route(endpoints::ADD_BUDGET_ITEM, post(add_budget_item_endpoint))
        .route(endpoints::ADD_TRANSACTION, post(add_transaction_endpoint))
        .route(endpoints::DELETE_HOUSEHOLD, delete(delete_household_endpoint))
        .route(endpoints::DELETE_ACCOUNT, delete(delete_account_endpoint))
        .route(endpoints::DELETE_BUDGET, delete(delete_budget_endpoint))
        .route(
            endpoints::DELETE_BUDGET_ITEM,
            delete(delete_budget_item_endpoint),
        )
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint),
        );

    read_routes
        .merge(write_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

async fn get_404_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod finance_api_tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::{endpoints, test_utils::get_test_server};

    #[tokio::test]
    async fn missing_household_is_null_not_an_error() {
        let server = get_test_server();

        let response = server
            .get(endpoints::GET_HOUSEHOLD)
            .add_query_param("hhId", 42)
            .await;

        response.assert_status_ok();
        response.assert_json(&Value::Null);
    }

    #[tokio::test]
    async fn add_household_then_get_it_by_id() {
        let server = get_test_server();

        let response = server
            .post(endpoints::ADD_HOUSEHOLD)
            .add_query_param("name", "Smith Family")
            .await;
        response.assert_status_ok();
        assert_eq!(response.text(), "");

        server
            .get(endpoints::GET_HOUSEHOLD)
            .add_query_param("hhId", 1)
            .await
            .assert_json(&json!({"id": 1, "name": "Smith Family"}));
    }

    #[tokio::test]
    async fn add_account_then_list_accounts() {
        let server = get_test_server();
        server
            .post(endpoints::ADD_HOUSEHOLD)
            .add_query_param("name", "Smith Family")
            .await
            .assert_status_ok();

        server
            .post(endpoints::ADD_ACCOUNT)
            .add_query_param("hhId", 1)
            .add_query_param("name", "Checking")
            .add_query_param("balance", "500.00")
            .await
            .assert_status_ok();

        server
            .get(endpoints::GET_ACCOUNTS)
            .add_query_param("hhId", 1)
            .await
            .assert_json(&json!([{
                "id": 1,
                "householdId": 1,
                "name": "Checking",
                "balance": 500.0,
                "reconciledBalance": 500.0,
                "deleted": false,
            }]));
    }

    #[tokio::test]
    async fn deleted_account_is_still_listed_as_deleted() {
        let server = get_test_server();
        server
            .post(endpoints::ADD_HOUSEHOLD)
            .add_query_param("name", "Smith Family")
            .await
            .assert_status_ok();
        server
            .post(endpoints::ADD_ACCOUNT)
            .add_query_param("hhId", 1)
            .add_query_param("name", "Checking")
            .add_query_param("balance", "500.00")
            .await
            .assert_status_ok();

        server
            .delete(endpoints::DELETE_ACCOUNT)
            .add_query_param("acctId", 1)
            .await
            .assert_status_ok();
        server
            .delete(endpoints::DELETE_ACCOUNT)
            .add_query_param("acctId", 1)
            .await
            .assert_status_not_found();

        server
            .get(endpoints::GET_ACCOUNTS)
            .add_query_param("hhId", 1)
            .await
            .assert_json(&json!([{
                "id": 1,
                "householdId": 1,
                "name": "Checking",
                "balance": 500.0,
                "reconciledBalance": 500.0,
                "deleted": true,
            }]));
    }

    #[tokio::test]
    async fn recreated_household_does_not_inherit_accounts() {
        let server = get_test_server();
        server
            .post(endpoints::ADD_HOUSEHOLD)
            .add_query_param("name", "Old")
            .await
            .assert_status_ok();
        server
            .post(endpoints::ADD_ACCOUNT)
            .add_query_param("hhId", 1)
            .add_query_param("name", "Old Checking")
            .add_query_param("balance", 10)
            .await
            .assert_status_ok();
        server
            .delete(endpoints::DELETE_HOUSEHOLD)
            .add_query_param("hhId", 1)
            .await
            .assert_status_ok();

        server
            .post(endpoints::ADD_HOUSEHOLD)
            .add_query_param("name", "New")
            .await
            .assert_status_ok();

        server
            .get(endpoints::GET_HOUSEHOLD)
            .add_query_param("hhId", 2)
            .await
            .assert_json(&json!({"id": 2, "name": "New"}));
        server
            .get(endpoints::GET_ACCOUNTS)
            .add_query_param("hhId", 2)
            .await
            .assert_json(&json!([]));
    }

    #[tokio::test]
    async fn deleting_budget_orphans_its_items() {
        let server = get_test_server();
        server
            .post(endpoints::ADD_HOUSEHOLD)
            .add_query_param("name", "Smith Family")
            .await
            .assert_status_ok();
        server
            .post(endpoints::ADD_BUDGET)
            .add_query_param("hhId", 1)
            .add_query_param("name", "January")
            .add_query_param("description", "")
            .await
            .assert_status_ok();
        server
            .post(endpoints::ADD_BUDGET_ITEM)
            .add_query_param("budgetId", 1)
            .add_query_param("amount", 400)
            .add_query_param("name", "Groceries")
            .add_query_param("description", "Weekly shop")
            .await
            .assert_status_ok();

        server
            .delete(endpoints::DELETE_BUDGET)
            .add_query_param("budgetId", 1)
            .await
            .assert_status_ok();

        server
            .get(endpoints::GET_BUDGETS)
            .add_query_param("hhId", 1)
            .await
            .assert_json(&json!([]));
        server
            .get(endpoints::GET_BUDGET_ITEMS)
            .add_query_param("budgetId", 1)
            .await
            .assert_json(&json!([{
                "id": 1,
                "budgetId": 1,
                "amount": 400.0,
                "name": "Groceries",
                "description": "Weekly shop",
            }]));
    }

    #[tokio::test]
    async fn add_deposit_then_list_account_transactions() {
        let server = get_test_server();
        server
            .post(endpoints::ADD_HOUSEHOLD)
            .add_query_param("name", "Smith Family")
            .await
            .assert_status_ok();
        server
            .post(endpoints::ADD_ACCOUNT)
            .add_query_param("hhId", 1)
            .add_query_param("name", "Checking")
            .add_query_param("balance", 0)
            .await
            .assert_status_ok();
        server
            .post(endpoints::ADD_BUDGET)
            .add_query_param("hhId", 1)
            .add_query_param("name", "January")
            .await
            .assert_status_ok();
        server
            .post(endpoints::ADD_BUDGET_ITEM)
            .add_query_param("budgetId", 1)
            .add_query_param("amount", 0)
            .add_query_param("name", "Income")
            .await
            .assert_status_ok();

        server
            .post(endpoints::ADD_TRANSACTION)
            .add_query_param("acctId", 1)
            .add_query_param("tranType", 3)
            .add_query_param("budgetItem", 1)
            .add_query_param("userId", "5c1d2a9e-8b1f-4f51-9d3e-7a0f6c2b1e44")
            .add_query_param("amount", "100.00")
            .add_query_param("name", "Paycheck")
            .add_query_param("description", "")
            .await
            .assert_status_ok();

        let transactions: Value = server
            .get(endpoints::GET_ACCOUNT_TRANSACTIONS)
            .add_query_param("acctId", 1)
            .await
            .json();
        let transactions = transactions.as_array().expect("want a JSON array");
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0]["amount"], json!(100.0));
        assert_eq!(transactions[0]["transactionTypeId"], json!(3));
        assert_eq!(
            transactions[0]["enteredById"],
            json!("5c1d2a9e-8b1f-4f51-9d3e-7a0f6c2b1e44")
        );

        server
            .get(endpoints::GET_ALL_TRANSACTIONS)
            .add_query_param("hhId", 1)
            .await
            .assert_json(&Value::Array(transactions.clone()));
    }

    #[tokio::test]
    async fn add_with_missing_parent_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::ADD_ACCOUNT)
            .add_query_param("hhId", 999)
            .add_query_param("name", "Checking")
            .add_query_param("balance", 500)
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.text(), "");
    }

    #[tokio::test]
    async fn unparsable_parameter_is_bad_request() {
        let server = get_test_server();

        let response = server
            .get(endpoints::GET_ACCOUNTS)
            .add_query_param("hhId", "not-a-number")
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.text(), "");
    }

    #[tokio::test]
    async fn missing_parameter_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::ADD_BUDGET)
            .add_query_param("name", "January")
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.text(), "");
    }

    #[tokio::test]
    async fn delete_missing_rows_is_not_found() {
        let server = get_test_server();
        let cases = [
            (endpoints::DELETE_HOUSEHOLD, "hhId"),
            (endpoints::DELETE_ACCOUNT, "acctId"),
            (endpoints::DELETE_BUDGET, "budgetId"),
            (endpoints::DELETE_BUDGET_ITEM, "budgetItemId"),
            (endpoints::DELETE_TRANSACTION, "tranId"),
        ];

        for (endpoint, parameter) in cases {
            server
                .delete(endpoint)
                .add_query_param(parameter, 1)
                .await
                .assert_status(StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn wrong_method_is_rejected() {
        let server = get_test_server();

        server
            .get(endpoints::ADD_HOUSEHOLD)
            .add_query_param("name", "Smith Family")
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        server
            .get("/api/Finance/GetEverything")
            .await
            .assert_status_not_found();
    }
}
