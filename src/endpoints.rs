//! The API endpoints URIs.
//!
//! Every route takes its parameters from the query string, e.g.,
//! `/api/Finance/GetAccounts?hhId=1`.

/// The route for getting a single household.
pub const GET_HOUSEHOLD: &str = "/api/Finance/GetHousehold";
/// The route for listing the accounts of a household.
pub const GET_ACCOUNTS: &str = "/api/Finance/GetAccounts";
/// The route for listing the transactions of an account.
pub const GET_ACCOUNT_TRANSACTIONS: &str = "/api/Finance/GetAccountTransactions";
/// The route for listing the transactions across all accounts of a household.
pub const GET_ALL_TRANSACTIONS: &str = "/api/Finance/GetAllTransactions";
/// The route for listing the budgets of a household.
pub const GET_BUDGETS: &str = "/api/Finance/GetBudgets";
/// The route for listing the items of a budget.
pub const GET_BUDGET_ITEMS: &str = "/api/Finance/GetBudgetItems";

/// The route for creating a household.
pub const ADD_HOUSEHOLD: &str = "/api/Finance/AddHousehold";
/// The route for creating an account.
pub const ADD_ACCOUNT: &str = "/api/Finance/AddAccount";
/// The route for creating a budget.
pub const ADD_BUDGET: &str = "/api/Finance/AddBudget";
/// The route for creating a budget item.
pub const ADD_BUDGET_ITEM: &str = "/api/Finance/AddBudgetItem";
/// The route for creating a transaction.
pub const ADD_TRANSACTION: &str = "/api/Finance/AddTransaction";

/// The route for deleting a household.
pub const DELETE_HOUSEHOLD: &str = "/api/Finance/DeleteHousehold";
/// The route for deleting an account.
pub const DELETE_ACCOUNT: &str = "/api/Finance/DeleteAccount";
/// The route for deleting a budget.
pub const DELETE_BUDGET: &str = "/api/Finance/DeleteBudget";
/// The route for deleting a budget item.
pub const DELETE_BUDGET_ITEM: &str = "/api/Finance/DeleteBudgetItem";
/// The route for deleting a transaction.
pub const DELETE_TRANSACTION: &str = "/api/Finance/DeleteTransaction";
