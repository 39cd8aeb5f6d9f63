//! Defines the core data models and table for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{account::AccountId, budget_item::BudgetItemId, database_id::DatabaseId};

/// Alias for the database ID of a transaction.
pub type TransactionId = DatabaseId;

/// Alias for the integer code of a transaction type.
///
/// Codes other than [DEPOSIT] and [WITHDRAW] are stored as given.
pub type TransactionTypeId = i64;

/// The transaction type code for money paid into an account.
pub const DEPOSIT: TransactionTypeId = 3;

/// The transaction type code for money taken out of an account.
pub const WITHDRAW: TransactionTypeId = 4;

/// A single deposit or withdrawal posted to an account.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The account the transaction posts against.
    pub account_id: AccountId,
    /// Either [DEPOSIT] or [WITHDRAW].
    pub transaction_type_id: TransactionTypeId,
    /// The budget item the transaction is categorized under.
    pub budget_item_id: BudgetItemId,
    /// The opaque ID of the user who entered the transaction, as issued by the identity provider.
    pub entered_by_id: String,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    /// The amount of money that moved.
    pub amount: f64,
    /// Whether the transaction has been matched against the bank.
    pub is_reconciled: bool,
    /// The amount reported by the bank.
    pub reconciled_amount: f64,
    /// Voided transactions stay visible but should not count.
    pub is_void: bool,
    /// A title, e.g. "Walmart".
    pub name: String,
    /// Free-form notes, may be empty.
    pub description: String,
}

/// The data needed to create a transaction.
///
/// The field names in the query string follow the API's parameter names,
/// e.g. `acctId` and `tranType`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewTransaction {
    /// The account to post against.
    #[serde(rename = "acctId")]
    pub account_id: AccountId,
    /// Either [DEPOSIT] or [WITHDRAW].
    #[serde(rename = "tranType")]
    pub transaction_type_id: TransactionTypeId,
    /// The budget item to categorize the transaction under.
    #[serde(rename = "budgetItem")]
    pub budget_item_id: BudgetItemId,
    /// The opaque ID of the current user.
    #[serde(rename = "userId", alias = "UserId")]
    pub entered_by_id: String,
    /// The amount of money that moved.
    pub amount: f64,
    /// A title, e.g. "Paycheck".
    pub name: String,
    /// Optional notes, defaults to an empty string.
    #[serde(default)]
    pub description: String,
}

/// Create the transaction table.
///
/// New transactions must refer to an existing account and budget item.
/// Deleting either of those leaves the transaction in place.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            account_id INTEGER NOT NULL,
            transaction_type_id INTEGER NOT NULL,
            budget_item_id INTEGER NOT NULL,
            entered_by_id TEXT NOT NULL,
            created TEXT NOT NULL,
            amount REAL NOT NULL,
            is_reconciled INTEGER NOT NULL DEFAULT 0,
            reconciled_amount REAL NOT NULL DEFAULT 0,
            is_void INTEGER NOT NULL DEFAULT 0,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_transaction_account_id ON \"transaction\"(account_id);

        CREATE TRIGGER IF NOT EXISTS transaction_account_exists
        BEFORE INSERT ON \"transaction\"
        WHEN NOT EXISTS (SELECT 1 FROM account WHERE id = NEW.account_id)
        BEGIN
            SELECT RAISE(ABORT, 'transaction.account_id does not refer to an account');
        END;

        CREATE TRIGGER IF NOT EXISTS transaction_budget_item_exists
        BEFORE INSERT ON \"transaction\"
        WHEN NOT EXISTS (SELECT 1 FROM budget_item WHERE id = NEW.budget_item_id)
        BEGIN
            SELECT RAISE(ABORT, 'transaction.budget_item_id does not refer to a budget item');
        END;",
    )?;

    Ok(())
}

pub(super) fn map_row_to_transaction(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        account_id: row.get(1)?,
        transaction_type_id: row.get(2)?,
        budget_item_id: row.get(3)?,
        entered_by_id: row.get(4)?,
        created: row.get(5)?,
        amount: row.get(6)?,
        is_reconciled: row.get(7)?,
        reconciled_amount: row.get(8)?,
        is_void: row.get(9)?,
        name: row.get(10)?,
        description: row.get(11)?,
    })
}
