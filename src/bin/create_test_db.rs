use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use household_finance::{
    DEPOSIT, NewTransaction, WITHDRAW, add_account, add_budget, add_budget_item, add_household,
    add_transaction, initialize_db,
};

/// A utility for creating a test database for the REST API server of household_finance.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test household...");
    add_household("Smith Family", &conn)?;
    let household_id = conn.last_insert_rowid();

    add_account(household_id, "Checking", 1500.0, &conn)?;
    let account_id = conn.last_insert_rowid();

    add_budget(household_id, "Monthly", "Regular monthly spending", &conn)?;
    let budget_id = conn.last_insert_rowid();

    add_budget_item(budget_id, 2000.0, "Income", "", &conn)?;
    let income_id = conn.last_insert_rowid();
    add_budget_item(budget_id, 600.0, "Groceries", "Food and household goods", &conn)?;
    let groceries_id = conn.last_insert_rowid();

    println!("Creating test transactions...");
    let entered_by_id = "00000000-0000-4000-8000-000000000000".to_owned();
    add_transaction(
        &NewTransaction {
            account_id,
            transaction_type_id: DEPOSIT,
            budget_item_id: income_id,
            entered_by_id: entered_by_id.clone(),
            amount: 2000.0,
            name: "Paycheck".to_owned(),
            description: String::new(),
        },
        &conn,
    )?;
    add_transaction(
        &NewTransaction {
            account_id,
            transaction_type_id: WITHDRAW,
            budget_item_id: groceries_id,
            entered_by_id,
            amount: 84.32,
            name: "Walmart".to_owned(),
            description: "Weekly shop".to_owned(),
        },
        &conn,
    )?;

    println!("Success!");

    Ok(())
}
