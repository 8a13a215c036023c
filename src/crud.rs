//! Single-table CRUD over the `Customer` table of the `CRUD` store.

use crate::error::Result;
use crate::schema::{ColumnDefinition, DataType, TableDefinition};
use crate::session::Store;
use crate::value::Row;
use rusqlite::params;
use tracing::debug;

pub const STORE_NAME: &str = "CRUD";

/// Printed after each listing of this store.
pub const SEPARATOR: &str = "------------------------------------------------------";

pub fn customer_table() -> TableDefinition {
    TableDefinition::new("Customer")
        .with_column(ColumnDefinition::id("id"))
        .with_column(ColumnDefinition::new("first_name", DataType::Text))
        .with_column(ColumnDefinition::new("last_name", DataType::Text))
        .with_column(ColumnDefinition::new("address", DataType::Text))
        .with_column(ColumnDefinition::new("age", DataType::Integer))
}

pub fn create_table_customer(store: &Store) -> Result<()> {
    store.session(|db| customer_table().create(db))
}

pub fn create_customer(
    store: &Store,
    first_name: &str,
    last_name: &str,
    address: &str,
    age: i64,
) -> Result<()> {
    store.session(|db| {
        db.execute(
            "INSERT INTO Customer (first_name, last_name, address, age) VALUES (?1, ?2, ?3, ?4)",
            params![first_name, last_name, address, age],
        )?;
        Ok(())
    })
}

/// All customers, in table order.
pub fn get_customer(store: &Store) -> Result<Vec<Row>> {
    store.session(|db| {
        db.execute("SELECT * FROM Customer", [])?;
        Ok(db.fetch_all())
    })
}

/// Set `age` on every customer with this first and last name.
pub fn update_customer(
    store: &Store,
    first_name: &str,
    last_name: &str,
    age: i64,
) -> Result<usize> {
    let changed = store.session(|db| {
        db.execute(
            "UPDATE Customer SET age = ?1 WHERE first_name = ?2 AND last_name = ?3",
            params![age, first_name, last_name],
        )
    })?;
    debug!(first_name, last_name, changed, "customer age updated");
    Ok(changed)
}

pub fn delete_customer(store: &Store, last_name: &str) -> Result<usize> {
    let deleted = store.session(|db| {
        db.execute("DELETE FROM Customer WHERE last_name = ?1", params![last_name])
    })?;
    debug!(last_name, deleted, "customers deleted");
    Ok(deleted)
}
