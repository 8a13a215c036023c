//! One-to-many relationship between `Customers` and `Companies` in the
//! `relationships` store.
//!
//! `Customers.company_id` is declared as a foreign key but not enforced, so
//! a customer may point at a company that does not exist. Such customers
//! simply drop out of [`get_customers_companies`].

use crate::error::Result;
use crate::schema::{drop_table_sql, ColumnDefinition, DataType, ForeignKey, TableDefinition};
use crate::session::Store;
use crate::value::Row;
use rusqlite::params;
use tracing::{debug, info};

pub const STORE_NAME: &str = "relationships";

/// Printed after each listing of this store.
pub const SEPARATOR: &str = "--------------------------------------------------------";

pub fn customers_table() -> TableDefinition {
    TableDefinition::new("Customers")
        .with_column(ColumnDefinition::id("customer_id"))
        .with_column(ColumnDefinition::new("first_name", DataType::Text))
        .with_column(ColumnDefinition::new("last_name", DataType::Text))
        .with_column(ColumnDefinition::new("age", DataType::Integer))
        .with_column(ColumnDefinition::new("company_id", DataType::Integer))
        .with_foreign_key(ForeignKey::new("company_id", "Companies", "company_id"))
}

pub fn companies_table() -> TableDefinition {
    TableDefinition::new("Companies")
        .with_column(ColumnDefinition::id("company_id"))
        .with_column(ColumnDefinition::new("company_name", DataType::Text))
        .with_column(ColumnDefinition::new("employee_count", DataType::Integer))
}

pub fn create_table_customers(store: &Store) -> Result<()> {
    store.session(|db| customers_table().create(db))
}

pub fn create_table_companies(store: &Store) -> Result<()> {
    store.session(|db| companies_table().create(db))
}

pub fn create_customer(
    store: &Store,
    first_name: &str,
    last_name: &str,
    age: i64,
    company_id: i64,
) -> Result<()> {
    store.session(|db| {
        db.execute(
            "INSERT INTO Customers (first_name, last_name, age, company_id) VALUES (?1, ?2, ?3, ?4)",
            params![first_name, last_name, age, company_id],
        )?;
        Ok(())
    })
}

pub fn create_company(store: &Store, company_name: &str, employee_count: i64) -> Result<()> {
    store.session(|db| {
        db.execute(
            "INSERT INTO Companies (company_name, employee_count) VALUES (?1, ?2)",
            params![company_name, employee_count],
        )?;
        Ok(())
    })
}

/// Customers with the given last name.
pub fn get_customers(store: &Store, last_name: &str) -> Result<Vec<Row>> {
    store.session(|db| {
        db.execute("SELECT * FROM Customers WHERE last_name = ?1", params![last_name])?;
        Ok(db.fetch_all())
    })
}

pub fn get_companies(store: &Store) -> Result<Vec<Row>> {
    store.session(|db| {
        db.execute("SELECT * FROM Companies", [])?;
        Ok(db.fetch_all())
    })
}

pub fn update_customer_last_name(
    store: &Store,
    old_last_name: &str,
    new_last_name: &str,
) -> Result<usize> {
    let changed = store.session(|db| {
        db.execute(
            "UPDATE Customers SET last_name = ?1 WHERE last_name = ?2",
            params![new_last_name, old_last_name],
        )
    })?;
    debug!(old_last_name, new_last_name, changed, "customer last name updated");
    Ok(changed)
}

/// Rewrite every company whose head count equals `old_count`.
pub fn update_company_employees(store: &Store, old_count: i64, new_count: i64) -> Result<usize> {
    let changed = store.session(|db| {
        db.execute(
            "UPDATE Companies SET employee_count = ?1 WHERE employee_count = ?2",
            params![new_count, old_count],
        )
    })?;
    debug!(old_count, new_count, changed, "company employee count updated");
    Ok(changed)
}

pub fn delete_customer(store: &Store, last_name: &str) -> Result<usize> {
    let deleted = store.session(|db| {
        db.execute("DELETE FROM Customers WHERE last_name = ?1", params![last_name])
    })?;
    debug!(last_name, deleted, "customers deleted");
    Ok(deleted)
}

pub fn delete_company(store: &Store, company_name: &str) -> Result<usize> {
    let deleted = store.session(|db| {
        db.execute("DELETE FROM Companies WHERE company_name = ?1", params![company_name])
    })?;
    debug!(company_name, deleted, "companies deleted");
    Ok(deleted)
}

/// Inner join of customers with their companies.
///
/// Each row holds every `Customers` column followed by every `Companies`
/// column, ordered by customer.
pub fn get_customers_companies(store: &Store) -> Result<Vec<Row>> {
    store.session(|db| {
        db.execute(
            "SELECT * FROM Customers \
             JOIN Companies ON Customers.company_id = Companies.company_id \
             ORDER BY Customers.customer_id",
            [],
        )?;
        Ok(db.fetch_all())
    })
}

pub fn drop_table(store: &Store, table: &str) -> Result<()> {
    store.session(|db| {
        db.execute(&drop_table_sql(table), [])?;
        info!(table, "table dropped");
        Ok(())
    })
}
