use sqlite_crud::crud::{
    create_customer, create_table_customer, delete_customer, get_customer, update_customer,
    SEPARATOR, STORE_NAME,
};
use sqlite_crud::{write_listing, Result, Row, Store, StoreConfig, Value};
use tempfile::TempDir;

// Helper function to create an empty `CRUD` store inside a temporary directory
fn create_temp_store() -> Result<(Store, TempDir)> {
    let dir = TempDir::new().unwrap();
    let store = Store::new(StoreConfig::new(STORE_NAME).with_directory(dir.path()));
    create_table_customer(&store)?;
    Ok((store, dir))
}

fn customer(id: i64, first: &str, last: &str, address: &str, age: i64) -> Row {
    Row(vec![
        Value::Integer(id),
        first.into(),
        last.into(),
        address.into(),
        Value::Integer(age),
    ])
}

#[test]
fn test_insert_update_read_example() {
    test_insert_update_read_example_impl().unwrap();
}

fn test_insert_update_read_example_impl() -> Result<()> {
    let (store, _dir) = create_temp_store()?;

    create_customer(&store, "Jonas", "Jonaitis", "Kaunas", 30)?;
    assert_eq!(update_customer(&store, "Jonas", "Jonaitis", 20)?, 1);

    let rows = get_customer(&store)?;
    assert_eq!(rows, vec![customer(1, "Jonas", "Jonaitis", "Kaunas", 20)]);
    assert_eq!(rows[0].to_string(), "(1, 'Jonas', 'Jonaitis', 'Kaunas', 20)");
    Ok(())
}

#[test]
fn test_inserted_row_is_read_back() {
    test_inserted_row_is_read_back_impl().unwrap();
}

fn test_inserted_row_is_read_back_impl() -> Result<()> {
    let (store, _dir) = create_temp_store()?;

    create_customer(&store, "Ona", "Onaite", "Vilnius", 41)?;
    create_customer(&store, "Petras", "Petraitis", "Klaipeda", 18)?;

    let rows = get_customer(&store)?;
    assert_eq!(rows.len(), 2);
    assert!(rows.contains(&customer(2, "Petras", "Petraitis", "Klaipeda", 18)));
    Ok(())
}

#[test]
fn test_update_touches_only_matching_rows() {
    test_update_touches_only_matching_rows_impl().unwrap();
}

fn test_update_touches_only_matching_rows_impl() -> Result<()> {
    let (store, _dir) = create_temp_store()?;

    create_customer(&store, "Jonas", "Jonaitis", "Kaunas", 30)?;
    create_customer(&store, "Jonas", "Jonaitis", "Alytus", 31)?;
    create_customer(&store, "Jonas", "Petraitis", "Kaunas", 32)?;

    // Non-unique key: both Jonas Jonaitis rows change.
    assert_eq!(update_customer(&store, "Jonas", "Jonaitis", 50)?, 2);

    let rows = get_customer(&store)?;
    assert_eq!(
        rows,
        vec![
            customer(1, "Jonas", "Jonaitis", "Kaunas", 50),
            customer(2, "Jonas", "Jonaitis", "Alytus", 50),
            customer(3, "Jonas", "Petraitis", "Kaunas", 32),
        ]
    );
    Ok(())
}

#[test]
fn test_update_without_match_is_noop() {
    test_update_without_match_is_noop_impl().unwrap();
}

fn test_update_without_match_is_noop_impl() -> Result<()> {
    let (store, _dir) = create_temp_store()?;

    create_customer(&store, "Jonas", "Jonaitis", "Kaunas", 30)?;
    assert_eq!(update_customer(&store, "Nobody", "Noone", 99)?, 0);
    assert_eq!(
        get_customer(&store)?,
        vec![customer(1, "Jonas", "Jonaitis", "Kaunas", 30)]
    );
    Ok(())
}

#[test]
fn test_delete_removes_exactly_matching_rows() {
    test_delete_removes_exactly_matching_rows_impl().unwrap();
}

fn test_delete_removes_exactly_matching_rows_impl() -> Result<()> {
    let (store, _dir) = create_temp_store()?;

    create_customer(&store, "Jonas", "Jonaitis", "Kaunas", 30)?;
    create_customer(&store, "Ona", "Jonaitis", "Vilnius", 28)?;
    create_customer(&store, "Petras", "Petraitis", "Klaipeda", 18)?;

    assert_eq!(delete_customer(&store, "Jonaitis")?, 2);
    assert_eq!(delete_customer(&store, "Jonaitis")?, 0);
    assert_eq!(
        get_customer(&store)?,
        vec![customer(3, "Petras", "Petraitis", "Klaipeda", 18)]
    );
    Ok(())
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    test_ids_are_not_reused_after_delete_impl().unwrap();
}

fn test_ids_are_not_reused_after_delete_impl() -> Result<()> {
    let (store, _dir) = create_temp_store()?;

    create_customer(&store, "Jonas", "Jonaitis", "Kaunas", 30)?;
    delete_customer(&store, "Jonaitis")?;
    create_customer(&store, "Ona", "Onaite", "Vilnius", 41)?;

    assert_eq!(
        get_customer(&store)?,
        vec![customer(2, "Ona", "Onaite", "Vilnius", 41)]
    );
    Ok(())
}

#[test]
fn test_table_creation_is_repeatable() {
    test_table_creation_is_repeatable_impl().unwrap();
}

fn test_table_creation_is_repeatable_impl() -> Result<()> {
    let (store, _dir) = create_temp_store()?;

    create_customer(&store, "Jonas", "Jonaitis", "Kaunas", 30)?;
    create_table_customer(&store)?;
    assert_eq!(get_customer(&store)?.len(), 1);
    Ok(())
}

#[test]
fn test_committed_row_survives_failed_statement() {
    test_committed_row_survives_failed_statement_impl().unwrap();
}

fn test_committed_row_survives_failed_statement_impl() -> Result<()> {
    let (store, _dir) = create_temp_store()?;

    create_customer(&store, "Jonas", "Jonaitis", "Kaunas", 30)?;
    let failed = store.session(|db| {
        db.execute("UPDATE Customer SET salary = 1", [])?;
        Ok(())
    });
    assert!(failed.is_err());

    assert_eq!(
        get_customer(&store)?,
        vec![customer(1, "Jonas", "Jonaitis", "Kaunas", 30)]
    );
    Ok(())
}

#[test]
fn test_missing_table_is_reported() {
    let dir = TempDir::new().unwrap();
    let store = Store::new(StoreConfig::new(STORE_NAME).with_directory(dir.path()));
    let err = get_customer(&store).unwrap_err();
    assert!(err.to_string().contains("no such table: Customer"));
}

#[test]
fn test_customer_listing_output() {
    test_customer_listing_output_impl().unwrap();
}

fn test_customer_listing_output_impl() -> Result<()> {
    let (store, _dir) = create_temp_store()?;
    create_customer(&store, "Jonas", "Jonaitis", "Kaunas", 30)?;
    update_customer(&store, "Jonas", "Jonaitis", 20)?;

    let mut out = Vec::new();
    write_listing(&mut out, &get_customer(&store)?, SEPARATOR)?;
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("(1, 'Jonas', 'Jonaitis', 'Kaunas', 20)\n{}\n", "-".repeat(54))
    );
    Ok(())
}
