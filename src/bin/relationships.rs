use anyhow::Result;
use sqlite_crud::{relationships as rel, write_listing, Store};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = Store::named(rel::STORE_NAME);
    let mut out = std::io::stdout().lock();

    rel::create_table_customers(&store)?;
    rel::create_table_companies(&store)?;

    rel::create_company(&store, "UAB_1", 50)?;
    rel::create_company(&store, "UAB_2", 89)?;
    rel::create_company(&store, "UAB_3", 10)?;

    rel::create_customer(&store, "Simas", "Laurys", 24, 1)?;
    rel::create_customer(&store, "Tadas", "Kuisius", 43, 2)?;
    rel::create_customer(&store, "Lina", "Aitienė", 20, 2)?;
    rel::create_customer(&store, "Siga", "Girytė", 33, 3)?;
    // No company 4: left out of the join.
    rel::create_customer(&store, "Rita", "Stasytė", 50, 4)?;

    write_listing(&mut out, &rel::get_customers(&store, "Laurys")?, rel::SEPARATOR)?;
    write_listing(&mut out, &rel::get_companies(&store)?, rel::SEPARATOR)?;
    write_listing(&mut out, &rel::get_customers_companies(&store)?, rel::SEPARATOR)?;

    rel::update_customer_last_name(&store, "Laurys", "Laurinaitis")?;
    rel::update_company_employees(&store, 89, 120)?;
    rel::delete_customer(&store, "Stasytė")?;
    rel::delete_company(&store, "UAB_3")?;

    write_listing(&mut out, &rel::get_customers(&store, "Laurinaitis")?, rel::SEPARATOR)?;
    write_listing(&mut out, &rel::get_companies(&store)?, rel::SEPARATOR)?;
    write_listing(&mut out, &rel::get_customers_companies(&store)?, rel::SEPARATOR)?;

    Ok(())
}
