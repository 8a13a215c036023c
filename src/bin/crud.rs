use anyhow::Result;
use sqlite_crud::{crud, write_listing, Store};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = Store::named(crud::STORE_NAME);
    let mut out = std::io::stdout().lock();

    crud::create_table_customer(&store)?;
    crud::create_customer(&store, "Jonas", "Jonaitis", "Kaunas", 30)?;
    crud::update_customer(&store, "Jonas", "Jonaitis", 20)?;
    write_listing(&mut out, &crud::get_customer(&store)?, crud::SEPARATOR)?;

    Ok(())
}
