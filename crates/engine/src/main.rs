//! Campus - interactive university administration.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod infrastructure;
mod shell;

use infrastructure::storage::SnapshotStore;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Campus");

    // Load configuration
    let db_path = std::env::var("CAMPUS_DB_PATH").unwrap_or_else(|_| "campus_db.json".into());

    let store = SnapshotStore::new(db_path);
    let mut university = store.load();

    shell::run(&mut university, &store)?;

    tracing::info!("Campus stopped");
    Ok(())
}
