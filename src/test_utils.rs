use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Create an in-memory SQLite database with no migrations applied
pub async fn setup_empty_db() -> DatabaseConnection {
    init_test_tracing();

    Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database")
}

/// Create an in-memory SQLite database for testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = setup_empty_db().await;

    // Run migrations
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a database holding products from before the price column existed.
pub async fn setup_legacy_catalog(names: &[&str]) -> DatabaseConnection {
    let db = setup_empty_db().await;

    Migrator::up(&db, Some(1))
        .await
        .expect("Failed to run initial migration");

    for name in names {
        db.execute_unprepared(&format!(
            "INSERT INTO products (name) VALUES ('{}');",
            name.replace('\'', "''")
        ))
        .await
        .expect("Failed to insert legacy product");
    }

    db
}

/// Initialize tracing for tests, writing through the test harness so output
/// is captured per test.
///
/// The log level is determined by the RUST_LOG environment variable,
/// defaulting to WARN if not set. Only the first call installs the
/// subscriber; later calls are no-ops.
pub fn init_test_tracing() {
    // Get log level from environment variable or default to WARN
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| match level.to_uppercase().as_str() {
            "ERROR" => Some(Level::ERROR),
            "WARN" => Some(Level::WARN),
            "INFO" => Some(Level::INFO),
            "DEBUG" => Some(Level::DEBUG),
            "TRACE" => Some(Level::TRACE),
            _ => None,
        })
        .unwrap_or(Level::WARN);

    let _ = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_test_writer()
        .try_init();
}
