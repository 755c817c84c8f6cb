use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend};
use tracing::{debug, error, info, trace};
use url::Url;

/// Database used when neither `--database-url` nor `DATABASE_URL` is given.
/// `mode=rwc` lets SQLite create the file on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://babyshop.db?mode=rwc";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "babyshop=info,migration=info,sea_orm_migration=info";

/// Load variables from a `.env` file, if there is one.
pub fn load_env() {
    dotenvy::dotenv().ok();
}

/// Connect to the database and apply per-connection settings.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    trace!("Attempting to connect to database");
    debug!("Database URL: {}", redact_database_url(database_url));

    let db = match Database::connect(database_url).await {
        Ok(connection) => {
            info!("Successfully connected to database");
            connection
        }
        Err(e) => {
            error!(
                "Failed to connect to database '{}': {}",
                redact_database_url(database_url),
                e
            );
            return Err(e.into());
        }
    };

    if db.get_database_backend() == DbBackend::Sqlite {
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
    }

    Ok(db)
}

/// Database URL with any password replaced, safe to log.
pub fn redact_database_url(database_url: &str) -> String {
    match Url::parse(database_url) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("****"));
            }
            url.to_string()
        }
        Err(_) => "<unparseable database url>".to_string(),
    }
}
