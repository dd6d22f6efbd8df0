use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::path::PathBuf;
use tracing::{debug, error, info, trace};

/// Connect to `database_url` and apply every pending migration.
pub async fn run_migrations(database_url: &str) -> Result<DatabaseConnection> {
    trace!("Attempting to connect to database for migrations");
    let db: DatabaseConnection = match Database::connect(database_url).await {
        Ok(connection) => {
            info!("Successfully connected to database");
            connection
        }
        Err(e) => {
            error!("Failed to connect to database '{}': {}", database_url, e);
            return Err(e.into());
        }
    };

    info!("Running database migrations");
    match Migrator::up(&db, None).await {
        Ok(_) => {
            info!("Database migrations completed successfully");
            debug!("All pending migrations have been applied");
        }
        Err(e) => {
            error!("Failed to run database migrations: {}", e);
            return Err(e.into());
        }
    }

    Ok(db)
}

pub async fn init_database(database_url: &str) -> Result<()> {
    trace!("Entering init_database function");
    info!("Initializing database");
    debug!("Database URL: {}", database_url);

    if let Some(path) = sqlite_file_path(database_url) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            debug!("Ensuring directory {} exists", parent.display());
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let db = run_migrations(database_url).await?;
    db.close().await?;

    info!("Database initialization completed successfully!");
    Ok(())
}

/// The file behind a SQLite URL, or `None` for in-memory and non-SQLite URLs.
fn sqlite_file_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();

    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_file_path() {
        assert_eq!(
            sqlite_file_path("sqlite:///var/lib/heroes/heroes.db?mode=rwc"),
            Some(PathBuf::from("/var/lib/heroes/heroes.db"))
        );
        assert_eq!(sqlite_file_path("sqlite://heroes.db"), Some(PathBuf::from("heroes.db")));
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgresql://user:pw@localhost/heroes"), None);
    }

    #[tokio::test]
    async fn test_init_database_creates_parent_directory() {
        let dir = std::env::temp_dir().join(format!("heroes-initdb-{}", std::process::id()));
        let db_path = dir.join("nested").join("heroes.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());

        init_database(&url).await.unwrap();
        assert!(db_path.exists());

        // Running it again is a no-op
        init_database(&url).await.unwrap();

        std::fs::remove_dir_all(&dir).ok();
    }
}
