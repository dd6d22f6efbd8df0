//! Shared fixtures for repository tests.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, Set};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use super::PasswordHashing;
use crate::entities::user;

/// Route repository logs to stderr at the level named by `RUST_LOG` (WARN by default).
/// Only the first call installs the subscriber.
pub fn init_tracing() {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let _ = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Fresh in-memory SQLite database with foreign keys enforced and migrations applied.
pub async fn setup_db() -> DatabaseConnection {
    init_tracing();

    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    db.execute_unprepared("PRAGMA foreign_keys = ON;")
        .await
        .expect("Failed to enable foreign keys");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Insert a user row directly, bypassing password hashing.
pub async fn create_user(db: &DatabaseConnection, user_name: &str) -> user::Model {
    user::ActiveModel {
        user_name: Set(user_name.to_string()),
        password_hash: Set("not-a-real-hash".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create test user")
}

/// Cheap Argon2 parameters so tests don't spend seconds hashing.
pub fn fast_hashing() -> PasswordHashing {
    PasswordHashing {
        memory_cost_kib: 256,
        time_cost: 1,
        parallelism: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_installs_global_subscriber_once() {
        init_tracing();
        init_tracing();
        assert!(tracing::dispatcher::has_been_set());
    }
}
