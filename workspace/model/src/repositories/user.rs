use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use tokio::task;
use tracing::{debug, info, instrument, trace, warn};
use validator::Validate;

use crate::entities::{prelude::*, user};
use crate::error::{RepositoryError, Result, is_unique_violation};

/// Input for registering a user. The password is hashed before it is stored.
#[derive(Clone, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, max = 100))]
    pub user_name: String,
    #[validate(length(min = 1, max = 100))]
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Argon2id cost parameters used when hashing new passwords.
///
/// Verification always uses the parameters recorded in the stored hash, so
/// changing these only affects users created afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordHashing {
    /// Memory cost in KiB
    pub memory_cost_kib: u32,
    /// Number of iterations
    pub time_cost: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for PasswordHashing {
    fn default() -> Self {
        Self {
            memory_cost_kib: Params::DEFAULT_M_COST,
            time_cost: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl PasswordHashing {
    /// Hash a password into a PHC string with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<String> {
        let params = Params::new(self.memory_cost_kib, self.time_cost, self.parallelism, None)
            .map_err(|e| RepositoryError::PasswordHash(format!("invalid Argon2 params: {e}")))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let salt = SaltString::generate(&mut OsRng);

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| RepositoryError::PasswordHash(format!("failed to hash password: {e}")))?;

        Ok(hash.to_string())
    }
}

/// Check a password against a stored PHC string.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| RepositoryError::PasswordHash(format!("invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Registration and credential lookup over a borrowed connection handle.
pub struct UserRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
    hashing: PasswordHashing,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(conn: &'a C, hashing: PasswordHashing) -> Self {
        Self { conn, hashing }
    }

    /// Register a new user. User names are unique.
    #[instrument(skip(self))]
    pub async fn create(&self, new_user: NewUser) -> Result<user::Model> {
        trace!("Entering UserRepository::create");
        new_user.validate()?;

        let taken = User::find()
            .filter(user::Column::UserName.eq(new_user.user_name.as_str()))
            .one(self.conn)
            .await?
            .is_some();
        if taken {
            warn!("User name '{}' already exists", new_user.user_name);
            return Err(RepositoryError::DuplicateUserName(new_user.user_name));
        }

        // Argon2 is CPU-bound; keep it off the async workers.
        let hashing = self.hashing;
        let password = new_user.password;
        let password_hash = task::spawn_blocking(move || hashing.hash(&password))
            .await
            .map_err(|e| RepositoryError::PasswordHash(format!("hashing task failed: {e}")))??;

        let active = user::ActiveModel {
            user_name: Set(new_user.user_name.clone()),
            password_hash: Set(password_hash),
            ..Default::default()
        };

        match active.insert(self.conn).await {
            Ok(created) => {
                info!("User created successfully with ID: {}, user name: {}", created.id, created.user_name);
                Ok(created)
            }
            Err(err) if is_unique_violation(&err) => {
                warn!("User name '{}' was registered concurrently", new_user.user_name);
                Err(RepositoryError::DuplicateUserName(new_user.user_name))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// The user whose name and password both match, if any.
    ///
    /// An unknown name and a wrong password are indistinguishable to the caller.
    #[instrument(skip(self, password))]
    pub async fn get_by_credentials(&self, user_name: &str, password: &str) -> Result<Option<user::Model>> {
        trace!("Looking up credentials for '{}'", user_name);

        let Some(found) = User::find()
            .filter(user::Column::UserName.eq(user_name))
            .one(self.conn)
            .await?
        else {
            debug!("No user named '{}'", user_name);
            return Ok(None);
        };

        let password = password.to_string();
        let password_hash = found.password_hash.clone();
        let is_valid = task::spawn_blocking(move || verify_password(&password, &password_hash))
            .await
            .map_err(|e| RepositoryError::PasswordHash(format!("verification task failed: {e}")))??;

        if is_valid {
            info!("Credentials accepted for user {}", found.id);
            Ok(Some(found))
        } else {
            debug!("Password mismatch for '{}'", user_name);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::testing::{fast_hashing, setup_db};
    use sea_orm::PaginatorTrait;

    fn new_user(user_name: &str, password: &str) -> NewUser {
        NewUser {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_login_round_trip() {
        let db = setup_db().await;
        let repo = UserRepository::new(&db, fast_hashing());

        let created = repo.create(new_user("alice", "secret")).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.user_name, "alice");

        let found = repo.get_by_credentials("alice", "secret").await.unwrap();
        let found = found.expect("credentials should match");
        assert_eq!(found.id, created.id);
        assert_eq!(found.user_name, "alice");
    }

    #[tokio::test]
    async fn test_password_is_not_stored_in_plaintext() {
        let db = setup_db().await;
        let repo = UserRepository::new(&db, fast_hashing());

        let created = repo.create(new_user("bob", "hunter2")).await.unwrap();
        assert_ne!(created.password_hash, "hunter2");
        assert!(created.password_hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_wrong_password_or_name_returns_none() {
        let db = setup_db().await;
        let repo = UserRepository::new(&db, fast_hashing());
        repo.create(new_user("alice", "secret")).await.unwrap();

        assert!(repo.get_by_credentials("alice", "Secret").await.unwrap().is_none());
        assert!(repo.get_by_credentials("alice", "").await.unwrap().is_none());
        assert!(repo.get_by_credentials("mallory", "secret").await.unwrap().is_none());
        assert!(repo.get_by_credentials("Alice", "secret").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_only_matches_the_right_user() {
        let db = setup_db().await;
        let repo = UserRepository::new(&db, fast_hashing());
        let alice = repo.create(new_user("alice", "secret")).await.unwrap();
        let carol = repo.create(new_user("carol", "other")).await.unwrap();

        assert_eq!(repo.get_by_credentials("alice", "secret").await.unwrap().map(|u| u.id), Some(alice.id));
        assert_eq!(repo.get_by_credentials("carol", "other").await.unwrap().map(|u| u.id), Some(carol.id));
        assert!(repo.get_by_credentials("carol", "secret").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_user_name_is_rejected() {
        let db = setup_db().await;
        let repo = UserRepository::new(&db, fast_hashing());
        repo.create(new_user("alice", "secret")).await.unwrap();

        let result = repo.create(new_user("alice", "different")).await;
        assert!(matches!(result, Err(RepositoryError::DuplicateUserName(name)) if name == "alice"));
        assert_eq!(User::find().count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_validates_lengths() {
        let db = setup_db().await;
        let repo = UserRepository::new(&db, fast_hashing());

        let long_name = repo.create(new_user(&"x".repeat(101), "secret")).await;
        assert!(matches!(long_name, Err(RepositoryError::Validation(_))));

        let empty_password = repo.create(new_user("dave", "")).await;
        assert!(matches!(empty_password, Err(RepositoryError::Validation(_))));

        assert_eq!(User::find().count(&db).await.unwrap(), 0);
    }

    #[test]
    fn test_hash_and_verify() {
        let hashing = fast_hashing();
        let first = hashing.hash("correct horse").unwrap();
        let second = hashing.hash("correct horse").unwrap();

        // Salted, so the same password never hashes the same way twice
        assert_ne!(first, second);
        assert!(verify_password("correct horse", &first).unwrap());
        assert!(!verify_password("battery staple", &first).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let result = verify_password("secret", "plaintext-password");
        assert!(matches!(result, Err(RepositoryError::PasswordHash(_))));
    }

    #[test]
    fn test_invalid_params_are_reported() {
        let hashing = PasswordHashing {
            memory_cost_kib: 0,
            time_cost: 0,
            parallelism: 0,
        };
        assert!(matches!(hashing.hash("secret"), Err(RepositoryError::PasswordHash(_))));
    }

    #[test]
    fn test_new_user_debug_redacts_password() {
        let rendered = format!("{:?}", new_user("alice", "secret"));
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("secret"));
    }
}
