//! Data model and repositories for the Tour of Heroes service.
//!
//! Entities are plain SeaORM models. Repositories borrow a connection handle
//! (a pooled `DatabaseConnection` or an open `DatabaseTransaction`) for their
//! whole lifetime, so the caller decides how long a session lives.

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::RepositoryError;
pub use repositories::{HeroUpdate, HeroesRepository, NewHero, NewUser, PasswordHashing, UserRepository};
