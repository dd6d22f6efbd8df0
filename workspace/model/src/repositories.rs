//! Repositories mediating create/read/update/delete between callers and the store.

pub mod hero;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use hero::{HeroUpdate, HeroesRepository, NewHero};
pub use user::{NewUser, PasswordHashing, UserRepository};
