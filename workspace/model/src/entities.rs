//! This file serves as the root for all SeaORM entity modules.
//! The Tour of Heroes data model is small: users own zero or more heroes
//! through a nullable `heroes.user_id` foreign key.

pub mod hero;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::hero::Entity as Hero;
    pub use super::user::Entity as User;
}
