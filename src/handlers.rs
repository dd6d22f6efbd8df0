pub mod health;
pub mod heroes;
pub mod home;
pub mod users;
