pub mod auth;
pub mod error;
pub mod health;
pub mod server;
pub mod users;
