pub mod api;
pub mod config;
pub mod generator;
pub mod logging;
pub mod models;
