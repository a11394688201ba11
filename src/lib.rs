pub mod app;
pub mod auth;
pub mod config;
pub mod secrets;
pub mod state;
