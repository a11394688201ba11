use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod password;
pub mod repo;
mod repo_types;
pub mod token;

pub use repo_types::User;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}
