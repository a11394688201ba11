use axum::{routing::get, Json, Router};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::auth::extractors::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SecretResponse {
    pub secret: &'static str,
}

pub fn secrets_routes() -> Router<AppState> {
    Router::new().route("/secrets", get(get_secret))
}

/// Only reachable once `AuthUser` has resolved the bearer token; the handler
/// itself just returns the fixed payload and touches nothing.
#[instrument(skip_all)]
pub async fn get_secret(AuthUser(user): AuthUser) -> Json<SecretResponse> {
    debug!(user_id = %user.id, "secret accessed");
    Json(SecretResponse {
        secret: "This is a super secret message.",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_response_serialization() {
        let json = serde_json::to_value(SecretResponse {
            secret: "This is a super secret message.",
        })
        .unwrap();
        assert_eq!(
            json.get("secret").and_then(|v| v.as_str()),
            Some("This is a super secret message.")
        );
    }
}
