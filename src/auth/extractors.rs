use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::auth::dto::LoggedOut;
use crate::auth::User;
use crate::state::AppState;

/// Auth gateway: resolves the Authorization header to a user record.
///
/// The header value is compared to stored access tokens as-is, with no
/// `Bearer ` prefix. Putting the gateway in the handler's signature means a
/// protected route is one composed handler; re-registering the path cannot
/// shadow away the check.
pub struct AuthUser(pub User);

/// Gateway rejection. A missing header or unknown token is `Unauthorized`;
/// a store failure during lookup is `Internal` so clients never mistake an
/// outage for a revoked token.
pub enum AuthRejection {
    Unauthorized,
    Internal,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthorized => {
                (StatusCode::UNAUTHORIZED, Json(LoggedOut::new())).into_response()
            }
            AuthRejection::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AuthRejection::Unauthorized)?;

        match User::find_by_access_token(&state.db, token).await {
            Ok(Some(user)) => Ok(AuthUser(user)),
            Ok(None) => {
                warn!("unknown access token");
                Err(AuthRejection::Unauthorized)
            }
            Err(e) => {
                error!(error = %e, "access token lookup failed");
                Err(AuthRejection::Internal)
            }
        }
    }
}
