use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{
            CreateSessionRequest, CreateUserRequest, RegistrationFailed, SessionGranted,
            SessionNotFound, UserCreated,
        },
        password::{hash_password, verify_password},
        repo::is_unique_violation,
        token::generate_access_token,
        User,
    },
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/sessions", post(create_session))
}

fn require(value: Option<String>, field: &str, errors: &mut Vec<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            errors.push(format!("{field} is required"));
            String::new()
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Response {
    // Every registration failure wears the same {message, errors} shape,
    // including bodies that do not deserialize at all.
    let Json(payload) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "malformed registration body");
            return (
                StatusCode::BAD_REQUEST,
                Json(RegistrationFailed::new(vec![rejection.body_text()])),
            )
                .into_response();
        }
    };

    let mut errors = Vec::new();
    let name = require(payload.name, "name", &mut errors);
    let email = require(payload.email, "email", &mut errors);
    let password = require(payload.password, "password", &mut errors);

    if !errors.is_empty() {
        warn!(?errors, "registration rejected");
        return (StatusCode::BAD_REQUEST, Json(RegistrationFailed::new(errors))).into_response();
    }

    let hash = match hash_password(&password) {
        Ok(h) => h,
        Err(e) => {
            error!(error = %e, "hash_password failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let access_token = generate_access_token();

    match User::create(&state.db, &name, &email, &hash, &access_token).await {
        Ok(user) => {
            info!(user_id = %user.id, "user registered");
            (
                StatusCode::CREATED,
                Json(UserCreated {
                    id: user.id,
                    access_token: user.access_token,
                }),
            )
                .into_response()
        }
        // Generic on purpose: the response does not say whether name or
        // email collided.
        Err(e) if is_unique_violation(&e) => {
            warn!("registration hit a uniqueness constraint");
            (
                StatusCode::BAD_REQUEST,
                Json(RegistrationFailed::new(vec![
                    "name or email already taken".into()
                ])),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "create user failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn create_session(
    State(state): State<AppState>,
    Json(payload): Json<CreateSessionRequest>,
) -> Response {
    let user = match User::find_by_email(&state.db, &payload.email).await {
        Ok(Some(u)) => u,
        // Unknown email and wrong password are indistinguishable to the
        // caller: both are a 200 with {"notFound": true}.
        Ok(None) => {
            warn!("login for unknown email");
            return Json(SessionNotFound::new()).into_response();
        }
        Err(e) => {
            error!(error = %e, "find_by_email failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => {
            info!(user_id = %user.id, "user logged in");
            Json(SessionGranted {
                user_id: user.id,
                access_token: user.access_token,
            })
            .into_response()
        }
        Ok(false) => {
            warn!(user_id = %user.id, "login with wrong password");
            Json(SessionNotFound::new()).into_response()
        }
        Err(e) => {
            error!(error = %e, "verify_password failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
