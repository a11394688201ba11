use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for registration. Fields are optional so a missing required
/// field surfaces as the 400 `{message, errors}` shape instead of a body
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for login. Missing fields default to empty strings, which
/// never match a stored user and fall into the merged not-found outcome.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// 201 response for a successful registration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreated {
    pub id: Uuid,
    pub access_token: String,
}

/// 400 response when registration fails. Deliberately generic: it does not
/// say which field collided.
#[derive(Debug, Serialize)]
pub struct RegistrationFailed {
    pub message: &'static str,
    pub errors: Vec<String>,
}

impl RegistrationFailed {
    pub fn new(errors: Vec<String>) -> Self {
        Self {
            message: "could not create user",
            errors,
        }
    }
}

/// 200 response for a successful login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionGranted {
    pub user_id: Uuid,
    pub access_token: String,
}

/// 200 response for a failed login. Unknown email and wrong password both
/// produce this shape, so the caller cannot tell which emails exist.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionNotFound {
    pub not_found: bool,
}

impl SessionNotFound {
    pub fn new() -> Self {
        Self { not_found: true }
    }
}

impl Default for SessionNotFound {
    fn default() -> Self {
        Self::new()
    }
}

/// 401 body for requests the auth gateway rejects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedOut {
    pub logged_out: bool,
}

impl LoggedOut {
    pub fn new() -> Self {
        Self { logged_out: true }
    }
}

impl Default for LoggedOut {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_camel_case() {
        let created = UserCreated {
            id: Uuid::new_v4(),
            access_token: "abc123".into(),
        };
        let json = serde_json::to_value(&created).unwrap();
        assert!(json.get("accessToken").is_some());
        assert!(json.get("access_token").is_none());

        let granted = SessionGranted {
            user_id: Uuid::new_v4(),
            access_token: "abc123".into(),
        };
        let json = serde_json::to_value(&granted).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("accessToken").is_some());
    }

    #[test]
    fn failure_shapes_match_wire_contract() {
        let json = serde_json::to_value(SessionNotFound::new()).unwrap();
        assert_eq!(json, serde_json::json!({ "notFound": true }));

        let json = serde_json::to_value(LoggedOut::new()).unwrap();
        assert_eq!(json, serde_json::json!({ "loggedOut": true }));

        let json = serde_json::to_value(RegistrationFailed::new(vec!["name is required".into()]))
            .unwrap();
        assert_eq!(
            json.get("message").and_then(|v| v.as_str()),
            Some("could not create user")
        );
        assert_eq!(json.get("errors").and_then(|v| v.as_array()).unwrap().len(), 1);
    }

    #[test]
    fn session_request_defaults_missing_fields_to_empty() {
        let req: CreateSessionRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());
    }
}
