use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Giriş başarılı";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Kullanıcı adı veya şifre hatalı";

/// Request body for login. Missing fields read as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Outcome of a credential check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LoginResult {
    Authenticated {
        message: String,
        #[serde(rename = "userId")]
        user_id: i64,
        username: String,
    },
    Rejected {
        message: String,
    },
}

impl LoginResult {
    pub fn authenticated(user_id: i64, username: impl Into<String>) -> Self {
        Self::Authenticated {
            message: SUCCESS_MESSAGE.into(),
            user_id,
            username: username.into(),
        }
    }

    pub fn rejected() -> Self {
        Self::Rejected {
            message: INVALID_CREDENTIALS_MESSAGE.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Authenticated { .. } => StatusCode::OK,
            Self::Rejected { .. } => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for LoginResult {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Body of every non-success response.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn authenticated_serializes_wire_shape() {
        let value = serde_json::to_value(LoginResult::authenticated(1, "admin")).unwrap();
        assert_eq!(
            value,
            json!({ "message": "Giriş başarılı", "userId": 1, "username": "admin" })
        );
    }

    #[test]
    fn rejected_never_carries_user_id() {
        let value = serde_json::to_value(LoginResult::rejected()).unwrap();
        assert_eq!(value, json!({ "message": "Kullanıcı adı veya şifre hatalı" }));
        assert_eq!(LoginResult::rejected().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn missing_request_fields_default_to_empty() {
        let req: LoginRequest = serde_json::from_str(r#"{"username":"admin"}"#).unwrap();
        assert_eq!(req.username, "admin");
        assert_eq!(req.password, "");
    }
}
