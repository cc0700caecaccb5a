//! Turns a raw HTTP reply from the login endpoint into a typed outcome.
//!
//! Success requires status 200 *and* a body that validates structurally:
//! `userId` a positive integer, `username` a non-empty string. Anything
//! else is a [`LoginFailure`], even when the transport succeeded.

use serde_json::Value;
use thiserror::Error;

use crate::auth::dto::SUCCESS_MESSAGE;
use crate::ui::state::AuthenticatedUser;

pub const UNREACHABLE_MESSAGE: &str =
    "API sunucusuna bağlanılamıyor! Sunucunun çalıştığından emin olun.";
pub const MALFORMED_MESSAGE: &str = "Sunucudan geçersiz kullanıcı verisi alındı";
pub const UNREADABLE_MESSAGE: &str = "Sunucu yanıtı okunamadı";

/// Status line and body of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub reason: String,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    pub user: AuthenticatedUser,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginFailure {
    /// Non-200 status. `message` is the body's `message` field when present.
    #[error("login rejected with HTTP {status}")]
    Rejected {
        status: u16,
        reason: String,
        message: Option<String>,
    },

    #[error("success body failed validation: {0}")]
    MalformedResponse(String),

    #[error("success body is not JSON: {0}")]
    UnreadableResponse(String),

    /// Connection error or timeout.
    #[error("backend unreachable: {0}")]
    Transport(String),
}

impl LoginFailure {
    /// Text shown to the user. Never empty.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(m), ..
            } => m.clone(),
            Self::Rejected { status, reason, .. } if reason.is_empty() => format!("HTTP {status}"),
            Self::Rejected { status, reason, .. } => format!("HTTP {status}: {reason}"),
            Self::MalformedResponse(_) => MALFORMED_MESSAGE.to_string(),
            Self::UnreadableResponse(_) => UNREADABLE_MESSAGE.to_string(),
            Self::Transport(_) => UNREACHABLE_MESSAGE.to_string(),
        }
    }
}

fn non_empty_str<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

pub fn interpret(reply: &HttpReply) -> Result<LoginSuccess, LoginFailure> {
    if reply.status != 200 {
        let message = serde_json::from_slice::<Value>(&reply.body)
            .ok()
            .and_then(|body| non_empty_str(&body, "message").map(str::to_owned));
        return Err(LoginFailure::Rejected {
            status: reply.status,
            reason: reply.reason.clone(),
            message,
        });
    }

    let body: Value = serde_json::from_slice(&reply.body)
        .map_err(|e| LoginFailure::UnreadableResponse(e.to_string()))?;
    validate_success(&body)
}

/// Structural validation of a 200 body.
pub fn validate_success(body: &Value) -> Result<LoginSuccess, LoginFailure> {
    if !body.is_object() {
        return Err(LoginFailure::MalformedResponse("body is not an object".into()));
    }
    let user_id = body
        .get("userId")
        .and_then(Value::as_i64)
        .filter(|id| *id > 0)
        .ok_or_else(|| LoginFailure::MalformedResponse("userId must be a positive integer".into()))?;
    let username = body
        .get("username")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| LoginFailure::MalformedResponse("username must be a non-empty string".into()))?;
    let message = non_empty_str(body, "message").unwrap_or(SUCCESS_MESSAGE);

    Ok(LoginSuccess {
        user: AuthenticatedUser {
            user_id,
            username: username.to_owned(),
        },
        message: message.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply(status: u16, reason: &str, body: Value) -> HttpReply {
        HttpReply {
            status,
            reason: reason.into(),
            body: serde_json::to_vec(&body).unwrap(),
        }
    }

    #[test]
    fn well_formed_success() {
        let out = interpret(&reply(
            200,
            "OK",
            json!({ "message": "Giriş başarılı", "userId": 1, "username": "admin" }),
        ))
        .unwrap();
        assert_eq!(out.user.user_id, 1);
        assert_eq!(out.user.username, "admin");
        assert_eq!(out.message, "Giriş başarılı");
    }

    #[test]
    fn success_without_message_uses_default() {
        let out = interpret(&reply(200, "OK", json!({ "userId": 7, "username": "x" }))).unwrap();
        assert_eq!(out.message, SUCCESS_MESSAGE);
    }

    #[test]
    fn string_user_id_is_malformed() {
        let err = interpret(&reply(200, "OK", json!({ "userId": "1", "username": "admin" })))
            .unwrap_err();
        assert!(matches!(err, LoginFailure::MalformedResponse(_)));
        assert_eq!(err.user_message(), MALFORMED_MESSAGE);
    }

    #[test]
    fn structural_mismatches_are_malformed() {
        for body in [
            json!({ "userId": 0, "username": "admin" }),
            json!({ "userId": -3, "username": "admin" }),
            json!({ "userId": 1.5, "username": "admin" }),
            json!({ "userId": 1, "username": "" }),
            json!({ "userId": 1 }),
            json!({ "username": "admin" }),
            json!([1, "admin"]),
            json!(null),
        ] {
            let err = interpret(&reply(200, "OK", body.clone())).unwrap_err();
            assert!(matches!(err, LoginFailure::MalformedResponse(_)), "{body}");
        }
    }

    #[test]
    fn non_json_success_is_unreadable() {
        let r = HttpReply {
            status: 200,
            reason: "OK".into(),
            body: b"<html>".to_vec(),
        };
        assert_eq!(interpret(&r).unwrap_err().user_message(), UNREADABLE_MESSAGE);
    }

    #[test]
    fn other_2xx_is_not_success() {
        let err = interpret(&reply(201, "Created", json!({ "userId": 1, "username": "a" })))
            .unwrap_err();
        assert!(matches!(err, LoginFailure::Rejected { status: 201, .. }));
    }

    #[test]
    fn rejection_uses_body_message() {
        let err = interpret(&reply(
            401,
            "Unauthorized",
            json!({ "message": "Kullanıcı adı veya şifre hatalı" }),
        ))
        .unwrap_err();
        assert_eq!(err.user_message(), "Kullanıcı adı veya şifre hatalı");
    }

    #[test]
    fn rejection_without_message_formats_status() {
        let r = HttpReply {
            status: 502,
            reason: "Bad Gateway".into(),
            body: Vec::new(),
        };
        assert_eq!(interpret(&r).unwrap_err().user_message(), "HTTP 502: Bad Gateway");

        let err = interpret(&reply(500, "", json!({ "message": "" }))).unwrap_err();
        assert_eq!(err.user_message(), "HTTP 500");
    }

    #[test]
    fn transport_message() {
        let err = LoginFailure::Transport("connection refused".into());
        assert_eq!(err.user_message(), UNREACHABLE_MESSAGE);
    }
}
