use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::auth::dto::MessageBody;

pub const UNAVAILABLE_MESSAGE: &str = "Servis şu anda kullanılamıyor, lütfen daha sonra tekrar deneyin";

/// Failures of the login endpoint other than a credential mismatch.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The credential store could not answer. The cause stays in the logs.
    #[error("credential store unavailable: {0:#}")]
    Infrastructure(#[from] anyhow::Error),

    /// Body the JSON extractor refused; `status` is the extractor's own
    /// (400, 413, 415, 422).
    #[error("malformed request ({status}): {message}")]
    MalformedRequest { status: StatusCode, message: String },
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Infrastructure(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::MalformedRequest { status, .. } => *status,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Infrastructure(_) => UNAVAILABLE_MESSAGE.to_string(),
            Self::MalformedRequest { message, .. } => message.clone(),
        };
        (self.status(), Json(MessageBody { message })).into_response()
    }
}
