use anyhow::Context;
use tracing::{debug, warn};

use crate::auth::dto::LoginRequest;
use crate::config::ClientConfig;
use crate::ui::response::{HttpReply, LoginFailure};

/// HTTP client for the login endpoint. Every request is bounded by the
/// configured timeout; a timeout is reported as a transport failure.
#[derive(Clone)]
pub struct LoginClient {
    http: reqwest::Client,
    login_url: String,
}

impl LoginClient {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("build http client")?;
        Ok(Self {
            http,
            login_url: format!("{}/api/auth/login", config.api_url.trim_end_matches('/')),
        })
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    pub async fn send(&self, request: &LoginRequest) -> Result<HttpReply, LoginFailure> {
        debug!(url = %self.login_url, "sending login request");
        let res = self
            .http
            .post(&self.login_url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        let status = res.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let body = res.bytes().await.map_err(transport)?;
        debug!(%status, bytes = body.len(), "login response received");

        Ok(HttpReply {
            status: status.as_u16(),
            reason,
            body: body.to_vec(),
        })
    }
}

fn transport(e: reqwest::Error) -> LoginFailure {
    warn!(error = %e, timeout = e.is_timeout(), "login request failed");
    LoginFailure::Transport(e.to_string())
}
