use tracing::debug;

use crate::auth::dto::LoginRequest;
use crate::ui::client::LoginClient;
use crate::ui::response::{interpret, LoginFailure, LoginSuccess};
use crate::ui::state::UiState;

/// Identifies one submission; only the latest one may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionId(u64);

#[derive(Debug, Clone)]
pub struct Submission {
    pub id: SubmissionId,
    pub request: LoginRequest,
}

/// Login form: input fields plus the `Idle -> Submitting ->
/// Authenticated | Failed` machine.
#[derive(Debug, Default)]
pub struct LoginForm {
    username: String,
    password: String,
    state: UiState,
    pending: Option<SubmissionId>,
    issued: u64,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn message(&self) -> Option<&str> {
        self.state.message()
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    /// Enters `Submitting` from any state, dropping prior user data and
    /// message before the request exists. Any earlier submission goes stale.
    pub fn begin_submit(&mut self) -> Submission {
        self.issued += 1;
        let id = SubmissionId(self.issued);
        self.pending = Some(id);
        self.state = UiState::Submitting;
        debug!(submission = self.issued, "login submitted");
        Submission {
            id,
            request: LoginRequest {
                username: self.username.clone(),
                password: self.password.clone(),
            },
        }
    }

    /// Applies the outcome of submission `id`. Returns `false` and leaves the
    /// state untouched when `id` is not the pending submission.
    pub fn complete(&mut self, id: SubmissionId, outcome: Result<LoginSuccess, LoginFailure>) -> bool {
        if self.pending != Some(id) || !self.state.is_submitting() {
            debug!(submission = id.0, "stale login completion ignored");
            return false;
        }
        self.pending = None;
        self.state = match outcome {
            Ok(LoginSuccess { user, message }) => {
                debug!(user_id = user.user_id, "login succeeded");
                UiState::Authenticated { user, message }
            }
            Err(failure) => {
                debug!(error = %failure, "login failed");
                UiState::failed(failure.user_message())
            }
        };
        true
    }

    /// Clears user data, message and inputs.
    pub fn logout(&mut self) {
        self.username.clear();
        self.password.clear();
        self.pending = None;
        self.state = UiState::Idle;
    }

    /// Runs one full request cycle against the backend.
    pub async fn submit(&mut self, client: &LoginClient) -> &UiState {
        let submission = self.begin_submit();
        let outcome = match client.send(&submission.request).await {
            Ok(reply) => interpret(&reply),
            Err(failure) => Err(failure),
        };
        self.complete(submission.id, outcome);
        &self.state
    }
}
