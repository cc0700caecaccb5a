//! Client-side login states.

pub const CHECKING_MESSAGE: &str = "Giriş kontrol ediliyor...";
pub const FALLBACK_FAILURE_MESSAGE: &str = "Giriş yapılamadı";

/// A user the backend vouched for in the current request cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
}

/// What the form shows. User data only exists inside `Authenticated`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Submitting,
    Authenticated {
        user: AuthenticatedUser,
        message: String,
    },
    Failed {
        message: String,
    },
}

impl UiState {
    /// Builds `Failed`, substituting the fallback when `message` is blank.
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            FALLBACK_FAILURE_MESSAGE.to_string()
        } else {
            message
        };
        Self::Failed { message }
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Submitting => Some(CHECKING_MESSAGE),
            Self::Authenticated { message, .. } | Self::Failed { message } => Some(message),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_failure_gets_fallback() {
        assert_eq!(UiState::failed("  ").message(), Some(FALLBACK_FAILURE_MESSAGE));
        assert_eq!(UiState::failed("boom").message(), Some("boom"));
    }

    #[test]
    fn only_authenticated_exposes_user() {
        assert!(UiState::Idle.user().is_none());
        assert!(UiState::Submitting.user().is_none());
        assert!(UiState::failed("x").user().is_none());
        let state = UiState::Authenticated {
            user: AuthenticatedUser {
                user_id: 1,
                username: "admin".into(),
            },
            message: "ok".into(),
        };
        assert_eq!(state.user().map(|u| u.user_id), Some(1));
    }
}
