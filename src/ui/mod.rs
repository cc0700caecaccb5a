//! Login client: the form state machine, the HTTP client that feeds it and a
//! plain-text renderer.

pub mod client;
pub mod form;
pub mod render;
pub mod response;
pub mod state;

pub use client::LoginClient;
pub use form::{LoginForm, Submission, SubmissionId};
pub use response::{interpret, HttpReply, LoginFailure, LoginSuccess};
pub use state::{AuthenticatedUser, UiState};
