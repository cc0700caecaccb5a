use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::{instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResult},
        error::AuthError,
        services,
    },
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<LoginResult, AuthError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(error = %rejection, status = %rejection.status(), "unreadable login body");
        AuthError::MalformedRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    })?;

    services::login(state.store.as_ref(), &payload).await
}
