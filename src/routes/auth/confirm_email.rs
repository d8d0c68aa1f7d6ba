use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use chrono::Utc;
use color_eyre::eyre::eyre;
use secrecy::Secret;
use serde::Deserialize;

use crate::{
    app_state::AppState,
    domain::{AuthAPIError, TokenStoreError},
    utils::constants::pages::LANDING_PATH,
};

#[derive(Deserialize)]
pub struct ConfirmEmailQueryParams {
    pub token: String,
}

/// Consumes a verification token and stamps the owning user as verified.
/// The token is taken (deleted and returned) in one step, so a replay or
/// a concurrent duplicate request sees `InvalidToken`.
#[tracing::instrument(name = "Confirm email", skip_all)]
pub async fn confirm_email(
    State(state): State<AppState>,
    query_params: Query<ConfirmEmailQueryParams>,
) -> Result<impl IntoResponse, AuthAPIError> {
    let token = Secret::new(query_params.0.token);

    let verification = state
        .token_store
        .write()
        .await
        .take_token(&token)
        .await
        .map_err(|e| match e {
            TokenStoreError::TokenNotFound => AuthAPIError::InvalidToken,
            err => AuthAPIError::UnexpectedError(eyre!(err)),
        })?;

    // Server clock only; a token expiring in this same instant is valid.
    let now = Utc::now();
    if verification.is_expired(now) {
        // The take above already removed the stale row.
        return Err(AuthAPIError::ExpiredToken);
    }

    let user_id = state
        .user_store
        .write()
        .await
        .mark_email_verified(&verification.identifier, now)
        .await
        .map_err(|e| AuthAPIError::UnexpectedError(eyre!(e)))?;

    let location = format!(
        "{}?verified=true&userId={}",
        LANDING_PATH,
        user_id.as_ref()
    );

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
