use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    app_state::AppState,
    domain::{AuthAPIError, UserId, UserStoreError, ValidationError},
};

#[derive(Deserialize)]
pub struct UserStatusQueryParams {
    #[serde(rename = "userId")]
    user_id: String,
}

/// Onboarding status lookup used by the client after email confirmation.
#[tracing::instrument(name = "User status", skip_all)]
pub async fn user_status(
    State(state): State<AppState>,
    query_params: Query<UserStatusQueryParams>,
) -> Result<impl IntoResponse, AuthAPIError> {
    let user_id = UserId::parse(&query_params.user_id)
        .map_err(|_| ValidationError::new("Invalid user ID".to_string()))?;

    let user = state
        .user_store
        .read()
        .await
        .get_user_by_id(&user_id)
        .await
        .map_err(|e| match e {
            UserStoreError::UserNotFound => AuthAPIError::UserNotFound,
            err => AuthAPIError::UnexpectedError(eyre!(err)),
        })?;

    Ok((
        StatusCode::OK,
        Json(UserStatusResponse {
            has_filled_form: user.has_filled_form,
        }),
    ))
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UserStatusResponse {
    #[serde(rename = "hasFilledForm")]
    pub has_filled_form: bool,
}
