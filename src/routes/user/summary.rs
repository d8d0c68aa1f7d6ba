use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use color_eyre::eyre::eyre;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::{
    app_state::AppState,
    domain::{AuthAPIError, UserId, UserStoreError, ValidationError},
};

#[derive(Deserialize)]
pub struct UserSummaryQueryParams {
    #[serde(rename = "userId")]
    user_id: String,
}

/// Reduced public projection of a user: id, name, email, avatar.
#[tracing::instrument(name = "User summary", skip_all)]
pub async fn user_summary(
    State(state): State<AppState>,
    query_params: Query<UserSummaryQueryParams>,
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
        Json(UserSummaryResponse {
            id: user.id.as_ref().to_string(),
            name: user.name.as_ref().to_owned(),
            email: user.email.as_ref().expose_secret().to_owned(),
            image: user.image,
        }),
    ))
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UserSummaryResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}
