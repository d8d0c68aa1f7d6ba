use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    app_state::AppState, domain::AuthAPIError,
    utils::auth::require_authenticated,
};

/// The opaque billing status stored on the user row. Lifecycle of the
/// string belongs to the billing collaborator.
#[tracing::instrument(name = "Subscription status", skip_all)]
pub async fn subscription_status(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthAPIError> {
    let user_id = require_authenticated(&jar)?;

    let user = state
        .user_store
        .read()
        .await
        .get_user_by_id(&user_id)
        .await
        .map_err(|e| AuthAPIError::UnexpectedError(eyre!(e)))?;

    Ok((
        StatusCode::OK,
        Json(SubscriptionStatusResponse {
            subscription_status: user.subscription_status,
        }),
    ))
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SubscriptionStatusResponse {
    #[serde(rename = "subscriptionStatus")]
    pub subscription_status: Option<String>,
}
