use axum::{extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;

use crate::{
    app_state::AppState, domain::AuthAPIError,
    utils::auth::require_authenticated,
};

/// Marks the onboarding form as filled for the session user. The form
/// contents themselves live client-side; only the flag is recorded.
#[tracing::instrument(name = "Submit form", skip_all)]
pub async fn submit_form(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthAPIError> {
    let user_id = require_authenticated(&jar)?;

    state
        .user_store
        .write()
        .await
        .set_form_filled(&user_id)
        .await
        .map_err(|e| AuthAPIError::UnexpectedError(eyre!(e)))?;

    Ok(StatusCode::OK)
}
