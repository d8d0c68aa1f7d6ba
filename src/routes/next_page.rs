use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;

use crate::{
    app_state::AppState,
    domain::{AuthAPIError, UserStoreError},
    utils::{
        auth::{resolve_session, SessionState},
        constants::pages::{BUILDER_PATH, FORM_PATH, SIGN_IN_PATH},
    },
};

/// Post-auth landing logic: evaluated once per page load, no polling.
/// Unauthenticated callers land on sign-in; authenticated callers go to
/// the onboarding form until they have filled it, then to the builder.
#[tracing::instrument(name = "Next page", skip_all)]
pub async fn next_page(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthAPIError> {
    let target = match resolve_session(&jar) {
        SessionState::Unauthenticated => SIGN_IN_PATH,
        SessionState::Authenticated(user_id) => {
            let lookup = state
                .user_store
                .read()
                .await
                .get_user_by_id(&user_id)
                .await;

            match lookup {
                Ok(user) if user.has_filled_form => BUILDER_PATH,
                Ok(_) => FORM_PATH,
                // Stale session for a user that no longer exists.
                Err(UserStoreError::UserNotFound) => SIGN_IN_PATH,
                Err(err) => {
                    return Err(AuthAPIError::UnexpectedError(eyre!(err)))
                }
            }
        }
    };

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]))
}
