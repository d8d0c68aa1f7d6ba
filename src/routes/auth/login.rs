use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::{
    app_state::AppState,
    domain::{
        AuthAPIError, Email, Password, UserStoreError, ValidationError,
    },
    utils::auth::generate_auth_cookie,
};

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(StatusCode, CookieJar, Json<LoginResponse>), AuthAPIError> {
    let email = Email::parse(Secret::new(request.email)).map_err(|_| {
        ValidationError::new("Invalid email address".to_string())
    })?;
    let password = Password::parse(request.password)?;

    let user = state
        .user_store
        .read()
        .await
        .validate_user(&email, &password)
        .await
        .map_err(|e| match e {
            UserStoreError::InvalidCredentials
            | UserStoreError::UserNotFound => {
                AuthAPIError::IncorrectCredentials
            }
            err => AuthAPIError::UnexpectedError(eyre!(err)),
        })?;

    let auth_cookie = generate_auth_cookie(&user.email, &user.id)
        .map_err(AuthAPIError::UnexpectedError)?;

    let updated_jar = jar.add(auth_cookie);

    Ok((
        StatusCode::OK,
        updated_jar,
        Json(LoginResponse {
            user_id: user.id.as_ref().to_string(),
        }),
    ))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
}
