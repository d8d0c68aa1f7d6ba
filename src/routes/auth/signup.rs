use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use color_eyre::eyre::eyre;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::{
    app_state::AppState,
    domain::{
        AuthAPIError, Email, Password, User, UserName, UserPasswordHash,
        UserStoreError, ValidationError, VerificationToken,
    },
    utils::constants::APP_BASE_URL,
};

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<impl IntoResponse, AuthAPIError> {
    let name = UserName::parse(request.name)?;
    let email = Email::parse(Secret::new(request.email)).map_err(|_| {
        ValidationError::new("Invalid email address".to_string())
    })?;
    let password = Password::parse(request.password)?;

    let password_hash = UserPasswordHash::from_password(&password)
        .await
        .map_err(AuthAPIError::UnexpectedError)?;

    let user = User::new(name, email.clone(), Some(password_hash));
    let user_id = user.id.clone();

    {
        let mut user_store = state.user_store.write().await;
        user_store.add_user(user).await.map_err(|e| match e {
            UserStoreError::UserAlreadyExists => {
                AuthAPIError::UserAlreadyExists
            }
            err => AuthAPIError::UnexpectedError(eyre!(err)),
        })?;
    }

    let token = VerificationToken::issue(email.clone());
    let confirmation_link = format!(
        "{}/auth/confirm-email?token={}",
        *APP_BASE_URL,
        token.token.expose_secret()
    );

    state
        .token_store
        .write()
        .await
        .add_token(token)
        .await
        .map_err(|e| AuthAPIError::UnexpectedError(eyre!(e)))?;

    // Stub boundary: the shipping client only logs this link.
    state
        .email_client
        .send_confirmation(&email, &confirmation_link)
        .await
        .map_err(AuthAPIError::UnexpectedError)?;

    let response = Json(SignupResponse {
        message: "User created successfully".to_string(),
        user_id: user_id.as_ref().to_string(),
        confirmation_link,
    });

    Ok((StatusCode::CREATED, response))
}

#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: Secret<String>,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct SignupResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "confirmationLink")]
    pub confirmation_link: String,
}
