use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use color_eyre::eyre::{eyre, Context, ContextCompat, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::{AuthAPIError, Email, UserId};

use super::constants::{JWT_COOKIE_NAME, JWT_SECRET};

/// What the session gate resolves a request's ambient credentials into.
/// There is no server-side "loading" state: resolution is synchronous,
/// once per request.
#[derive(Debug, PartialEq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated(UserId),
}

// Create cookie with a new JWT auth token
#[tracing::instrument(name = "Generating auth cookie", skip_all)]
pub fn generate_auth_cookie(
    email: &Email,
    user_id: &UserId,
) -> Result<Cookie<'static>> {
    let token = generate_auth_token(email, user_id)?;
    Ok(create_auth_cookie(token))
}

// Create cookie and set the value to the passed-in token string
#[tracing::instrument(name = "Creating auth cookie", skip_all)]
fn create_auth_cookie(token: Secret<String>) -> Cookie<'static> {
    Cookie::build((JWT_COOKIE_NAME, token.expose_secret().to_owned()))
        .path("/") // apply cookie to all URLs on the server
        .http_only(true) // prevent JavaScript from accessing the cookie
        .same_site(SameSite::Lax)
        .build()
}

// This value determines how long the JWT auth token is valid for
pub const TOKEN_TTL_SECONDS: i64 = 600; // 10 minutes

// Create JWT auth token
#[tracing::instrument(name = "Generating auth token", skip_all)]
fn generate_auth_token(
    email: &Email,
    user_id: &UserId,
) -> Result<Secret<String>> {
    let delta = chrono::Duration::try_seconds(TOKEN_TTL_SECONDS)
        .wrap_err("Failed to create 10 minute time delta")?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(eyre!("failed to add to current time"))?
        .timestamp();

    let exp: usize = exp.try_into().wrap_err(format!(
        "failed to cast exp time to usize. exp time: {}",
        exp
    ))?;

    let claims = Claims {
        sub: email.as_ref().expose_secret().to_owned(),
        id: user_id.as_ref().to_string(),
        exp,
    };

    create_token(&claims)
}

// Check if JWT auth token is valid by decoding it using the JWT secret
#[tracing::instrument(name = "Validating auth token", skip_all)]
pub fn validate_token(token: &Secret<String>) -> Result<Claims> {
    decode::<Claims>(
        token.expose_secret(),
        &DecodingKey::from_secret(JWT_SECRET.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .wrap_err("failed to decode token")
}

// Create JWT auth token by encoding claims using the JWT secret
#[tracing::instrument(name = "Creating auth token", skip_all)]
fn create_token(claims: &Claims) -> Result<Secret<String>> {
    let token_string = encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.expose_secret().as_bytes()),
    )
    .wrap_err("failed to create token")?;

    Ok(Secret::new(token_string))
}

/// Session gate for pages: resolves the cookie jar into a session state,
/// never an error.
#[tracing::instrument(name = "Resolving session", skip_all)]
pub fn resolve_session(jar: &CookieJar) -> SessionState {
    match require_authenticated(jar) {
        Ok(user_id) => SessionState::Authenticated(user_id),
        Err(_) => SessionState::Unauthenticated,
    }
}

/// Session gate for protected endpoints: the caller's identity, or
/// `Unauthorized` with no retry.
#[tracing::instrument(name = "Requiring authenticated session", skip_all)]
pub fn require_authenticated(jar: &CookieJar) -> Result<UserId, AuthAPIError> {
    let cookie = jar
        .get(JWT_COOKIE_NAME)
        .ok_or(AuthAPIError::Unauthorized)?;

    let token = Secret::new(cookie.value().to_string());
    let claims =
        validate_token(&token).map_err(|_| AuthAPIError::Unauthorized)?;

    UserId::parse(&claims.id).map_err(|_| AuthAPIError::Unauthorized)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub id: String,
    pub exp: usize,
}
