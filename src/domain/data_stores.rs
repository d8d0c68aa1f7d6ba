use chrono::{DateTime, Utc};
use color_eyre::eyre::Report;
use secrecy::Secret;
use thiserror::Error;

use super::{
    Email, Password, Portfolio, User, UserId, VerificationToken,
};

#[async_trait::async_trait]
pub trait UserStore {
    async fn add_user(&mut self, user: User) -> Result<(), UserStoreError>;
    async fn get_user_by_email(
        &self,
        email: &Email,
    ) -> Result<User, UserStoreError>;
    async fn get_user_by_id(
        &self,
        id: &UserId,
    ) -> Result<User, UserStoreError>;
    /// Stamps `email_verified` for the user owning `email` and returns
    /// their id.
    async fn mark_email_verified(
        &mut self,
        email: &Email,
        verified_at: DateTime<Utc>,
    ) -> Result<UserId, UserStoreError>;
    async fn set_form_filled(
        &mut self,
        id: &UserId,
    ) -> Result<(), UserStoreError>;
    async fn validate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError>;
}

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::InvalidCredentials, Self::InvalidCredentials)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait::async_trait]
pub trait VerificationTokenStore {
    async fn add_token(
        &mut self,
        token: VerificationToken,
    ) -> Result<(), TokenStoreError>;
    /// Removes and returns the token in a single step, so two concurrent
    /// confirmations of the same token cannot both succeed.
    async fn take_token(
        &mut self,
        token: &Secret<String>,
    ) -> Result<VerificationToken, TokenStoreError>;
}

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("Token not found")]
    TokenNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for TokenStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::TokenNotFound, Self::TokenNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait::async_trait]
pub trait PortfolioStore {
    /// Creates the user's portfolio on first save, overwrites it after.
    async fn save_portfolio(
        &mut self,
        portfolio: Portfolio,
    ) -> Result<(), PortfolioStoreError>;
    async fn get_portfolio(
        &self,
        user_id: &UserId,
    ) -> Result<Portfolio, PortfolioStoreError>;
}

#[derive(Debug, Error)]
pub enum PortfolioStoreError {
    #[error("Portfolio not found")]
    PortfolioNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for PortfolioStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::PortfolioNotFound, Self::PortfolioNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
