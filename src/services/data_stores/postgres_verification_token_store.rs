use color_eyre::eyre::eyre;
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row};

use crate::domain::{
    Email, TokenStoreError, VerificationToken, VerificationTokenStore,
};

pub struct PostgresVerificationTokenStore {
    pool: PgPool,
}

impl PostgresVerificationTokenStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl VerificationTokenStore for PostgresVerificationTokenStore {
    #[tracing::instrument(
        name = "Adding verification token to PostgreSQL",
        skip_all
    )]
    async fn add_token(
        &mut self,
        token: VerificationToken,
    ) -> Result<(), TokenStoreError> {
        sqlx::query(
            r#"
            INSERT INTO verification_tokens (token, identifier, expires)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(token.token.expose_secret())
        .bind(token.identifier.as_ref().expose_secret())
        .bind(token.expires)
        .execute(&self.pool)
        .await
        .map_err(|e| TokenStoreError::UnexpectedError(eyre!(e)))?;

        Ok(())
    }

    // Delete and return in one statement, so concurrent confirmations of
    // the same token see at most one winner.
    #[tracing::instrument(
        name = "Consuming verification token in PostgreSQL",
        skip_all
    )]
    async fn take_token(
        &mut self,
        token: &Secret<String>,
    ) -> Result<VerificationToken, TokenStoreError> {
        let row = sqlx::query(
            r#"
            DELETE FROM verification_tokens WHERE token = $1
            RETURNING token, identifier, expires
            "#,
        )
        .bind(token.expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TokenStoreError::UnexpectedError(eyre!(e)))?
        .ok_or(TokenStoreError::TokenNotFound)?;

        let identifier: String = row
            .try_get("identifier")
            .map_err(|e| TokenStoreError::UnexpectedError(eyre!(e)))?;

        Ok(VerificationToken {
            token: Secret::new(
                row.try_get::<String, _>("token")
                    .map_err(|e| TokenStoreError::UnexpectedError(eyre!(e)))?,
            ),
            identifier: Email::parse(Secret::new(identifier))
                .map_err(|e| TokenStoreError::UnexpectedError(eyre!(e)))?,
            expires: row
                .try_get("expires")
                .map_err(|e| TokenStoreError::UnexpectedError(eyre!(e)))?,
        })
    }
}
