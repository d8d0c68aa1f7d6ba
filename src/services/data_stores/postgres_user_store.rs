use chrono::{DateTime, Utc};
use color_eyre::eyre::{eyre, Result};
use secrecy::{ExposeSecret, Secret};
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::domain::{
    verify_password_hash, Email, Password, User, UserId, UserName,
    UserPasswordHash, UserStore, UserStoreError,
};

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = "id, name, email, password_hash, email_verified, \
                            has_filled_form, subscription_status, image";

fn user_from_row(row: &PgRow) -> Result<User> {
    let password_hash: Option<String> = row.try_get("password_hash")?;

    Ok(User {
        id: UserId::new(row.try_get("id")?),
        name: UserName::parse(row.try_get("name")?)?,
        email: Email::parse(Secret::new(row.try_get("email")?))?,
        password_hash: password_hash
            .map(|hash| UserPasswordHash::parse(Secret::new(hash)))
            .transpose()?,
        email_verified: row.try_get("email_verified")?,
        has_filled_form: row.try_get("has_filled_form")?,
        subscription_status: row.try_get("subscription_status")?,
        image: row.try_get("image")?,
    })
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&mut self, user: User) -> Result<(), UserStoreError> {
        sqlx::query(
            r#"
            INSERT INTO users
                (id, name, email, password_hash, email_verified,
                 has_filled_form, subscription_status, image)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.id.as_ref())
        .bind(user.name.as_ref())
        .bind(user.email.as_ref().expose_secret())
        .bind(
            user.password_hash
                .as_ref()
                .map(|hash| hash.as_ref().expose_secret().to_owned()),
        )
        .bind(user.email_verified)
        .bind(user.has_filled_form)
        .bind(user.subscription_status.as_deref())
        .bind(user.image.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                UserStoreError::UserAlreadyExists
            }
            err => UserStoreError::UnexpectedError(eyre!(err)),
        })?;
        Ok(())
    }

    #[tracing::instrument(
        name = "Retrieving user by email from PostgreSQL",
        skip_all
    )]
    async fn get_user_by_email(
        &self,
        email: &Email,
    ) -> Result<User, UserStoreError> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_ref().expose_secret())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => UserStoreError::UserNotFound,
            err => UserStoreError::UnexpectedError(eyre!(err)),
        })?;

        user_from_row(&row).map_err(UserStoreError::UnexpectedError)
    }

    #[tracing::instrument(
        name = "Retrieving user by id from PostgreSQL",
        skip_all
    )]
    async fn get_user_by_id(
        &self,
        id: &UserId,
    ) -> Result<User, UserStoreError> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.as_ref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => UserStoreError::UserNotFound,
            err => UserStoreError::UnexpectedError(eyre!(err)),
        })?;

        user_from_row(&row).map_err(UserStoreError::UnexpectedError)
    }

    #[tracing::instrument(
        name = "Marking email verified in PostgreSQL",
        skip_all
    )]
    async fn mark_email_verified(
        &mut self,
        email: &Email,
        verified_at: DateTime<Utc>,
    ) -> Result<UserId, UserStoreError> {
        let row = sqlx::query(
            r#"
            UPDATE users SET email_verified = $2 WHERE email = $1
            RETURNING id
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .bind(verified_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(eyre!(e)))?
        .ok_or(UserStoreError::UserNotFound)?;

        let id: uuid::Uuid = row
            .try_get("id")
            .map_err(|e| UserStoreError::UnexpectedError(eyre!(e)))?;

        Ok(UserId::new(id))
    }

    #[tracing::instrument(
        name = "Setting onboarding flag in PostgreSQL",
        skip_all
    )]
    async fn set_form_filled(
        &mut self,
        id: &UserId,
    ) -> Result<(), UserStoreError> {
        let result =
            sqlx::query("UPDATE users SET has_filled_form = TRUE WHERE id = $1")
                .bind(id.as_ref())
                .execute(&self.pool)
                .await
                .map_err(|e| UserStoreError::UnexpectedError(eyre!(e)))?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }

    #[tracing::instrument(
        name = "Validating user credentials in PostgreSQL",
        skip_all
    )]
    async fn validate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let user = self.get_user_by_email(email).await?;

        // Federated accounts have no password to check against.
        let hash = user
            .password_hash
            .as_ref()
            .ok_or(UserStoreError::InvalidCredentials)?;

        verify_password_hash(
            hash.as_ref().to_owned(),
            password.as_ref().to_owned(),
        )
        .await
        .map_err(|_| UserStoreError::InvalidCredentials)?;

        Ok(user)
    }
}
