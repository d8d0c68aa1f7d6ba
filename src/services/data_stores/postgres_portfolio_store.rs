use color_eyre::eyre::eyre;
use sqlx::{PgPool, Row};

use crate::domain::{
    Portfolio, PortfolioStore, PortfolioStoreError, UserId,
};

pub struct PostgresPortfolioStore {
    pool: PgPool,
}

impl PostgresPortfolioStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PortfolioStore for PostgresPortfolioStore {
    #[tracing::instrument(name = "Saving portfolio to PostgreSQL", skip_all)]
    async fn save_portfolio(
        &mut self,
        portfolio: Portfolio,
    ) -> Result<(), PortfolioStoreError> {
        sqlx::query(
            r#"
            INSERT INTO portfolios (user_id, title, description)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id)
            DO UPDATE SET title = $2, description = $3
            "#,
        )
        .bind(portfolio.user_id.as_ref())
        .bind(&portfolio.title)
        .bind(&portfolio.description)
        .execute(&self.pool)
        .await
        .map_err(|e| PortfolioStoreError::UnexpectedError(eyre!(e)))?;

        Ok(())
    }

    #[tracing::instrument(
        name = "Retrieving portfolio from PostgreSQL",
        skip_all
    )]
    async fn get_portfolio(
        &self,
        user_id: &UserId,
    ) -> Result<Portfolio, PortfolioStoreError> {
        let row = sqlx::query(
            "SELECT user_id, title, description FROM portfolios \
             WHERE user_id = $1",
        )
        .bind(user_id.as_ref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => PortfolioStoreError::PortfolioNotFound,
            err => PortfolioStoreError::UnexpectedError(eyre!(err)),
        })?;

        Ok(Portfolio {
            user_id: UserId::new(
                row.try_get("user_id").map_err(|e| {
                    PortfolioStoreError::UnexpectedError(eyre!(e))
                })?,
            ),
            title: row
                .try_get("title")
                .map_err(|e| PortfolioStoreError::UnexpectedError(eyre!(e)))?,
            description: row
                .try_get("description")
                .map_err(|e| PortfolioStoreError::UnexpectedError(eyre!(e)))?,
        })
    }
}
