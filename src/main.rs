use std::sync::Arc;
use tokio::sync::RwLock;

use color_eyre::eyre::{Result, WrapErr};
use portfolio_maker::{
    app_state::AppState,
    get_postgres_pool,
    services::{
        data_stores::{
            PostgresPortfolioStore, PostgresUserStore,
            PostgresVerificationTokenStore,
        },
        logging_email_client::LoggingEmailClient,
    },
    utils::{
        constants::{prod, DATABASE_URL},
        tracing::init_tracing,
    },
    Application,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let pg_pool = get_postgres_pool(&DATABASE_URL)
        .await
        .wrap_err("Failed to create Postgres connection pool")?;

    sqlx::migrate!()
        .run(&pg_pool)
        .await
        .wrap_err("Failed to run database migrations")?;

    let user_store =
        Arc::new(RwLock::new(PostgresUserStore::new(pg_pool.clone())));
    let token_store = Arc::new(RwLock::new(
        PostgresVerificationTokenStore::new(pg_pool.clone()),
    ));
    let portfolio_store =
        Arc::new(RwLock::new(PostgresPortfolioStore::new(pg_pool)));
    let email_client = Arc::new(LoggingEmailClient);

    let app_state = AppState::new(
        user_store,
        token_store,
        portfolio_store,
        email_client,
    );

    let app = Application::build(app_state, prod::APP_ADDRESS)
        .await
        .map_err(|e| color_eyre::eyre::eyre!(e.to_string()))
        .wrap_err("Failed to build app")?;

    app.run().await.wrap_err("Failed to run app")
}
