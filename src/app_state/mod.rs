use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{
    EmailClient, PortfolioStore, UserStore, VerificationTokenStore,
};

pub type UserStoreType = Arc<RwLock<dyn UserStore + Send + Sync>>;
pub type VerificationTokenStoreType =
    Arc<RwLock<dyn VerificationTokenStore + Send + Sync>>;
pub type PortfolioStoreType = Arc<RwLock<dyn PortfolioStore + Send + Sync>>;
pub type EmailClientType = Arc<dyn EmailClient + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub token_store: VerificationTokenStoreType,
    pub portfolio_store: PortfolioStoreType,
    pub email_client: EmailClientType,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        token_store: VerificationTokenStoreType,
        portfolio_store: PortfolioStoreType,
        email_client: EmailClientType,
    ) -> Self {
        Self {
            user_store,
            token_store,
            portfolio_store,
            email_client,
        }
    }
}
