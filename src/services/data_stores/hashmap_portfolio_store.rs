use std::collections::HashMap;

use crate::domain::{
    Portfolio, PortfolioStore, PortfolioStoreError, UserId,
};

#[derive(Default)]
pub struct HashmapPortfolioStore {
    portfolios: HashMap<UserId, Portfolio>,
}

#[async_trait::async_trait]
impl PortfolioStore for HashmapPortfolioStore {
    async fn save_portfolio(
        &mut self,
        portfolio: Portfolio,
    ) -> Result<(), PortfolioStoreError> {
        self.portfolios
            .insert(portfolio.user_id.clone(), portfolio);
        Ok(())
    }

    async fn get_portfolio(
        &self,
        user_id: &UserId,
    ) -> Result<Portfolio, PortfolioStoreError> {
        self.portfolios
            .get(user_id)
            .cloned()
            .ok_or(PortfolioStoreError::PortfolioNotFound)
    }
}
