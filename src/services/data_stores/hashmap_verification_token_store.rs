use secrecy::{ExposeSecret, Secret};
use std::collections::HashMap;

use crate::domain::{
    TokenStoreError, VerificationToken, VerificationTokenStore,
};

#[derive(Default)]
pub struct HashmapVerificationTokenStore {
    tokens: HashMap<String, VerificationToken>,
}

#[async_trait::async_trait]
impl VerificationTokenStore for HashmapVerificationTokenStore {
    async fn add_token(
        &mut self,
        token: VerificationToken,
    ) -> Result<(), TokenStoreError> {
        self.tokens
            .insert(token.token.expose_secret().to_owned(), token);
        Ok(())
    }

    async fn take_token(
        &mut self,
        token: &Secret<String>,
    ) -> Result<VerificationToken, TokenStoreError> {
        self.tokens
            .remove(token.expose_secret())
            .ok_or(TokenStoreError::TokenNotFound)
    }
}
