use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::domain::{
    verify_password_hash, Email, Password, User, UserId, UserStore,
    UserStoreError,
};

#[derive(Default)]
pub struct HashmapUserStore {
    users: HashMap<Email, User>,
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, user: User) -> Result<(), UserStoreError> {
        let email = &user.email;

        if self.users.contains_key(email) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        self.users.insert(email.clone(), user);
        Ok(())
    }

    async fn get_user_by_email(
        &self,
        email: &Email,
    ) -> Result<User, UserStoreError> {
        match self.users.get(email) {
            Some(user) => Ok(user.clone()),
            None => Err(UserStoreError::UserNotFound),
        }
    }

    async fn get_user_by_id(
        &self,
        id: &UserId,
    ) -> Result<User, UserStoreError> {
        self.users
            .values()
            .find(|user| &user.id == id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn mark_email_verified(
        &mut self,
        email: &Email,
        verified_at: DateTime<Utc>,
    ) -> Result<UserId, UserStoreError> {
        let user = self
            .users
            .get_mut(email)
            .ok_or(UserStoreError::UserNotFound)?;

        user.email_verified = Some(verified_at);
        Ok(user.id.clone())
    }

    async fn set_form_filled(
        &mut self,
        id: &UserId,
    ) -> Result<(), UserStoreError> {
        let user = self
            .users
            .values_mut()
            .find(|user| &user.id == id)
            .ok_or(UserStoreError::UserNotFound)?;

        user.has_filled_form = true;
        Ok(())
    }

    async fn validate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let user = self.get_user_by_email(email).await?;

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
