use chrono::{DateTime, Utc};

use super::{Email, UserId, UserName, UserPasswordHash};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: Email,
    /// None for federated logins, which never set a password.
    pub password_hash: Option<UserPasswordHash>,
    /// None until the verification token tied to this email is consumed.
    pub email_verified: Option<DateTime<Utc>>,
    pub has_filled_form: bool,
    /// Opaque billing status, owned by the billing collaborator.
    pub subscription_status: Option<String>,
    pub image: Option<String>,
}

impl User {
    pub fn new(
        name: UserName,
        email: Email,
        password_hash: Option<UserPasswordHash>,
    ) -> Self {
        Self {
            id: UserId::default(),
            name,
            email,
            password_hash,
            email_verified: None,
            has_filled_form: false,
            subscription_status: None,
            image: None,
        }
    }
}
