use chrono::{DateTime, Duration, Utc};
use secrecy::Secret;
use uuid::Uuid;

use super::Email;

/// How long a confirmation link stays valid after signup.
pub const TOKEN_VALIDITY_HOURS: i64 = 24;

/// Single-use opaque secret proving control of an email address.
#[derive(Debug, Clone)]
pub struct VerificationToken {
    pub token: Secret<String>,
    /// The email address this token verifies.
    pub identifier: Email,
    pub expires: DateTime<Utc>,
}

impl VerificationToken {
    pub fn issue(identifier: Email) -> Self {
        Self {
            token: Secret::new(Uuid::new_v4().to_string()),
            identifier,
            expires: Utc::now() + Duration::hours(TOKEN_VALIDITY_HOURS),
        }
    }

    /// Strict comparison: a token expiring in the same instant as the
    /// check is still valid.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires < now
    }
}
