use super::UserId;

/// One-to-one with [`super::User`], created on first builder save.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
}

impl Portfolio {
    pub fn new(user_id: UserId, title: String, description: String) -> Self {
        Self {
            user_id,
            title,
            description,
        }
    }
}
