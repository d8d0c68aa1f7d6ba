mod data_stores;
mod email;
mod email_client;
mod error;
mod password;
mod portfolio;
mod user;
mod user_id;
mod user_name;
mod user_password_hash;
mod verification_token;

pub use data_stores::*;
pub use email::*;
pub use email_client::*;
pub use error::*;
pub use password::*;
pub use portfolio::*;
pub use user::*;
pub use user_id::*;
pub use user_name::*;
pub use user_password_hash::*;
pub use verification_token::*;
