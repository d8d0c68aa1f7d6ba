mod hashmap_portfolio_store;
mod hashmap_user_store;
mod hashmap_verification_token_store;
mod postgres_portfolio_store;
mod postgres_user_store;
mod postgres_verification_token_store;

pub use hashmap_portfolio_store::*;
pub use hashmap_user_store::*;
pub use hashmap_verification_token_store::*;
pub use postgres_portfolio_store::*;
pub use postgres_user_store::*;
pub use postgres_verification_token_store::*;
