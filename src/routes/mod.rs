pub mod auth;
mod next_page;
pub mod portfolio;
pub mod user;

pub use next_page::*;
