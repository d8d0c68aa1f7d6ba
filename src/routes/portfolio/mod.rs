mod get_portfolio;
mod save_portfolio;

pub use get_portfolio::*;
pub use save_portfolio::*;
