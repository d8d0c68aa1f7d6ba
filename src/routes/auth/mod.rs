mod confirm_email;
mod login;
mod logout;
mod signup;

pub use confirm_email::*;
pub use login::*;
pub use logout::*;
pub use signup::*;
