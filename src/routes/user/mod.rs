mod status;
mod submit_form;
mod subscription_status;
mod summary;

pub use status::*;
pub use submit_form::*;
pub use subscription_status::*;
pub use summary::*;
