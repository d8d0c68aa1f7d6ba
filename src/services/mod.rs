pub mod data_stores;
pub mod logging_email_client;
