pub mod bank_account;
pub mod error;
