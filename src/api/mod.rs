pub mod client;
pub mod types;

pub use client::AccountsClient;
pub use types::{AccountRecord, AccountStatus};
