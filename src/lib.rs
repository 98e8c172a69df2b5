pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tui;
pub mod utils;
pub mod view;

pub use config::Config;
pub use error::{Result, StatusError};
