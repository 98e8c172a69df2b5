//! Presentation model for the account status table.
//!
//! Nothing in here touches the terminal; `tui` draws what these types
//! describe.

pub mod badge;
pub mod clipboard;
pub mod refresh;
pub mod table;
pub mod timestamp;
pub mod toast;

pub use badge::{status_badge, Badge, BadgeTone, Icon};
pub use clipboard::{ClipboardSink, SystemClipboard};
pub use refresh::RefreshSequence;
pub use table::{ApiKeyCell, StatusView, TableBody, ViewRow};
pub use timestamp::TimestampFormatter;
pub use toast::{Notifier, Toast, ToastStack};
