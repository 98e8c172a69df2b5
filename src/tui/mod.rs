pub mod app;
pub mod components;
pub mod event;
pub mod terminal;
pub mod theme;
pub mod ui;

pub use app::App;
pub use ui::run_tui;
