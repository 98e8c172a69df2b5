use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use crate::{
    api::AccountsClient,
    config::Config,
    error::Result,
    tui::event::Event,
    view::{StatusView, SystemClipboard, TimestampFormatter, ToastStack},
};

pub struct App {
    // UI State
    pub should_quit: bool,
    pub show_help: bool,
    pub selected_index: usize,

    // Data
    pub view: StatusView<ToastStack, SystemClipboard>,
    pub endpoint: String,
    pub refresh_interval_secs: u64,

    // Backend
    client: AccountsClient,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let client = AccountsClient::new(&config.api.base_url, config.request_timeout())?;
        let formatter = TimestampFormatter::new(&config.display.timestamp_format)?;
        let view = StatusView::new(
            ToastStack::new(config.toast_duration()),
            SystemClipboard::new(),
            formatter,
            config.display.key_preview_chars,
        );

        Ok(Self {
            should_quit: false,
            show_help: false,
            selected_index: 0,
            endpoint: client.endpoint().to_string(),
            refresh_interval_secs: config.refresh.interval_secs,
            view,
            client,
        })
    }

    /// Start a fetch in the background. Its result comes back as
    /// `Event::Accounts`.
    pub fn request_refresh(&mut self, sender: &UnboundedSender<Event>) {
        let seq = self.view.begin_refresh();
        let client = self.client.clone();
        let sender = sender.clone();

        tokio::spawn(async move {
            let result = client.fetch_accounts().await;
            // the loop is gone when the app is shutting down
            let _ = sender.send(Event::Accounts { seq, result });
        });
    }

    pub fn handle_event(&mut self, event: Event, sender: &UnboundedSender<Event>) {
        match event {
            Event::Tick => self.on_tick(Instant::now()),
            Event::Key(key) => {
                if self.handle_key(key) {
                    self.request_refresh(sender);
                }
            }
            Event::Resize(width, height) => debug!("Terminal resized to {}x{}", width, height),
            Event::Refresh => {
                debug!("Auto-refresh");
                self.request_refresh(sender);
            }
            Event::Accounts { seq, result } => {
                if self.view.apply_fetch(seq, result) {
                    self.clamp_selection();
                }
            }
        }
    }

    /// Returns true when the key asks for a refresh.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.show_help {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                }
                KeyCode::Char('h') | KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => {
                info!("Manual refresh");
                return true;
            }
            KeyCode::Down | KeyCode::Char('j') => self.next_item(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_item(),
            KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => {
                self.copy_selected();
            }
            KeyCode::Char('x') => {
                self.view.notifier_mut().dismiss_latest();
            }
            KeyCode::Char('h') | KeyCode::Char('?') => self.show_help = true,
            _ => {}
        }
        false
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.view.notifier_mut().expire(now);
    }

    pub fn next_item(&mut self) {
        let len = self.view.rows().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    pub fn previous_item(&mut self) {
        let len = self.view.rows().len();
        if len > 0 {
            if self.selected_index == 0 {
                self.selected_index = len - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }

    pub fn copy_selected(&mut self) -> bool {
        self.view.copy_row_key(self.selected_index)
    }

    fn clamp_selection(&mut self) {
        let len = self.view.rows().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }
}
