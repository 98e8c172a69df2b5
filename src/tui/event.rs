use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, interval_at, Instant, MissedTickBehavior};
use tracing::warn;

use crate::{api::AccountRecord, error::Result};

#[derive(Debug)]
pub enum Event {
    /// UI tick, drives toast expiry
    Tick,
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic refresh timer fired
    Refresh,
    /// A fetch finished
    Accounts {
        seq: u64,
        result: Result<Vec<AccountRecord>>,
    },
}

pub struct EventHandler {
    sender: mpsc::UnboundedSender<Event>,
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, refresh_interval: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        let tx = sender.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick = interval(tick_rate);
            // the first fetch is issued at startup, so the timer starts one
            // period later
            let mut refresh = interval_at(Instant::now() + refresh_interval, refresh_interval);
            refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                let event = tokio::select! {
                    _ = tick.tick() => Event::Tick,
                    _ = refresh.tick() => Event::Refresh,
                    maybe = reader.next() => match maybe {
                        Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            Event::Key(key)
                        }
                        Some(Ok(CrosstermEvent::Resize(width, height))) => Event::Resize(width, height),
                        Some(Ok(_)) => continue,
                        Some(Err(e)) => {
                            warn!("Terminal event error: {}", e);
                            continue;
                        }
                        None => break,
                    },
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { sender, receiver }
    }

    /// Handle for background tasks that report back into the loop
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}
