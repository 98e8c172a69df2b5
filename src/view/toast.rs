use std::time::{Duration, Instant};
use tracing::debug;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// Sink for short confirmation messages shown to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub expires_at: Instant,
}

/// Stack of toasts drawn over the dashboard, oldest first.
///
/// The region itself only exists once the first toast has been pushed.
#[derive(Debug)]
pub struct ToastStack {
    region: Option<Vec<Toast>>,
    next_id: u64,
    duration: Duration,
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ToastStack {
    pub fn new(duration: Duration) -> Self {
        Self {
            region: None,
            next_id: 0,
            duration,
        }
    }

    pub fn push_at(&mut self, message: &str, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.region.get_or_insert_with(Vec::new).push(Toast {
            id,
            message: message.to_string(),
            expires_at: now + self.duration,
        });
        id
    }

    /// Drop every toast whose time is up. Returns how many went away.
    pub fn expire(&mut self, now: Instant) -> usize {
        let Some(toasts) = self.region.as_mut() else {
            return 0;
        };
        let before = toasts.len();
        toasts.retain(|toast| toast.expires_at > now);
        let removed = before - toasts.len();
        if removed > 0 {
            debug!("Expired {} toast(s)", removed);
        }
        removed
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let Some(toasts) = self.region.as_mut() else {
            return false;
        };
        let before = toasts.len();
        toasts.retain(|toast| toast.id != id);
        before != toasts.len()
    }

    pub fn dismiss_latest(&mut self) -> bool {
        match self.toasts().last().map(|toast| toast.id) {
            Some(id) => self.dismiss(id),
            None => false,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        self.region.as_deref().unwrap_or(&[])
    }

    pub fn has_region(&self) -> bool {
        self.region.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts().is_empty()
    }
}

impl Notifier for ToastStack {
    fn notify(&mut self, message: &str) {
        self.push_at(message, Instant::now());
    }
}
