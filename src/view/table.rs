use chrono::{DateTime, Local};
use tracing::{debug, error, info, warn};

use crate::{
    api::{AccountRecord, AccountsClient},
    error::Result,
    utils::truncate_display,
    view::{
        badge::{status_badge, Badge, Icon},
        clipboard::ClipboardSink,
        refresh::RefreshSequence,
        timestamp::TimestampFormatter,
        toast::Notifier,
    },
};

pub const COLUMNS: [&str; 4] = ["Email", "Status", "API Key", "Created"];
pub const FETCH_ERROR_MESSAGE: &str = "Error loading account data. Please try again.";
pub const FETCH_ERROR_ICON: Icon = Icon::AlertTriangle;
pub const NO_ACCOUNTS_MESSAGE: &str = "No accounts found";
pub const KEY_NOT_AVAILABLE: &str = "Not available";
pub const COPIED_MESSAGE: &str = "API key copied to clipboard!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyCell {
    Available { full: String, masked: String },
    NotAvailable,
}

impl ApiKeyCell {
    pub fn new(key: Option<&str>, preview_chars: usize) -> Self {
        match key {
            Some(key) => ApiKeyCell::Available {
                full: key.to_string(),
                masked: truncate_display(key, preview_chars),
            },
            None => ApiKeyCell::NotAvailable,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            ApiKeyCell::Available { masked, .. } => masked,
            ApiKeyCell::NotAvailable => KEY_NOT_AVAILABLE,
        }
    }

    /// Value handed to the clipboard. `None` means the cell has no copy
    /// control.
    pub fn copy_value(&self) -> Option<&str> {
        match self {
            ApiKeyCell::Available { full, .. } => Some(full),
            ApiKeyCell::NotAvailable => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    pub gmail: String,
    pub badge: Badge,
    pub api_key: ApiKeyCell,
    pub created: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Nothing has been fetched yet
    Loading,
    Rows(Vec<ViewRow>),
    /// One row across every column
    Error { message: String, icon: Icon },
}

impl TableBody {
    pub fn rows(&self) -> &[ViewRow] {
        match self {
            TableBody::Rows(rows) => rows,
            _ => &[],
        }
    }

    /// Rows the table shows, counting the error row.
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Loading => 0,
            TableBody::Rows(rows) => rows.len(),
            TableBody::Error { .. } => 1,
        }
    }

    pub fn colspan(&self) -> usize {
        COLUMNS.len()
    }
}

/// The account status dashboard, minus the drawing.
///
/// Notifications and clipboard access are injected so the view can be
/// driven without a terminal.
pub struct StatusView<N: Notifier, C: ClipboardSink> {
    body: TableBody,
    placeholder_visible: bool,
    formatter: TimestampFormatter,
    key_preview_chars: usize,
    sequence: RefreshSequence,
    last_refresh: Option<DateTime<Local>>,
    notifier: N,
    clipboard: C,
}

impl<N: Notifier, C: ClipboardSink> StatusView<N, C> {
    pub fn new(
        notifier: N,
        clipboard: C,
        formatter: TimestampFormatter,
        key_preview_chars: usize,
    ) -> Self {
        Self {
            body: TableBody::Loading,
            placeholder_visible: false,
            formatter,
            key_preview_chars,
            sequence: RefreshSequence::new(),
            last_refresh: None,
            notifier,
            clipboard,
        }
    }

    pub fn body(&self) -> &TableBody {
        &self.body
    }

    pub fn rows(&self) -> &[ViewRow] {
        self.body.rows()
    }

    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }

    pub fn last_refresh(&self) -> Option<DateTime<Local>> {
        self.last_refresh
    }

    pub fn is_refreshing(&self) -> bool {
        self.sequence.in_flight()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Fetch and render in one go.
    pub async fn load_account_data(&mut self, client: &AccountsClient) -> bool {
        let seq = self.begin_refresh();
        let result = client.fetch_accounts().await;
        self.apply_fetch(seq, result)
    }

    /// Register a new fetch. Its ticket must be passed to `apply_fetch`.
    pub fn begin_refresh(&mut self) -> u64 {
        let seq = self.sequence.begin();
        debug!("Refresh #{} started", seq);
        seq
    }

    /// Apply the outcome of fetch `seq`. Returns false when the result was
    /// superseded by a newer fetch and dropped.
    pub fn apply_fetch(&mut self, seq: u64, result: Result<Vec<AccountRecord>>) -> bool {
        if !self.sequence.accept(seq) {
            debug!(
                "Dropping result of refresh #{} (latest is #{})",
                seq,
                self.sequence.latest()
            );
            return false;
        }

        match result {
            Ok(accounts) => {
                info!("Loaded {} account(s)", accounts.len());
                self.render(&accounts);
            }
            Err(e) if e.is_fetch_failure() => {
                error!("Error fetching account data: {}", e);
                self.render_error();
            }
            Err(e) => {
                error!("Unreadable account data: {}", e);
                self.render_error();
            }
        }
        true
    }

    pub fn render(&mut self, accounts: &[AccountRecord]) {
        self.last_refresh = Some(Local::now());

        if accounts.is_empty() {
            self.body = TableBody::Rows(Vec::new());
            self.placeholder_visible = true;
            return;
        }

        self.placeholder_visible = false;
        let rows = accounts
            .iter()
            .map(|account| ViewRow {
                gmail: account.gmail.clone(),
                badge: status_badge(&account.status),
                api_key: ApiKeyCell::new(account.api_key(), self.key_preview_chars),
                created: self.formatter.format(account.created_at()),
            })
            .collect();
        self.body = TableBody::Rows(rows);
    }

    /// Replace the table with the fetch error row. The empty-state
    /// placeholder is left as it was.
    pub fn render_error(&mut self) {
        self.body = TableBody::Error {
            message: FETCH_ERROR_MESSAGE.to_string(),
            icon: FETCH_ERROR_ICON,
        };
    }

    /// Copy to the clipboard and confirm with a toast. Failures are only
    /// logged.
    pub fn copy_to_clipboard(&mut self, text: &str) -> bool {
        match self.clipboard.set_text(text) {
            Ok(()) => {
                self.notifier.notify(COPIED_MESSAGE);
                true
            }
            Err(e) => {
                error!("Could not copy text: {}", e);
                false
            }
        }
    }

    /// Copy the key of row `index`, if that row has one.
    pub fn copy_row_key(&mut self, index: usize) -> bool {
        let key = match self.rows().get(index).and_then(|row| row.api_key.copy_value()) {
            Some(key) => key.to_string(),
            None => {
                warn!("Row {} has no API key to copy", index);
                return false;
            }
        };
        self.copy_to_clipboard(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::AccountStatus,
        error::StatusError,
        view::{
            badge::BadgeTone,
            clipboard::MockClipboardSink,
            toast::{MockNotifier, ToastStack},
        },
    };
    use mockall::predicate::eq;

    fn record(gmail: &str, status: &str, key: Option<&str>, created: Option<&str>) -> AccountRecord {
        AccountRecord {
            gmail: gmail.to_string(),
            status: AccountStatus::from(status),
            api_key: key.map(str::to_string),
            created_at: created.map(str::to_string),
        }
    }

    fn view() -> StatusView<ToastStack, MockClipboardSink> {
        StatusView::new(
            ToastStack::default(),
            MockClipboardSink::new(),
            TimestampFormatter::default(),
            12,
        )
    }

    #[test]
    fn test_starts_loading() {
        let view = view();
        assert_eq!(view.body(), &TableBody::Loading);
        assert!(!view.placeholder_visible());
        assert!(view.last_refresh().is_none());
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let mut view = view();
        view.render(&[]);

        assert_eq!(view.body().row_count(), 0);
        assert!(view.placeholder_visible());
        assert!(view.last_refresh().is_some());
    }

    #[test]
    fn test_rows_follow_input_order() {
        let mut view = view();
        let accounts = vec![
            record("z@x.com", "pending", None, None),
            record("a@x.com", "error", None, None),
            record("m@x.com", "queued", None, None),
        ];
        view.render(&accounts);

        assert!(!view.placeholder_visible());
        let emails: Vec<_> = view.rows().iter().map(|r| r.gmail.as_str()).collect();
        assert_eq!(emails, vec!["z@x.com", "a@x.com", "m@x.com"]);
        assert_eq!(view.rows()[2].badge.icon, Icon::HelpCircle);
    }

    #[test]
    fn test_placeholder_hidden_after_accounts_arrive() {
        let mut view = view();
        view.render(&[]);
        view.render(&[record("a@x.com", "pending", None, None)]);

        assert!(!view.placeholder_visible());
        assert_eq!(view.body().row_count(), 1);
    }

    #[test]
    fn test_completed_account_row() {
        let mut view = view();
        let created = "2024-01-01T00:00:00Z";
        view.render(&[record("a@x.com", "completed", Some("K123"), Some(created))]);

        let row = &view.rows()[0];
        assert_eq!(row.gmail, "a@x.com");
        assert_eq!(row.badge.tone, BadgeTone::Success);
        assert_eq!(row.badge.label, "completed");
        assert_eq!(row.api_key.text(), "K123");
        assert_eq!(row.api_key.copy_value(), Some("K123"));
        assert_eq!(row.created, TimestampFormatter::default().format(Some(created)));
        assert_ne!(row.created, "N/A");
        assert_ne!(row.created, "Invalid Date");
    }

    #[test]
    fn test_missing_key_and_date() {
        let mut view = view();
        view.render(&[
            record("a@x.com", "pending", None, None),
            record("b@x.com", "pending", Some(""), Some("")),
        ]);

        for row in view.rows() {
            assert_eq!(row.api_key.text(), "Not available");
            assert_eq!(row.api_key.copy_value(), None);
            assert_eq!(row.created, "N/A");
        }
    }

    #[test]
    fn test_long_key_is_masked_but_copied_in_full() {
        let mut view = view();
        let key = "AIzaSyD-abcdefghijklmnopqrstuvwxyz";
        view.render(&[record("a@x.com", "completed", Some(key), None)]);

        let cell = &view.rows()[0].api_key;
        assert_eq!(cell.text(), "AIzaSyD-abcd…");
        assert_eq!(cell.copy_value(), Some(key));
    }

    #[test]
    fn test_fetch_failure_replaces_table_with_error_row() {
        let mut view = view();
        let seq = view.begin_refresh();
        view.apply_fetch(seq, Ok(vec![record("a@x.com", "pending", None, None)]));

        let seq = view.begin_refresh();
        let failure = StatusError::UnexpectedStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(view.apply_fetch(seq, Err(failure)));

        assert_eq!(view.body().row_count(), 1);
        assert!(view.rows().is_empty());
        match view.body() {
            TableBody::Error { message, icon } => {
                assert_eq!(message, FETCH_ERROR_MESSAGE);
                assert_eq!(*icon, Icon::AlertTriangle);
            }
            other => panic!("expected error row, got {other:?}"),
        }
        assert_eq!(view.body().colspan(), 4);
    }

    #[test]
    fn test_error_row_keeps_placeholder_state() {
        let mut view = view();
        view.render(&[]);
        view.render_error();
        assert!(view.placeholder_visible());
    }

    #[test]
    fn test_decode_failure_shows_error_row() {
        let mut view = view();
        let seq = view.begin_refresh();
        view.apply_fetch(seq, Ok(vec![record("a@x.com", "pending", None, None)]));

        let seq = view.begin_refresh();
        let decode = serde_json::from_str::<Vec<AccountRecord>>("{").unwrap_err();
        assert!(view.apply_fetch(seq, Err(decode.into())));
        assert!(view.rows().is_empty());
        assert!(matches!(view.body(), TableBody::Error { .. }));
    }

    #[test]
    fn test_overlapping_refreshes_keep_first_arrival() {
        let mut view = view();
        let first = view.begin_refresh();
        let second = view.begin_refresh();
        assert!(view.is_refreshing());

        // the second request answers before the first one
        assert!(view.apply_fetch(second, Ok(vec![record("new@x.com", "completed", None, None)])));
        assert!(!view.apply_fetch(first, Ok(vec![record("old@x.com", "pending", None, None)])));

        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].gmail, "new@x.com");
        assert!(!view.is_refreshing());
    }

    #[test]
    fn test_copy_success_shows_toast() {
        let mut clipboard = MockClipboardSink::new();
        clipboard
            .expect_set_text()
            .with(eq("K123"))
            .times(1)
            .returning(|_| Ok(()));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq(COPIED_MESSAGE))
            .times(1)
            .return_const(());

        let mut view = StatusView::new(notifier, clipboard, TimestampFormatter::default(), 12);
        assert!(view.copy_to_clipboard("K123"));
    }

    #[test]
    fn test_copy_failure_is_silent() {
        let mut clipboard = MockClipboardSink::new();
        clipboard
            .expect_set_text()
            .returning(|_| Err(StatusError::Clipboard("not permitted".into())));
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(0);

        let mut view = StatusView::new(notifier, clipboard, TimestampFormatter::default(), 12);
        assert!(!view.copy_to_clipboard("K123"));
    }

    #[test]
    fn test_copy_row_key() {
        let mut clipboard = MockClipboardSink::new();
        clipboard
            .expect_set_text()
            .with(eq("K123"))
            .times(1)
            .returning(|_| Ok(()));

        let mut view = StatusView::new(
            ToastStack::default(),
            clipboard,
            TimestampFormatter::default(),
            12,
        );
        view.render(&[
            record("a@x.com", "completed", Some("K123"), None),
            record("b@x.com", "pending", None, None),
        ]);

        assert!(view.copy_row_key(0));
        assert!(!view.copy_row_key(1));
        assert!(!view.copy_row_key(7));
        assert_eq!(view.notifier().toasts().len(), 1);
        assert_eq!(view.notifier().toasts()[0].message, COPIED_MESSAGE);
    }

    #[tokio::test]
    async fn test_load_account_data_against_failing_backend() {
        use std::time::Duration;
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/accounts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let client = AccountsClient::new(&server.uri(), Duration::from_secs(5)).unwrap();

        let mut view = view();
        assert!(view.load_account_data(&client).await);
        assert!(matches!(view.body(), TableBody::Error { .. }));
        assert_eq!(view.body().row_count(), 1);
    }

    #[tokio::test]
    async fn test_non_list_body_on_first_load_shows_error_row() {
        use std::time::Duration;
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/accounts"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"error":"db down"}"#))
            .mount(&server)
            .await;
        let client = AccountsClient::new(&server.uri(), Duration::from_secs(5)).unwrap();

        let mut view = view();
        assert_eq!(view.body(), &TableBody::Loading);
        assert!(view.load_account_data(&client).await);
        match view.body() {
            TableBody::Error { message, .. } => assert_eq!(message, FETCH_ERROR_MESSAGE),
            other => panic!("expected error row, got {other:?}"),
        }
    }
}
