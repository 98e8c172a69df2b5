use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::info;

use crate::{
    config::Config,
    tui::{app::App, components, event::EventHandler, terminal},
};

pub async fn run_tui(config: Config) -> anyhow::Result<()> {
    let mut app = App::new(&config)?;
    let mut events = EventHandler::new(config.tick_rate(), config.refresh_interval());
    let sender = events.sender();

    terminal::install_panic_hook();
    let mut tui = terminal::init()?;
    info!("Dashboard started, polling {}", app.endpoint);

    app.request_refresh(&sender);

    let result = async {
        while !app.should_quit {
            tui.draw(|frame| render_ui(frame, &app))?;

            match events.next().await {
                Some(event) => app.handle_event(event, &sender),
                None => break,
            }
        }
        anyhow::Ok(())
    }
    .await;

    terminal::restore()?;
    info!("Dashboard stopped");
    result
}

pub fn render_ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Accounts
            Constraint::Length(3), // Status bar
        ])
        .split(frame.size());

    components::header::render(frame, chunks[0], app);
    components::accounts_table::render(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    components::toasts::render(frame, inner(chunks[1]), app.view.notifier());

    if app.show_help {
        components::help::render(frame, centered(chunks[1], 60, 11));
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let refreshed = match app.view.last_refresh() {
        Some(at) => format!("Updated {}", at.format("%H:%M:%S")),
        None => "Not updated yet".to_string(),
    };
    let activity = if app.view.is_refreshing() {
        Span::styled(" ⟳ refreshing ", Style::default().fg(Color::Yellow))
    } else {
        Span::raw(" ")
    };

    let text = Line::from(vec![
        Span::styled(
            " Status ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(refreshed, Style::default().fg(Color::Gray)),
        activity,
        Span::styled(
            format!("(every {}s)", app.refresh_interval_secs),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(" | "),
        Span::styled("r: Refresh  c: Copy key  ?: Help", Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        Span::styled("q: Quit", Style::default().fg(Color::Red)),
    ]);

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AccountRecord, AccountStatus};
    use crate::view::Notifier;
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.toml"), None).unwrap();
        App::new(&config).unwrap()
    }

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(110, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render_ui(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_draws_rows() {
        let mut app = test_app();
        app.view.render(&[
            AccountRecord {
                gmail: "a@x.com".into(),
                status: AccountStatus::Completed,
                api_key: Some("K123".into()),
                created_at: None,
            },
            AccountRecord {
                gmail: "b@x.com".into(),
                status: AccountStatus::from("queued"),
                api_key: None,
                created_at: None,
            },
        ]);

        let screen = draw(&app);
        assert!(screen.contains("a@x.com"));
        assert!(screen.contains("completed"));
        assert!(screen.contains("K123"));
        assert!(screen.contains("queued"));
        assert!(screen.contains("Not available"));
        assert!(screen.contains("N/A"));
    }

    #[test]
    fn test_draws_placeholder_and_error() {
        let mut app = test_app();
        assert!(draw(&app).contains("Loading account data"));

        app.view.render(&[]);
        assert!(draw(&app).contains("No accounts found"));

        app.view.render_error();
        assert!(draw(&app).contains("Error loading account data. Please try again."));
    }

    #[test]
    fn test_draws_toast_and_help() {
        let mut app = test_app();
        app.view.render(&[]);
        app.view.notifier_mut().notify("API key copied to clipboard!");
        app.show_help = true;

        let screen = draw(&app);
        assert!(screen.contains("API key copied to clipboard!"));
        assert!(screen.contains("Keybindings"));
    }
}
