use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{app::App, theme::Theme};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = Theme::default();
    let title = vec![
        Span::styled("⚡ ", Style::default().fg(theme.warning)),
        Span::styled(
            "Account Provisioning Status",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(app.endpoint.as_str(), Style::default().fg(theme.success)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));

    let paragraph = Paragraph::new(Line::from(title))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
