use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::tui::theme::Theme;

pub const KEYBINDINGS: [(&str, &str); 7] = [
    ("r", "Refresh now"),
    ("↑ / ↓, k / j", "Move selection"),
    ("c / y / Enter", "Copy API key of selected row"),
    ("x", "Dismiss newest notification"),
    ("h / ?", "Toggle help"),
    ("q / Esc", "Quit"),
    ("Ctrl+C", "Quit"),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = Theme::default();
    let items: Vec<ListItem> = KEYBINDINGS
        .iter()
        .map(|(key, desc)| {
            let content = vec![
                Span::styled(
                    format!("{:15}", key),
                    Style::default()
                        .fg(theme.warning)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" - "),
                Span::styled(*desc, Style::default().fg(theme.foreground)),
            ];
            ListItem::new(Line::from(content))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Keybindings")
            .border_style(Style::default().fg(theme.primary)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}
