use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::{
    tui::theme::Theme,
    view::{badge::Icon, toast::ToastStack},
};

const TOAST_WIDTH: u16 = 42;
const TOAST_HEIGHT: u16 = 3;

/// Draw the toast stack in the bottom-right corner of `area`, newest at
/// the bottom. Toasts that do not fit are skipped from the oldest end.
pub fn render(frame: &mut Frame, area: Rect, toasts: &ToastStack) {
    if toasts.is_empty() {
        return;
    }
    let theme = Theme::default();
    let width = TOAST_WIDTH.min(area.width);
    let fits = (area.height / TOAST_HEIGHT) as usize;

    let mut bottom = area.y + area.height;
    for toast in toasts.toasts().iter().rev().take(fits) {
        let rect = Rect::new(
            area.x + area.width - width,
            bottom - TOAST_HEIGHT,
            width,
            TOAST_HEIGHT,
        );
        bottom -= TOAST_HEIGHT;

        let text = Line::from(vec![
            Span::styled(
                format!("{} ", Icon::CheckCircle.glyph()),
                Style::default().fg(Color::White),
            ),
            Span::styled(toast.message.as_str(), Style::default().fg(Color::White)),
        ]);
        let paragraph = Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(theme.success))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White).bg(theme.success)),
            );

        frame.render_widget(Clear, rect);
        frame.render_widget(paragraph, rect);
    }
}
