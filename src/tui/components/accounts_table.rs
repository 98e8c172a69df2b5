use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::{
    tui::{app::App, theme::Theme},
    view::{
        badge::{Badge, Icon},
        table::{ApiKeyCell, TableBody, ViewRow, COLUMNS, NO_ACCOUNTS_MESSAGE},
    },
};

const WIDTHS: [Constraint; 4] = [
    Constraint::Percentage(35),
    Constraint::Percentage(22),
    Constraint::Percentage(23),
    Constraint::Percentage(20),
];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = Theme::default();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Accounts ({})", app.view.rows().len()))
        .border_style(Style::default().fg(theme.primary));

    match app.view.body() {
        TableBody::Loading => {
            let paragraph = Paragraph::new("Loading account data...")
                .style(Style::default().fg(theme.muted))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, area);
        }
        TableBody::Error { message, icon } => {
            // a single line across the whole table
            let line = Line::from(vec![
                Span::styled(format!("{} ", icon.glyph()), Style::default().fg(theme.error)),
                Span::styled(message.as_str(), Style::default().fg(theme.error)),
            ]);
            let paragraph = Paragraph::new(vec![header_line(&theme), Line::raw(""), line])
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(paragraph, area);
        }
        TableBody::Rows(rows) if rows.is_empty() && app.view.placeholder_visible() => {
            let paragraph = Paragraph::new(vec![
                Line::raw(""),
                Line::styled(NO_ACCOUNTS_MESSAGE, Style::default().fg(theme.muted)),
                Line::styled(
                    "Accounts appear here once provisioning starts.",
                    Style::default().fg(theme.muted),
                ),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(paragraph, area);
        }
        TableBody::Rows(rows) => {
            let table = Table::new(rows.iter().map(|row| account_row(row, &theme)), WIDTHS)
                .header(header_row(&theme))
                .block(block)
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol(">> ");

            let mut state = TableState::default();
            if !rows.is_empty() {
                state.select(Some(app.selected_index));
            }
            frame.render_stateful_widget(table, area, &mut state);
        }
    }
}

fn header_row(theme: &Theme) -> Row<'static> {
    let cells = COLUMNS
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(theme.warning)));

    Row::new(cells)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .height(1)
        .bottom_margin(1)
}

fn header_line(theme: &Theme) -> Line<'static> {
    Line::styled(
        COLUMNS.join("   "),
        Style::default()
            .fg(theme.warning)
            .add_modifier(Modifier::BOLD),
    )
}

fn account_row<'a>(row: &'a ViewRow, theme: &Theme) -> Row<'a> {
    let key_cell = match &row.api_key {
        ApiKeyCell::Available { masked, .. } => Cell::from(Line::from(vec![
            Span::raw(masked.as_str()),
            Span::styled(
                format!(" {}", Icon::Copy.glyph()),
                Style::default().fg(theme.primary),
            ),
        ])),
        ApiKeyCell::NotAvailable => Cell::from(Span::styled(
            row.api_key.text(),
            Style::default().fg(theme.muted),
        )),
    };

    Row::new(vec![
        Cell::from(row.gmail.as_str()),
        Cell::from(badge_span(&row.badge, theme)),
        key_cell,
        Cell::from(row.created.as_str()),
    ])
    .height(1)
}

pub fn badge_span<'a>(badge: &'a Badge, theme: &Theme) -> Span<'a> {
    Span::styled(
        format!(" {} {} ", badge.icon.glyph(), badge.label),
        Style::default()
            .fg(Color::Black)
            .bg(theme.tone(badge.tone))
            .add_modifier(Modifier::BOLD),
    )
}
