use colored::{ColoredString, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::view::badge::{Badge, BadgeTone};

/// Cut `text` down to `max_width` terminal columns, marking the cut with
/// an ellipsis.
pub fn truncate_display(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Pad to `width` display columns
pub fn pad_display(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - current))
    }
}

/// Badge rendered for plain terminal output, padded to `width` before the
/// colour codes are added
pub fn colorize_badge(badge: &Badge, width: usize) -> ColoredString {
    let text = pad_display(&format!("{} {}", badge.icon.glyph(), badge.label), width);
    match badge.tone {
        BadgeTone::Warning => text.yellow(),
        BadgeTone::Info => text.cyan(),
        BadgeTone::Success => text.green(),
        BadgeTone::Danger => text.red(),
        BadgeTone::Secondary => text.bright_black(),
    }
}

/// Print a formatted table border
pub fn print_table_border(width: usize) {
    println!("{}", "=".repeat(width));
}

/// Print a table row with columns
pub fn print_table_row(columns: &[&str], widths: &[usize]) {
    let mut row = String::new();
    for (column, width) in columns.iter().zip(widths) {
        row.push_str(&pad_display(column, *width));
        row.push_str("  ");
    }
    println!("{}", row.trim_end());
}
