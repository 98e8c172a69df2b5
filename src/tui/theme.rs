use ratatui::style::Color;

use crate::view::BadgeTone;

pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub muted: Color,
    pub foreground: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Gray,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::LightBlue,
            muted: Color::DarkGray,
            foreground: Color::White,
        }
    }
}

impl Theme {
    pub fn tone(&self, tone: BadgeTone) -> Color {
        match tone {
            BadgeTone::Warning => self.warning,
            BadgeTone::Info => self.info,
            BadgeTone::Success => self.success,
            BadgeTone::Danger => self.error,
            BadgeTone::Secondary => self.secondary,
        }
    }
}
