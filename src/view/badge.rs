use crate::api::types::AccountStatus;

/// Colour category of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Warning,
    Info,
    Success,
    Danger,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Mail,
    Key,
    CheckCircle,
    AlertCircle,
    AlertTriangle,
    Clock,
    HelpCircle,
    Copy,
}

impl Icon {
    /// Single-cell terminal stand-in for the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Mail => "✉",
            Icon::Key => "⚿",
            Icon::CheckCircle => "✔",
            Icon::AlertCircle => "✖",
            Icon::AlertTriangle => "⚠",
            Icon::Clock => "◷",
            Icon::HelpCircle => "?",
            Icon::Copy => "⧉",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub tone: BadgeTone,
    pub icon: Icon,
    pub label: String,
}

/// Map a status to its badge. Defined for every input.
pub fn status_badge(status: &AccountStatus) -> Badge {
    let (tone, icon) = match status {
        AccountStatus::CreatingGmail => (BadgeTone::Warning, Icon::Mail),
        AccountStatus::GeneratingApiKey => (BadgeTone::Info, Icon::Key),
        AccountStatus::Completed => (BadgeTone::Success, Icon::CheckCircle),
        AccountStatus::GmailCreationFailed
        | AccountStatus::ApiKeyGenerationFailed
        | AccountStatus::Error => (BadgeTone::Danger, Icon::AlertCircle),
        AccountStatus::Pending => (BadgeTone::Secondary, Icon::Clock),
        AccountStatus::Unknown(_) => (BadgeTone::Secondary, Icon::HelpCircle),
    };

    Badge {
        tone,
        icon,
        label: status.as_str().to_string(),
    }
}
