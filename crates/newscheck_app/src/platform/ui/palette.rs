use owo_colors::{AnsiColors, OwoColorize};

use newscheck_core::{Theme, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Heading,
    Warning,
    Success,
    Accent,
    Muted,
}

impl From<Tone> for Role {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Warning => Role::Warning,
            Tone::Success => Role::Success,
        }
    }
}

/// Terminal colors for a theme. A disabled palette renders plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
    warning: AnsiColors,
    success: AnsiColors,
    accent: AnsiColors,
    muted: AnsiColors,
}

impl Palette {
    pub fn for_theme(theme: Theme, enabled: bool) -> Self {
        match theme {
            // Darker hues stay readable on light backgrounds.
            Theme::Light => Self {
                enabled,
                warning: AnsiColors::Red,
                success: AnsiColors::Green,
                accent: AnsiColors::Blue,
                muted: AnsiColors::BrightBlack,
            },
            Theme::Dark => Self {
                enabled,
                warning: AnsiColors::BrightRed,
                success: AnsiColors::BrightGreen,
                accent: AnsiColors::BrightCyan,
                muted: AnsiColors::White,
            },
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self::for_theme(Theme::Light, false)
    }

    pub fn paint(&self, text: &str, role: Role) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match role {
            Role::Heading => text.bold().color(self.accent).to_string(),
            Role::Warning => text.bold().color(self.warning).to_string(),
            Role::Success => text.bold().color(self.success).to_string(),
            Role::Accent => text.color(self.accent).to_string(),
            Role::Muted => text.color(self.muted).to_string(),
        }
    }
}
