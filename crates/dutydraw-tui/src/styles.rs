//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub highlight: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            highlight: Color::Magenta,
        }
    }
}

impl ColorTheme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Slot text while it spins.
    #[must_use]
    pub fn spinning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Slot text once the value has landed.
    #[must_use]
    pub fn revealed_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Slot text during the impact cue.
    #[must_use]
    pub fn impact_style(&self) -> Style {
        self.revealed_style().add_modifier(Modifier::REVERSED)
    }

    /// Highlighted row in the period list.
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Trigger control, by enabled state.
    #[must_use]
    pub fn trigger_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            self.muted_style().add_modifier(Modifier::CROSSED_OUT)
        }
    }
}
