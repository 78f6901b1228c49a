//! Color theme definitions for the finder
//!
//! Defines colors and styles used throughout the interface.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the selected row
    pub selection_bg: Color,
    /// Foreground color for the selected row
    pub selection_fg: Color,
    /// Color for the cursor indicator and prompt marker
    pub cursor: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for borders and the scrollbar track
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for JSON object keys
    pub json_key: Color,
    /// Color for JSON strings
    pub json_string: Color,
    /// Color for JSON null
    pub json_null: Color,
    /// Color for the active mount name
    pub mount: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            error: Color::Red,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            json_key: Color::Blue,
            json_string: Color::Green,
            json_null: Color::Gray,
            mount: Color::Magenta,
        }
    }

    /// Style for the currently selected row
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected rows
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    #[must_use]
    pub fn json_key_style(&self) -> Style {
        Style::default().fg(self.json_key)
    }

    #[must_use]
    pub fn json_string_style(&self) -> Style {
        Style::default().fg(self.json_string)
    }

    #[must_use]
    pub fn json_null_style(&self) -> Style {
        Style::default().fg(self.json_null)
    }

    /// Style for the mount name in the stats line
    #[must_use]
    pub fn mount_style(&self) -> Style {
        Style::default()
            .fg(self.mount)
            .add_modifier(Modifier::BOLD)
    }
}
