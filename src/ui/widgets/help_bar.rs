//! Stats line with the result count, active mount and key hints

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// Key combination (e.g., "Tab", "Enter")
    pub key: String,
    /// Action description (e.g., "mount", "confirm")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Stats on the left, hints on the right
pub struct HelpBar<'a> {
    filtered: usize,
    total: usize,
    mount: &'a str,
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(
        filtered: usize,
        total: usize,
        mount: &'a str,
        hints: &'a [KeyHint],
        theme: &'a Theme,
    ) -> Self {
        Self {
            filtered,
            total,
            mount,
            hints,
            theme,
        }
    }

    /// Get default hints for the finder
    #[must_use]
    pub fn default_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("Enter", "confirm"),
            KeyHint::new("Tab", "mount"),
            KeyHint::new("Esc", "cancel"),
        ]
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }
        let hints = Line::from(spans);
        let hints_width = u16::try_from(hints.width()).unwrap_or(area.width);
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);

        let stats = Line::from(vec![
            Span::styled(
                format!("  {}/{} ", self.filtered, self.total),
                self.theme.dimmed_style(),
            ),
            Span::styled(self.mount, self.theme.mount_style()),
        ]);
        Paragraph::new(stats).render(left, buf);
        Paragraph::new(hints).render(right, buf);
    }
}
