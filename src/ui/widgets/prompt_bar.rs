//! Prompt line widget for query input

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Single-line prompt with the query and a cursor at its end
pub struct PromptBar<'a> {
    /// Current query text
    query: &'a str,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> PromptBar<'a> {
    #[must_use]
    pub const fn new(query: &'a str, theme: &'a Theme) -> Self {
        Self { query, theme }
    }
}

impl Widget for PromptBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("> ", self.theme.cursor_style()),
            Span::raw(self.query),
            Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
