//! Secret pane widget

use crate::ui::styled_secret::StyledSecret;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Shows the selected secret as styled JSON
pub struct SecretPane<'a> {
    content: &'a StyledSecret,
    theme: &'a Theme,
}

impl<'a> SecretPane<'a> {
    #[must_use]
    pub const fn new(content: &'a StyledSecret, theme: &'a Theme) -> Self {
        Self { content, theme }
    }
}

impl Widget for SecretPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(self.theme.border_style())
            .title(self.content.title.as_str());

        Paragraph::new(self.content.lines.clone())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
