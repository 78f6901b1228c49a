//! Result list and scrollbar widgets
//!
//! The list is drawn bottom-up: the first visible entry sits on the row
//! right above the stats line, nearest the prompt.

use crate::ui::state::ViewState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

/// Visible window of matching paths with the cursor row highlighted
pub struct KeyList<'a> {
    state: &'a ViewState,
    theme: &'a Theme,
}

impl<'a> KeyList<'a> {
    #[must_use]
    pub const fn new(state: &'a ViewState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for KeyList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for (row, path) in self.state.visible().iter().enumerate() {
            let Ok(offset) = u16::try_from(row) else {
                break;
            };
            if offset >= area.height {
                break;
            }

            let is_cursor = row == self.state.cursor();
            let (marker, style) = if is_cursor {
                (">", self.theme.selected_style())
            } else {
                (" ", self.theme.normal_style())
            };
            let line = Line::from(vec![
                Span::styled(marker, self.theme.cursor_style()),
                Span::raw(" "),
                Span::raw(path.as_str()),
            ])
            .style(style);

            let y = area.bottom() - 1 - offset;
            line.render(Rect::new(area.x, y, area.width, 1), buf);
        }
    }
}

/// One-column scrollbar over the filtered results, filling from the bottom
pub struct Scrollbar<'a> {
    len: usize,
    view_start: usize,
    theme: &'a Theme,
}

impl<'a> Scrollbar<'a> {
    #[must_use]
    pub const fn new(len: usize, view_start: usize, theme: &'a Theme) -> Self {
        Self {
            len,
            view_start,
            theme,
        }
    }

    /// Thumb size and its offset from the bottom row, if the list overflows
    #[must_use]
    pub fn thumb(&self, height: usize) -> Option<(usize, usize)> {
        if height == 0 || self.len <= height {
            return None;
        }
        let size = (height * height / self.len).max(1);
        let hidden = self.len - height;
        let offset = (self.view_start.min(hidden) * (height - size)) / hidden;
        Some((size, offset))
    }
}

impl Widget for Scrollbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = usize::from(area.height);
        let Some((size, offset)) = self.thumb(height) else {
            return;
        };

        for row in 0..height {
            let symbol = if (offset..offset + size).contains(&row) {
                "█"
            } else {
                "│"
            };
            let Ok(row) = u16::try_from(row) else {
                break;
            };
            buf.set_string(area.x, area.bottom() - 1 - row, symbol, self.theme.border_style());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_list_renders_bottom_up() {
        let mut state = ViewState::new(3, 0);
        state.set_paths(vec!["/a".to_string(), "/b".to_string(), "/c".to_string(), "/d".to_string()]);
        state.move_up();

        let theme = Theme::default();
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        KeyList::new(&state, &theme).render(area, &mut buf);

        assert_eq!(row_text(&buf, 2), "  /a");
        assert_eq!(row_text(&buf, 1), "> /b");
        assert_eq!(row_text(&buf, 0), "  /c");
    }

    #[test]
    fn test_thumb_hidden_when_everything_fits() {
        let theme = Theme::default();
        assert_eq!(Scrollbar::new(5, 0, &theme).thumb(10), None);
    }

    #[test]
    fn test_thumb_moves_with_window() {
        let theme = Theme::default();
        assert_eq!(Scrollbar::new(40, 0, &theme).thumb(10), Some((2, 0)));
        assert_eq!(Scrollbar::new(40, 30, &theme).thumb(10), Some((2, 8)));
        assert_eq!(Scrollbar::new(1000, 0, &theme).thumb(10), Some((1, 0)));
    }
}
