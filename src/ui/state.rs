//! Scroll and selection state for the finder
//!
//! Keeps a bounded window over the ranked results. Index 0 of the window is
//! the row nearest the prompt, so "up" walks toward worse matches:
//!
//! ```text
//!   row viewport-1   filtered[view_start + viewport - 1]
//!   ...
//!   row cursor       filtered[view_start + cursor]   <- selected
//!   ...
//!   row 0            filtered[view_start]
//!   > prompt
//! ```
//!
//! Pure data: no I/O, no rendering.

use crate::search::rank;

/// Default number of rows kept between the cursor and the window edge
pub const DEFAULT_SCROLL_MARGIN: usize = 4;

/// Prompt, ranked results and the visible window over them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    prompt: String,
    all_paths: Vec<String>,
    filtered: Vec<String>,
    view_start: usize,
    cursor: usize,
    viewport_size: usize,
    scroll_margin: usize,
}

impl ViewState {
    /// Create an empty state for a window of `viewport_size` rows
    #[must_use]
    pub fn new(viewport_size: usize, scroll_margin: usize) -> Self {
        Self {
            prompt: String::new(),
            all_paths: Vec::new(),
            filtered: Vec::new(),
            view_start: 0,
            cursor: 0,
            viewport_size: viewport_size.max(1),
            scroll_margin,
        }
    }

    /// Replace the candidate set, clearing the prompt
    ///
    /// Paths are sorted so equal scores rank deterministically.
    pub fn set_paths(&mut self, mut paths: Vec<String>) {
        paths.sort();
        self.all_paths = paths;
        self.prompt.clear();
        self.cursor = 0;
        self.refilter();
    }

    /// Current prompt text
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Every discovered path, sorted
    #[must_use]
    pub fn all_paths(&self) -> &[String] {
        &self.all_paths
    }

    /// Paths matching the prompt, best first
    #[must_use]
    pub fn filtered(&self) -> &[String] {
        &self.filtered
    }

    /// First filtered index inside the window
    #[must_use]
    pub const fn view_start(&self) -> usize {
        self.view_start
    }

    /// Selected row, relative to `view_start`
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn viewport_size(&self) -> usize {
        self.viewport_size
    }

    #[must_use]
    pub const fn scroll_margin(&self) -> usize {
        self.scroll_margin
    }

    /// Index of the selected entry in `filtered`
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        let index = self.view_start + self.cursor;
        (index < self.filtered.len()).then_some(index)
    }

    /// The selected path, if any result is visible
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected_index()
            .and_then(|i| self.filtered.get(i))
            .map(String::as_str)
    }

    /// The rows currently inside the window, nearest the prompt first
    #[must_use]
    pub fn visible(&self) -> &[String] {
        let start = self.view_start.min(self.filtered.len());
        let end = (self.view_start + self.viewport_size).min(self.filtered.len());
        &self.filtered[start..end]
    }

    /// Append a character to the prompt
    pub fn push(&mut self, c: char) {
        self.prompt.push(c);
        self.refilter();
    }

    /// Append pasted text to the prompt, dropping line breaks
    pub fn push_str(&mut self, text: &str) {
        let before = self.prompt.len();
        self.prompt
            .extend(text.chars().filter(|c| !matches!(c, '\n' | '\r')));
        if self.prompt.len() != before {
            self.refilter();
        }
    }

    /// Remove the last prompt character
    ///
    /// Returns `false` when the prompt was already empty.
    pub fn backspace(&mut self) -> bool {
        if self.prompt.pop().is_none() {
            return false;
        }
        self.refilter();
        true
    }

    /// Clear the prompt
    pub fn clear_prompt(&mut self) {
        self.prompt.clear();
        self.refilter();
    }

    /// Move the selection one entry away from the prompt
    pub fn move_up(&mut self) {
        let len = self.filtered.len();
        if self.view_start + self.cursor + 1 >= len {
            return;
        }

        let near_edge = self.cursor + 1 >= self.viewport_size.saturating_sub(self.scroll_margin);
        let more_below = self.view_start + self.viewport_size.min(len) < len;
        if near_edge && more_below {
            self.view_start += 1;
        } else {
            self.cursor += 1;
        }
    }

    /// Move the selection one entry toward the prompt
    pub fn move_down(&mut self) {
        if self.cursor == 0 {
            return;
        }

        if self.cursor - 1 < self.scroll_margin && self.view_start > 0 {
            self.view_start -= 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Adopt a new window height
    ///
    /// Resets to the best match if the selection would fall outside the
    /// new window.
    pub fn resize(&mut self, viewport_size: usize) {
        self.viewport_size = viewport_size.max(1);
        let view_end = (self.view_start + self.viewport_size).min(self.filtered.len());
        if self.view_start + self.cursor >= view_end {
            self.view_start = 0;
            self.cursor = 0;
        }
    }

    fn refilter(&mut self) {
        self.filtered = rank(&self.prompt, &self.all_paths);
        self.view_start = 0;
        self.cursor = if self.filtered.is_empty() {
            0
        } else {
            self.cursor
                .min(self.filtered.len() - 1)
                .min(self.viewport_size - 1)
        };
    }
}
