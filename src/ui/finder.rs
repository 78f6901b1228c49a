//! Terminal front end for the finder
//!
//! Owns the terminal for the duration of a session: raw mode, alternate
//! screen and bracketed paste are switched on by [`TerminalGuard`] and
//! switched off again when it drops, including on panic.

use super::error::Result;
use super::events::poll_command;
use super::model::{ModelOptions, Outcome, Phase, Selection, ViewModel};
use super::styled_secret::StyledSecret;
use super::theme::Theme;
use super::widgets::{HelpBar, KeyHint, KeyList, PromptBar, Scrollbar, SecretPane};
use crate::store::{Secret, SecretStore};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::sync::{Arc, Once};
use std::time::Duration;

/// Rows taken by the stats line and the prompt
const CHROME_ROWS: u16 = 2;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

static PANIC_HOOK: Once = Once::new();

/// List viewport height for a terminal of `height` rows
#[must_use]
pub fn list_rows(height: u16) -> usize {
    usize::from(height.saturating_sub(CHROME_ROWS))
}

/// Raw mode and alternate screen, restored on drop
pub struct TerminalGuard;

impl TerminalGuard {
    /// Switch the terminal into finder mode
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be configured; anything
    /// already switched on is restored first.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal() {
            log::error!("Failed to restore terminal: {e}");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)
}

/// Restore the terminal before the previous hook prints the panic
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            previous(info);
        }));
    });
}

/// Interactive secret finder
pub struct Finder {
    theme: Theme,
    hints: Vec<KeyHint>,
    max_in_flight: usize,
    scroll_margin: usize,
}

impl Finder {
    #[must_use]
    pub fn new(max_in_flight: usize, scroll_margin: usize) -> Self {
        Self {
            theme: Theme::default(),
            hints: HelpBar::default_hints(),
            max_in_flight,
            scroll_margin,
        }
    }

    /// Run a session against `mount` until the operator confirms or cancels
    ///
    /// Returns the confirmed secret, or `None` on cancel.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal fails or the discovery pool cannot
    /// be built. The terminal is restored before returning.
    pub fn run<S: SecretStore>(&self, store: Arc<S>, mount: &str) -> Result<Option<Arc<Secret>>> {
        let guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let height = terminal.size()?.height;

        let mut model = ViewModel::new(
            store,
            mount,
            ModelOptions {
                max_in_flight: self.max_in_flight,
                scroll_margin: self.scroll_margin,
                viewport_size: list_rows(height),
            },
        )?;

        let outcome = self.run_loop(&mut terminal, &mut model);
        drop(guard);

        Ok(match outcome? {
            Outcome::Confirmed(secret) => Some(secret),
            Outcome::Cancelled => None,
        })
    }

    fn run_loop<S: SecretStore>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        model: &mut ViewModel<S>,
    ) -> Result<Outcome> {
        let mut pane: Option<(String, StyledSecret)> = None;

        loop {
            if model.phase() == Phase::Loading {
                terminal.draw(|frame| self.render_loading(frame, model.mount()))?;
                model.load();
            }

            if let Some(outcome) = model.take_outcome() {
                return Ok(outcome);
            }

            let key = format!("{}:{}", model.mount(), model.state().selected().unwrap_or_default());
            if pane.as_ref().is_none_or(|(cached, _)| *cached != key) {
                pane = Some((key, self.styled_selection(model)));
            }

            terminal.draw(|frame| {
                if let Some((_, content)) = &pane {
                    self.render(frame, model, content);
                }
            })?;

            if let Some(command) = poll_command(POLL_INTERVAL, list_rows)? {
                log::trace!("command {command:?}");
                model.apply(command);
            }
        }
    }

    fn styled_selection<S: SecretStore>(&self, model: &ViewModel<S>) -> StyledSecret {
        let path = model.state().selected().unwrap_or_default();
        match model.selection() {
            Selection::Resolved(secret) => StyledSecret::secret(path, secret, &self.theme),
            Selection::Failed(message) => StyledSecret::error(path, message, &self.theme),
            Selection::None => StyledSecret::empty(&self.theme),
        }
    }

    fn layout(area: Rect) -> (Rect, Rect, Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Content (list + secret)
                Constraint::Length(1), // Stats line
                Constraint::Length(1), // Prompt
            ])
            .split(area);
        (rows[0], rows[1], rows[2])
    }

    fn render_loading(&self, frame: &mut Frame, mount: &str) {
        let (content, _, prompt) = Self::layout(frame.area());

        let message = Paragraph::new(format!("Loading secrets from {mount}..."))
            .style(self.theme.dimmed_style())
            .alignment(Alignment::Center);
        let middle = Rect::new(content.x, content.y + content.height / 2, content.width, 1);
        frame.render_widget(message, middle.intersection(content));
        frame.render_widget(PromptBar::new("", &self.theme), prompt);
    }

    fn render<S: SecretStore>(&self, frame: &mut Frame, model: &ViewModel<S>, pane: &StyledSecret) {
        let (content, stats, prompt) = Self::layout(frame.area());
        let state = model.state();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50), // Key list
                Constraint::Length(1),      // Scrollbar
                Constraint::Min(1),         // Secret pane
            ])
            .split(content);

        frame.render_widget(KeyList::new(state, &self.theme), columns[0]);
        frame.render_widget(
            Scrollbar::new(state.filtered().len(), state.view_start(), &self.theme),
            columns[1],
        );
        frame.render_widget(SecretPane::new(pane, &self.theme), columns[2]);
        frame.render_widget(
            HelpBar::new(
                state.filtered().len(),
                state.all_paths().len(),
                model.mount(),
                &self.hints,
                &self.theme,
            ),
            stats,
        );
        frame.render_widget(PromptBar::new(state.prompt(), &self.theme), prompt);
    }
}
