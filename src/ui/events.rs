//! Event handling for the finder
//!
//! Maps crossterm events to [`Command`]s. The mapping is pure so the key
//! table can be tested without a terminal.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// An operator intent, independent of the key that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a character to the prompt
    Push(char),
    /// Append pasted text to the prompt
    Paste(String),
    /// Remove the last prompt character
    Backspace,
    /// Clear the prompt
    ClearPrompt,
    /// Select the next entry away from the prompt
    MoveUp,
    /// Select the next entry toward the prompt
    MoveDown,
    /// Switch to the next mount
    NextMount,
    /// Switch to the previous mount
    PrevMount,
    /// The list area now has this many rows
    Resize(usize),
    /// Accept the selected secret
    Confirm,
    /// Leave without a selection
    Cancel,
}

/// Map a key press to a command
#[must_use]
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let command = match key.code {
        KeyCode::Esc => Command::Cancel,
        KeyCode::Enter => Command::Confirm,
        KeyCode::Up => Command::MoveUp,
        KeyCode::Down => Command::MoveDown,
        KeyCode::Tab => Command::NextMount,
        KeyCode::BackTab => Command::PrevMount,
        KeyCode::Backspace => Command::Backspace,
        KeyCode::Char(c) if ctrl => match c {
            'c' => Command::Cancel,
            'k' | 'p' => Command::MoveUp,
            'j' | 'n' => Command::MoveDown,
            'u' => Command::ClearPrompt,
            _ => return None,
        },
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => Command::Push(c),
        _ => return None,
    };

    Some(command)
}

/// Map a terminal event to a command
///
/// `list_rows` turns a terminal height into the list viewport height.
#[must_use]
pub fn event_to_command(event: Event, list_rows: impl Fn(u16) -> usize) -> Option<Command> {
    match event {
        Event::Key(key) => key_to_command(key),
        Event::Paste(text) => Some(Command::Paste(text)),
        Event::Resize(_, height) => Some(Command::Resize(list_rows(height))),
        _ => None,
    }
}

/// Wait up to `timeout` for the next command
///
/// # Errors
///
/// Returns an error if polling or reading the terminal fails.
pub fn poll_command(
    timeout: Duration,
    list_rows: impl Fn(u16) -> usize,
) -> std::io::Result<Option<Command>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(event_to_command(event::read()?, list_rows))
}
