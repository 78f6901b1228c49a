//! Ratatui widgets for the finder
//!
//! Custom widgets for rendering the finder interface.

mod help_bar;
mod key_list;
mod prompt_bar;
mod secret_pane;

pub use help_bar::{HelpBar, KeyHint};
pub use key_list::{KeyList, Scrollbar};
pub use prompt_bar::PromptBar;
pub use secret_pane::SecretPane;
