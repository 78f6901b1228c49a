//! Interactive finder
//!
//! Split into a pure core and a thin terminal layer:
//!
//! - [`state::ViewState`] - prompt, ranked results and the scroll window
//! - [`model::ViewModel`] - mount, discovery, selection and outcome on top
//!   of the view state, driven by [`events::Command`]s
//! - [`finder::Finder`] - crossterm input, ratatui rendering and terminal
//!   restoration
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  Command  ┌──────────────┐
//! │  crossterm   │──────────▶│  ViewModel   │──▶ TreeWalker / SecretCache
//! │   events     │           │  ViewState   │
//! └──────────────┘           └──────┬───────┘
//!                                   │ read-only
//!                            ┌──────▼───────┐
//!                            │   widgets    │──▶ ratatui frame
//!                            └──────────────┘
//! ```

pub mod error;
pub mod events;
pub mod finder;
pub mod model;
pub mod state;
pub mod styled_secret;
pub mod theme;
pub mod widgets;

pub use error::UiError;
pub use events::Command;
pub use finder::Finder;
pub use model::{ModelOptions, Outcome, Phase, Selection, ViewModel};
pub use state::{DEFAULT_SCROLL_MARGIN, ViewState};
pub use theme::Theme;
