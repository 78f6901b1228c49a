//! Finder state machine
//!
//! [`ViewModel`] owns the discovered paths for the active mount, the
//! [`ViewState`] window over them and the secret resolved for the current
//! selection. It applies [`Command`]s and never touches the terminal, so a
//! whole session can be replayed in tests against a fake store.
//!
//! ```text
//!            load()                    Confirm / Cancel
//! Loading ──────────▶ Browsing ──────────────────────▶ Outcome
//!    ▲                   │
//!    └── Next/PrevMount ─┘
//! ```

use super::events::Command;
use super::state::ViewState;
use crate::discovery::{TreeWalker, WalkerError};
use crate::store::{Secret, SecretCache, SecretStore, path};
use std::sync::Arc;

/// Whether discovery for the active mount has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for `load` to walk the mount
    Loading,
    /// Paths are known and commands are applied
    Browsing,
}

/// Secret shown for the selected path
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Nothing is selected
    None,
    /// The secret was read
    Resolved(Arc<Secret>),
    /// Reading failed; the message is shown in place of the secret
    Failed(String),
}

/// How the session ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The operator accepted this secret
    Confirmed(Arc<Secret>),
    /// The operator left without a secret
    Cancelled,
}

/// Tuning knobs for a [`ViewModel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelOptions {
    /// Concurrent listings during discovery
    pub max_in_flight: usize,
    /// Rows kept between the cursor and the window edge
    pub scroll_margin: usize,
    /// Initial list height
    pub viewport_size: usize,
}

/// Interactive finder state over one store
pub struct ViewModel<S: SecretStore> {
    walker: TreeWalker<S>,
    cache: SecretCache<S>,
    state: ViewState,
    mount: String,
    mounts: Option<Vec<String>>,
    phase: Phase,
    selected_path: Option<String>,
    selection: Selection,
    outcome: Option<Outcome>,
}

impl<S: SecretStore> ViewModel<S> {
    /// Create a model in the `Loading` phase for `mount`
    ///
    /// # Errors
    ///
    /// Returns `WalkerError` if the discovery pool cannot be built.
    pub fn new(store: Arc<S>, mount: impl Into<String>, options: ModelOptions) -> Result<Self, WalkerError> {
        Ok(Self {
            walker: TreeWalker::new(Arc::clone(&store), options.max_in_flight)?,
            cache: SecretCache::new(store),
            state: ViewState::new(options.viewport_size, options.scroll_margin),
            mount: mount.into(),
            mounts: None,
            phase: Phase::Loading,
            selected_path: None,
            selection: Selection::None,
            outcome: None,
        })
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn mount(&self) -> &str {
        &self.mount
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Set once a `Confirm` or `Cancel` has been applied
    #[must_use]
    pub const fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Take the outcome, leaving `None`
    pub fn take_outcome(&mut self) -> Option<Outcome> {
        self.outcome.take()
    }

    /// Walk the active mount and start browsing
    ///
    /// Blocks until discovery completes.
    pub fn load(&mut self) {
        self.phase = Phase::Loading;
        let paths = self.walker.discover(&self.mount, &path::container(""));
        log::debug!("discovered {} secrets in mount {}", paths.len(), self.mount);

        self.state.set_paths(paths);
        self.selected_path = None;
        self.phase = Phase::Browsing;
        self.resolve_selection();
    }

    /// Apply one command
    ///
    /// Commands other than `Resize` and `Cancel` are ignored while loading
    /// or once an outcome is set.
    pub fn apply(&mut self, command: Command) {
        if self.outcome.is_some() {
            return;
        }
        if self.phase == Phase::Loading && !matches!(command, Command::Resize(_) | Command::Cancel) {
            return;
        }

        match command {
            Command::Push(c) => self.state.push(c),
            Command::Paste(text) => self.state.push_str(&text),
            Command::Backspace => {
                self.state.backspace();
            }
            Command::ClearPrompt => self.state.clear_prompt(),
            Command::MoveUp => self.state.move_up(),
            Command::MoveDown => self.state.move_down(),
            Command::Resize(rows) => self.state.resize(rows),
            Command::NextMount => self.switch_mount(1),
            Command::PrevMount => self.switch_mount(-1),
            Command::Confirm => self.confirm(),
            Command::Cancel => self.outcome = Some(Outcome::Cancelled),
        }

        if self.phase == Phase::Browsing {
            self.resolve_selection();
        }
    }

    fn confirm(&mut self) {
        self.outcome = Some(match &self.selection {
            Selection::Resolved(secret) => Outcome::Confirmed(Arc::clone(secret)),
            Selection::None | Selection::Failed(_) => Outcome::Cancelled,
        });
    }

    /// Move to the neighbouring mount and fall back to `Loading`
    fn switch_mount(&mut self, offset: isize) {
        if self.mounts.is_none() {
            self.mounts = Some(self.known_mounts());
        }
        let Some(mounts) = &self.mounts else {
            return;
        };
        if mounts.len() < 2 {
            return;
        }

        let current = mounts.iter().position(|m| *m == self.mount).unwrap_or(0);
        let next = (current as isize + offset).rem_euclid(mounts.len() as isize) as usize;
        self.mount = mounts[next].clone();
        log::debug!("switching to mount {}", self.mount);

        self.state.set_paths(Vec::new());
        self.selected_path = None;
        self.selection = Selection::None;
        self.phase = Phase::Loading;
    }

    /// Mounts to cycle through, always including the active one
    fn known_mounts(&self) -> Vec<String> {
        let mut mounts = self.cache.store().list_mounts().unwrap_or_else(|e| {
            log::error!("Failed to list mounts: {e}");
            Vec::new()
        });
        if !mounts.contains(&self.mount) {
            mounts.push(self.mount.clone());
            mounts.sort();
        }
        mounts
    }

    /// Look up the secret for the selected path if it changed
    fn resolve_selection(&mut self) {
        let Some(selected) = self.state.selected() else {
            self.selected_path = None;
            self.selection = Selection::None;
            return;
        };
        if self.selected_path.as_deref() == Some(selected) {
            return;
        }

        let selected = selected.to_string();
        self.selection = match self.cache.get_or_fetch(&self.mount, &selected) {
            Ok(secret) => Selection::Resolved(secret),
            Err(e) => {
                log::warn!("Failed to read {selected} in mount {}: {e}", self.mount);
                Selection::Failed(e.to_string())
            }
        };
        self.selected_path = Some(selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeStore;
    use serde_json::json;

    const OPTIONS: ModelOptions = ModelOptions {
        max_in_flight: 4,
        scroll_margin: 4,
        viewport_size: 10,
    };

    fn fixture() -> Arc<FakeStore> {
        Arc::new(
            FakeStore::new("secret")
                .with_secret("/foo", &[("a", "b")])
                .with_secret("/bar/baz", &[("c", "d")])
                .with_secret(
                    "/enterprise/organization/department/unit/team/user/actual-user",
                    &[("e", "f")],
                ),
        )
    }

    fn loaded(store: &Arc<FakeStore>) -> ViewModel<FakeStore> {
        let mut model = ViewModel::new(Arc::clone(store), "secret", OPTIONS).unwrap();
        assert_eq!(model.phase(), Phase::Loading);
        model.load();
        model
    }

    fn type_text(model: &mut ViewModel<FakeStore>, text: &str) {
        for c in text.chars() {
            model.apply(Command::Push(c));
        }
    }

    #[test]
    fn test_load_discovers_and_selects_best_match() {
        let store = fixture();
        let model = loaded(&store);

        assert_eq!(model.phase(), Phase::Browsing);
        assert_eq!(model.state().all_paths().len(), 3);
        assert_eq!(model.state().selected(), Some("/bar/baz"));
        assert!(matches!(model.selection(), Selection::Resolved(_)));
    }

    #[test]
    fn test_filter_and_confirm_yields_secret_json() {
        let store = fixture();
        let mut model = loaded(&store);

        type_text(&mut model, "ba");
        assert_eq!(model.state().filtered(), ["/bar/baz"]);

        model.apply(Command::Confirm);
        let Some(Outcome::Confirmed(secret)) = model.take_outcome() else {
            panic!("expected a confirmed secret");
        };
        assert_eq!(
            serde_json::to_value(secret.as_ref()).unwrap(),
            json!({ "data": { "c": "d" }, "metadata": { "version": 1 } })
        );
    }

    #[test]
    fn test_cancel_has_no_secret() {
        let store = fixture();
        let mut model = loaded(&store);
        model.apply(Command::Cancel);
        assert_eq!(model.outcome(), Some(&Outcome::Cancelled));

        // further commands are ignored
        model.apply(Command::Push('x'));
        assert_eq!(model.state().prompt(), "");
    }

    #[test]
    fn test_confirm_without_match_cancels() {
        let store = fixture();
        let mut model = loaded(&store);
        type_text(&mut model, "zzz");
        assert_eq!(model.selection(), &Selection::None);

        model.apply(Command::Confirm);
        assert_eq!(model.outcome(), Some(&Outcome::Cancelled));
    }

    #[test]
    fn test_selection_only_fetches_on_change() {
        let store = fixture();
        let mut model = loaded(&store);
        assert_eq!(store.get_calls("/bar/baz"), 1);

        // same selection after each edit
        type_text(&mut model, "b");
        model.apply(Command::Backspace);
        model.apply(Command::MoveDown);

        model.apply(Command::MoveUp);
        model.apply(Command::MoveDown);
        assert_eq!(model.state().selected(), Some("/bar/baz"));

        // served from the cache the second time
        assert_eq!(store.get_calls("/bar/baz"), 1);
    }

    #[test]
    fn test_failed_read_is_shown_and_retried() {
        let store = Arc::new(
            FakeStore::new("secret")
                .with_secret("/a", &[("k", "v")])
                .with_failing_get("/b")
                .with_secret("/b", &[]),
        );
        let mut model = loaded(&store);

        model.apply(Command::MoveUp);
        assert_eq!(model.state().selected(), Some("/b"));
        let Selection::Failed(message) = model.selection() else {
            panic!("expected a failed selection");
        };
        assert!(message.contains("500"));

        model.apply(Command::MoveDown);
        model.apply(Command::MoveUp);
        assert_eq!(store.get_calls("/b"), 2);

        model.apply(Command::Confirm);
        assert_eq!(model.outcome(), Some(&Outcome::Cancelled));
    }

    #[test]
    fn test_access_denied_branch_still_browses() {
        let store = Arc::new(
            FakeStore::new("secret")
                .with_leaves(["/foo", "/bar/baz", "/secret-ops/root"])
                .with_denied("/secret-ops/"),
        );
        let model = loaded(&store);
        assert_eq!(model.state().all_paths(), ["/bar/baz", "/foo"]);
    }

    #[test]
    fn test_mount_switch_rewalks() {
        let store = Arc::new(
            FakeStore::new("secret")
                .with_leaves(["/foo"])
                .with_mount("team")
                .with_leaves(["/svc/db", "/svc/api"]),
        );
        let mut model = loaded(&store);
        type_text(&mut model, "fo");

        model.apply(Command::NextMount);
        assert_eq!(model.phase(), Phase::Loading);
        assert_eq!(model.mount(), "team");
        assert_eq!(model.selection(), &Selection::None);

        // ignored until loaded
        model.apply(Command::Push('x'));
        model.load();
        assert_eq!(model.state().prompt(), "");
        assert_eq!(model.state().all_paths(), ["/svc/api", "/svc/db"]);

        model.apply(Command::PrevMount);
        model.load();
        assert_eq!(model.mount(), "secret");
        assert_eq!(model.state().all_paths(), ["/foo"]);

        // wraps around
        model.apply(Command::PrevMount);
        assert_eq!(model.mount(), "team");
    }

    #[test]
    fn test_single_mount_switch_is_noop() {
        let store = fixture();
        let mut model = loaded(&store);
        model.apply(Command::NextMount);
        assert_eq!(model.phase(), Phase::Browsing);
        assert_eq!(model.mount(), "secret");
    }

    #[test]
    fn test_paste_and_clear() {
        let store = fixture();
        let mut model = loaded(&store);

        model.apply(Command::Paste("actual".to_string()));
        assert_eq!(
            model.state().selected(),
            Some("/enterprise/organization/department/unit/team/user/actual-user")
        );

        model.apply(Command::ClearPrompt);
        assert_eq!(model.state().filtered().len(), 3);
    }

    #[test]
    fn test_resize_while_loading() {
        let store = fixture();
        let mut model = ViewModel::new(Arc::clone(&store), "secret", OPTIONS).unwrap();
        model.apply(Command::Resize(3));
        assert_eq!(model.state().viewport_size(), 3);
        assert_eq!(store.get_calls("/bar/baz"), 0);
    }
}
