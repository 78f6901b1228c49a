//! Tree command - print every secret path under a directory

use crate::discovery::TreeWalker;
use crate::output;
use crate::store::{SecretStore, path};
use crate::Result;
use std::io::Write;
use std::sync::Arc;

/// Execute the tree command
///
/// # Errors
///
/// Returns `KvfindError` if the walker cannot start, `root` itself cannot
/// be listed, or writing fails.
pub fn execute<S: SecretStore, W: Write>(
    store: Arc<S>,
    mount: &str,
    root: &str,
    max_in_flight: usize,
    out: &mut W,
) -> Result<()> {
    let walker = TreeWalker::new(store, max_in_flight)?;
    let root = path::container(root);

    let mut paths = walker.try_discover(mount, &root)?;
    paths.sort();
    log::debug!("found {} secrets under {root} in mount {mount}", paths.len());

    output::write_lines(out, &paths)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KvfindError;
    use crate::testing::FakeStore;

    fn store() -> Arc<FakeStore> {
        Arc::new(FakeStore::new("secret").with_leaves([
            "/foo",
            "/bar/baz",
            "/enterprise/organization/department/unit/team/user/actual-user",
        ]))
    }

    fn run(store: Arc<FakeStore>, root: &str) -> Result<String> {
        let mut out = Vec::new();
        execute(store, "secret", root, 4, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_tree_prints_sorted_leaves() {
        assert_eq!(
            run(store(), "/").unwrap(),
            "/bar/baz\n/enterprise/organization/department/unit/team/user/actual-user\n/foo\n"
        );
    }

    #[test]
    fn test_tree_accepts_unslashed_directory() {
        assert_eq!(run(store(), "bar").unwrap(), "/bar/baz\n");
        assert_eq!(run(store(), "/bar").unwrap(), "/bar/baz\n");
    }

    #[test]
    fn test_tree_root_failure_is_fatal() {
        let store = Arc::new(FakeStore::new("secret").with_failing_list("/"));
        let error = run(store, "/").unwrap_err();
        assert!(matches!(error, KvfindError::Store(_)));
    }
}
