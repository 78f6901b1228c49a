//! Path helpers for the hierarchical secret namespace
//!
//! Paths always start with `/`. A trailing `/` marks a container
//! (directory-like) node, its absence marks a leaf secret.

/// Separator between path segments
pub const SEPARATOR: char = '/';

/// Whether the path denotes a container node
#[must_use]
pub fn is_container(path: &str) -> bool {
    path.ends_with(SEPARATOR)
}

/// Join a container path with an entry name returned by a listing
///
/// Listings return names relative to their parent, so the parent's
/// trailing separator is reused as the joint.
#[must_use]
pub fn join(parent: &str, name: &str) -> String {
    let mut joined = String::with_capacity(parent.len() + name.len() + 1);
    joined.push_str(parent);
    if !parent.ends_with(SEPARATOR) {
        joined.push(SEPARATOR);
    }
    joined.push_str(name.trim_start_matches(SEPARATOR));
    joined
}

/// Normalize user input into a container path (`/a/b/`)
#[must_use]
pub fn container(input: &str) -> String {
    let trimmed = input.trim().trim_matches(SEPARATOR);
    if trimmed.is_empty() {
        return SEPARATOR.to_string();
    }
    format!("/{trimmed}/")
}

/// Normalize user input into a leaf path (`/a/b`)
#[must_use]
pub fn leaf(input: &str) -> String {
    let trimmed = input.trim().trim_matches(SEPARATOR);
    format!("/{trimmed}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_under_root() {
        assert_eq!(join("/", "foo"), "/foo");
        assert_eq!(join("/", "bar/"), "/bar/");
    }

    #[test]
    fn test_join_nested() {
        assert_eq!(join("/bar/", "baz"), "/bar/baz");
        assert_eq!(join("/bar", "baz"), "/bar/baz");
        assert_eq!(join("/a/b/", "c/"), "/a/b/c/");
    }

    #[test]
    fn test_is_container() {
        assert!(is_container("/"));
        assert!(is_container("/bar/"));
        assert!(!is_container("/bar/baz"));
    }

    #[test]
    fn test_container_normalization() {
        assert_eq!(container(""), "/");
        assert_eq!(container("/"), "/");
        assert_eq!(container("bar"), "/bar/");
        assert_eq!(container("/bar"), "/bar/");
        assert_eq!(container("/a/b/"), "/a/b/");
    }

    #[test]
    fn test_leaf_normalization() {
        assert_eq!(leaf("foo"), "/foo");
        assert_eq!(leaf("/bar/baz/"), "/bar/baz");
        assert_eq!(leaf(" /bar/baz "), "/bar/baz");
    }
}
