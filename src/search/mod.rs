//! Fuzzy filtering of discovered paths
//!
//! [`matcher::matches`] decides whether a prompt is a case-insensitive
//! subsequence of a candidate and scores it by adjacency;
//! [`ranker::rank`] applies it to a whole candidate set.
//!
//! ```
//! use kvfind::search::rank;
//!
//! let paths = vec!["/bar/baz".to_string(), "/foo".to_string()];
//! assert_eq!(rank("ba", &paths), vec!["/bar/baz".to_string()]);
//! ```

pub mod matcher;
pub mod ranker;

pub use matcher::matches;
pub use ranker::{Match, rank, rank_matches};
