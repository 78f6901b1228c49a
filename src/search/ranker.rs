//! Filtering and ordering candidates by match score

use super::matcher::matches;
use std::cmp::Reverse;

/// A candidate that matched a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    /// The matched candidate
    pub path: &'a str,
    /// Adjacency score, higher is better
    pub score: usize,
}

/// Matching candidates with their scores, best first
///
/// The sort is stable, so equal scores keep their input order.
#[must_use]
pub fn rank_matches<'a, S: AsRef<str>>(prompt: &str, candidates: &'a [S]) -> Vec<Match<'a>> {
    let mut ranked: Vec<Match<'a>> = candidates
        .iter()
        .filter_map(|candidate| {
            let path = candidate.as_ref();
            matches(prompt, path).map(|score| Match { path, score })
        })
        .collect();
    ranked.sort_by_key(|m| Reverse(m.score));
    ranked
}

/// Matching candidates, best first
#[must_use]
pub fn rank<S: AsRef<str>>(prompt: &str, candidates: &[S]) -> Vec<String> {
    rank_matches(prompt, candidates)
        .into_iter()
        .map(|m| m.path.to_string())
        .collect()
}
