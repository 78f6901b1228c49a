//! Subsequence matching with an adjacency score

/// Match `prompt` against `candidate`, ignoring case
///
/// Returns `None` unless every prompt character occurs in the candidate
/// in order. On a match the score counts the prompt characters (after the
/// first) that matched right after the previous match. An empty prompt
/// matches everything with score 0.
///
/// # Examples
/// ```
/// use kvfind::search::matches;
///
/// assert_eq!(matches("seet", "secret"), Some(2));
/// assert_eq!(matches("asdf", "secret"), None);
/// ```
#[must_use]
pub fn matches(prompt: &str, candidate: &str) -> Option<usize> {
    let wanted: Vec<char> = prompt.chars().flat_map(char::to_lowercase).collect();
    if wanted.is_empty() {
        return Some(0);
    }

    let mut next = 0;
    let mut score = 0;
    let mut previous_matched = false;

    for c in candidate.chars().flat_map(char::to_lowercase) {
        if c != wanted[next] {
            previous_matched = false;
            continue;
        }

        if previous_matched {
            score += 1;
        }
        previous_matched = true;
        next += 1;

        if next == wanted.len() {
            return Some(score);
        }
    }

    None
}
