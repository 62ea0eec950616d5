//! Bottom-up dynamic-programming matcher.
//!
//! `dp[i][j]` is true iff `text[i..]` matches `pattern[j..]`. The table is
//! filled once, from the bottom-right corner, and read at `dp[0][0]`.
//! Agrees with [`crate::backtrack`] on every input.

use crate::pattern::{element_matches, STAR};

/// Returns true if `pattern` matches the whole of `text`. O(n*m) time and space.
pub fn is_match(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    match_chars(&text, &pattern)
}

pub(crate) fn match_chars(text: &[char], pattern: &[char]) -> bool {
    MatchTable::build(text, pattern).is_match()
}

/// Row-major (n+1) x (m+1) boolean table.
pub(crate) struct MatchTable {
    width: usize,
    cells: Vec<bool>,
}

impl MatchTable {
    pub(crate) fn build(text: &[char], pattern: &[char]) -> Self {
        let n = text.len();
        let m = pattern.len();
        let width = m + 1;
        let mut cells = vec![false; (n + 1) * width];
        let idx = |i: usize, j: usize| i * width + j;

        cells[idx(n, m)] = true;

        for i in (0..=n).rev() {
            for j in (0..m).rev() {
                let first = i < n && element_matches(pattern[j], text[i]);
                cells[idx(i, j)] = if j + 1 < m && pattern[j + 1] == STAR {
                    // zero repetitions, or one more and stay on this element
                    cells[idx(i, j + 2)] || (first && cells[idx(i + 1, j)])
                } else {
                    first && cells[idx(i + 1, j + 1)]
                };
            }
        }

        tracing::trace!(rows = n + 1, cols = width, "filled match table");
        MatchTable { width, cells }
    }

    #[inline]
    pub(crate) fn get(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.width + j]
    }

    pub(crate) fn is_match(&self) -> bool {
        self.get(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn suffix_cells() {
        let t = chars("aab");
        let p = chars("c*a*b");
        let table = MatchTable::build(&t, &p);
        assert!(table.is_match());
        // "b" matches "b", "ab" matches "a*b"
        assert!(table.get(2, 4));
        assert!(table.get(1, 2));
        // "" does not match "b"
        assert!(!table.get(3, 4));
        assert!(table.get(3, 5));
    }

    #[test]
    fn empty_inputs() {
        assert!(is_match("", ""));
        assert!(is_match("", "a*b*"));
        assert!(!is_match("a", ""));
        assert!(!is_match("", "."));
    }
}
