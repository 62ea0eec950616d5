//! Recursive backtracking matcher.
//!
//! Each call consumes one pattern unit (a single element, or an `x*` pair)
//! from the front. Cost is exponential in the number of `*` operators on
//! adversarial input; [`crate::table`] solves the same problem in O(n*m).

use anyhow::{anyhow, ensure, Result};

use crate::pattern::{element_matches, STAR};

pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Stack reserved per recursion level when the search runs on its own thread.
/// Several times the size of an unoptimized frame.
const FRAME_BYTES: usize = 4 * 1024;
const BASE_STACK_BYTES: usize = 64 * 1024;
/// Searches that cannot recurse deeper than this stay on the caller's stack.
const INLINE_DEPTH: usize = 128;

/// Returns true if `pattern` matches the whole of `text`.
///
/// Patterns longer than a few hundred characters are searched on a worker
/// thread whose stack is sized for `pattern.len()` levels.
pub fn is_match(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    // an unbounded depth limit cannot be hit; only a failed thread spawn errors
    match_chars(&text, &pattern, usize::MAX).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "backtracking search failed");
        false
    })
}

/// Like [`is_match`], but fails instead of recursing deeper than `max_depth`.
///
/// Any `max_depth` is safe from stack overflow: the search runs on a thread
/// with 4 KiB of stack reserved per level, so the bound is the memory the
/// caller is willing to reserve (about 40 MiB at [`DEFAULT_MAX_DEPTH`]).
pub fn is_match_bounded(text: &str, pattern: &str, max_depth: usize) -> Result<bool> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    match_chars(&text, &pattern, max_depth)
}

pub(crate) fn match_chars(text: &[char], pattern: &[char], max_depth: usize) -> Result<bool> {
    // every call consumes at least one pattern character
    let depth = max_depth.min(pattern.len());
    let mut bt = Backtracker::new(max_depth);

    let r = if depth <= INLINE_DEPTH {
        bt.matches(text, pattern, 0)?
    } else {
        let stack_size = (depth + 1)
            .saturating_mul(FRAME_BYTES)
            .saturating_add(BASE_STACK_BYTES);
        std::thread::scope(|s| -> Result<bool> {
            let handle = std::thread::Builder::new()
                .name("backtrack".to_string())
                .stack_size(stack_size)
                .spawn_scoped(s, || bt.matches(text, pattern, 0))?;
            handle
                .join()
                .map_err(|_| anyhow!("backtracking thread panicked"))?
        })?
    };

    tracing::trace!(
        calls = bt.num_calls,
        max_depth_seen = bt.max_depth_seen,
        result = r,
        "backtrack"
    );
    Ok(r)
}

struct Backtracker {
    max_depth: usize,
    max_depth_seen: usize,
    num_calls: usize,
}

impl Backtracker {
    fn new(max_depth: usize) -> Self {
        Backtracker {
            max_depth,
            max_depth_seen: 0,
            num_calls: 0,
        }
    }

    fn matches(&mut self, text: &[char], pattern: &[char], depth: usize) -> Result<bool> {
        ensure!(
            depth <= self.max_depth,
            "backtracking depth limit {} exceeded",
            self.max_depth
        );
        self.num_calls += 1;
        self.max_depth_seen = self.max_depth_seen.max(depth);

        let starred = pattern.len() >= 2 && pattern[1] == STAR;

        if pattern.is_empty() {
            return Ok(text.is_empty());
        }
        if text.is_empty() {
            // only x* pairs can still match nothing
            return if starred {
                self.matches(text, &pattern[2..], depth + 1)
            } else {
                Ok(false)
            };
        }

        if !starred {
            if element_matches(pattern[0], text[0]) {
                return self.matches(&text[1..], &pattern[1..], depth + 1);
            }
            return Ok(false);
        }

        let rest = &pattern[2..];
        if self.matches(text, rest, depth + 1)? {
            return Ok(true);
        }
        // take one more repetition per step; stop at the first character the
        // element rejects
        for (idx, &c) in text.iter().enumerate() {
            if !element_matches(pattern[0], c) {
                return Ok(false);
            }
            if self.matches(&text[idx + 1..], rest, depth + 1)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_limit_is_reported() {
        let text = "a".repeat(64);
        assert!(is_match_bounded(&text, &text, 16).is_err());
        assert!(is_match_bounded(&text, &text, 100).unwrap());
    }

    #[test]
    fn deep_search_runs_off_the_caller_stack() {
        let text = "a".repeat(20_000);
        assert!(is_match(&text, &text));
        let pattern = format!("{}b", text);
        assert!(!is_match(&text, &pattern));
    }

    #[test]
    fn stray_star_is_literal() {
        assert!(is_match("*", "*"));
        assert!(!is_match("a", "*a"));
        assert!(is_match("*a", "*a"));
    }
}
