use crate::{
    pattern::{element_matches, STAR},
    HashMap,
};

/// Top-down evaluation of the same recurrence as [`crate::table`], computing
/// only the `(text_pos, pattern_pos)` states reachable from `(0, 0)`.
///
/// States are resolved with an explicit work stack, so long inputs do not
/// recurse.
#[derive(Clone, Default)]
pub struct MatchCache {
    /// States evaluated over the lifetime of the cache. The table itself is
    /// cleared on every [`MatchCache::is_match`] call; this counter is not.
    pub num_states: usize,
    state_table: HashMap<(usize, usize), bool>,
}

enum Step {
    Done(bool),
    Need((usize, usize)),
}

impl MatchCache {
    pub fn new() -> Self {
        MatchCache {
            num_states: 0,
            state_table: HashMap::default(),
        }
    }

    pub fn is_match(&mut self, text: &[char], pattern: &[char]) -> bool {
        // positions are only meaningful for one (text, pattern) pair
        self.state_table.clear();

        let mut todo = vec![(0, 0)];
        while let Some(&key) = todo.last() {
            if self.state_table.contains_key(&key) {
                todo.pop();
                continue;
            }
            match self.step(text, pattern, key) {
                Step::Done(v) => {
                    self.state_table.insert(key, v);
                    self.num_states += 1;
                    todo.pop();
                }
                // dependencies always have a larger i + j, so this terminates
                Step::Need(dep) => todo.push(dep),
            }
        }

        let r = self.state_table.get(&(0, 0)).copied().unwrap_or(false);
        tracing::trace!(
            states = self.state_table.len(),
            text_len = text.len(),
            pattern_len = pattern.len(),
            "memo match"
        );
        r
    }

    fn lookup(&self, key: (usize, usize)) -> Option<bool> {
        self.state_table.get(&key).copied()
    }

    fn step(&self, text: &[char], pattern: &[char], (i, j): (usize, usize)) -> Step {
        if j == pattern.len() {
            return Step::Done(i == text.len());
        }
        let first = i < text.len() && element_matches(pattern[j], text[i]);

        if j + 1 < pattern.len() && pattern[j + 1] == STAR {
            match self.lookup((i, j + 2)) {
                None => return Step::Need((i, j + 2)),
                Some(true) => return Step::Done(true),
                Some(false) => {}
            }
            if !first {
                return Step::Done(false);
            }
            match self.lookup((i + 1, j)) {
                None => Step::Need((i + 1, j)),
                Some(v) => Step::Done(v),
            }
        } else {
            if !first {
                return Step::Done(false);
            }
            match self.lookup((i + 1, j + 1)) {
                None => Step::Need((i + 1, j + 1)),
                Some(v) => Step::Done(v),
            }
        }
    }

    /// Estimate the size of the state table in bytes.
    pub fn num_bytes(&self) -> usize {
        self.state_table.capacity() * (3 * std::mem::size_of::<usize>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, pattern: &str) -> bool {
        let t: Vec<char> = text.chars().collect();
        let p: Vec<char> = pattern.chars().collect();
        MatchCache::new().is_match(&t, &p)
    }

    #[test]
    fn basic() {
        assert!(run("aab", "c*a*b"));
        assert!(!run("mississippi", "mis*is*p*."));
        assert!(run("", ""));
        assert!(!run("ab", ""));
    }

    #[test]
    fn visits_fewer_states_than_full_table() {
        let t: Vec<char> = "x".repeat(50).chars().collect();
        let p: Vec<char> = "abc".chars().collect();
        let mut cache = MatchCache::new();
        assert!(!cache.is_match(&t, &p));
        assert_eq!(cache.num_states, 1);
    }

    #[test]
    fn state_count_accumulates_across_calls() {
        let t: Vec<char> = "abc".chars().collect();
        let p: Vec<char> = "abd".chars().collect();
        let mut cache = MatchCache::new();
        assert!(!cache.is_match(&t, &p));
        let first = cache.num_states;
        assert_eq!(first, 3);
        assert!(!cache.is_match(&t, &p));
        assert_eq!(cache.num_states, 2 * first);
    }
}
