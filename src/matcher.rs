use anyhow::Result;

use crate::{
    backtrack::{self, DEFAULT_MAX_DEPTH},
    memo::MatchCache,
    table, Pattern,
};

/// Which evaluation strategy a [`Matcher`] uses. All of them accept exactly
/// the same set of (text, pattern) pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Recursive backtracking; exponential on adversarial patterns.
    Backtrack,
    /// Full bottom-up table, O(n*m).
    #[default]
    Table,
    /// Top-down with a hash-map state cache.
    Memo,
}

#[derive(Clone, Debug)]
pub struct MatcherBuilder {
    strategy: Strategy,
    max_depth: usize,
}

impl Default for MatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MatcherBuilder {
    pub fn new() -> Self {
        Self {
            strategy: Strategy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn strategy(&mut self, strategy: Strategy) -> &mut Self {
        self.strategy = strategy;
        self
    }

    /// Maximum recursion depth for [`Strategy::Backtrack`]. Exceeding it makes
    /// [`Matcher::is_match`] fail. Ignored by the other strategies.
    pub fn max_depth(&mut self, max_depth: usize) -> &mut Self {
        self.max_depth = max_depth;
        self
    }

    pub fn build(&self, pattern: &str) -> Result<Matcher> {
        let pattern = Pattern::new(pattern)?;
        tracing::debug!(
            ?pattern,
            elements = pattern.num_elements(),
            stars = pattern.num_stars(),
            strategy = ?self.strategy,
            "compiled matcher"
        );
        Ok(Matcher {
            pattern,
            strategy: self.strategy,
            max_depth: self.max_depth,
            cache: MatchCache::new(),
        })
    }
}

#[derive(Clone)]
pub struct Matcher {
    pattern: Pattern,
    strategy: Strategy,
    max_depth: usize,
    cache: MatchCache,
}

impl Matcher {
    /// Validate `pattern` and build a matcher with the default strategy.
    pub fn new(pattern: &str) -> Result<Self> {
        MatcherBuilder::new().build(pattern)
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn cache(&self) -> &MatchCache {
        &self.cache
    }

    /// Returns true if the pattern matches the whole of `text`.
    pub fn is_match(&mut self, text: &str) -> Result<bool> {
        let text: Vec<char> = text.chars().collect();
        let pattern = self.pattern.chars();
        let r = match self.strategy {
            Strategy::Backtrack => backtrack::match_chars(&text, pattern, self.max_depth)?,
            Strategy::Table => table::match_chars(&text, pattern),
            Strategy::Memo => self.cache.is_match(&text, pattern),
        };
        Ok(r)
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("pattern", &self.pattern)
            .field("strategy", &self.strategy)
            .finish()
    }
}
