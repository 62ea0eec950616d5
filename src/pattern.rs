use std::fmt::Debug;

use anyhow::{ensure, Result};

pub const ANY_CHAR: char = '.';
pub const STAR: char = '*';

/// Returns true if pattern element `elt` accepts the character `c`.
#[inline]
pub(crate) fn element_matches(elt: char, c: char) -> bool {
    elt == ANY_CHAR || elt == c
}

/// A validated `.`/`*` pattern.
///
/// Every `*` must follow a literal or `.`; a leading `*` or a `**` run is
/// rejected. The raw matchers in [`crate::backtrack`] and [`crate::table`]
/// accept unvalidated input and read such a `*` as a literal character.
#[derive(Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    chars: Vec<char>,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self> {
        let chars: Vec<char> = source.chars().collect();
        for (idx, &c) in chars.iter().enumerate() {
            if c != STAR {
                continue;
            }
            ensure!(
                idx > 0,
                "'*' at start of pattern {:?} has nothing to repeat",
                source
            );
            ensure!(
                chars[idx - 1] != STAR,
                "'**' at offset {} in pattern {:?}",
                idx - 1,
                source
            );
        }
        Ok(Pattern {
            source: source.to_string(),
            chars,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of elements, counting `x*` as one.
    pub fn num_elements(&self) -> usize {
        self.chars.iter().filter(|&&c| c != STAR).count()
    }

    pub fn num_stars(&self) -> usize {
        self.chars.len() - self.num_elements()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pattern({:?})", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed() {
        for p in ["", "a", ".", "a*", ".*", "c*a*b", "mis*is*p*.", "ab*a*c*a"] {
            assert!(Pattern::new(p).is_ok(), "{p}");
        }
    }

    #[test]
    fn rejects_dangling_star() {
        assert!(Pattern::new("*").is_err());
        assert!(Pattern::new("*a").is_err());
        assert!(Pattern::new("a**").is_err());
    }

    #[test]
    fn counts_elements() {
        let p = Pattern::new("c*a*b.").unwrap();
        assert_eq!(p.num_elements(), 4);
        assert_eq!(p.num_stars(), 2);
    }
}
