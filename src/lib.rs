mod digits;
mod grid;
mod matcher;
mod memo;
mod min_stack;
mod parity;
mod pattern;
mod reachable;
mod spiral;
mod word_search;

pub mod backtrack;
pub mod table;

pub type HashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;
pub type HashSet<K> = hashbrown::HashSet<K, ahash::RandomState>;

pub use digits::count_numbers;
pub use grid::Grid;
pub use matcher::{Matcher, MatcherBuilder, Strategy};
pub use memo::MatchCache;
pub use min_stack::MinStack;
pub use parity::partition_by_parity;
pub use pattern::Pattern;
pub use reachable::{count_reachable, digit_sum};
pub use spiral::spiral_order;
pub use word_search::{word_exists, word_exists_recursive};
