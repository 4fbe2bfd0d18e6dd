pub mod core;
pub mod elimination;
pub mod fixture;
pub mod from_longest;
pub mod from_shortest;
pub mod hashed;
pub mod instrumentation;
#[cfg(feature = "python")]
pub mod python_bindings;
pub mod simple;

use std::fmt;
use std::str::FromStr;

pub use crate::core::{CharWindows, LongestSubstring, Result, SearchError};
pub use crate::elimination::FromShortestWithEliminationSearch;
pub use crate::from_longest::FromLongestSearch;
pub use crate::from_shortest::FromShortestSearch;
pub use crate::hashed::HashedSearch;
pub use crate::simple::SimpleSearch;

/// Longest substring of `needle` that also occurs in `haystack`, using the
/// default strategy (`FromLongestSearch`).
pub fn find_longest_common_substring<'n>(needle: &'n str, haystack: &str) -> &'n str {
    FromLongestSearch.find(needle, haystack)
}

/// Every search strategy, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    Simple,
    #[default]
    FromLongest,
    FromShortest,
    Elimination,
    Hashed,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Simple,
        Strategy::FromLongest,
        Strategy::FromShortest,
        Strategy::Elimination,
        Strategy::Hashed,
    ];
}

impl LongestSubstring for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Simple => SimpleSearch.name(),
            Strategy::FromLongest => FromLongestSearch.name(),
            Strategy::FromShortest => FromShortestSearch.name(),
            Strategy::Elimination => FromShortestWithEliminationSearch.name(),
            Strategy::Hashed => HashedSearch.name(),
        }
    }

    fn find<'n>(&self, needle: &'n str, haystack: &str) -> &'n str {
        match self {
            Strategy::Simple => SimpleSearch.find(needle, haystack),
            Strategy::FromLongest => FromLongestSearch.find(needle, haystack),
            Strategy::FromShortest => FromShortestSearch.find(needle, haystack),
            Strategy::Elimination => FromShortestWithEliminationSearch.find(needle, haystack),
            Strategy::Hashed => HashedSearch.find(needle, haystack),
        }
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Strategy> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SearchError::UnknownStrategy(s.to_string()))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
