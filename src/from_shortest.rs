use crate::core::{contains, log_search, CharWindows, LongestSubstring};
use crate::instrumentation;

/// Ascending-length scan: find any window of length L that occurs in the
/// haystack, then look for one of length L + 1, rescanning from the start
/// of the needle.
///
/// A common window of length L + 1 has a common prefix of length L, so the
/// first level without a hit ends the search. The level loop replaces the
/// one-call-per-length recursion so deep needles cannot exhaust the stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct FromShortestSearch;

impl FromShortestSearch {
    /// Probe upward starting at `length` chars.
    ///
    /// Returns `None` when no window of `length` occurs in the haystack,
    /// which is different from `Some("")` (only possible for `length == 0`).
    pub fn find_from_length<'n>(
        &self,
        needle: &'n str,
        length: usize,
        haystack: &str,
    ) -> Option<&'n str> {
        let windows = CharWindows::new(needle);
        let n = windows.char_len();
        let mut best: Option<&'n str> = None;
        let mut length = length;

        'grow: while length <= n {
            instrumentation::add_lengths_probed(1);
            log::trace!("from-shortest: probing length {}", length);
            for start in 0..=(n - length) {
                instrumentation::add_candidates(1);
                let candidate = windows.window(start, length);
                if contains(haystack, candidate) {
                    best = Some(candidate);
                    length += 1;
                    continue 'grow;
                }
            }
            break;
        }

        best
    }
}

impl LongestSubstring for FromShortestSearch {
    fn name(&self) -> &'static str {
        "from-shortest"
    }

    fn find<'n>(&self, needle: &'n str, haystack: &str) -> &'n str {
        let found = self.find_from_length(needle, 1, haystack).unwrap_or("");
        log_search(self.name(), needle, haystack, found);
        found
    }
}
