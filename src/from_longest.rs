use crate::core::{contains, log_search, CharWindows, LongestSubstring};
use crate::instrumentation;

/// Descending-length scan over borrowed needle windows.
///
/// The first window that occurs in the haystack is the answer: nothing
/// longer matched, and starts are tried left to right.
#[derive(Debug, Clone, Copy, Default)]
pub struct FromLongestSearch;

impl LongestSubstring for FromLongestSearch {
    fn name(&self) -> &'static str {
        "from-longest"
    }

    fn find<'n>(&self, needle: &'n str, haystack: &str) -> &'n str {
        let windows = CharWindows::new(needle);
        let n = windows.char_len();
        // a window of `len` chars spans at least `len` bytes
        let longest = n.min(haystack.len());

        for length in (1..=longest).rev() {
            instrumentation::add_lengths_probed(1);
            for start in 0..=(n - length) {
                instrumentation::add_candidates(1);
                let candidate = windows.window(start, length);
                if contains(haystack, candidate) {
                    log_search(self.name(), needle, haystack, candidate);
                    return candidate;
                }
            }
        }

        log_search(self.name(), needle, haystack, "");
        ""
    }
}
