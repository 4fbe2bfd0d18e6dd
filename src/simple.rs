use crate::core::{log_search, CharWindows, LongestSubstring};
use crate::instrumentation;

/// Naive baseline: tries every window from longest to shortest, copying
/// each candidate into its own `String` before searching for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleSearch;

impl LongestSubstring for SimpleSearch {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn find<'n>(&self, needle: &'n str, haystack: &str) -> &'n str {
        let windows = CharWindows::new(needle);
        let n = windows.char_len();

        for length in (1..=n).rev() {
            instrumentation::add_lengths_probed(1);
            for start in 0..=(n - length) {
                let candidate: String = windows.window(start, length).to_string();
                instrumentation::add_candidates(1);
                instrumentation::add_containment_checks(1);

                if haystack.contains(candidate.as_str()) {
                    let found = windows.window(start, length);
                    log_search(self.name(), needle, haystack, found);
                    return found;
                }
            }
        }

        log_search(self.name(), needle, haystack, "");
        ""
    }
}
