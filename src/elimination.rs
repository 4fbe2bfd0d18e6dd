use crate::core::{contains, log_search, CharWindows, LongestSubstring};
use crate::instrumentation;

/// Ascending-length scan that never revisits a start position.
///
/// If start `s` is the first to match at length L, every earlier start
/// failed at L and so fails at L + 1 as well (its L + 1 window has the
/// failing L window as a prefix). The next level therefore resumes at `s`,
/// and the start pointer only moves forward across all levels.
#[derive(Debug, Clone, Copy, Default)]
pub struct FromShortestWithEliminationSearch;

impl FromShortestWithEliminationSearch {
    /// Probe upward from `length` chars, considering only starts at or
    /// after `start_from`. `None` means no window matched at `length`.
    pub fn find_from<'n>(
        &self,
        needle: &'n str,
        length: usize,
        start_from: usize,
        haystack: &str,
    ) -> Option<&'n str> {
        let windows = CharWindows::new(needle);
        let n = windows.char_len();
        let mut best: Option<&'n str> = None;
        let mut length = length;
        let mut start = start_from;

        'grow: while length <= n {
            instrumentation::add_lengths_probed(1);
            log::trace!("elimination: probing length {} from start {}", length, start);
            while n.checked_sub(length).is_some_and(|last| start <= last) {
                instrumentation::add_candidates(1);
                let candidate = windows.window(start, length);
                if contains(haystack, candidate) {
                    best = Some(candidate);
                    length += 1;
                    continue 'grow;
                }
                start += 1;
            }
            break;
        }

        best
    }
}

impl LongestSubstring for FromShortestWithEliminationSearch {
    fn name(&self) -> &'static str {
        "elimination"
    }

    fn find<'n>(&self, needle: &'n str, haystack: &str) -> &'n str {
        let found = self.find_from(needle, 1, 0, haystack).unwrap_or("");
        log_search(self.name(), needle, haystack, found);
        found
    }
}
