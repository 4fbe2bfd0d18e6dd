// HashedSearch: binary search on the answer length.
//
// Common-substring existence is prefix-closed: if some window of length L
// occurs in both strings, its length L - 1 prefix does too. So "is there a
// common window of length L" flips from true to false exactly once and the
// longest length can be bisected. Each test of a length L:
//
// 1. Hashes every L-char window of the haystack with a rolling 64-bit
//    polynomial hash (base 257, wrapping arithmetic) computed from prefix
//    tables in O(1) per window, and buckets the window starts by hash.
// 2. Walks the needle's L-char windows left to right and confirms every
//    hash hit with a byte comparison, so collisions cost time but never
//    produce a wrong answer.
//
// The first confirmed needle window at the final length is returned, which
// is the same leftmost window the descending scan would find.
use crate::core::{log_search, CharWindows, LongestSubstring};
use crate::instrumentation;
use ahash::AHashMap as HashMap;
use smallvec::SmallVec;

type Bucket = SmallVec<[usize; 4]>;

const BASE: u64 = 257;

/// Rolling-hash bisection over the candidate length.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashedSearch;

// Prefix hashes `h` and powers `p` (base 257) for a byte string, so the hash
// of bytes [l, r) is h[r] - h[l] * p[r - l].
struct PrefixHashes {
    h: Vec<u64>,
    p: Vec<u64>,
}

impl PrefixHashes {
    fn new(s: &[u8]) -> PrefixHashes {
        let mut h = Vec::with_capacity(s.len() + 1);
        let mut p = Vec::with_capacity(s.len() + 1);
        let (mut last_h, mut last_p) = (0u64, 1u64);
        h.push(last_h);
        p.push(last_p);
        for &b in s {
            last_h = last_h.wrapping_mul(BASE).wrapping_add(b as u64);
            last_p = last_p.wrapping_mul(BASE);
            h.push(last_h);
            p.push(last_p);
        }
        PrefixHashes { h, p }
    }

    #[inline]
    fn range(&self, l: usize, r: usize) -> u64 {
        self.h[r].wrapping_sub(self.h[l].wrapping_mul(self.p[r - l]))
    }
}

impl HashedSearch {
    // Leftmost needle window of `length` chars that occurs in the haystack.
    fn first_common<'n>(
        needle: &CharWindows<'n>,
        needle_hashes: &PrefixHashes,
        haystack: &CharWindows<'_>,
        haystack_hashes: &PrefixHashes,
        length: usize,
    ) -> Option<&'n str> {
        instrumentation::add_lengths_probed(1);
        let hay_windows = haystack.char_len() + 1 - length;
        let mut table: HashMap<u64, Bucket> = HashMap::with_capacity(hay_windows);

        for start in 0..hay_windows {
            let l = haystack.byte_offset(start);
            let r = haystack.byte_offset(start + length);
            table.entry(haystack_hashes.range(l, r)).or_default().push(start);
        }
        instrumentation::add_windows_hashed(hay_windows as u64);

        for start in 0..=(needle.char_len() - length) {
            instrumentation::add_candidates(1);
            let l = needle.byte_offset(start);
            let r = needle.byte_offset(start + length);
            let Some(bucket) = table.get(&needle_hashes.range(l, r)) else {
                continue;
            };

            let candidate = needle.window(start, length);
            for &hay_start in bucket {
                if haystack.window(hay_start, length).as_bytes() == candidate.as_bytes() {
                    return Some(candidate);
                }
                instrumentation::add_hash_collisions(1);
            }
        }

        None
    }
}

impl LongestSubstring for HashedSearch {
    fn name(&self) -> &'static str {
        "hashed"
    }

    fn find<'n>(&self, needle: &'n str, haystack: &str) -> &'n str {
        let needle_windows = CharWindows::new(needle);
        let haystack_windows = CharWindows::new(haystack);

        // invariant: a common window of `low` chars exists (`best`), and
        // none longer than `high` does
        let mut low = 0usize;
        let mut high = needle_windows.char_len().min(haystack_windows.char_len());
        let mut best: &'n str = "";

        if high > 0 {
            let needle_hashes = PrefixHashes::new(needle.as_bytes());
            let haystack_hashes = PrefixHashes::new(haystack.as_bytes());

            while low < high {
                let mid = (low + high + 1) / 2;
                log::trace!("hashed: probing length {} (low={} high={})", mid, low, high);
                match Self::first_common(
                    &needle_windows,
                    &needle_hashes,
                    &haystack_windows,
                    &haystack_hashes,
                    mid,
                ) {
                    Some(found) => {
                        low = mid;
                        best = found;
                    }
                    None => high = mid - 1,
                }
            }
        }

        log_search(self.name(), needle, haystack, best);
        best
    }
}
