use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// An input was absent (only reachable through `find_checked` or the
    /// Python bindings, since `&str` itself cannot be null).
    #[error("invalid argument: `{name}` must not be absent")]
    InvalidArgument { name: &'static str },

    #[error("unknown strategy `{0}` (expected one of: simple, from-longest, from-shortest, elimination, hashed)")]
    UnknownStrategy(String),
}

/// Trait describing a longest-common-substring search strategy.
pub trait LongestSubstring {
    /// Short stable name used for logs, CLI selection and benchmark ids.
    fn name(&self) -> &'static str;

    /// Return the longest substring of `needle` that also occurs in
    /// `haystack`, or `""` if there is none. Among several maximal
    /// substrings the leftmost one in `needle` is returned.
    fn find<'n>(&self, needle: &'n str, haystack: &str) -> &'n str;

    /// Same as `find`, for callers whose inputs may be absent.
    fn find_checked<'n>(
        &self,
        needle: Option<&'n str>,
        haystack: Option<&str>,
    ) -> Result<&'n str> {
        let needle = needle.ok_or(SearchError::InvalidArgument { name: "needle" })?;
        let haystack = haystack.ok_or(SearchError::InvalidArgument { name: "haystack" })?;
        Ok(self.find(needle, haystack))
    }
}

/// Read-only view over a string that hands out `char`-aligned windows
/// as borrowed slices.
///
/// Positions and lengths are counted in `char`s. For ASCII text the byte
/// offset of a char is its index, so no boundary table is built.
#[derive(Debug, Clone)]
pub struct CharWindows<'a> {
    text: &'a str,
    // byte offset of every char start, followed by `text.len()`
    bounds: Option<Vec<usize>>,
}

impl<'a> CharWindows<'a> {
    pub fn new(text: &'a str) -> CharWindows<'a> {
        let bounds = if text.is_ascii() {
            None
        } else {
            let mut b: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
            b.push(text.len());
            Some(b)
        };
        CharWindows { text, bounds }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Number of chars in the underlying text.
    pub fn char_len(&self) -> usize {
        match &self.bounds {
            None => self.text.len(),
            Some(b) => b.len() - 1,
        }
    }

    /// Byte offset of the char at `idx` (`idx == char_len()` is the end).
    #[inline]
    pub fn byte_offset(&self, idx: usize) -> usize {
        match &self.bounds {
            None => idx,
            Some(b) => b[idx],
        }
    }

    /// The `len` chars starting at char `start`. Panics if the window runs
    /// past the end, like slice indexing.
    #[inline]
    pub fn window(&self, start: usize, len: usize) -> &'a str {
        &self.text[self.byte_offset(start)..self.byte_offset(start + len)]
    }
}

/// Containment check shared by the borrowed-window strategies.
#[inline]
pub(crate) fn contains(haystack: &str, window: &str) -> bool {
    crate::instrumentation::add_containment_checks(1);
    memchr::memmem::find(haystack.as_bytes(), window.as_bytes()).is_some()
}

pub(crate) fn log_search(strategy: &str, needle: &str, haystack: &str, found: &str) {
    log::debug!(
        "{}: needle_bytes={} haystack_bytes={} result_chars={}",
        strategy,
        needle.len(),
        haystack.len(),
        found.chars().count()
    );
}
