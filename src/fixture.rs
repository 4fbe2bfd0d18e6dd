//! Deterministic inputs for tests, benchmarks and the dev binaries.
use crate::core::CharWindows;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use regex::Regex;
use thiserror::Error;

/// Needle used by the benchmarks and dev binaries.
pub const DEFAULT_NEEDLE: &str = "interrelationships";

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("masking pattern rejected: {0}")]
    Pattern(#[from] regex::Error),
}

/// A generated needle/haystack pair together with the expected answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderCase {
    pub needle: String,
    pub haystack: String,
    pub expected: String,
}

/// Haystack of growing runs `ab`, `aab`, `aaab`, ... cut to exactly
/// `haystack_len` chars (the last run is shortened to fit), searched with a
/// needle of `needle_len` `a`s. The expected answer is the needle clipped to
/// the longest run.
pub fn ladder(needle_len: usize, haystack_len: usize) -> LadderCase {
    let mut haystack = String::with_capacity(haystack_len);
    // a one-char haystack has no room for `ab`
    let mut run = 1usize.min(haystack_len.saturating_sub(1));
    let mut longest = 0usize;

    while haystack.len() < haystack_len {
        haystack.extend(std::iter::repeat('a').take(run));
        haystack.push('b');
        longest = longest.max(run);
        run = (run + 1).min(haystack_len.saturating_sub(haystack.len() + 1));
    }

    LadderCase {
        needle: "a".repeat(needle_len),
        haystack,
        expected: "a".repeat(needle_len.min(longest)),
    }
}

/// `len` chars drawn uniformly from `alphabet`.
pub fn random_text(seed: u64, len: usize, alphabet: &[char]) -> String {
    if alphabet.is_empty() {
        return String::new();
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

const WORDS: &[&str] = &[
    "interrelation",
    "interrelations",
    "interrelationship",
    "interrelationships",
    "interrelationship's",
    "relation",
    "relationship",
    "relationships",
    "internship",
    "interstate",
    "ship",
    "shipping",
    "nation",
    "ratio",
    "elation",
    "tint",
    "linear",
];

const SYLLABLES: &[&str] = &[
    "in", "ter", "re", "la", "tion", "ship", "s", "con", "pro", "ment", "al", "ist", "ic",
    "ness", "a", "o", "ut", "ex",
];

/// Newline-separated word list in the shape of a dictionary file: mostly
/// syllable soup, with real words sharing long pieces of `DEFAULT_NEEDLE`
/// mixed in.
pub fn word_corpus(seed: u64, words: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = String::new();

    for _ in 0..words {
        if rng.gen_bool(0.05) {
            out.push_str(WORDS[rng.gen_range(0..WORDS.len())]);
        } else {
            for _ in 0..rng.gen_range(1..=5) {
                out.push_str(SYLLABLES[rng.gen_range(0..SYLLABLES.len())]);
            }
        }
        out.push('\n');
    }

    out
}

/// Overwrite every occurrence in `haystack` of a `needle` substring longer
/// than `result_size * |needle|` chars with as many `x`s.
///
/// Alternatives are tried longest first, so each occurrence is masked whole.
/// When `needle` contains no `x`, the longest common substring of the
/// result is at most `result_size * |needle|` chars long.
pub fn mask_long_matches(
    haystack: &str,
    needle: &str,
    result_size: f64,
) -> Result<String, FixtureError> {
    let windows = CharWindows::new(needle);
    let n = windows.char_len();
    let limit = result_size * n as f64;
    let mut alternatives: Vec<String> = Vec::new();

    let mut length = n;
    while length > 0 && length as f64 > limit {
        for start in 0..=(n - length) {
            alternatives.push(regex::escape(windows.window(start, length)));
        }
        length -= 1;
    }

    if alternatives.is_empty() {
        return Ok(haystack.to_string());
    }

    let pattern = Regex::new(&alternatives.join("|"))?;
    log::debug!(
        "masking {} alternatives longer than {:.1} chars",
        alternatives.len(),
        limit
    );
    Ok(pattern
        .replace_all(haystack, |caps: &regex::Captures| {
            "x".repeat(caps[0].chars().count())
        })
        .into_owned())
}

/// How much of the `interrelation*` word family to hide from the haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveLong {
    None,
    OnlyLongest,
    All,
}

/// Replace long `interrelation*` words with `"keep looking"`.
pub fn remove_long(haystack: &str, mode: RemoveLong) -> Result<String, FixtureError> {
    let pattern = match mode {
        RemoveLong::None => return Ok(haystack.to_string()),
        RemoveLong::OnlyLongest => {
            "(interrelationship)|(interrelationships)|(interrelationship's)"
        }
        RemoveLong::All => {
            "(interrelation)|(interrelations)|(interrelationship)|(interrelationships)|(interrelationship's)"
        }
    };
    let re = Regex::new(pattern)?;
    Ok(re.replace_all(haystack, "keep looking").into_owned())
}
