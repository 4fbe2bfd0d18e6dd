use longsub::core::{LongestSubstring, SearchError};
use longsub::elimination::FromShortestWithEliminationSearch;
use longsub::fixture::{self, ladder, random_text};
use longsub::from_longest::FromLongestSearch;
use longsub::from_shortest::FromShortestSearch;
use longsub::hashed::HashedSearch;
use longsub::simple::SimpleSearch;

// Longest common substring by dynamic programming over chars: returns the
// leftmost maximal window of `needle`.
fn oracle(needle: &str, haystack: &str) -> String {
    let a: Vec<char> = needle.chars().collect();
    let b: Vec<char> = haystack.chars().collect();
    let mut best_len = 0usize;
    let mut prev = vec![0usize; b.len() + 1];
    for i in 1..=a.len() {
        let mut cur = vec![0usize; b.len() + 1];
        for j in 1..=b.len() {
            if a[i - 1] == b[j - 1] {
                cur[j] = prev[j - 1] + 1;
                best_len = best_len.max(cur[j]);
            }
        }
        prev = cur;
    }
    if best_len == 0 {
        return String::new();
    }
    (0..=a.len() - best_len)
        .map(|s| a[s..s + best_len].iter().collect::<String>())
        .find(|w| haystack.contains(w.as_str()))
        .unwrap_or_default()
}

fn run_case_study_scenarios<S: LongestSubstring>(s: S) {
    let cases: &[(&str, &str, &str)] = &[
        ("", "abcd", ""),
        ("a", "bcde", ""),
        ("a", "bcdea", "a"),
        ("ala", "ma kota ala", "ala"),
        ("alan", "ma kota ala", "ala"),
        ("alakot", "ma kota ala", "ala"),
        ("cumulative sum", "lorem ipsum dolor sit amet", "sum"),
        ("aaaaaaaaaaaa", "a aa aaa aaaa aaaaa aaaaaa aaaaaaa", "aaaaaaa"),
        ("aaaaaaaaaa", "abaabaaabaaaabaaaaabaaaaaab", "aaaaaa"),
    ];
    for &(needle, haystack, expected) in cases {
        assert_eq!(
            s.find(needle, haystack),
            expected,
            "{}: needle={:?} haystack={:?}",
            s.name(),
            needle,
            haystack
        );
    }
}

#[test]
fn case_study_scenarios() {
    run_case_study_scenarios(SimpleSearch);
    run_case_study_scenarios(FromLongestSearch);
    run_case_study_scenarios(FromShortestSearch);
    run_case_study_scenarios(FromShortestWithEliminationSearch);
    run_case_study_scenarios(HashedSearch);
}

fn run_ladder_cases<S: LongestSubstring>(s: S) {
    for (needle_len, haystack_len) in [(5, 100), (50, 100), (5, 1_000), (50, 1_000)] {
        let case = ladder(needle_len, haystack_len);
        assert_eq!(
            s.find(&case.needle, &case.haystack),
            case.expected,
            "{}: ladder({}, {})",
            s.name(),
            needle_len,
            haystack_len
        );
    }
}

#[test]
fn ladder_cases() {
    run_ladder_cases(SimpleSearch);
    run_ladder_cases(FromLongestSearch);
    run_ladder_cases(FromShortestSearch);
    run_ladder_cases(FromShortestWithEliminationSearch);
    run_ladder_cases(HashedSearch);
}

fn run_empty_and_disjoint_inputs<S: LongestSubstring>(s: S) {
    for haystack in ["", "x", "ma kota ala"] {
        assert_eq!(s.find("", haystack), "", "{}", s.name());
    }
    assert_eq!(s.find("abc", ""), "", "{}", s.name());
    assert_eq!(s.find("abcabc", "xyz xyz"), "", "{}", s.name());
}

#[test]
fn empty_and_disjoint_inputs() {
    run_empty_and_disjoint_inputs(SimpleSearch);
    run_empty_and_disjoint_inputs(FromLongestSearch);
    run_empty_and_disjoint_inputs(FromShortestSearch);
    run_empty_and_disjoint_inputs(FromShortestWithEliminationSearch);
    run_empty_and_disjoint_inputs(HashedSearch);
}

fn run_verbatim_needle_is_returned_whole<S: LongestSubstring>(s: S) {
    let haystack = "Let's implement the new authentication system using JWT tokens";
    for needle in ["authentication", "JWT tokens", "L", haystack] {
        assert_eq!(s.find(needle, haystack), needle, "{}", s.name());
    }
}

#[test]
fn verbatim_needle_is_returned_whole() {
    run_verbatim_needle_is_returned_whole(SimpleSearch);
    run_verbatim_needle_is_returned_whole(FromLongestSearch);
    run_verbatim_needle_is_returned_whole(FromShortestSearch);
    run_verbatim_needle_is_returned_whole(FromShortestWithEliminationSearch);
    run_verbatim_needle_is_returned_whole(HashedSearch);
}

fn run_multibyte_text_is_cut_at_char_boundaries<S: LongestSubstring>(s: S) {
    assert_eq!(s.find("żółw i gęś", "mała gęśla"), " gęś", "{}", s.name());
    assert_eq!(s.find("ąę", "ęą"), "ą", "{}", s.name());
    assert_eq!(s.find("日本語のテキスト", "テキストの日本"), "テキスト", "{}", s.name());
}

#[test]
fn multibyte_text_is_cut_at_char_boundaries() {
    run_multibyte_text_is_cut_at_char_boundaries(SimpleSearch);
    run_multibyte_text_is_cut_at_char_boundaries(FromLongestSearch);
    run_multibyte_text_is_cut_at_char_boundaries(FromShortestSearch);
    run_multibyte_text_is_cut_at_char_boundaries(FromShortestWithEliminationSearch);
    run_multibyte_text_is_cut_at_char_boundaries(HashedSearch);
}

fn run_matches_oracle_on_random_text<S: LongestSubstring>(s: S) {
    let alphabets: [&[char]; 3] = [&['a', 'b'], &['a', 'b', 'c'], &['x', 'y', 'ź', ' ']];
    for seed in 0..60u64 {
        let alphabet = alphabets[(seed % 3) as usize];
        let needle = random_text(seed, 1 + (seed as usize % 17), alphabet);
        let haystack = random_text(seed + 1_000, seed as usize % 41, alphabet);
        let found = s.find(&needle, &haystack);

        assert_eq!(
            found,
            oracle(&needle, &haystack),
            "{}: needle={:?} haystack={:?}",
            s.name(),
            needle,
            haystack
        );
        assert!(needle.contains(found) && haystack.contains(found));
        assert!(found.chars().count() <= needle.chars().count().min(haystack.chars().count()));
    }
}

#[test]
fn matches_oracle_on_random_text() {
    run_matches_oracle_on_random_text(SimpleSearch);
    run_matches_oracle_on_random_text(FromLongestSearch);
    run_matches_oracle_on_random_text(FromShortestSearch);
    run_matches_oracle_on_random_text(FromShortestWithEliminationSearch);
    run_matches_oracle_on_random_text(HashedSearch);
}

fn run_masked_corpus_caps_the_result<S: LongestSubstring>(s: S) {
    let needle = fixture::DEFAULT_NEEDLE;
    let corpus = fixture::word_corpus(3, 2_000);
    let n = needle.chars().count();
    for ratio in [0.0, 0.5, 0.75, 1.0] {
        let haystack = fixture::mask_long_matches(&corpus, needle, ratio).unwrap();
        let found = s.find(needle, &haystack);
        assert!(
            found.chars().count() as f64 <= ratio * n as f64,
            "{}: ratio={} found={:?}",
            s.name(),
            ratio,
            found
        );
    }
}

#[test]
fn masked_corpus_caps_the_result() {
    run_masked_corpus_caps_the_result(SimpleSearch);
    run_masked_corpus_caps_the_result(FromLongestSearch);
    run_masked_corpus_caps_the_result(FromShortestSearch);
    run_masked_corpus_caps_the_result(FromShortestWithEliminationSearch);
    run_masked_corpus_caps_the_result(HashedSearch);
}

#[test]
fn strategies_agree_on_generated_corpus() {
    let corpus = fixture::word_corpus(11, 3_000);
    let needles = [fixture::DEFAULT_NEEDLE, "relationshipping", "proconsulate", "zzz"];
    for needle in needles {
        let expected = FromLongestSearch.find(needle, &corpus);
        assert_eq!(SimpleSearch.find(needle, &corpus), expected);
        assert_eq!(FromShortestSearch.find(needle, &corpus), expected);
        assert_eq!(FromShortestWithEliminationSearch.find(needle, &corpus), expected);
        assert_eq!(HashedSearch.find(needle, &corpus), expected);
    }
}

fn run_checked_entry_rejects_absent_inputs<S: LongestSubstring>(s: S) {
    assert_eq!(
        s.find_checked(None, Some("haystack")),
        Err(SearchError::InvalidArgument { name: "needle" })
    );
    assert_eq!(
        s.find_checked(Some("needle"), None),
        Err(SearchError::InvalidArgument { name: "haystack" })
    );
    assert_eq!(s.find_checked(Some("ala"), Some("ma kota ala")), Ok("ala"));
}

#[test]
fn checked_entry_rejects_absent_inputs() {
    run_checked_entry_rejects_absent_inputs(SimpleSearch);
    run_checked_entry_rejects_absent_inputs(FromLongestSearch);
    run_checked_entry_rejects_absent_inputs(FromShortestSearch);
    run_checked_entry_rejects_absent_inputs(FromShortestWithEliminationSearch);
    run_checked_entry_rejects_absent_inputs(HashedSearch);
}
