use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use longsub::fixture::{self, DEFAULT_NEEDLE};
use longsub::{LongestSubstring, Strategy};

/// Time every strategy while masking more and more of the needle out of
/// the haystack.
#[derive(Debug, Parser)]
struct Args {
    /// Text file to search (e.g. a word list); a generated corpus otherwise.
    #[arg(long)]
    corpus: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_NEEDLE)]
    needle: String,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 100_000)]
    corpus_words: usize,
    /// Calls timed per strategy and ratio.
    #[arg(long, default_value_t = 16)]
    repetitions: u32,
    /// Longest allowed match, as fractions of the needle length.
    #[arg(long, value_delimiter = ',', default_values_t = vec![0.0, 0.5, 0.75, 1.0])]
    ratios: Vec<f64>,
    #[arg(long = "strategy")]
    strategies: Vec<Strategy>,
}

fn time_calls(strategy: Strategy, needle: &str, haystack: &str, reps: u32) -> (Duration, usize) {
    let mut found_len = 0;
    let t0 = Instant::now();
    for _ in 0..reps {
        found_len = std::hint::black_box(strategy.find(needle, haystack)).chars().count();
    }
    (t0.elapsed() / reps.max(1), found_len)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let corpus = match &args.corpus {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading corpus {}", path.display()))?,
        None => fixture::word_corpus(args.seed, args.corpus_words),
    };
    let strategies = if args.strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        args.strategies.clone()
    };

    for &ratio in &args.ratios {
        let haystack = fixture::mask_long_matches(&corpus, &args.needle, ratio)
            .with_context(|| format!("masking for result size {}", ratio))?;
        log::info!("result_size={} haystack_bytes={}", ratio, haystack.len());

        for &strategy in &strategies {
            let (mean, found_len) = time_calls(strategy, &args.needle, &haystack, args.repetitions);
            println!(
                "RESULT_SIZE={} STRATEGY={} mean={:?} result_chars={}",
                ratio, strategy, mean, found_len
            );
        }
    }

    Ok(())
}
