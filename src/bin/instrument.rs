use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use longsub::fixture::{self, DEFAULT_NEEDLE};
use longsub::{instrumentation, LongestSubstring, Strategy};

/// Run each strategy once on the same input and print its work counters.
#[derive(Debug, Parser)]
struct Args {
    /// Text file to search (e.g. a word list); a generated corpus otherwise.
    #[arg(long)]
    corpus: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_NEEDLE)]
    needle: String,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Words in the generated corpus.
    #[arg(long, default_value_t = 100_000)]
    corpus_words: usize,
    /// Mask needle substrings longer than this fraction of the needle.
    #[arg(long, default_value_t = 1.0)]
    result_size: f64,
    /// Strategies to run (repeatable); all of them when omitted.
    #[arg(long = "strategy")]
    strategies: Vec<Strategy>,
}

fn load_haystack(args: &Args) -> Result<String> {
    let corpus = match &args.corpus {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading corpus {}", path.display()))?,
        None => fixture::word_corpus(args.seed, args.corpus_words),
    };
    fixture::mask_long_matches(&corpus, &args.needle, args.result_size)
        .context("masking long matches")
}

fn run_case(strategy: Strategy, needle: &str, haystack: &str) {
    instrumentation::reset_counters();
    let t0 = Instant::now();
    let found = strategy.find(needle, haystack);
    let dur = t0.elapsed();
    let c = instrumentation::counters_snapshot();
    println!(
        "{}: time={:?} result={:?} lengths={} candidates={} contains={} hashed={} collisions={}",
        strategy,
        dur,
        found,
        c.lengths_probed,
        c.candidates,
        c.containment_checks,
        c.windows_hashed,
        c.hash_collisions
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let haystack = load_haystack(&args)?;
    log::info!(
        "needle={:?} haystack_bytes={} result_size={}",
        args.needle,
        haystack.len(),
        args.result_size
    );

    let strategies = if args.strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        args.strategies.clone()
    };
    for strategy in strategies {
        run_case(strategy, &args.needle, &haystack);
    }

    Ok(())
}
