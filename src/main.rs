//! Ranks a directory of HTML pages by sampling and by iteration.

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;
use surfer_rank::{
    crawl,
    page_rank::{iterated, sampled, PageRank, PageRankResult},
};

#[derive(Parser, Debug)]
#[command(name = "surfer-rank", version, about)]
struct Cli {
    /// Directory of .html pages
    corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page
    #[arg(short, long, default_value_t = 0.85)]
    damping: f64,

    /// Random surfer steps
    #[arg(short = 'n', long, default_value_t = 10_000)]
    samples: usize,

    /// Largest per-page change between rounds that counts as converged
    #[arg(short, long, default_value_t = 0.001)]
    tolerance: f64,

    /// Give up iterating after this many rounds
    #[arg(long, default_value_t = 10_000)]
    max_rounds: usize,

    /// Seed for a reproducible walk
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let corpus = crawl(&cli.corpus)
        .with_context(|| format!("crawling {}", cli.corpus.display()))?;
    tracing::info!(pages = corpus.len(), "corpus loaded");

    let config = sampled::Config {
        damping: cli.damping,
        samples: cli.samples,
    };
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let by_sampling = sampled::SampledPageRank::new(&corpus, &config, rng)
        .and_then(|mut spr| spr.calc())
        .context("sampling PageRank")?;
    tracing::debug!("sampled:\n{:?}", by_sampling.debug());
    println!("PageRank Results from Sampling (n = {})", cli.samples);
    print!("{}", by_sampling.report());

    let config = iterated::Config {
        damping: cli.damping,
        tolerance: cli.tolerance,
        max_rounds: cli.max_rounds,
    };
    let by_iteration = iterated::IteratedPageRank::new(&corpus, &config)
        .and_then(|mut ipr| ipr.calc())
        .context("iterating PageRank")?;
    tracing::debug!("iterated:\n{:?}", by_iteration.debug());
    println!("PageRank Results from Iteration");
    print!("{}", by_iteration.report());

    Ok(())
}
