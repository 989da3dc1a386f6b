use super::{transition::weights, *};
use crate::{
    common::{check_damping, pick, Page, RankVector},
    Corpus, Error,
};
use rand::Rng;
use std::collections::HashMap;

/// Monte-Carlo PageRank: a random surfer walks the corpus and every page scores
/// the share of steps spent on it.
pub struct SampledPageRank<'a, P, R> {
    corpus: &'a Corpus<P>,
    samples: usize,
    rng: R,
    transitions: Vec<Vec<f64>>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result<P> {
    pub page_rank: RankVector<P>,
    pub visits: HashMap<P, usize, ahash::RandomState>,
    pub samples: usize,
}

impl<'a, P: Page, R: Rng> SampledPageRank<'a, P, R> {
    pub fn new(corpus: &'a Corpus<P>, config: &Config, rng: R) -> crate::Result<Self> {
        check_damping(config.damping)?;
        if config.samples < 1 {
            return Err(Error::InvalidSampleCount(config.samples));
        }
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let transitions = corpus
            .vertices()
            .map(|v| weights(corpus, v, config.damping))
            .collect();
        Ok(Self {
            corpus,
            samples: config.samples,
            rng,
            transitions,
        })
    }
}

impl<P: Page, R: Rng> PageRank<P> for SampledPageRank<'_, P, R> {
    type Result = self::Result<P>;

    fn calc(&mut self) -> crate::Result<Self::Result> {
        let n = self.corpus.len();
        let mut visits = vec![0usize; n];
        let mut cur = self.rng.random_range(0..n);
        visits[cur] += 1;
        for _ in 1..self.samples {
            let draw: f64 = self.rng.random();
            cur = pick(self.transitions[cur].iter().copied(), draw)
                .expect("transition row is never empty");
            visits[cur] += 1;
        }
        tracing::debug!(pages = n, samples = self.samples, "random walk finished");

        let total = self.samples as f64;
        let page_rank = self
            .corpus
            .pages()
            .zip(visits.iter())
            .map(|(p, k)| (p.clone(), (*k as f64) / total))
            .collect();
        let visits = self.corpus.pages().cloned().zip(visits).collect();
        Ok(Self::Result {
            page_rank,
            visits,
            samples: self.samples,
        })
    }
}

/// PageRank of every page from `n` steps of a random surfer, on the thread RNG.
pub fn sample_pagerank<P: Page>(
    corpus: &Corpus<P>,
    damping: f64,
    n: usize,
) -> crate::Result<RankVector<P>> {
    sample_pagerank_with(corpus, damping, n, rand::rng())
}

/// Like [`sample_pagerank`], drawing from `rng`. A seeded `rng` reproduces the walk.
pub fn sample_pagerank_with<P: Page, R: Rng>(
    corpus: &Corpus<P>,
    damping: f64,
    n: usize,
    rng: R,
) -> crate::Result<RankVector<P>> {
    let config = Config {
        damping,
        samples: n,
    };
    let mut spr = SampledPageRank::new(corpus, &config, rng)?;
    Ok(spr.calc()?.page_rank)
}

impl<P: Page> PageRankResult<P> for self::Result<P> {
    fn page_rank(&self) -> &RankVector<P> {
        &self.page_rank
    }

    fn debug(&self) -> impl std::fmt::Debug + '_ {
        ResultDebug { result: self }
    }
}

pub struct ResultDebug<'a, P> {
    result: &'a self::Result<P>,
}

impl<P: Page> std::fmt::Debug for ResultDebug<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pages: Vec<_> = self.result.page_rank.keys().collect();
        pages.sort();
        writeln!(f, "samples: {}", self.result.samples)?;
        for v in pages {
            let p = self.result.page_rank.get(v).copied().unwrap_or_default();
            let k = self.result.visits.get(v).copied().unwrap_or_default();
            writeln!(f, "{v:?}: {p:?}, {k}")?;
        }
        Ok(())
    }
}
