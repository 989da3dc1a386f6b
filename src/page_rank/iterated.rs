use super::*;
use crate::{
    common::{check_damping, norm_inf, Page, RankVector},
    Corpus, Error,
};
use algograph::graph::{QueryableGraph, VertexId};
use std::collections::{BTreeMap, HashMap};

pub struct IteratedPageRank<'a, P> {
    corpus: &'a Corpus<P>,
    damping: f64,
    tolerance: f64,
    max_rounds: usize,
    transitions: BTreeMap<(VertexId, VertexId), f64>,
    sinks: Vec<VertexId>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Largest per-page change still counted as converged.
    pub tolerance: f64,
    pub max_rounds: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 0.001,
            max_rounds: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result<P> {
    pub page_rank: RankVector<P>,
    /// Change of each page in the last round.
    pub delta: HashMap<P, f64, ahash::RandomState>,
    pub rounds: usize,
}

impl<'a, P: Page> IteratedPageRank<'a, P> {
    pub fn new(corpus: &'a Corpus<P>, config: &Config) -> crate::Result<Self> {
        let damping = config.damping;
        check_damping(damping)?;
        let tolerance = config.tolerance;
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(Error::InvalidTolerance(tolerance));
        }
        if config.max_rounds < 1 {
            return Err(Error::InvalidMaxRounds(config.max_rounds));
        }
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let g = corpus.graph();
        let mut transitions = BTreeMap::new();
        let mut sinks = vec![];
        for u in corpus.vertices() {
            let n = g.out_edges(&u).count();
            if n == 0 {
                sinks.push(u);
                continue;
            }
            let unit = damping / (n as f64);
            // Links are already distinct, one edge per (u, v).
            for v in g.out_edges(&u).map(|e| e.sink) {
                transitions.insert((u, v), unit);
            }
        }
        Ok(Self {
            corpus,
            damping,
            tolerance,
            max_rounds: config.max_rounds,
            transitions,
            sinks,
        })
    }
}

impl<P: Page> PageRank<P> for IteratedPageRank<'_, P> {
    type Result = self::Result<P>;

    fn calc(&mut self) -> crate::Result<Self::Result> {
        let damping = self.damping;
        let n = self.corpus.len() as f64;
        let jump = (1.0 - damping) / n;
        let mut p: HashMap<VertexId, f64, ahash::RandomState> =
            self.corpus.vertices().map(|v| (v, 1.0 / n)).collect();
        let mut r: HashMap<VertexId, f64, ahash::RandomState> =
            HashMap::with_capacity_and_hasher(p.len(), ahash::RandomState::new());
        let mut delta: HashMap<VertexId, f64, ahash::RandomState> =
            HashMap::with_capacity_and_hasher(p.len(), ahash::RandomState::new());
        for round in 1..=self.max_rounds {
            // A sink links to every page, itself included.
            let sunk: f64 = self.sinks.iter().map(|v| p[v]).sum();
            let base = jump + damping * sunk / n;
            for v in self.corpus.vertices() {
                r.insert(v, base);
            }
            for ((v0, v1), w) in self.transitions.iter() {
                let from = p[v0];
                if let Some(to) = r.get_mut(v1) {
                    *to += from * w;
                }
            }

            delta.clear();
            for v in self.corpus.vertices() {
                delta.insert(v, r[&v] - p[&v]);
            }
            let change = norm_inf(&delta);
            tracing::trace!(round, change, "pagerank round");

            if change <= self.tolerance {
                tracing::debug!(rounds = round, change, "pagerank converged");
                return Ok(Self::Result {
                    page_rank: self.by_page(&r),
                    delta: self.by_page(&delta),
                    rounds: round,
                });
            }

            std::mem::swap(&mut p, &mut r);
            r.clear();
        }
        let delta = norm_inf(&delta);
        tracing::warn!(rounds = self.max_rounds, delta, "pagerank did not converge");
        Err(Error::ConvergenceFailure {
            rounds: self.max_rounds,
            delta,
        })
    }
}

impl<P: Page> IteratedPageRank<'_, P> {
    fn by_page(
        &self,
        xs: &HashMap<VertexId, f64, ahash::RandomState>,
    ) -> HashMap<P, f64, ahash::RandomState> {
        xs.iter()
            .filter_map(|(v, x)| self.corpus.page_of(*v).map(|p| (p.clone(), *x)))
            .collect()
    }
}

/// PageRank of every page by iterating to a fixed point, tolerance `0.001`.
pub fn iterate_pagerank<P: Page>(corpus: &Corpus<P>, damping: f64) -> crate::Result<RankVector<P>> {
    let config = Config {
        damping,
        ..Default::default()
    };
    let mut ipr = IteratedPageRank::new(corpus, &config)?;
    Ok(ipr.calc()?.page_rank)
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
        writeln!(f, "rounds: {}", self.result.rounds)?;
        for v in pages {
            let p = self.result.page_rank.get(v).copied().unwrap_or_default();
            let d = self.result.delta.get(v).copied().unwrap_or_default();
            writeln!(f, "{v:?}: {p:?}, {d:?}")?;
        }
        Ok(())
    }
}
