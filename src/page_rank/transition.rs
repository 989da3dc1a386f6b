//! Where the random surfer goes next.

use crate::{
    common::{check_damping, Distribution, Page},
    Corpus, Error, Result,
};
use algograph::graph::{QueryableGraph, VertexId};

/// Probability distribution of the page visited after `page`.
///
/// With probability `damping` the surfer follows one of `page`'s links, chosen
/// uniformly; otherwise it jumps to any page of the corpus. A sink has no link to
/// follow, so its surfer always jumps and every page gets `1/N`.
pub fn transition<P: Page>(corpus: &Corpus<P>, page: &P, damping: f64) -> Result<Distribution<P>> {
    check_damping(damping)?;
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }
    let v = corpus
        .vertex(page)
        .ok_or_else(|| Error::UnknownPage(page.to_string()))?;
    let ws = weights(corpus, v, damping);
    Ok(corpus.pages().cloned().zip(ws).collect())
}

/// Same as [`transition`], as a vector in page order. `damping` is assumed valid.
pub(crate) fn weights<P: Page>(corpus: &Corpus<P>, v: VertexId, damping: f64) -> Vec<f64> {
    let g = corpus.graph();
    let n = corpus.len() as f64;
    let out_degree = g.out_edges(&v).count();
    if out_degree == 0 {
        return vec![1.0 / n; corpus.len()];
    }
    let mut res = vec![(1.0 - damping) / n; corpus.len()];
    let unit = damping / (out_degree as f64);
    for e in g.out_edges(&v) {
        if let Some(i) = corpus.position(e.sink) {
            res[i] += unit;
        }
    }
    res
}
