//! The link graph of a closed set of pages.

use crate::common::Page;
use algograph::graph::{directed::TreeBackedGraph, GrowableGraph, QueryableGraph, VertexId};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Pages and their outbound links.
///
/// Every link target is itself a page of the corpus. Links to anything else are
/// dropped on construction. Pages are kept in ascending order and each one owns
/// exactly one vertex of the underlying directed graph.
pub struct Corpus<P> {
    graph: TreeBackedGraph,
    pages: Vec<P>,
    vertices: Vec<VertexId>,
    by_page: HashMap<P, usize, ahash::RandomState>,
    by_vertex: HashMap<VertexId, usize, ahash::RandomState>,
}

impl<P: Page> Corpus<P> {
    pub fn new<I, L>(links: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        L: IntoIterator<Item = P>,
    {
        let mut raw: BTreeMap<P, BTreeSet<P>> = BTreeMap::new();
        for (page, targets) in links {
            raw.entry(page).or_default().extend(targets);
        }

        let mut graph = TreeBackedGraph::new();
        let pages: Vec<P> = raw.keys().cloned().collect();
        let vertices: Vec<VertexId> = pages.iter().map(|_| graph.add_vertex()).collect();
        let by_page: HashMap<_, _, ahash::RandomState> = pages
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), i))
            .collect();
        let by_vertex: HashMap<_, _, ahash::RandomState> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, i))
            .collect();

        let mut dangling = 0usize;
        for (i, targets) in raw.values().enumerate() {
            for target in targets.iter() {
                if let Some(j) = by_page.get(target) {
                    graph.add_edge(vertices[i], vertices[*j]);
                } else {
                    dangling += 1;
                }
            }
        }
        tracing::debug!(
            pages = pages.len(),
            links = graph.edge_size(),
            dangling,
            "corpus built"
        );

        Self {
            graph,
            pages,
            vertices,
            by_page,
            by_vertex,
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, page: &P) -> bool {
        self.by_page.contains_key(page)
    }

    /// All pages, ascending.
    pub fn pages(&self) -> impl Iterator<Item = &P> + '_ {
        self.pages.iter()
    }

    /// Outbound links of `page`, ascending, or `None` if `page` is not in the corpus.
    pub fn links(&self, page: &P) -> Option<Vec<&P>> {
        let v = self.vertex(page)?;
        let mut res: Vec<&P> = self
            .graph
            .out_edges(&v)
            .filter_map(|e| self.page_of(e.sink))
            .collect();
        res.sort();
        Some(res)
    }

    pub fn out_degree(&self, page: &P) -> Option<usize> {
        let v = self.vertex(page)?;
        Some(self.graph.out_edges(&v).count())
    }

    pub fn is_sink(&self, page: &P) -> Option<bool> {
        self.out_degree(page).map(|d| d == 0)
    }

    /// The underlying directed graph; one edge per link.
    pub fn graph(&self) -> &TreeBackedGraph {
        &self.graph
    }

    /// Vertices in page order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    pub fn vertex(&self, page: &P) -> Option<VertexId> {
        self.by_page.get(page).map(|i| self.vertices[*i])
    }

    pub fn page_of(&self, v: VertexId) -> Option<&P> {
        self.position(v).map(|i| &self.pages[i])
    }

    /// Position of `v` in page order.
    pub(crate) fn position(&self, v: VertexId) -> Option<usize> {
        self.by_vertex.get(&v).copied()
    }
}

impl<P: Page> Default for Corpus<P> {
    fn default() -> Self {
        Self::new(std::iter::empty::<(P, Vec<P>)>())
    }
}

impl<P: Page, L: IntoIterator<Item = P>> FromIterator<(P, L)> for Corpus<P> {
    fn from_iter<I: IntoIterator<Item = (P, L)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<P: Page> std::fmt::Debug for Corpus<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for p in self.pages.iter() {
            map.entry(p, &self.links(p).unwrap_or_default());
        }
        map.finish()
    }
}
