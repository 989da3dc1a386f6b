use crate::common::{Page, RankVector};
use std::fmt;

pub trait PageRank<P: Page> {
    type Result: PageRankResult<P>;

    fn calc(&mut self) -> crate::Result<Self::Result>;
}

pub trait PageRankResult<P: Page> {
    fn page_rank(&self) -> &RankVector<P>;

    fn debug(&self) -> impl fmt::Debug + '_;

    /// Ranks sorted by page, one `  page: rank` line each, four decimals.
    fn report(&self) -> Report<'_, P> {
        Report::new(self.page_rank())
    }
}

pub struct Report<'a, P> {
    ranks: Vec<(&'a P, f64)>,
}

impl<'a, P: Page> Report<'a, P> {
    pub fn new(page_rank: &'a RankVector<P>) -> Self {
        let mut ranks: Vec<_> = page_rank.iter().map(|(p, r)| (p, *r)).collect();
        ranks.sort_by(|a, b| a.0.cmp(b.0));
        Self { ranks }
    }
}

impl<P: Page> fmt::Display for Report<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (page, rank) in self.ranks.iter() {
            writeln!(f, "  {page}: {rank:.4}")?;
        }
        Ok(())
    }
}
