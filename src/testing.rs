use crate::Corpus;
use quickcheck::{Arbitrary, Gen};

pub fn corpus(links: &[(&'static str, &[&'static str])]) -> Corpus<&'static str> {
    Corpus::new(links.iter().map(|(p, ls)| (*p, ls.iter().copied())))
}

pub fn assert_close(trial: f64, oracle: f64, eps: f64) {
    assert!(
        (trial - oracle).abs() <= eps,
        "trial={trial} oracle={oracle} eps={eps}"
    );
}

/// Up to 9 pages, with sinks, self links and links that point outside the corpus.
#[derive(Debug, Clone)]
pub struct RandomCorpus {
    pub links: Vec<(u32, Vec<u32>)>,
}

impl RandomCorpus {
    pub fn corpus(&self) -> Corpus<u32> {
        Corpus::new(self.links.iter().cloned())
    }
}

impl Arbitrary for RandomCorpus {
    fn arbitrary(g: &mut Gen) -> Self {
        const N: usize = 10;

        let n = usize::arbitrary(g) % N;
        let links = (0..n)
            .map(|u| {
                let k = usize::arbitrary(g) % (n + 1);
                let targets = (0..k).map(|_| (usize::arbitrary(g) % (n + 2)) as u32).collect();
                (u as u32, targets)
            })
            .collect();
        Self { links }
    }
}
