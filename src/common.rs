use crate::{Error, Result};
use std::{
    collections::HashMap,
    fmt::{Debug, Display},
    hash::Hash,
};

/// Identifier of a page in a corpus.
///
/// Pages are totally ordered; that order is the one every estimator walks in.
pub trait Page: Ord + Hash + Clone + Debug + Display {}

impl<T> Page for T where T: Ord + Hash + Clone + Debug + Display {}

/// Probability of the surfer's next page.
pub type Distribution<P> = HashMap<P, f64, ahash::RandomState>;

/// Final PageRank of every page.
pub type RankVector<P> = HashMap<P, f64, ahash::RandomState>;

pub fn total<K: Hash + Eq>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().sum()
}

pub fn norm_1<K: Hash + Eq>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

pub fn norm_inf<K: Hash + Eq>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).fold(0.0, f64::max)
}

/// L1 distance between two rank vectors over the union of their keys.
pub fn distance<K: Hash + Eq + Clone>(
    a: &HashMap<K, f64, ahash::RandomState>,
    b: &HashMap<K, f64, ahash::RandomState>,
) -> f64 {
    let mut diff = a.clone();
    for (k, y) in b.iter() {
        *diff.entry(k.clone()).or_insert(0.0) -= y;
    }
    norm_1(&diff)
}

/// Index of the first weight whose running sum reaches `draw`.
///
/// Falls back to the last index when rounding keeps the total below `draw`.
pub fn pick<I: IntoIterator<Item = f64>>(weights: I, draw: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    let mut last = None;
    for (i, w) in weights.into_iter().enumerate() {
        cumulative += w;
        if cumulative >= draw {
            return Some(i);
        }
        last = Some(i);
    }
    last
}

pub fn check_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidDamping(damping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn vector(xs: &[(&'static str, f64)]) -> HashMap<&'static str, f64, ahash::RandomState> {
        xs.iter().copied().collect()
    }

    #[test]
    fn norms() {
        let v = vector(&[("a", 0.5), ("b", -0.25), ("c", 0.125)]);
        assert_eq!(norm_1(&v), 0.875);
        assert_eq!(norm_inf(&v), 0.5);
        assert_eq!(total(&v), 0.375);
    }

    #[test]
    fn distance_covers_missing_keys() {
        let a = vector(&[("a", 0.5), ("b", 0.5)]);
        let b = vector(&[("a", 0.25), ("c", 0.75)]);
        assert_eq!(distance(&a, &b), 0.25 + 0.5 + 0.75);
        assert_eq!(distance(&b, &a), distance(&a, &b));
    }

    #[test]
    fn pick_first_reaching_draw() {
        let ws = [0.25, 0.25, 0.5];
        assert_eq!(pick(ws, 0.0), Some(0));
        assert_eq!(pick(ws, 0.1), Some(0));
        assert_eq!(pick(ws, 0.25), Some(0));
        assert_eq!(pick(ws, 0.3), Some(1));
        assert_eq!(pick(ws, 0.75), Some(2));
        assert_eq!(pick(ws, 0.99), Some(2));
    }

    #[test]
    fn distance_is_norm_of_difference() {
        let a = vector(&[("a", 0.5), ("b", 0.25), ("c", 0.25)]);
        assert_eq!(distance(&a, &a), 0.0);
        let b = vector(&[("a", 0.25), ("b", 0.5), ("c", 0.25)]);
        let diff = vector(&[("a", 0.25), ("b", -0.25), ("c", 0.0)]);
        assert_eq!(distance(&a, &b), norm_1(&diff));
    }

    #[quickcheck]
    fn pick_some_for_any_nonempty_row(ws: Vec<u8>, draw: u16) -> bool {
        let total: f64 = ws.iter().map(|w| f64::from(*w)).sum();
        let draw = f64::from(draw) / f64::from(u16::MAX);
        let weights = ws.iter().map(|w| f64::from(*w) / total.max(1.0));
        match pick(weights, draw) {
            Some(i) => i < ws.len(),
            None => ws.is_empty(),
        }
    }

    #[test]
    fn pick_rounding_falls_to_last() {
        assert_eq!(pick([0.3, 0.3, 0.3], 0.95), Some(2));
        assert_eq!(pick(std::iter::empty(), 0.5), None);
    }

    #[test]
    fn damping_bounds() {
        assert!(check_damping(0.85).is_ok());
        for d in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(matches!(check_damping(d), Err(Error::InvalidDamping(_))), "{d}");
        }
    }
}
