mod traits;
pub use self::traits::*;

pub mod iterated;
pub mod sampled;
pub mod transition;

pub use self::iterated::iterate_pagerank;
pub use self::sampled::{sample_pagerank, sample_pagerank_with};
pub use self::transition::transition;
