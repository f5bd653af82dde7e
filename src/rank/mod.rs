pub mod config;
pub mod transition;
pub mod sampler;
pub mod sampling;
pub mod iterate;


use std::collections::BTreeMap;

use crate::link_graph::Page;

/// Rank of every page in the corpus, in lexicographic page order.
pub type RankVector = BTreeMap<Page, f64>;

pub use config::{
    Convergence, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLES, DEFAULT_THRESHOLD,
};
pub use transition::{transition, Distribution, TransitionTable};
pub use sampler::{DiscreteSampler, RngSampler};
pub use sampling::{sample_rank, sample_rank_with};
pub use iterate::{iterate_rank, iterate_rank_with};
