use log2::{debug, info};

use super::sampler::{DiscreteSampler, RngSampler};
use super::transition::TransitionTable;
use super::RankVector;
use crate::error::{check_damping, RankError, Result};
use crate::link_graph::LinkGraph;

/// Estimates PageRank by walking `n` steps of the random surfer, seeded from
/// system entropy.
pub fn sample_rank(graph: &LinkGraph, damping_factor: f64, n: usize) -> Result<RankVector> {
    sample_rank_with(graph, damping_factor, n, &mut RngSampler::from_entropy())
}

/// Estimates PageRank by walking `n` steps of the random surfer, drawing every
/// step from `sampler`.
///
/// The walk starts on a uniformly chosen page. Each step records a visit to
/// the current page and moves according to that page's row of a
/// [`TransitionTable`]. The table is built, and each row prepared by
/// `sampler`, once up front. The rank of a page is its share of the `n`
/// visits.
pub fn sample_rank_with<S: DiscreteSampler>(
    graph: &LinkGraph,
    damping_factor: f64,
    n: usize,
    sampler: &mut S,
) -> Result<RankVector> {
    check_damping(damping_factor)?;
    if n == 0 {
        return Err(RankError::InvalidParameter(
            "sample count must be at least 1".to_string(),
        ));
    }

    let table = TransitionTable::new(graph, damping_factor)?;
    let rows = (0..table.len())
        .map(|index| sampler.prepare(table.row(index)))
        .collect::<Result<Vec<_>>>()?;
    debug!("Built transition table for {} pages", table.len());

    let mut visits = vec![0usize; table.len()];
    let mut current = sampler.pick_uniform(table.len())?;
    debug!("Random walk starts on {}", table.pages()[current]);

    for _ in 0..n {
        visits[current] += 1;
        current = sampler.pick(&rows[current])?;
    }

    info!("Sampled {} steps over {} pages", n, table.len());
    let total = n as f64;
    Ok(table
        .pages()
        .iter()
        .cloned()
        .zip(visits.into_iter().map(|count| count as f64 / total))
        .collect())
}
