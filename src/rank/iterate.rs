use log2::{debug, info, trace};

use super::config::Convergence;
use super::RankVector;
use crate::error::{check_damping, RankError, Result};
use crate::link_graph::LinkGraph;

/// Computes PageRank by fixed-point iteration with the default
/// [`Convergence`] policy.
pub fn iterate_rank(graph: &LinkGraph, damping_factor: f64) -> Result<RankVector> {
    iterate_rank_with(graph, damping_factor, &Convergence::default())
}

/// Computes PageRank by repeatedly applying
///
/// `PR(p) = (1 - d) / N + d * sum(PR(i) / out(i))` over pages `i` linking to `p`
///
/// until no page moves by `convergence.threshold` or more. A dangling page
/// counts as linking to every page of the corpus, itself included, so no rank
/// leaks out of the system.
pub fn iterate_rank_with(
    graph: &LinkGraph,
    damping_factor: f64,
    convergence: &Convergence,
) -> Result<RankVector> {
    check_damping(damping_factor)?;
    convergence.validate()?;

    let adjacency = graph.adjacency();
    let n = adjacency.pages.len();
    let all_pages: Vec<usize> = (0..n).collect();

    let out_degree: Vec<usize> = adjacency
        .outbound
        .iter()
        .map(|targets| if targets.is_empty() { n } else { targets.len() })
        .collect();

    let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (source, targets) in adjacency.outbound.iter().enumerate() {
        let targets = if targets.is_empty() { &all_pages } else { targets };
        for &target in targets {
            incoming[target].push(source);
        }
    }

    let base = (1.0 - damping_factor) / n as f64;
    let mut ranks = vec![1.0 / n as f64; n];
    let mut converged_after = None;
    let mut last_delta = f64::INFINITY;

    for iteration in 1..=convergence.max_iterations {
        let next = step(&ranks, &incoming, &out_degree, base, damping_factor);
        last_delta = max_delta(&ranks, &next);
        ranks = next;
        trace!("Iteration {}: max delta {}", iteration, last_delta);

        if last_delta < convergence.threshold {
            converged_after = Some(iteration);
            break;
        }
    }

    let Some(iterations) = converged_after else {
        return Err(RankError::NonConvergence {
            iterations: convergence.max_iterations,
            max_delta: last_delta,
        });
    };
    debug!("Converged with max delta {}", last_delta);

    let sum: f64 = ranks.iter().sum();
    info!("Converged after {} iterations, sum before normalization {}", iterations, sum);

    Ok(adjacency
        .pages
        .into_iter()
        .cloned()
        .zip(ranks.into_iter().map(|rank| rank / sum))
        .collect())
}

/// One application of the recurrence, reading only the previous vector.
fn step(
    ranks: &[f64],
    incoming: &[Vec<usize>],
    out_degree: &[usize],
    base: f64,
    damping_factor: f64,
) -> Vec<f64> {
    incoming
        .iter()
        .map(|sources| {
            let inflow: f64 = sources
                .iter()
                .map(|&i| ranks[i] / out_degree[i] as f64)
                .sum();
            base + damping_factor * inflow
        })
        .collect()
}

fn max_delta(previous: &[f64], next: &[f64]) -> f64 {
    previous
        .iter()
        .zip(next)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}
