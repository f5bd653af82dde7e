use anyhow::{Context, Result};
use log2::info;
use std::sync::Arc;

use crate::config::Config;
use crate::link_graph::LinkGraph;
use crate::rank::{self, RankVector, RngSampler};

/// Rank vectors produced by the two estimators for the same graph.
pub struct Estimates {
    pub sampled: RankVector,
    pub iterated: RankVector,
}

/// Runs both estimators on `graph` at once. They share nothing but the
/// read-only graph, so each gets its own blocking worker.
pub async fn run_estimators(graph: Arc<LinkGraph>, cfg: &Config) -> Result<Estimates> {
    let sampling = {
        let graph = Arc::clone(&graph);
        let (damping, samples, seed) = (cfg.damping, cfg.samples, cfg.seed);
        tokio::task::spawn_blocking(move || {
            let mut sampler = match seed {
                Some(seed) => RngSampler::seeded(seed),
                None => RngSampler::from_entropy(),
            };
            rank::sample_rank_with(&graph, damping, samples, &mut sampler)
        })
    };
    let iteration = {
        let graph = Arc::clone(&graph);
        let (damping, convergence) = (cfg.damping, cfg.convergence());
        tokio::task::spawn_blocking(move || rank::iterate_rank_with(&graph, damping, &convergence))
    };

    let sampled = sampling.await?.context("Sampling estimator failed")?;
    let iterated = iteration.await?.context("Iterative estimator failed")?;
    info!("Both estimators finished for {} pages", graph.len());

    Ok(Estimates { sampled, iterated })
}
