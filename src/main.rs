use anyhow::{Context, Result};
use log2::*;
use std::sync::Arc;
use std::time::Instant;

use pagerank::config::Config;
use pagerank::corpus;
use pagerank::report;
use pagerank::runner;

/// Indicates start time of a project, lazily initialized
pub static START_TIME: once_cell::sync::Lazy<Instant> = once_cell::sync::Lazy::new(Instant::now);

#[tokio::main]
async fn main() -> Result<()> {
    let _ = *START_TIME;
    let cfg = Config::new();
    cfg.validate()?;
    let _log2 = stdout()
        .module(true) // include module name
        .module_with_line(true) // include line number from module
        // include only modules having this pattern
        .module_filter(|module| module.starts_with("pagerank"))
        .compress(false) // compress output
        .level(cfg.log_level.to_string())
        .start();

    let graph = Arc::new(
        corpus::load_corpus(&cfg.corpus)
            .await
            .with_context(|| format!("Failed to load corpus {}", cfg.corpus.display()))?,
    );

    let estimates = runner::run_estimators(graph, &cfg).await?;

    let mut out = report::format_ranks(&report::sampling_title(cfg.samples), &estimates.sampled);
    out.push_str(&report::format_ranks(&report::iteration_title(), &estimates.iterated));
    print!("{}", out);

    if let Some(path) = cfg.output_file {
        std::fs::write(&path, &out)?;
        info!("Ranks written to {:?}", path);
    }

    info!("Finished in {:?}", START_TIME.elapsed());
    Ok(())
}
