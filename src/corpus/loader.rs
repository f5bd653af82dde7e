use anyhow::{bail, Context, Result};
use log2::{debug, info};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::scrape::extract_links;
use crate::link_graph::{LinkGraph, Page};

/// Only files with this suffix are part of the corpus.
pub const HTML_EXTENSION: &str = ".html";

/// Reads every `.html` file directly inside `dir`, keyed by file name.
pub async fn read_pages(dir: &Path) -> Result<BTreeMap<Page, String>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read corpus directory {}", dir.display()))?;

    let mut pages = BTreeMap::new();
    while let Some(entry) = entries.next_entry().await? {
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(name) => {
                debug!("Skipped file with non UTF-8 name {:?}", name);
                continue;
            }
        };
        if !name.ends_with(HTML_EXTENSION) {
            debug!("Skipped non-HTML file {}", name);
            continue;
        }

        let path = entry.path();
        // metadata follows symlinks
        if !tokio::fs::metadata(&path).await?.is_file() {
            continue;
        }
        let contents = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read page {}", path.display()))?;
        pages.insert(name, contents);
    }

    Ok(pages)
}

/// Builds the link graph of the HTML corpus in `dir`.
///
/// Links to pages outside the corpus and links from a page to itself are
/// dropped, so the returned graph is closed.
pub async fn load_corpus(dir: &Path) -> Result<LinkGraph> {
    let pages = read_pages(dir).await?;
    if pages.is_empty() {
        bail!("No {} files found in {}", HTML_EXTENSION, dir.display());
    }
    info!("Read {} pages from {}", pages.len(), dir.display());

    let names: BTreeSet<Page> = pages.keys().cloned().collect();
    let mut raw = Vec::with_capacity(pages.len());
    for (page, html) in &pages {
        let links = extract_links(html, page, &names)
            .with_context(|| format!("Failed to extract links from {}", page))?;
        raw.push((page.clone(), links));
    }

    let graph = LinkGraph::from_raw_links(raw)?;
    info!(
        "Corpus has {} pages, {} links, {} dangling pages",
        graph.len(),
        graph.edge_count(),
        graph.dangling_pages().count()
    );
    Ok(graph)
}
