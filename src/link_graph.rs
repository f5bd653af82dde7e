use std::collections::{BTreeMap, BTreeSet, HashMap};

use log2::debug;

use crate::error::{RankError, Result};

/// Page identifier, the file name of the page inside the corpus.
pub type Page = String;

/// Directed graph of the corpus: every page mapped to the pages it links to.
///
/// A `LinkGraph` is always non-empty, free of self-links, and closed (every
/// link target is itself a page). It is never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkGraph {
    links: BTreeMap<Page, BTreeSet<Page>>,
}

/// Dense, index-based view of a graph. Positions follow the lexicographic
/// page order of the graph.
pub(crate) struct Adjacency<'a> {
    pub pages: Vec<&'a Page>,
    pub outbound: Vec<Vec<usize>>,
}

impl LinkGraph {
    /// Strict constructor: any self-link or unknown target is an error.
    pub fn new(links: BTreeMap<Page, BTreeSet<Page>>) -> Result<Self> {
        if links.is_empty() {
            return Err(RankError::InvalidGraph("corpus is empty".to_string()));
        }
        for (page, targets) in &links {
            for target in targets {
                if target == page {
                    return Err(RankError::InvalidGraph(format!(
                        "page `{}` links to itself",
                        page
                    )));
                }
                if !links.contains_key(target) {
                    return Err(RankError::InvalidGraph(format!(
                        "page `{}` links to `{}` which is not in the corpus",
                        page, target
                    )));
                }
            }
        }
        Ok(Self { links })
    }

    /// Builds a graph from unvalidated links, dropping self-links and links
    /// to pages outside the corpus.
    pub fn from_raw_links<I, L>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Page, L)>,
        L: IntoIterator<Item = Page>,
    {
        let raw: BTreeMap<Page, BTreeSet<Page>> = raw
            .into_iter()
            .map(|(page, targets)| (page, targets.into_iter().collect()))
            .collect();

        let mut dropped = 0;
        let mut links = BTreeMap::new();
        for (page, targets) in &raw {
            let kept: BTreeSet<Page> = targets
                .iter()
                .filter(|target| *target != page && raw.contains_key(*target))
                .cloned()
                .collect();
            dropped += targets.len() - kept.len();
            links.insert(page.clone(), kept);
        }
        debug!("Dropped {} self or out-of-corpus links", dropped);

        Self::new(links)
    }

    /// Number of pages in the corpus.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Pages in lexicographic order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.links.keys()
    }

    /// Outbound links of `page`, `None` if the page is not in the corpus.
    pub fn links(&self, page: &str) -> Option<&BTreeSet<Page>> {
        self.links.get(page)
    }

    pub fn is_dangling(&self, page: &str) -> bool {
        self.links.get(page).is_some_and(|targets| targets.is_empty())
    }

    pub fn dangling_pages(&self) -> impl Iterator<Item = &Page> {
        self.links
            .iter()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(page, _)| page)
    }

    pub fn edge_count(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }

    pub(crate) fn adjacency(&self) -> Adjacency<'_> {
        let pages: Vec<&Page> = self.links.keys().collect();
        let position: HashMap<&str, usize> = pages
            .iter()
            .enumerate()
            .map(|(i, page)| (page.as_str(), i))
            .collect();
        let outbound = self
            .links
            .values()
            .map(|targets| targets.iter().map(|t| position[t.as_str()]).collect())
            .collect();
        Adjacency { pages, outbound }
    }
}
