use std::collections::BTreeMap;

use log2::trace;

use crate::error::{check_damping, RankError, Result};
use crate::link_graph::{LinkGraph, Page};

/// Probability of moving to each page of the corpus next.
pub type Distribution = BTreeMap<Page, f64>;

/// Distribution over the next page when the surfer stands on `page`.
///
/// A dangling page jumps uniformly to any page of the corpus. Otherwise every
/// page gets `(1 - d) / N` and each outbound link of `page` additionally gets
/// `d / |links|`.
pub fn transition(graph: &LinkGraph, page: &str, damping_factor: f64) -> Result<Distribution> {
    check_damping(damping_factor)?;
    let links = graph.links(page).ok_or_else(|| {
        RankError::InvalidParameter(format!("page `{}` is not in the corpus", page))
    })?;

    let corpus_size = graph.len() as f64;
    if links.is_empty() {
        let uniform = 1.0 / corpus_size;
        return Ok(graph.pages().map(|p| (p.clone(), uniform)).collect());
    }

    let base = (1.0 - damping_factor) / corpus_size;
    let mut distribution: Distribution = graph.pages().map(|p| (p.clone(), base)).collect();

    let follow = damping_factor / links.len() as f64;
    for target in links {
        if let Some(probability) = distribution.get_mut(target) {
            *probability += follow;
        }
    }

    trace!("Transition from {}: {:?}", page, distribution);
    Ok(distribution)
}

/// Transition distribution of every page, evaluated once for a graph.
///
/// Rows and columns follow the graph's page order, so a sampling run that
/// reads only from the table sees one consistent snapshot of the model.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    pages: Vec<Page>,
    rows: Vec<Vec<f64>>,
}

impl TransitionTable {
    /// Evaluates [`transition`] for every page. Each distribution is keyed
    /// in page order, so its values are the row as-is.
    pub fn new(graph: &LinkGraph, damping_factor: f64) -> Result<Self> {
        check_damping(damping_factor)?;

        let pages: Vec<Page> = graph.pages().cloned().collect();
        let rows = pages
            .iter()
            .map(|page| {
                transition(graph, page, damping_factor)
                    .map(|distribution| distribution.into_values().collect())
            })
            .collect::<Result<Vec<Vec<f64>>>>()?;

        Ok(Self { pages, rows })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Probabilities of moving from the page at `index` to each page.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    /// Row of `page` as a keyed distribution.
    pub fn distribution(&self, page: &str) -> Option<Distribution> {
        let index = self.pages.iter().position(|p| p == page)?;
        Some(self.pages.iter().cloned().zip(self.rows[index].iter().copied()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, &[&str])]) -> LinkGraph {
        LinkGraph::from_raw_links(edges.iter().map(|(page, targets)| {
            (
                page.to_string(),
                targets.iter().map(|t| t.to_string()).collect::<Vec<_>>(),
            )
        }))
        .unwrap()
    }

    #[test]
    fn test_linked_page_distribution() -> Result<()> {
        let graph = graph(&[
            ("1.html", &["2.html", "3.html"]),
            ("2.html", &["3.html"]),
            ("3.html", &["2.html"]),
        ]);
        let distribution = transition(&graph, "1.html", 0.85)?;

        assert!((distribution["1.html"] - 0.05).abs() < 1e-12);
        assert!((distribution["2.html"] - 0.475).abs() < 1e-12);
        assert!((distribution["3.html"] - 0.475).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_dangling_page_is_uniform() -> Result<()> {
        let graph = graph(&[("a", &["b"]), ("b", &["c"]), ("c", &[]), ("d", &["a"])]);
        let distribution = transition(&graph, "c", 0.85)?;

        assert_eq!(distribution.len(), 4);
        for probability in distribution.values() {
            assert_eq!(*probability, 0.25);
        }
        Ok(())
    }

    #[test]
    fn test_every_distribution_sums_to_one() -> Result<()> {
        let graph = graph(&[
            ("a", &["b", "c", "d"]),
            ("b", &["a"]),
            ("c", &[]),
            ("d", &["b", "c"]),
            ("e", &["a", "b", "c", "d"]),
        ]);
        for damping in [0.01, 0.5, 0.85, 0.99] {
            for page in graph.pages() {
                let sum: f64 = transition(&graph, page, damping)?.values().sum();
                assert!((sum - 1.0).abs() < 1e-9, "{} with d={} sums to {}", page, damping, sum);
            }
        }
        Ok(())
    }

    #[test]
    fn test_rejects_unknown_page_and_bad_damping() {
        let graph = graph(&[("a", &["b"]), ("b", &[])]);
        assert!(matches!(
            transition(&graph, "zzz", 0.85),
            Err(RankError::InvalidParameter(_))
        ));
        assert!(matches!(
            transition(&graph, "a", 1.0),
            Err(RankError::InvalidParameter(_))
        ));
        assert!(TransitionTable::new(&graph, 0.0).is_err());
    }

    #[test]
    fn test_table_matches_transition() -> Result<()> {
        let graph = graph(&[("a", &["b", "c"]), ("b", &["c"]), ("c", &[]), ("d", &["a", "c"])]);
        let table = TransitionTable::new(&graph, 0.85)?;

        assert_eq!(table.len(), 4);
        for page in graph.pages() {
            assert_eq!(table.distribution(page), Some(transition(&graph, page, 0.85)?));
        }
        assert!(table.distribution("missing").is_none());

        // "c" is dangling: its row is the same uniform jump transition() gives.
        assert_eq!(table.row(2), &[0.25; 4]);
        Ok(())
    }
}
