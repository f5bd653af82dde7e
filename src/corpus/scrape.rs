use anyhow::{anyhow, Result};
use log2::{debug, trace};
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

use crate::link_graph::Page;

/// Virtual location of the corpus directory. Every page is resolved as a
/// file directly under it.
pub const CORPUS_ROOT: &str = "file:///corpus/";

/// Resolves `href`, found on `page`, to the name of a page in the corpus.
///
/// Relative links are joined against the page, fragments and queries are
/// ignored, so `b.html`, `./b.html` and `b.html#top` all name `b.html`.
/// Links with another scheme, a host, or a path outside the corpus root
/// resolve to `None`.
pub fn resolve_link(href: &str, page: &str) -> Option<Page> {
    let root = Url::parse(CORPUS_ROOT).ok()?;
    let url = root.join(page).ok()?.join(href.trim()).ok()?;

    if url.scheme() != "file" || url.host().is_some() {
        return None;
    }

    let name = url.path().strip_prefix(root.path())?;
    if name.is_empty() || name.contains('/') {
        return None;
    }

    match urlencoding::decode(name) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => Some(name.to_string()),
    }
}

/// Page of `corpus` that `href`, found on `page`, links to.
///
/// An href naming a corpus file verbatim wins, so files such as
/// `a%20b.html` or `x#y.html` stay reachable. Anything else goes through
/// [`resolve_link`].
pub fn link_target(href: &str, page: &str, corpus: &BTreeSet<Page>) -> Option<Page> {
    if corpus.contains(href) {
        return Some(href.to_string());
    }
    resolve_link(href, page).filter(|target| corpus.contains(target))
}

/// Collects the corpus pages targeted by every `<a href="...">` in `html`.
pub fn extract_links(html: &str, page: &str, corpus: &BTreeSet<Page>) -> Result<BTreeSet<Page>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]")
        .map_err(|e| anyhow!("Failed to parse <a> selector: {}", e))?;

    let mut found = BTreeSet::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            match link_target(href, page, corpus) {
                Some(target) => {
                    found.insert(target);
                }
                None => trace!("Skipped link {} on page {}", href, page),
            }
        }
    }

    debug!("Found {} links on page {}", found.len(), page);
    Ok(found)
}
