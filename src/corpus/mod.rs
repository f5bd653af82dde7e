pub mod scrape;
pub mod loader;


pub use scrape::{extract_links, link_target, resolve_link, CORPUS_ROOT};
pub use loader::{load_corpus, read_pages, HTML_EXTENSION};
