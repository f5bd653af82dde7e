//! PageRank of a static corpus of HTML pages, estimated by sampling a random
//! surfer and computed by fixed-point iteration.

pub mod config;
pub mod corpus;
pub mod error;
pub mod link_graph;
pub mod rank;
pub mod report;
pub mod runner;

pub use error::RankError;
pub use link_graph::{LinkGraph, Page};
pub use rank::RankVector;
