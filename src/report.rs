use crate::rank::RankVector;

/// Decimal places every rank is rendered with
pub const RANK_PRECISION: usize = 4;

/// Renders `ranks` under `title`, one `  page: rank` line per page in
/// lexicographic page order.
pub fn format_ranks(title: &str, ranks: &RankVector) -> String {
    let mut out = format!("{}\n", title);
    for (page, rank) in ranks {
        out.push_str(&format!("  {}: {:.*}\n", page, RANK_PRECISION, rank));
    }
    out
}

pub fn sampling_title(samples: usize) -> String {
    format!("PageRank Results from Sampling (n = {})", samples)
}

pub fn iteration_title() -> String {
    "PageRank Results from Iteration".to_string()
}
