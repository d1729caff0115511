use crate::indexer::IndexerAuth;

/// Everything a run needs, fixed at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub indexer_url: String,
    pub auth: IndexerAuth,
    pub asset_id: u64,
    /// Highest zero-based rank to print, zero or less prints every holder.
    pub top: i64,
}
