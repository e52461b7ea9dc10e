pub mod bfs;
mod state;

pub use bfs::crawl_network;

use crate::artist::MetadataMap;
use crate::catalog::CatalogError;
use crate::network::{Connections, edge_count};

/// Why a traversal ended.
#[derive(Debug, Clone, PartialEq)]
pub enum StopReason {
    /// The queue drained.
    Exhausted,
    /// The explored set reached the configured maximum population.
    PopulationCapReached { size: usize },
    /// A catalog request failed; everything gathered before it is kept.
    Interrupted(CatalogError),
}

impl StopReason {
    pub fn is_interrupted(&self) -> bool {
        matches!(self, StopReason::Interrupted(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlStats {
    pub nodes_expanded: usize,
    pub candidates_seen: usize,
    pub rejected_unpopular: usize,
    pub duration_ms: u64,
}

#[derive(Debug, Clone)]
pub struct CrawlResult {
    pub connections: Connections,
    pub metadata: MetadataMap,
    pub stop_reason: StopReason,
    pub stats: CrawlStats,
}

impl CrawlResult {
    pub fn total_discovered(&self) -> usize {
        self.metadata.len()
    }

    pub fn total_edges(&self) -> usize {
        edge_count(&self.connections)
    }
}
