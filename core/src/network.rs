use crate::artist::ArtistId;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// A directed connection to an admitted artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub target: ArtistId,
    pub weight: Option<u32>,
}

impl Edge {
    pub fn new(target: ArtistId, weight: Option<u32>) -> Self {
        Self { target, weight }
    }
}

/// Admitted edges per source artist, sources in first-admission order and
/// targets in encounter order.
pub type Connections = IndexMap<ArtistId, Vec<Edge>, FxBuildHasher>;

pub fn edge_count(connections: &Connections) -> usize {
    connections.values().map(Vec::len).sum()
}

/// Flattens connections into `(source, edge)` pairs in file order.
pub fn iter_edges(connections: &Connections) -> impl Iterator<Item = (&ArtistId, &Edge)> {
    connections
        .iter()
        .flat_map(|(source, edges)| edges.iter().map(move |edge| (source, edge)))
}
