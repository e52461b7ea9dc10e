use crate::artist::{ArtistAttributes, ArtistId, MetadataMap};
use crate::network::{Connections, Edge};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

pub struct CrawlState {
    queue: VecDeque<ArtistId>,
    explored: FxHashSet<ArtistId>,
    connections: Connections,
    metadata: MetadataMap,
}

impl CrawlState {
    pub fn new(seed: ArtistId) -> Self {
        let mut queue = VecDeque::new();
        let mut explored = FxHashSet::default();

        queue.push_back(seed.clone());
        explored.insert(seed);

        Self {
            queue,
            explored,
            connections: Connections::default(),
            metadata: MetadataMap::default(),
        }
    }

    pub fn next_artist(&mut self) -> Option<ArtistId> {
        self.queue.pop_front()
    }

    pub fn population(&self) -> usize {
        self.explored.len()
    }

    pub fn is_explored(&self, artist_id: &ArtistId) -> bool {
        self.explored.contains(artist_id)
    }

    pub fn metadata_of(&self, artist_id: &ArtistId) -> Option<&ArtistAttributes> {
        self.metadata.get(artist_id)
    }

    pub fn record_metadata(&mut self, artist_id: ArtistId, attributes: ArtistAttributes) {
        self.metadata.entry(artist_id).or_insert(attributes);
    }

    /// Records the edge, stores the target's attributes, marks it explored and
    /// queues it.
    pub fn admit(&mut self, source: &ArtistId, edge: Edge, attributes: ArtistAttributes) {
        let target = edge.target.clone();

        self.connections.entry(source.clone()).or_default().push(edge);
        self.record_metadata(target.clone(), attributes);
        self.explored.insert(target.clone());
        self.queue.push_back(target);
    }

    pub fn into_parts(self) -> (Connections, MetadataMap) {
        (self.connections, self.metadata)
    }
}
