use super::state::CrawlState;
use super::{CrawlResult, CrawlStats, StopReason};
use crate::artist::{ArtistAttributes, ArtistId};
use crate::catalog::{Catalog, CatalogError};
use crate::crawl_config::CrawlConfig;
use crate::fetching::{Candidate, fetch_attributes, fetch_collaborators, fetch_related, merge_collaborators};
use crate::network::Edge;
use std::ops::ControlFlow;
use std::time::Instant;

/// Breadth-first discovery of the related-artist network around `seed`.
///
/// Never fails: a catalog error stops the traversal and is reported through
/// [`StopReason::Interrupted`] alongside everything gathered up to that point.
/// The configuration is expected to be validated by the caller.
pub fn crawl_network<C: Catalog>(catalog: &C, seed: &ArtistId, config: &CrawlConfig) -> CrawlResult {
    let start_time = Instant::now();
    let mut crawler = NetworkCrawler::new(catalog, config, seed.clone());

    let stop_reason = crawler.run().unwrap_or_else(StopReason::Interrupted);

    let NetworkCrawler { state, mut stats, .. } = crawler;
    stats.duration_ms = start_time.elapsed().as_millis() as u64;
    let (connections, metadata) = state.into_parts();

    CrawlResult {
        connections,
        metadata,
        stop_reason,
        stats,
    }
}

struct NetworkCrawler<'a, C> {
    catalog: &'a C,
    config: &'a CrawlConfig,
    state: CrawlState,
    stats: CrawlStats,
}

impl<'a, C: Catalog> NetworkCrawler<'a, C> {
    fn new(catalog: &'a C, config: &'a CrawlConfig, seed: ArtistId) -> Self {
        Self {
            catalog,
            config,
            state: CrawlState::new(seed),
            stats: CrawlStats::default(),
        }
    }

    fn run(&mut self) -> Result<StopReason, CatalogError> {
        while let Some(current) = self.state.next_artist() {
            self.ensure_metadata(&current)?;

            if let Some(size) = self.population_cap_reached() {
                return Ok(StopReason::PopulationCapReached { size });
            }

            if let ControlFlow::Break(reason) = self.expand(&current)? {
                return Ok(reason);
            }
        }

        Ok(StopReason::Exhausted)
    }

    /// Only the seed reaches the queue without attributes.
    fn ensure_metadata(&mut self, artist_id: &ArtistId) -> Result<(), CatalogError> {
        if self.state.metadata_of(artist_id).is_some() {
            return Ok(());
        }

        let attributes = fetch_attributes(self.catalog, artist_id, &self.config.attributes)?;
        self.log_node(artist_id, &attributes);
        self.state.record_metadata(artist_id.clone(), attributes);
        Ok(())
    }

    fn expand(&mut self, current: &ArtistId) -> Result<ControlFlow<StopReason>, CatalogError> {
        let candidates = self.gather_candidates(current)?;
        self.stats.nodes_expanded += 1;

        for candidate in candidates {
            self.stats.candidates_seen += 1;

            // Popularity is checked before membership so rejected artists stay
            // reachable from other sources.
            if !self.is_popular_enough(&candidate) {
                continue;
            }
            if self.state.is_explored(candidate.id()) {
                continue;
            }

            self.admit(current, candidate)?;

            if let Some(size) = self.population_cap_reached() {
                tracing::info!(size, "Maximum population size reached");
                return Ok(ControlFlow::Break(StopReason::PopulationCapReached { size }));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn gather_candidates(&self, current: &ArtistId) -> Result<Vec<Candidate>, CatalogError> {
        let related = fetch_related(self.catalog, current, self.config.breadth_limit)?;

        if !self.config.include_collaborators {
            return Ok(related);
        }

        let collaborators = fetch_collaborators(self.catalog, current, self.config.breadth_limit)?;
        Ok(merge_collaborators(related, collaborators))
    }

    fn is_popular_enough(&mut self, candidate: &Candidate) -> bool {
        if candidate.popularity >= self.config.min_popularity {
            return true;
        }

        self.stats.rejected_unpopular += 1;
        if self.config.verbose {
            tracing::info!(
                "\t{} is unpopular ({})",
                candidate.record.label(),
                candidate.popularity
            );
        }
        false
    }

    fn admit(&mut self, source: &ArtistId, candidate: Candidate) -> Result<(), CatalogError> {
        let target = candidate.id().clone();
        let attributes = fetch_attributes(self.catalog, &target, &self.config.attributes)?;
        let edge = Edge::new(target.clone(), self.config.edge_weight(candidate.rank));

        self.state.admit(source, edge, attributes);

        if let Some(attributes) = self.state.metadata_of(&target) {
            self.log_node(&target, attributes);
        }
        Ok(())
    }

    fn population_cap_reached(&self) -> Option<usize> {
        let population = self.state.population();
        self.config
            .max_population_size
            .filter(|&limit| population >= limit)
            .map(|_| population)
    }

    fn log_node(&self, artist_id: &ArtistId, attributes: &ArtistAttributes) {
        if !self.config.verbose {
            return;
        }

        let name = attributes.name().unwrap_or(artist_id.as_str());
        let popularity = attributes
            .popularity()
            .map(|popularity| popularity.to_string())
            .unwrap_or_else(|| "?".to_string());
        tracing::info!("Node {}: {} ({})", self.state.population(), name, popularity);
    }
}
