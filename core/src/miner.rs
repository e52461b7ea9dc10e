use crate::artist::ArtistId;
use crate::catalog::{Catalog, CatalogError};
use crate::crawl_config::{ConfigError, CrawlConfig};
use crate::crawling::{CrawlResult, StopReason, crawl_network};
use crate::persistence::{ArtifactPaths, PersistenceError, append_edgelist, save_attributes};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_OUTPUT_DIR: &str = "derivatives";

#[derive(Debug, Error)]
pub enum MinerError {
    #[error("invalid crawl configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("could not persist the network: {0}")]
    Persistence(#[from] PersistenceError),
    #[error("could not resolve an output name from the seed artist: {0}")]
    OutputName(#[source] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub directory: PathBuf,
    /// File stem for both artifacts; the seed's catalog name when absent.
    pub name: Option<String>,
}

impl OutputTarget {
    pub fn new(directory: impl Into<PathBuf>, name: Option<String>) -> Self {
        Self {
            directory: directory.into(),
            name,
        }
    }

    pub fn paths_for(&self, name: &str) -> ArtifactPaths {
        ArtifactPaths::new(&self.directory, &sanitize_file_name(name))
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR, None)
    }
}

#[derive(Debug, Clone)]
pub struct MiningReport {
    pub result: CrawlResult,
    pub paths: ArtifactPaths,
    pub edges_written: usize,
    /// Artists in the attributes store after merging this crawl.
    pub artists_stored: usize,
}

/// Crawls a related-artist network and persists it in one call.
pub struct NetworkMiner<C> {
    catalog: C,
    config: CrawlConfig,
}

impl<C: Catalog> NetworkMiner<C> {
    pub fn new(catalog: C, config: CrawlConfig) -> Self {
        Self { catalog, config }
    }

    /// Runs the crawl from `seed` and writes both artifacts.
    ///
    /// Catalog failures during traversal never surface here: the crawl stops
    /// and whatever was gathered is still written. Only configuration, output
    /// name resolution and persistence failures are returned.
    pub fn write_edgelist(&self, seed: &ArtistId, output: &OutputTarget) -> Result<MiningReport, MinerError> {
        self.config.validate()?;

        let name = match &output.name {
            Some(name) => name.clone(),
            None => self.seed_name(seed)?,
        };
        let paths = output.paths_for(&name);

        let result = crawl_network(&self.catalog, seed, &self.config);
        log_stop_reason(&result.stop_reason);

        tracing::info!("Saving edgelist...");
        let edges_written = append_edgelist(&result.connections, &paths.edgelist)?;
        tracing::info!("Saving attributes...");
        let artists_stored = save_attributes(&result.metadata, &paths.attributes)?;

        tracing::info!(edges = edges_written, path = %paths.edgelist.display(), "Edge list written");
        tracing::info!(artists = artists_stored, path = %paths.attributes.display(), "Attributes written");

        Ok(MiningReport {
            result,
            paths,
            edges_written,
            artists_stored,
        })
    }

    fn seed_name(&self, seed: &ArtistId) -> Result<String, MinerError> {
        let record = self.catalog.artist(seed).map_err(MinerError::OutputName)?;
        Ok(record.label().to_string())
    }
}

fn log_stop_reason(stop_reason: &StopReason) {
    match stop_reason {
        StopReason::Exhausted => tracing::info!("Queue exhausted"),
        StopReason::PopulationCapReached { size } => {
            tracing::info!(size, "Stopped at maximum population size")
        }
        StopReason::Interrupted(error) => {
            if error.is_transient() {
                tracing::warn!(%error, "Connection lost during crawl");
            } else {
                tracing::warn!(%error, "Crawl interrupted");
            }
            tracing::warn!("Saving current progress...");
        }
    }
}

/// Keeps artist names usable as file stems.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "network".to_string()
    } else {
        cleaned
    }
}
