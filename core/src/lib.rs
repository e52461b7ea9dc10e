pub mod artist;
pub mod catalog;
pub mod crawl_config;
pub mod crawling;
pub mod fetching;
pub mod graph;
pub mod miner;
pub mod network;
pub mod persistence;

// Re-export commonly used items
pub use artist::{ArtistAttributes, ArtistId, AttributeSet, AttributeValue, MetadataMap};
pub use catalog::{Catalog, CatalogError, CatalogRecord, CatalogTrack, FieldLookup};
pub use crawl_config::{ConfigError, CrawlConfig};
pub use crawling::{CrawlResult, CrawlStats, StopReason, crawl_network};
pub use graph::ArtistGraph;
pub use miner::{MinerError, MiningReport, NetworkMiner, OutputTarget};
pub use network::{Connections, Edge};
pub use persistence::{ArtifactPaths, PersistenceError};
