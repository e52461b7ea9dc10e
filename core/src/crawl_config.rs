use crate::artist::AttributeSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("breadth limit must be at least 1")]
    ZeroBreadthLimit,
    #[error("maximum population size must be at least 1")]
    ZeroPopulationSize,
    #[error("at least one attribute must be requested")]
    EmptyAttributeSet,
}

/// Configuration for network crawling
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Related artists and top tracks considered per expanded artist
    pub breadth_limit: usize,
    /// Candidates below this popularity are never admitted
    pub min_popularity: u32,
    /// Hard cap on explored artists; `None` crawls until the queue drains
    pub max_population_size: Option<usize>,
    /// Also expand through artists credited on top tracks
    pub include_collaborators: bool,
    /// Attach rank-derived weights to edges
    pub weighted: bool,
    /// Log every visited node and rejected candidate
    pub verbose: bool,
    /// Attributes kept for every visited artist
    pub attributes: AttributeSet,
}

impl CrawlConfig {
    pub fn new(breadth_limit: usize, min_popularity: u32, max_population_size: Option<usize>) -> Self {
        Self {
            breadth_limit,
            min_popularity,
            max_population_size,
            ..Self::default()
        }
    }

    pub fn with_collaborators(mut self, include_collaborators: bool) -> Self {
        self.include_collaborators = include_collaborators;
        self
    }

    pub fn with_weights(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_attributes(mut self, attributes: AttributeSet) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breadth_limit == 0 {
            return Err(ConfigError::ZeroBreadthLimit);
        }
        if self.max_population_size == Some(0) {
            return Err(ConfigError::ZeroPopulationSize);
        }
        if self.attributes.is_empty() {
            return Err(ConfigError::EmptyAttributeSet);
        }
        Ok(())
    }

    /// Edge weight for a candidate at `rank` in the related list.
    /// Unranked candidates (collaborators) weigh 0.
    pub fn edge_weight(&self, rank: Option<usize>) -> Option<u32> {
        if !self.weighted {
            return None;
        }
        let weight = rank
            .map(|rank| self.breadth_limit.saturating_sub(rank))
            .unwrap_or(0);
        Some(u32::try_from(weight).unwrap_or(u32::MAX))
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            breadth_limit: 5,
            min_popularity: 65,
            max_population_size: Some(100),
            include_collaborators: true,
            weighted: false,
            verbose: true,
            attributes: AttributeSet::default(),
        }
    }
}
