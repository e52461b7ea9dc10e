use artistnet_core::{
    ArtistGraph, ArtistId, AttributeSet, CrawlConfig, MinerError, MiningReport,
    NetworkMiner, OutputTarget, PersistenceError,
};
use std::path::PathBuf;
use thiserror::Error;

use crate::args::{CrawlArgs, PlotArgs};
use crate::spotify::SpotifyClient;

const CLIENT_ID_VARS: [&str; 2] = ["SPOTIPY_CLIENT_ID", "SPOTIFY_CLIENT_ID"];
const CLIENT_SECRET_VARS: [&str; 2] = ["SPOTIPY_CLIENT_SECRET", "SPOTIFY_CLIENT_SECRET"];
const MARKET_VAR: &str = "SPOTIFY_MARKET";
const DEFAULT_MARKET: &str = "US";
const ARTIST_URI_PREFIX: &str = "spotify:artist:";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} environment variable must be set (a .env file works too)")]
    MissingCredential(&'static str),
    #[error("'{0}' is not a Spotify artist URI, link or id")]
    InvalidSeed(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    #[error(transparent)]
    Miner(#[from] MinerError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub client_id: String,
    pub client_secret: String,
    pub market: String,
}

impl Settings {
    /// Reads credentials from the environment after loading any `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded environment file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first_set = |keys: &[&str]| {
            keys.iter()
                .find_map(|key| lookup(key).filter(|value| !value.trim().is_empty()))
        };

        let client_id = first_set(&CLIENT_ID_VARS[..]).ok_or(AppError::MissingCredential(CLIENT_ID_VARS[0]))?;
        let client_secret =
            first_set(&CLIENT_SECRET_VARS[..]).ok_or(AppError::MissingCredential(CLIENT_SECRET_VARS[0]))?;
        let market = lookup(MARKET_VAR).unwrap_or_else(|| DEFAULT_MARKET.to_string());

        Ok(Self {
            client_id,
            client_secret,
            market,
        })
    }
}

impl CrawlArgs {
    pub fn to_config(&self) -> CrawlConfig {
        let max_population_size = if self.unbounded {
            None
        } else {
            Some(self.max_population)
        };

        CrawlConfig::new(self.breadth_limit, self.min_popularity, max_population_size)
            .with_collaborators(!self.no_collaborators)
            .with_weights(self.weighted)
            .with_verbose(!self.quiet)
            .with_attributes(AttributeSet::new(
                self.attributes
                    .iter()
                    .map(|name| name.trim())
                    .filter(|name| !name.is_empty()),
            ))
    }

    pub fn output_target(&self) -> OutputTarget {
        OutputTarget::new(self.output_dir.clone(), self.fname.clone())
    }
}

/// Accepts `spotify:artist:<id>`, `https://open.spotify.com/artist/<id>` and
/// bare ids, returning the URI form.
pub fn normalize_seed(raw: &str) -> Result<ArtistId, AppError> {
    let trimmed = raw.trim();

    let id = if let Some(id) = trimmed.strip_prefix(ARTIST_URI_PREFIX) {
        id
    } else if let Some(position) = trimmed.find("open.spotify.com/artist/") {
        let rest = &trimmed[position + "open.spotify.com/artist/".len()..];
        rest.split(['?', '/', '#']).next().unwrap_or_default()
    } else {
        trimmed
    };

    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::InvalidSeed(raw.to_string()));
    }

    Ok(ArtistId::new(format!("{}{}", ARTIST_URI_PREFIX, id)))
}

pub fn run_crawl(args: &CrawlArgs) -> Result<MiningReport, AppError> {
    let seed = normalize_seed(&args.seed)?;
    let settings = Settings::from_env()?;
    let client = SpotifyClient::new(settings.client_id, settings.client_secret, settings.market)
        .map_err(AppError::HttpClient)?;

    let miner = NetworkMiner::new(client, args.to_config());
    Ok(miner.write_edgelist(&seed, &args.output_target())?)
}

pub struct PlotOutcome {
    pub graph: ArtistGraph,
    pub dot_path: PathBuf,
}

pub fn run_plot(args: &PlotArgs) -> Result<PlotOutcome, AppError> {
    let paths = OutputTarget::new(args.output_dir.clone(), Some(args.name.clone())).paths_for(&args.name);
    let graph = ArtistGraph::load(&paths.attributes, &paths.edgelist)?;

    let dot_path = args.dot.clone().unwrap_or(paths.dot);
    if let Some(parent) = dot_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| PersistenceError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(&dot_path, graph.to_dot()).map_err(|source| PersistenceError::Io {
        path: dot_path.clone(),
        source,
    })?;
    tracing::info!(path = %dot_path.display(), "DOT file written");

    Ok(PlotOutcome { graph, dot_path })
}
