use artistnet_core::{ArtistId, Catalog, CatalogError, CatalogRecord, CatalogTrack};
use serde_json::json;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Request {
    Artist(String),
    Related(String),
    TopTracks(String),
}

/// In-memory catalog that replays fixed responses and records every request.
#[derive(Default)]
pub struct ScriptedCatalog {
    artists: HashMap<ArtistId, serde_json::Value>,
    related: HashMap<ArtistId, Vec<ArtistId>>,
    top_tracks: HashMap<ArtistId, Vec<CatalogTrack>>,
    failures: HashSet<Request>,
    requests: RefCell<Vec<Request>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artist(mut self, id: &str, name: &str, popularity: u32) -> Self {
        self.artists.insert(
            id.into(),
            json!({
                "uri": id,
                "name": name,
                "popularity": popularity,
                "genres": ["reggaeton"],
                "type": "artist",
            }),
        );
        self
    }

    pub fn raw_artist(mut self, id: &str, record: serde_json::Value) -> Self {
        self.artists.insert(id.into(), record);
        self
    }

    pub fn related(mut self, id: &str, related: &[&str]) -> Self {
        self.related
            .insert(id.into(), related.iter().map(|&r| ArtistId::from(r)).collect());
        self
    }

    pub fn track(mut self, id: &str, name: &str, credited: &[&str]) -> Self {
        self.top_tracks.entry(id.into()).or_default().push(CatalogTrack {
            name: name.to_string(),
            artists: credited.iter().map(|&c| ArtistId::from(c)).collect(),
        });
        self
    }

    pub fn fail(mut self, request: Request) -> Self {
        self.failures.insert(request);
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, request: &Request) -> usize {
        self.requests.borrow().iter().filter(|r| *r == request).count()
    }

    fn record(&self, request: Request) -> Result<(), CatalogError> {
        self.requests.borrow_mut().push(request.clone());
        if self.failures.contains(&request) {
            return Err(CatalogError::transport(
                format!("{:?}", request),
                "connection reset by peer",
            ));
        }
        Ok(())
    }

    fn lookup(&self, id: &ArtistId) -> Result<CatalogRecord, CatalogError> {
        match self.artists.get(id) {
            Some(record) => CatalogRecord::from_json(record.clone(), "uri"),
            None => Err(CatalogError::Status {
                context: format!("fetching artist {}", id),
                status: 404,
            }),
        }
    }
}

impl Catalog for ScriptedCatalog {
    fn artist(&self, id: &ArtistId) -> Result<CatalogRecord, CatalogError> {
        self.record(Request::Artist(id.to_string()))?;
        self.lookup(id)
    }

    fn related_artists(&self, id: &ArtistId) -> Result<Vec<CatalogRecord>, CatalogError> {
        self.record(Request::Related(id.to_string()))?;
        self.related
            .get(id)
            .map(|related| related.iter().map(|r| self.lookup(r)).collect())
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn top_tracks(&self, id: &ArtistId) -> Result<Vec<CatalogTrack>, CatalogError> {
        self.record(Request::TopTracks(id.to_string()))?;
        Ok(self.top_tracks.get(id).cloned().unwrap_or_default())
    }
}

pub fn id(raw: &str) -> ArtistId {
    ArtistId::from(raw)
}

pub fn targets(connections: &artistnet_core::Connections, source: &str) -> Vec<String> {
    connections
        .get(&id(source))
        .map(|edges| edges.iter().map(|edge| edge.target.to_string()).collect())
        .unwrap_or_default()
}

pub fn metadata_ids(metadata: &artistnet_core::MetadataMap) -> Vec<String> {
    metadata.keys().map(ToString::to_string).collect()
}

/// Two-level network used by most crawl tests.
///
/// ```text
/// A -> B(80), C(30), D(70)
/// B -> A, E(90)
/// D -> C, F(66)
/// E -> B
/// ```
pub fn small_network() -> ScriptedCatalog {
    ScriptedCatalog::new()
        .artist("A", "Alpha", 75)
        .artist("B", "Bravo", 80)
        .artist("C", "Charlie", 30)
        .artist("D", "Delta", 70)
        .artist("E", "Echo", 90)
        .artist("F", "Foxtrot", 66)
        .related("A", &["B", "C", "D"])
        .related("B", &["A", "E"])
        .related("D", &["C", "F"])
        .related("E", &["B"])
}
