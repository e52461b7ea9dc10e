use crate::artist::ArtistId;
use crate::catalog::{Catalog, CatalogError, CatalogRecord};
use rustc_hash::FxHashSet;

/// An artist proposed for admission into the network.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub record: CatalogRecord,
    pub popularity: u32,
    /// Position in the related-artists ranking; `None` for collaborators.
    pub rank: Option<usize>,
}

impl Candidate {
    fn new(record: CatalogRecord, rank: Option<usize>) -> Result<Self, CatalogError> {
        let popularity = record.popularity()?;
        Ok(Self {
            record,
            popularity,
            rank,
        })
    }

    pub fn id(&self) -> &ArtistId {
        &self.record.id
    }
}

/// Up to `limit` related artists of `id`, most related first.
pub fn fetch_related<C: Catalog>(
    catalog: &C,
    id: &ArtistId,
    limit: usize,
) -> Result<Vec<Candidate>, CatalogError> {
    catalog
        .related_artists(id)?
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(rank, record)| Candidate::new(record, Some(rank)))
        .collect()
}

/// Artists co-credited with `id` on its top `limit` tracks.
///
/// Each collaborator is looked up once per call, in first-credit order; `id`
/// itself is never returned.
pub fn fetch_collaborators<C: Catalog>(
    catalog: &C,
    id: &ArtistId,
    limit: usize,
) -> Result<Vec<Candidate>, CatalogError> {
    let tracks = catalog.top_tracks(id)?;
    let mut seen: FxHashSet<ArtistId> = FxHashSet::default();
    let mut collaborators = Vec::new();

    for track in tracks.iter().take(limit) {
        for credited in &track.artists {
            if credited == id || !seen.insert(credited.clone()) {
                continue;
            }
            let record = catalog.artist(credited)?;
            collaborators.push(Candidate::new(record, None)?);
        }
    }

    Ok(collaborators)
}

/// Appends every collaborator whose identifier is not already in `related`.
pub fn merge_collaborators(mut related: Vec<Candidate>, collaborators: Vec<Candidate>) -> Vec<Candidate> {
    let related_ids: FxHashSet<ArtistId> = related.iter().map(|c| c.id().clone()).collect();

    related.extend(
        collaborators
            .into_iter()
            .filter(|collaborator| !related_ids.contains(collaborator.id())),
    );
    related
}
