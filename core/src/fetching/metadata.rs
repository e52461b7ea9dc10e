use crate::artist::{ArtistAttributes, ArtistId, AttributeSet};
use crate::catalog::{Catalog, CatalogError, CatalogRecord, FieldLookup};

/// Fetches one artist record and keeps only the requested attributes.
///
/// Attributes missing from the record are skipped with a warning instead of
/// failing the whole lookup. Catalog failures propagate unchanged.
pub fn fetch_attributes<C: Catalog>(
    catalog: &C,
    id: &ArtistId,
    attributes: &AttributeSet,
) -> Result<ArtistAttributes, CatalogError> {
    let record = catalog.artist(id)?;
    Ok(select_attributes(&record, attributes))
}

pub(crate) fn select_attributes(record: &CatalogRecord, attributes: &AttributeSet) -> ArtistAttributes {
    let mut selected = ArtistAttributes::new();

    for name in attributes.iter() {
        match record.field(name) {
            FieldLookup::Present(value) => selected.insert(name, value.clone()),
            FieldLookup::Absent => tracing::warn!(artist = %record.id, "{} is not a valid key", name),
        }
    }

    selected
}
