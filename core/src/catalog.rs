use crate::artist::{ArtistId, AttributeValue};
use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Connectivity loss, timeout or any other failure below HTTP.
    #[error("transport failure while {context}: {message}")]
    Transport { context: String, message: String },

    #[error("catalog answered {status} while {context}")]
    Status { context: String, status: u16 },

    #[error("malformed catalog response while {context}: {reason}")]
    Malformed { context: String, reason: String },
}

impl CatalogError {
    pub fn transport(context: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogError::Transport {
            context: context.into(),
            message: message.into(),
        }
    }

    pub fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::Malformed {
            context: context.into(),
            reason: reason.into(),
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, CatalogError::Transport { .. })
    }
}

/// Result of looking a field up on a raw catalog record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldLookup<'a> {
    Present(&'a AttributeValue),
    Absent,
}

/// Raw artist record as returned by the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecord {
    pub id: ArtistId,
    fields: IndexMap<String, AttributeValue>,
}

impl CatalogRecord {
    /// Builds a record from a JSON object, taking the identifier from `id_field`.
    pub fn from_json(value: serde_json::Value, id_field: &str) -> Result<Self, CatalogError> {
        let serde_json::Value::Object(object) = value else {
            return Err(CatalogError::malformed(
                "reading artist record",
                "expected a JSON object",
            ));
        };

        let id = match object.get(id_field) {
            Some(serde_json::Value::String(id)) => ArtistId::new(id.as_str()),
            _ => {
                return Err(CatalogError::malformed(
                    "reading artist record",
                    format!("missing string field `{}`", id_field),
                ));
            }
        };

        let fields = object
            .into_iter()
            .map(|(key, value)| (key, AttributeValue::from(value)))
            .collect();

        Ok(Self { id, fields })
    }

    pub fn field(&self, name: &str) -> FieldLookup<'_> {
        match self.fields.get(name) {
            Some(value) => FieldLookup::Present(value),
            None => FieldLookup::Absent,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(AttributeValue::as_text)
    }

    /// Display name, falling back to the identifier.
    pub fn label(&self) -> &str {
        self.name().unwrap_or(self.id.as_str())
    }

    pub fn popularity(&self) -> Result<u32, CatalogError> {
        let context = || format!("reading popularity of {}", self.id);

        match self.field("popularity") {
            FieldLookup::Present(AttributeValue::Integer(value)) => u32::try_from(*value)
                .map_err(|_| CatalogError::malformed(context(), format!("out of range: {}", value))),
            FieldLookup::Present(other) => Err(CatalogError::malformed(
                context(),
                format!("not an integer: {}", other),
            )),
            FieldLookup::Absent => Err(CatalogError::malformed(context(), "field is absent")),
        }
    }
}

/// A top track with the identifiers of every credited artist, in credit order.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTrack {
    pub name: String,
    pub artists: Vec<ArtistId>,
}

/// Blocking access to the external music catalog. One call is one request.
pub trait Catalog {
    fn artist(&self, id: &ArtistId) -> Result<CatalogRecord, CatalogError>;

    /// Related artists, most related first.
    fn related_artists(&self, id: &ArtistId) -> Result<Vec<CatalogRecord>, CatalogError>;

    fn top_tracks(&self, id: &ArtistId) -> Result<Vec<CatalogTrack>, CatalogError>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn artist(&self, id: &ArtistId) -> Result<CatalogRecord, CatalogError> {
        (**self).artist(id)
    }

    fn related_artists(&self, id: &ArtistId) -> Result<Vec<CatalogRecord>, CatalogError> {
        (**self).related_artists(id)
    }

    fn top_tracks(&self, id: &ArtistId) -> Result<Vec<CatalogTrack>, CatalogError> {
        (**self).top_tracks(id)
    }
}
