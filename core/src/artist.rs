use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog-assigned identifier of an artist (e.g. `spotify:artist:...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(String);

impl ArtistId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtistId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ArtistId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single attribute value copied out of a catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<AttributeValue>),
    Map(IndexMap<String, AttributeValue>),
}

impl AttributeValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => AttributeValue::Null,
            Value::Bool(flag) => AttributeValue::Bool(flag),
            Value::Number(number) => match number.as_i64() {
                Some(integer) => AttributeValue::Integer(integer),
                None => AttributeValue::Float(number.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(text) => AttributeValue::Text(text),
            Value::Array(items) => {
                AttributeValue::List(items.into_iter().map(AttributeValue::from).collect())
            }
            Value::Object(fields) => AttributeValue::Map(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, AttributeValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Null => f.write_str("null"),
            AttributeValue::Bool(flag) => write!(f, "{}", flag),
            AttributeValue::Integer(value) => write!(f, "{}", value),
            AttributeValue::Float(value) => write!(f, "{}", value),
            AttributeValue::Text(text) => f.write_str(text),
            AttributeValue::List(items) => {
                let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            AttributeValue::Map(fields) => {
                let rendered: Vec<String> = fields
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
        }
    }
}

/// Requested attributes of one artist, in request order. Created once per
/// visited artist and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistAttributes(IndexMap<String, AttributeValue>);

impl ArtistAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: &str, value: AttributeValue) {
        self.0.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(AttributeValue::as_text)
    }

    pub fn popularity(&self) -> Option<i64> {
        self.get("popularity").and_then(AttributeValue::as_integer)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, AttributeValue)> for ArtistAttributes {
    fn from_iter<T: IntoIterator<Item = (String, AttributeValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Ordered, de-duplicated attribute names to copy out of each catalog record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSet(Vec<String>);

impl AttributeSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self(unique)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::new(["name", "popularity"])
    }
}

/// Attributes of every visited artist, in discovery order.
pub type MetadataMap = IndexMap<ArtistId, ArtistAttributes, FxBuildHasher>;
