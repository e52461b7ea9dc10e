use crate::artist::{ArtistAttributes, ArtistId, MetadataMap};
use crate::persistence::{EdgeRecord, PersistenceError, load_attributes, read_edgelist};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::fmt::Write;
use std::path::Path;

/// Directed artist graph rebuilt from a persisted crawl.
#[derive(Debug, Clone, Default)]
pub struct ArtistGraph {
    nodes: IndexMap<ArtistId, ArtistAttributes, FxBuildHasher>,
    edges: Vec<EdgeRecord>,
}

impl ArtistGraph {
    /// Nodes are every metadata entry plus every edge endpoint; endpoints
    /// without metadata carry no attributes.
    pub fn from_parts(metadata: MetadataMap, edges: Vec<EdgeRecord>) -> Self {
        let mut nodes = metadata;

        for edge in &edges {
            nodes.entry(edge.source.clone()).or_default();
            nodes.entry(edge.target.clone()).or_default();
        }

        Self { nodes, edges }
    }

    pub fn load(attributes_path: &Path, edgelist_path: &Path) -> Result<Self, PersistenceError> {
        let metadata = load_attributes(attributes_path)?;
        let edges = read_edgelist(edgelist_path)?;
        Ok(Self::from_parts(metadata, edges))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn attributes(&self, artist_id: &ArtistId) -> Option<&ArtistAttributes> {
        self.nodes.get(artist_id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&ArtistId, &ArtistAttributes)> {
        self.nodes.iter()
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    pub fn successors<'a>(&'a self, artist_id: &'a ArtistId) -> impl Iterator<Item = &'a ArtistId> + 'a {
        self.edges
            .iter()
            .filter(move |edge| &edge.source == artist_id)
            .map(|edge| &edge.target)
    }

    pub fn out_degree(&self, artist_id: &ArtistId) -> usize {
        self.successors(artist_id).count()
    }

    pub fn in_degree(&self, artist_id: &ArtistId) -> usize {
        self.edges.iter().filter(|edge| &edge.target == artist_id).count()
    }

    pub fn label(&self, artist_id: &ArtistId) -> String {
        self.attributes(artist_id)
            .and_then(ArtistAttributes::name)
            .unwrap_or(artist_id.as_str())
            .to_string()
    }

    /// Render the graph as a Graphviz DOT string.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        out.push_str("digraph artists {\n");
        out.push_str("  node [fontname=\"Helvetica\", fontsize=10];\n");
        out.push_str("  edge [color=\"grey\", fontsize=8];\n");
        out.push('\n');

        for (artist_id, _) in self.nodes() {
            let _ = writeln!(
                out,
                "  \"{}\" [label=\"{}\"];",
                escape_dot(artist_id.as_str()),
                escape_dot(&self.label(artist_id)),
            );
        }

        out.push('\n');

        for edge in &self.edges {
            let label_attr = edge
                .weight
                .map(|weight| format!(" [label=\"{}\"]", weight))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "  \"{}\" -> \"{}\"{};",
                escape_dot(edge.source.as_str()),
                escape_dot(edge.target.as_str()),
                label_attr,
            );
        }

        out.push_str("}\n");
        out
    }
}

fn escape_dot(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}
