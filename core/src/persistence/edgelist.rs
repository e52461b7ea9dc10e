use super::{PersistenceError, ensure_parent_dir};
use crate::artist::ArtistId;
use crate::network::{Connections, iter_edges};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// One line of an edge list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: ArtistId,
    pub target: ArtistId,
    pub weight: Option<u32>,
}

/// Appends every edge as `source target[ weight]`, one per line, no header.
pub fn append_edgelist(connections: &Connections, path: &Path) -> Result<usize, PersistenceError> {
    ensure_parent_dir(path)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| PersistenceError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let mut written = 0;

    for (source, edge) in iter_edges(connections) {
        let line = match edge.weight {
            Some(weight) => writeln!(writer, "{} {} {}", source, edge.target, weight),
            None => writeln!(writer, "{} {}", source, edge.target),
        };
        line.map_err(|e| PersistenceError::io(path, e))?;
        written += 1;
    }

    writer.flush().map_err(|e| PersistenceError::io(path, e))?;
    Ok(written)
}

pub fn read_edgelist(path: &Path) -> Result<Vec<EdgeRecord>, PersistenceError> {
    let file = File::open(path).map_err(|e| PersistenceError::io(path, e))?;
    let mut records = Vec::new();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| PersistenceError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }

        let record = parse_edge_line(&line).ok_or_else(|| PersistenceError::MalformedEdge {
            path: path.to_path_buf(),
            line: index + 1,
            content: line.clone(),
        })?;
        records.push(record);
    }

    Ok(records)
}

fn parse_edge_line(line: &str) -> Option<EdgeRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    let (source, target, weight) = match fields.as_slice() {
        [source, target] => (source, target, None),
        [source, target, weight] => (source, target, Some(parse_weight(weight)?)),
        _ => return None,
    };

    Some(EdgeRecord {
        source: ArtistId::from(*source),
        target: ArtistId::from(*target),
        weight,
    })
}

/// Accepts integral floats (`3.0`) as written by other edge-list tools.
fn parse_weight(raw: &str) -> Option<u32> {
    if let Ok(weight) = raw.parse::<u32>() {
        return Some(weight);
    }
    let float = raw.parse::<f64>().ok()?;
    (float.fract() == 0.0 && float >= 0.0 && float <= f64::from(u32::MAX)).then_some(float as u32)
}
