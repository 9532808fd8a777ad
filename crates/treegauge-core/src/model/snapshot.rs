/// Snapshot persistence — save and load a scanned tree as JSON.
///
/// The document shape is stable across versions: one object per directory
/// with `path`, `name`, the six counters, and a `children` array of the same
/// shape. Missing counter fields default to 0 and unknown fields are
/// ignored, so older or newer snapshots still load. Totals are trusted as
/// stored; loading does not re-run aggregation.
///
/// Filesystem errors are absorbed inside the scanner, but a corrupt snapshot
/// cannot be silently repaired — it is the one error class this crate
/// surfaces to the caller.
use super::Node;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error loading or saving a snapshot document.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The document is not a valid snapshot (bad JSON or wrong shape).
    /// Deserialization fails atomically — no partial tree is produced.
    #[error("malformed snapshot document: {0}")]
    Format(#[from] serde_json::Error),

    /// The snapshot file could not be read or written.
    #[error("snapshot file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Encode a tree as pretty-printed JSON.
pub fn to_json(node: &Node) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(node)?)
}

/// Decode a tree from JSON text.
pub fn from_json(text: &str) -> Result<Node, SnapshotError> {
    Ok(serde_json::from_str(text)?)
}

/// Write a snapshot file.
pub fn save(node: &Node, path: &Path) -> Result<(), SnapshotError> {
    fs::write(path, to_json(node)?)?;
    Ok(())
}

/// Read a snapshot file.
pub fn load(path: &Path) -> Result<Node, SnapshotError> {
    from_json(&fs::read_to_string(path)?)
}
