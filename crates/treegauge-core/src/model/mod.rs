/// Data model for the TreeGauge directory tree.
///
/// Re-exports the aggregate node type and snapshot persistence.
pub mod node;
pub mod size;
pub mod snapshot;

pub use node::Node;
pub use snapshot::SnapshotError;
