/// Scan progress reporting — lightweight messages sent from the scanner
/// thread to the caller via a crossbeam channel.
use std::path::PathBuf;
use std::time::Duration;

/// One probed directory: its path and the counts contributed by its own
/// entries. Emitted on the driving thread, once per directory, purely
/// informational — traversal order and results do not depend on it.
#[derive(Debug, Clone)]
pub struct ProbeUpdate {
    pub path: PathBuf,
    pub files: u64,
    pub dirs: u64,
    pub size: u64,
}

/// Progress updates sent from the scanner thread.
///
/// The tree itself is returned by [`super::ScanHandle::join`]; these
/// messages carry only lightweight counters and the terminal status.
#[derive(Debug)]
pub enum ScanProgress {
    /// A directory's immediate entries were listed and counted.
    Probed(ProbeUpdate),

    /// The walk and aggregation finished. `cancelled` distinguishes a full
    /// tree from a valid-but-partial one.
    Complete { duration: Duration, cancelled: bool },
}

/// Maximum number of progress messages that may queue up in the channel.
///
/// Consumers drain the channel in a loop; a burst of 4 096 buffered messages
/// gives the scanner plenty of headroom before back-pressure causes `send`
/// to block on a slow consumer rather than consuming unbounded heap.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;
