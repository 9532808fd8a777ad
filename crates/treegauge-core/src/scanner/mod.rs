/// Scanner module — orchestrates tree walking.
///
/// [`scan_tree`] is the synchronous engine: explicit-stack traversal,
/// bottom-up aggregation, cooperative cancellation, optional probe fan-out.
/// [`start_scan`] wraps it for interactive callers: the walk runs on a named
/// background thread, per-directory progress streams over a bounded
/// crossbeam channel, and the finished tree is collected with
/// [`ScanHandle::join`].
pub mod probe;
pub mod progress;
pub mod walker;

pub use progress::{ProbeUpdate, ScanProgress, PROGRESS_CHANNEL_CAPACITY};
pub use walker::scan_tree;

use crate::model::Node;
use crossbeam_channel::Receiver;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, info};

/// Default worker count — fully sequential, which is friendliest to
/// spinning disks. SSDs often benefit from 4–8.
pub const DEFAULT_WORKERS: usize = 1;

/// Shared cooperative-cancellation handle.
///
/// Clones share one flag. Setting it is idempotent; the scanner polls it at
/// well-defined points (before each probe, inside entry listing, before
/// dispatching the pool) rather than interrupting in-flight I/O. After a
/// scan returns, the flag tells the caller whether the result is complete
/// or a consistent partial tree.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Safe to call from any thread, any number of times.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Handle to a running or completed background scan.
pub struct ScanHandle {
    /// Receiver for progress updates from the scanner thread.
    pub progress_rx: Receiver<ScanProgress>,
    cancel: CancelFlag,
    thread: thread::JoinHandle<Node>,
}

impl ScanHandle {
    /// Request the scan to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// A clone of the underlying flag, e.g. for a signal handler.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Wait for the walk to finish and take the root node. Always yields a
    /// valid tree — partial if the scan was cancelled.
    pub fn join(self) -> Node {
        self.thread.join().expect("scanner thread panicked")
    }
}

/// Start a scan on a background thread.
///
/// `workers` as in [`scan_tree`]. Progress arrives on
/// [`ScanHandle::progress_rx`], ending with [`ScanProgress::Complete`].
pub fn start_scan(root: PathBuf, workers: usize) -> ScanHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel = CancelFlag::new();
    let cancel_clone = cancel.clone();

    let thread = thread::Builder::new()
        .name("treegauge-scanner".into())
        .spawn(move || {
            info!("starting scan of {}", root.display());
            let start = Instant::now();

            let probe_tx = progress_tx.clone();
            let mut on_probe = |update: &ProbeUpdate| {
                let _ = probe_tx.send(ScanProgress::Probed(update.clone()));
            };
            let node = scan_tree(&root, workers, &cancel_clone, Some(&mut on_probe));

            let duration = start.elapsed();
            let cancelled = cancel_clone.is_cancelled();
            debug!(?duration, cancelled, "scan finished");
            let _ = progress_tx.send(ScanProgress::Complete {
                duration,
                cancelled,
            });
            node
        })
        .expect("failed to spawn scanner thread");

    ScanHandle {
        progress_rx,
        cancel,
        thread,
    }
}
