/// Tree walker and bottom-up aggregator.
///
/// Traversal runs on an explicit LIFO task stack instead of call-stack
/// recursion, so directory depth is bounded only by memory. Every directory
/// passes through two phases: *expand* (probe its entries, schedule its
/// children) and *fold* (combine its immediate counts with its children's
/// already-computed totals). Pushing the fold frame before the child frames
/// guarantees children pop, expand, and fold before their parent folds.
///
/// With more than one worker, the immediate children of the directory being
/// expanded are probed concurrently on a bounded pool. Workers only return
/// plain [`ProbeResult`] values; the tree and the stack are touched by the
/// single driving thread alone, so the tree needs no locks.
///
/// Cancellation never aborts the walk with an error: pending probes collapse
/// to empty results and every fold frame still runs, so the returned root is
/// always a valid, fully-aggregated (if partial) tree.
use super::probe::{probe_dir, ProbeResult};
use super::progress::ProbeUpdate;
use super::CancelFlag;
use crate::model::Node;
use crate::platform::{self, PathAdapter};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One frame on the traversal stack.
enum Task {
    /// Directory discovered but not yet probed.
    Expand(PathBuf),
    /// Probe already ran (inline, or ahead of time on the worker pool);
    /// the children it discovered still need their own expansion.
    Expanded(PathBuf, ProbeResult),
    /// All child frames pushed above this one have resolved; fold their
    /// totals into the node and mark it complete.
    Fold { node: Node, pending: usize },
}

/// Walk the tree rooted at `root` and return its fully aggregated [`Node`].
///
/// `workers` > 1 enables one level of probe fan-out per expansion (it is a
/// pool bound, not a global thread count). The optional `progress` callback
/// fires on the calling thread once per probed directory and must be cheap.
/// After the call returns, `cancel.is_cancelled()` tells the caller whether
/// the tree is complete or a consistent partial result.
pub fn scan_tree(
    root: &Path,
    workers: usize,
    cancel: &CancelFlag,
    mut progress: Option<&mut dyn FnMut(&ProbeUpdate)>,
) -> Node {
    let adapter = platform::path_adapter();
    let root_path = adapter.normalize(root);
    debug!(root = %root_path.display(), workers, "tree walk starting");

    let mut stack: Vec<Task> = vec![Task::Expand(root_path)];
    // Completed subtrees, in post-order. A fold frame's children are always
    // the top `pending` entries of this stack.
    let mut done: Vec<Node> = Vec::new();

    while let Some(task) = stack.pop() {
        match task {
            Task::Expand(path) => {
                let result = probe_dir(&path, adapter, cancel);
                stack.push(Task::Expanded(path, result));
            }

            Task::Expanded(path, result) => {
                let mut node = Node::new(&path);
                node.immediate_files = result.files;
                node.immediate_dirs = result.dirs;
                node.immediate_size = result.size;

                if let Some(observer) = progress.as_mut() {
                    observer(&ProbeUpdate {
                        path,
                        files: result.files,
                        dirs: result.dirs,
                        size: result.size,
                    });
                }

                let child_dirs = result.child_dirs;
                stack.push(Task::Fold {
                    node,
                    pending: child_dirs.len(),
                });

                if workers > 1 && child_dirs.len() > 1 && !cancel.is_cancelled() {
                    // Fan out: probe this directory's children on the pool,
                    // then re-enter them with their results attached so the
                    // probe is not repeated.
                    for (child_path, child_result) in
                        probe_children(child_dirs, workers, adapter, cancel)
                    {
                        stack.push(Task::Expanded(child_path, child_result));
                    }
                } else {
                    for child_path in child_dirs {
                        stack.push(Task::Expand(child_path));
                    }
                }
            }

            Task::Fold { mut node, pending } => {
                for _ in 0..pending {
                    // Stack discipline: the last `pending` completed nodes
                    // are exactly this node's children.
                    let Some(child) = done.pop() else { break };
                    node.total_files += child.total_files;
                    node.total_dirs += child.total_dirs;
                    node.total_size += child.total_size;
                    node.children.insert(child.name.clone(), child);
                }
                // immediate_dirs already counts each direct child once, so
                // adding it here counts every descendant directory exactly
                // once across the tree.
                node.total_files += node.immediate_files;
                node.total_dirs += node.immediate_dirs;
                node.total_size += node.immediate_size;
                done.push(node);
            }
        }
    }

    let root_node = done.pop().unwrap_or_default();
    debug!(
        directories = root_node.total_dirs + 1,
        cancelled = cancel.is_cancelled(),
        "tree walk finished"
    );
    root_node
}

/// Probe a set of sibling directories on a bounded worker pool.
///
/// Jobs and results travel over crossbeam channels; the pool lives only for
/// this one fan-out (scoped threads), and results are handed back to the
/// driving thread as plain values. Once cancellation is observed each
/// remaining job degenerates to an immediate empty result, so a cancelled
/// pool drains instead of blocking.
fn probe_children(
    paths: Vec<PathBuf>,
    workers: usize,
    adapter: &'static dyn PathAdapter,
    cancel: &CancelFlag,
) -> Vec<(PathBuf, ProbeResult)> {
    let pool_size = workers.min(paths.len());

    let (job_tx, job_rx) = crossbeam_channel::unbounded::<PathBuf>();
    let (result_tx, result_rx) = crossbeam_channel::unbounded::<(PathBuf, ProbeResult)>();
    for path in paths {
        let _ = job_tx.send(path);
    }
    drop(job_tx);

    std::thread::scope(|scope| {
        for _ in 0..pool_size {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                while let Ok(path) = job_rx.recv() {
                    let result = probe_dir(&path, adapter, cancel);
                    let _ = result_tx.send((path, result));
                }
            });
        }
    });

    drop(result_tx);
    result_rx.into_iter().collect()
}
