//! TreeGauge — directory tree size analyser.
//!
//! Thin binary entry point. All engine logic lives in `treegauge-core`;
//! this front end wires arguments, progress output, and exports together.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use treegauge_core::export;
use treegauge_core::model::size::{format_count, format_size};
use treegauge_core::model::{snapshot, Node};
use treegauge_core::scanner::{start_scan, ScanProgress, DEFAULT_WORKERS};

#[derive(Parser, Debug)]
#[command(
    name = "treegauge",
    about = "Per-folder file/dir/byte aggregates for a directory tree"
)]
struct Args {
    /// Root directory to scan (not needed with --load)
    root: Option<PathBuf>,

    /// Probe worker threads; 1 = sequential, 0 = one per CPU
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Load a previously saved snapshot instead of scanning
    #[arg(long, value_name = "FILE", conflicts_with = "root")]
    load: Option<PathBuf>,

    /// Save the scanned tree as a JSON snapshot
    #[arg(long, value_name = "FILE")]
    snapshot_out: Option<PathBuf>,

    /// Export the root's immediate children as CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// How many of the largest children to list
    #[arg(long, default_value_t = 10)]
    top: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let args = Args::parse();

    let root = if let Some(file) = &args.load {
        snapshot::load(file).with_context(|| format!("loading snapshot {}", file.display()))?
    } else {
        let Some(path) = args.root.clone() else {
            bail!("either a root directory or --load <FILE> is required");
        };
        scan(path, args.workers)?
    };

    if let Some(file) = &args.snapshot_out {
        snapshot::save(&root, file)
            .with_context(|| format!("saving snapshot {}", file.display()))?;
    }
    if let Some(file) = &args.csv {
        export::write_csv_file(&root, file)
            .with_context(|| format!("writing CSV {}", file.display()))?;
    }

    print_summary(&root, args.top);
    Ok(())
}

/// Run a background scan, echoing progress to stderr while draining the
/// channel, and return the finished tree.
fn scan(path: PathBuf, workers: usize) -> anyhow::Result<Node> {
    let workers = if workers == 0 {
        num_cpus::get()
    } else {
        workers
    };

    let handle = start_scan(path, workers);
    let mut probed: u64 = 0;
    while let Ok(msg) = handle.progress_rx.recv() {
        match msg {
            ScanProgress::Probed(update) => {
                probed += 1;
                if probed % 256 == 0 {
                    eprint!("\r{} folders probed — {}", probed, update.path.display());
                }
            }
            ScanProgress::Complete {
                duration,
                cancelled,
            } => {
                eprint!("\r");
                if cancelled {
                    eprintln!("scan cancelled after {duration:.2?} — partial result");
                } else {
                    eprintln!("scanned {probed} folders in {duration:.2?}");
                }
                break;
            }
        }
    }
    Ok(handle.join())
}

fn print_summary(root: &Node, top: usize) {
    println!(
        "{}: {} files, {} folders, {}",
        root.path,
        format_count(root.total_files),
        format_count(root.total_dirs),
        format_size(root.total_size),
    );

    let mut children = root.child_list();
    children.sort_unstable_by(|a, b| b.total_size.cmp(&a.total_size));
    for child in children.into_iter().take(top) {
        println!(
            "  {:>10}  {:>12} files  {}",
            format_size(child.total_size),
            format_count(child.total_files),
            child.name,
        );
    }
}
