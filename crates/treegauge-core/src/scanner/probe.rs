/// Single-directory prober — lists one level of one directory.
///
/// Filesystem errors never escape this module. A directory that cannot be
/// opened at all (permissions, vanished, not actually a directory) probes
/// as empty; an entry that fails mid-listing is skipped; a file whose size
/// cannot be read still counts as a file, contributing zero bytes. The
/// walker above therefore never has an error path.
use super::CancelFlag;
use crate::platform::PathAdapter;
use std::fs;
use std::path::{Path, PathBuf};

/// Immediate counts for one directory plus the subdirectories to visit next.
#[derive(Debug, Clone, Default)]
pub struct ProbeResult {
    /// Regular files directly in the directory.
    pub files: u64,
    /// Non-excluded subdirectories directly in the directory.
    pub dirs: u64,
    /// Byte sum of the immediate files.
    pub size: u64,
    /// Paths of the counted subdirectories.
    pub child_dirs: Vec<PathBuf>,
}

/// Probe the immediate entries of `path`.
///
/// Symlinks are opaque: a symlink is neither counted as a file nor followed
/// as a directory, matching `file_type()` on the raw directory entry.
/// Returns an empty result without touching the filesystem if cancellation
/// has already been signalled; the entry loop also polls the flag so a huge
/// directory stops early.
pub fn probe_dir(path: &Path, adapter: &dyn PathAdapter, cancel: &CancelFlag) -> ProbeResult {
    if cancel.is_cancelled() {
        return ProbeResult::default();
    }

    let mut result = ProbeResult::default();

    // I/O goes through the normalized (extended-length on Windows) form;
    // child paths are joined onto the caller's form so node paths stay
    // in display shape.
    let listing = match fs::read_dir(adapter.normalize(path)) {
        Ok(listing) => listing,
        // Unopenable directory: a silent empty subtree, not an error.
        Err(_) => return ProbeResult::default(),
    };

    for entry in listing {
        if cancel.is_cancelled() {
            break;
        }
        // Entries that vanish or deny access between listing and
        // classification are skipped; the rest of the probe continues.
        let Ok(entry) = entry else { continue };
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            let child = path.join(entry.file_name());
            if adapter.is_excluded(&child) {
                continue;
            }
            result.dirs += 1;
            result.child_dirs.push(child);
        } else if file_type.is_file() {
            result.files += 1;
            result.size += entry.metadata().map(|meta| meta.len()).unwrap_or(0);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::path_adapter;
    use std::fs::File;
    use std::io::Write;

    fn probe(path: &Path) -> ProbeResult {
        probe_dir(path, path_adapter(), &CancelFlag::new())
    }

    #[test]
    fn counts_files_dirs_and_bytes_one_level_deep() {
        let tmp = tempfile::tempdir().unwrap();
        File::create(tmp.path().join("a.txt"))
            .unwrap()
            .write_all(&[0u8; 100])
            .unwrap();
        File::create(tmp.path().join("b.txt"))
            .unwrap()
            .write_all(&[0u8; 50])
            .unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        // Nested content must not affect a single-level probe.
        File::create(tmp.path().join("sub").join("deep.txt"))
            .unwrap()
            .write_all(&[0u8; 999])
            .unwrap();

        let result = probe(tmp.path());
        assert_eq!(result.files, 2);
        assert_eq!(result.dirs, 1);
        assert_eq!(result.size, 150);
        assert_eq!(result.child_dirs, vec![tmp.path().join("sub")]);
    }

    #[test]
    fn missing_directory_probes_as_empty() {
        let result = probe(Path::new("/no/such/directory/anywhere"));
        assert_eq!(result.files, 0);
        assert_eq!(result.dirs, 0);
        assert!(result.child_dirs.is_empty());
    }

    #[test]
    fn probing_a_file_path_probes_as_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("plain.txt");
        File::create(&file).unwrap();
        let result = probe(&file);
        assert_eq!(result.files, 0);
        assert!(result.child_dirs.is_empty());
    }

    #[test]
    fn hidden_directories_are_skipped_entirely() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join(".cache")).unwrap();
        fs::create_dir(tmp.path().join("visible")).unwrap();

        let result = probe(tmp.path());
        assert_eq!(result.dirs, 1);
        assert_eq!(result.child_dirs, vec![tmp.path().join("visible")]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_opaque() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("target");
        fs::create_dir(&target).unwrap();
        File::create(target.join("inside.txt"))
            .unwrap()
            .write_all(&[0u8; 10])
            .unwrap();
        std::os::unix::fs::symlink(&target, tmp.path().join("dirlink")).unwrap();
        std::os::unix::fs::symlink(target.join("inside.txt"), tmp.path().join("filelink")).unwrap();

        let result = probe(tmp.path());
        // Only the real directory is seen; neither symlink counts as anything.
        assert_eq!(result.dirs, 1);
        assert_eq!(result.files, 0);
        assert_eq!(result.child_dirs, vec![target]);
    }

    #[test]
    fn already_cancelled_probe_does_no_io() {
        let tmp = tempfile::tempdir().unwrap();
        File::create(tmp.path().join("a.txt")).unwrap();
        let cancel = CancelFlag::new();
        cancel.cancel();

        let result = probe_dir(tmp.path(), path_adapter(), &cancel);
        assert_eq!(result.files, 0);
        assert!(result.child_dirs.is_empty());
    }
}
