/// Platform-specific path handling, expressed as a capability trait with
/// one implementation per platform family instead of scattered conditionals.
///
/// Windows needs extended-length path forms to get past `MAX_PATH` and marks
/// hidden/system directories with file attributes; everywhere else a plain
/// absolute path and the `.`-prefix convention are enough.
use std::path::{Path, PathBuf};

#[cfg(not(windows))]
mod unix;
#[cfg(windows)]
mod windows;

/// Path capabilities of the current platform.
pub trait PathAdapter: Send + Sync {
    /// Return an OS-appropriate absolute form of `path`.
    ///
    /// Idempotent: normalizing an already-normalized path returns it
    /// unchanged. Never fails — if absolutization is impossible the input
    /// is returned as-is.
    fn normalize(&self, path: &Path) -> PathBuf;

    /// `true` if the directory must be skipped by the scanner (hidden or
    /// system). Never fails; an attribute lookup error means "not excluded"
    /// rather than silently dropping a readable subtree.
    fn is_excluded(&self, path: &Path) -> bool;
}

/// The adapter for the platform this binary was built for.
pub fn path_adapter() -> &'static dyn PathAdapter {
    #[cfg(windows)]
    {
        static ADAPTER: windows::WindowsPaths = windows::WindowsPaths;
        &ADAPTER
    }
    #[cfg(not(windows))]
    {
        static ADAPTER: unix::UnixPaths = unix::UnixPaths;
        &ADAPTER
    }
}

/// Shared "hidden by convention" check: basename starts with a dot.
fn has_hidden_prefix(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
