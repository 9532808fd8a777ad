/// Path handling for Unix-like platforms (and anything that is not Windows).
///
/// No path-length limit to work around, so `normalize` is plain
/// absolutization. Hidden directories follow the `.`-prefix convention.
use super::{has_hidden_prefix, PathAdapter};
use std::path::{Path, PathBuf};

pub(super) struct UnixPaths;

impl PathAdapter for UnixPaths {
    fn normalize(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
    }

    fn is_excluded(&self, path: &Path) -> bool {
        has_hidden_prefix(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_pass_through_unchanged() {
        let adapter = UnixPaths;
        assert_eq!(adapter.normalize(Path::new("/var/log")), Path::new("/var/log"));
    }

    #[test]
    fn relative_paths_are_absolutized() {
        let adapter = UnixPaths;
        assert!(adapter.normalize(Path::new("some/dir")).is_absolute());
    }

    #[test]
    fn dotted_directories_are_excluded() {
        let adapter = UnixPaths;
        assert!(adapter.is_excluded(Path::new("/repo/.git")));
        assert!(!adapter.is_excluded(Path::new("/repo/src")));
    }
}
