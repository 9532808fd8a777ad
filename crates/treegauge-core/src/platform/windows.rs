/// Path handling for Windows.
///
/// `normalize` produces extended-length paths (`\\?\C:\...`, or
/// `\\?\UNC\server\share\...` for network paths) so directories nested past
/// `MAX_PATH` stay reachable. `is_excluded` reads the real Hidden/System
/// file attributes via `GetFileAttributesW`, falling back to the `.`-prefix
/// convention for attribute-less but conventionally hidden directories.
use super::{has_hidden_prefix, PathAdapter};
use std::os::windows::ffi::OsStrExt;
use std::path::{Path, PathBuf};
use windows::core::PCWSTR;
use windows::Win32::Storage::FileSystem::{
    GetFileAttributesW, FILE_ATTRIBUTE_HIDDEN, FILE_ATTRIBUTE_SYSTEM, INVALID_FILE_ATTRIBUTES,
};

pub(super) struct WindowsPaths;

impl PathAdapter for WindowsPaths {
    fn normalize(&self, path: &Path) -> PathBuf {
        let abs = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let text = abs.to_string_lossy();
        if text.starts_with(r"\\?\") {
            // Already extended-length.
            return abs;
        }
        if let Some(unc_rest) = text.strip_prefix(r"\\") {
            return PathBuf::from(format!(r"\\?\UNC\{unc_rest}"));
        }
        PathBuf::from(format!(r"\\?\{text}"))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        match file_attributes(path) {
            Some(attrs) => {
                if attrs & (FILE_ATTRIBUTE_HIDDEN.0 | FILE_ATTRIBUTE_SYSTEM.0) != 0 {
                    return true;
                }
                has_hidden_prefix(path)
            }
            // Lookup failed — do not exclude on uncertainty.
            None => false,
        }
    }
}

/// Raw file attributes, or `None` if the lookup failed.
fn file_attributes(path: &Path) -> Option<u32> {
    let wide: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();
    let attrs = unsafe { GetFileAttributesW(PCWSTR::from_raw(wide.as_ptr())) };
    (attrs != INVALID_FILE_ATTRIBUTES).then_some(attrs)
}
