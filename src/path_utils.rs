use std::path::{Path, PathBuf};

/// Return the final component of a path string.
///
/// Both `/` and `\\` are treated as separators regardless of platform, so a
/// Windows path such as `C:\proj\Foo.cpp` yields `Foo.cpp` on every host.
#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Split a file name into `(stem, extension)` at the last `.`.
///
/// Dot-files (`.hidden`) and names without a dot have no extension.
#[must_use]
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(0) | None => (name, None),
        Some(idx) => (&name[..idx], Some(&name[idx + 1..])),
    }
}

/// Directory that contains `path`, or `.` for a bare file name.
#[must_use]
pub fn containing_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
