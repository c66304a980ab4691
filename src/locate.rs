use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// File name searched for in each ancestor directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Turn `start` into an absolute path with `.` and `..` folded away.
///
/// Purely lexical: symlinks are not resolved and the path does not have to
/// exist. Returns `None` when no absolute form can be produced (an empty path,
/// or an unreadable working directory).
pub fn resolve(start: &Path) -> Option<PathBuf> {
    let absolute = std::path::absolute(start).ok()?;

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            // popping at the root is a no-op, so `/..` stays `/`
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Some(normalized)
}

/// Find the nearest directory, starting at `start` itself and moving towards
/// the filesystem root, that holds a regular `package.json` file.
///
/// Returns the directory, not the file path.
pub fn locate(start: &Path) -> Option<PathBuf> {
    let Some(dir) = resolve(start) else {
        debug!(start = %start.display(), "could not resolve start path");
        return None;
    };

    // One probe per ancestor; the walk ends after the root.
    for candidate in dir.ancestors() {
        if holds_manifest(candidate) {
            debug!(dir = %candidate.display(), "found {MANIFEST_FILE}");
            return Some(candidate.to_path_buf());
        }
    }

    debug!(start = %dir.display(), "no {MANIFEST_FILE} up to the root");
    None
}

fn holds_manifest(dir: &Path) -> bool {
    let file = dir.join(MANIFEST_FILE);
    match fs::metadata(&file) {
        Ok(meta) if meta.is_file() => true,
        Ok(_) => {
            debug!(path = %file.display(), "ignoring non-file entry");
            false
        }
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        // permission denied and friends: keep climbing
        Err(e) => {
            debug!(path = %file.display(), error = %e, "cannot stat candidate, continuing upward");
            false
        }
    }
}
