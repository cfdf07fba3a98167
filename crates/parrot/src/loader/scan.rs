//! Candidate file discovery.
//!
//! Responsibilities:
//! - Expand search path segments: directories recursively, anything else as a
//!   single candidate.
//! - List the immediate (non-recursive) files of the working directory.
//!
//! Does NOT handle:
//! - Filtering by suffix or allow-list (see `builder.rs`).
//! - Reading file contents.
//!
//! Invariants:
//! - Directory listing failures are logged and contribute zero files; they
//!   never abort the scan.
//! - Recursive expansion uses an explicit worklist and yields a depth-first
//!   pre-order with entries sorted by path inside each directory.
//! - A directory reached twice through symlinks within one walk is only
//!   expanded once.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures while enumerating candidate files.
#[derive(Error, Debug)]
pub(crate) enum ScanError {
    #[error("Failed to list directory {path}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List a directory's entries sorted by path.
///
/// Entries that cannot be read are logged and skipped.
fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ScanError::ListDirectory {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => paths.push(entry.path()),
            Err(e) => tracing::warn!(
                dir = %dir.display(),
                error = %e,
                "Skipping unreadable directory entry"
            ),
        }
    }
    paths.sort();
    Ok(paths)
}

/// Append every non-directory path at or beneath `root` to `out`.
pub(crate) fn walk(root: &Path, out: &mut Vec<PathBuf>) {
    let mut visited = HashSet::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(path) = pending.pop() {
        if !path.is_dir() {
            out.push(path);
            continue;
        }

        let identity = std::fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
        if !visited.insert(identity) {
            tracing::debug!(dir = %path.display(), "Directory already scanned; skipping");
            continue;
        }

        match list_dir(&path) {
            Ok(children) => pending.extend(children.into_iter().rev()),
            Err(e) => tracing::warn!(error = %e, "Could not scan search path directory"),
        }
    }
}

/// Expand a platform path-list into candidate files, in segment order.
pub(crate) fn search_path_candidates(path_list: &OsStr) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    for segment in std::env::split_paths(path_list) {
        if segment.as_os_str().is_empty() {
            continue;
        }
        walk(&segment, &mut candidates);
    }
    candidates
}

/// List the files directly inside `dir`; subdirectories are not entered.
pub(crate) fn working_dir_candidates(dir: &Path) -> Vec<PathBuf> {
    match list_dir(dir) {
        Ok(paths) => paths.into_iter().filter(|p| !p.is_dir()).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "Could not list working directory");
            Vec::new()
        }
    }
}
