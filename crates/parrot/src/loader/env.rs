//! Environment lookups for the loader's implicit roots.
//!
//! Responsibilities:
//! - Read the search path from `PARROT_SEARCH_PATH`.
//! - Resolve the process's current working directory.
//! - Provide a helper for reading path-valued env vars as `OsString`.
//!
//! Invariants:
//! - Path-valued variables are read with `var_os`, so non-UTF-8 paths survive.
//! - Empty or whitespace-only values are treated as unset; any other value is
//!   returned verbatim, without trimming.
//! - An unavailable working directory is logged and treated as absent.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::constants::SEARCH_PATH_ENV;

fn is_blank(value: &OsStr) -> bool {
    value.as_encoded_bytes().iter().all(u8::is_ascii_whitespace)
}

/// Read a path-valued environment variable, returning None if unset, empty,
/// or whitespace-only.
pub(crate) fn env_path_or_none(key: &str) -> Option<OsString> {
    std::env::var_os(key).filter(|value| !is_blank(value))
}

/// The search path configured through the environment, if any.
pub(crate) fn search_path_from_env() -> Option<OsString> {
    env_path_or_none(SEARCH_PATH_ENV)
}

/// The current working directory, if it can be determined.
pub(crate) fn working_dir_from_env() -> Option<PathBuf> {
    match std::env::current_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            tracing::warn!(error = %e, "Could not determine current working directory");
            None
        }
    }
}
