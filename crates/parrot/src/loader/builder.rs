//! Property loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ParrotLoader` for configuring the scan roots,
//!   allow-list and file encoding.
//! - Discover candidate files and filter them by suffix and allow-list.
//! - Parse every surviving file and merge the results into one table.
//!
//! Does NOT handle:
//! - Directory traversal details (delegated to scan.rs).
//! - Environment lookups (delegated to env.rs).
//! - The properties text format (see `crate::properties`).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment values.
//! - Search path files are processed before working directory files; within
//!   each root the scan order is kept.
//! - On key collisions the later-processed file wins.
//! - A file that fails to read or parse contributes no keys; `load()` itself
//!   never fails.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::allow::AllowList;
use super::env::{search_path_from_env, working_dir_from_env};
use super::scan::{search_path_candidates, working_dir_candidates};
use crate::constants::PROPERTIES_SUFFIX;
use crate::parrot::Parrot;
use crate::properties::{Encoding, PropertyTable, read_file};

/// Where a scan root comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Root<T> {
    /// Resolved from the environment when loading.
    #[default]
    FromEnv,
    Explicit(T),
    Skipped,
}

/// Loader that discovers and merges `.properties` files.
#[derive(Debug, Clone, Default)]
pub struct ParrotLoader {
    allow_list: AllowList,
    search_path: Root<OsString>,
    working_dir: Root<PathBuf>,
    encoding: Encoding,
}

impl ParrotLoader {
    /// Create a loader that reads both roots from the environment and
    /// ingests every discovered file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict ingestion to the given base names.
    ///
    /// An empty iterator leaves the loader unrestricted.
    pub fn with_allowed_files<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.with_allow_list(AllowList::new(names))
    }

    pub fn with_allow_list(mut self, allow_list: AllowList) -> Self {
        self.allow_list = allow_list;
        self
    }

    /// Override the search path (a platform path-list) instead of reading
    /// `PARROT_SEARCH_PATH`.
    pub fn with_search_path(mut self, path_list: impl Into<OsString>) -> Self {
        self.search_path = Root::Explicit(path_list.into());
        self
    }

    /// Do not scan any search path.
    pub fn without_search_path(mut self) -> Self {
        self.search_path = Root::Skipped;
        self
    }

    /// Override the working directory instead of using the process's.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Root::Explicit(dir.into());
        self
    }

    /// Do not list any working directory.
    pub fn without_working_dir(mut self) -> Self {
        self.working_dir = Root::Skipped;
        self
    }

    /// Set the encoding used to decode file bytes (ISO-8859-1 by default).
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    fn resolve_search_path(&self) -> Option<OsString> {
        match &self.search_path {
            Root::FromEnv => search_path_from_env(),
            Root::Explicit(path_list) => Some(path_list.clone()),
            Root::Skipped => None,
        }
    }

    fn resolve_working_dir(&self) -> Option<PathBuf> {
        match &self.working_dir {
            Root::FromEnv => working_dir_from_env(),
            Root::Explicit(dir) => Some(dir.clone()),
            Root::Skipped => None,
        }
    }

    /// Returns true when `path` has the properties suffix and passes the allow-list.
    fn accepts(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        name.ends_with(PROPERTIES_SUFFIX) && self.allow_list.allows(&name)
    }

    /// List the files `load()` would ingest, in processing order.
    pub fn discover(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(path_list) = self.resolve_search_path() {
            candidates.extend(search_path_candidates(&path_list));
        }
        if let Some(dir) = self.resolve_working_dir() {
            candidates.extend(working_dir_candidates(&dir));
        }

        candidates.retain(|path| self.accepts(path));
        candidates
    }

    /// Discover, parse and merge every accepted file.
    pub fn load(&self) -> Parrot {
        let mut properties = PropertyTable::new();
        let mut ingested = 0usize;

        for path in self.discover() {
            match read_file(&path, self.encoding) {
                Ok(table) => {
                    tracing::debug!(
                        path = %path.display(),
                        keys = table.len(),
                        "Ingested properties file"
                    );
                    properties.extend(table);
                    ingested += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        path = %e.path().display(),
                        error = %e,
                        "Skipping properties file"
                    );
                }
            }
        }

        tracing::debug!(
            files = ingested,
            keys = properties.len(),
            "Finished loading properties"
        );
        Parrot::from_properties(properties)
    }
}
