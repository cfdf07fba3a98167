//! Allow-list filtering of discovered file names.
//!
//! Responsibilities:
//! - Normalize allow-list entries by stripping a trailing `.properties`.
//! - Decide whether a discovered file name may be ingested.
//!
//! Invariants:
//! - An empty allow-list admits every file name.
//! - Only a trailing suffix is stripped; `a.properties.bak` stays as is.
//! - Comparison is exact and case-sensitive.

use std::collections::BTreeSet;

use crate::constants::PROPERTIES_SUFFIX;

fn strip_suffix(name: &str) -> &str {
    name.strip_suffix(PROPERTIES_SUFFIX).unwrap_or(name)
}

/// Returns true when `file_name` passes the allow-list.
///
/// `file_name` is a base name such as `app.properties`. Entries may be given
/// with or without the `.properties` suffix.
///
/// # Examples
///
/// ```
/// use parrot::is_allowed;
///
/// assert!(is_allowed("test.properties", &["test"]));
/// assert!(is_allowed("test.properties", &["test.properties"]));
/// assert!(!is_allowed("test2.properties", &["test"]));
/// assert!(is_allowed("anything.properties", &[] as &[&str]));
/// ```
pub fn is_allowed<S: AsRef<str>>(file_name: &str, allow_list: &[S]) -> bool {
    if allow_list.is_empty() {
        return true;
    }
    let candidate = strip_suffix(file_name);
    allow_list
        .iter()
        .any(|entry| strip_suffix(entry.as_ref()) == candidate)
}

/// Normalized set of base names a loader is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    names: BTreeSet<String>,
}

impl AllowList {
    /// Build an allow-list from base names, with or without the suffix.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| strip_suffix(name.as_ref()).to_string())
                .collect(),
        }
    }

    /// An allow-list that admits every file.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns true when `file_name` may be ingested.
    pub fn allows(&self, file_name: &str) -> bool {
        self.is_unrestricted() || self.names.contains(strip_suffix(file_name))
    }

    /// Normalized entries, without the suffix.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
