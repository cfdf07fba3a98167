//! Centralized constants for property discovery.
//!
//! Values shared between the scanner, the allow-list filter and the
//! environment layer live here so the file suffix and variable names are
//! spelled exactly once.

/// Suffix a file name must carry to be ingested.
pub const PROPERTIES_SUFFIX: &str = ".properties";

/// Environment variable holding the extra search path.
///
/// Uses the platform path-list separator (`:` on POSIX, `;` on Windows).
/// Directory entries are scanned recursively; any other entry is treated as
/// a single candidate file.
pub const SEARCH_PATH_ENV: &str = "PARROT_SEARCH_PATH";
