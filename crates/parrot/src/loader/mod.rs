//! Property file discovery and merging.
//!
//! Responsibilities:
//! - Scan the search path (recursively) and the working directory (flat) for
//!   `.properties` files.
//! - Filter candidates through the allow-list.
//! - Merge parsed files into one table with last-write-wins semantics.
//!
//! Does NOT handle:
//! - Parsing the properties text format (see `crate::properties`).
//! - Holding a process-wide instance (see `crate::global`).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over `PARROT_SEARCH_PATH` and the
//!   process's current directory.
//! - Every failure is logged and degrades the result; nothing is fatal.

mod allow;
mod builder;
mod env;
mod scan;

pub use allow::{AllowList, is_allowed};
pub use builder::ParrotLoader;

#[cfg(test)]
mod tests;
