//! Property file discovery and merging.
//!
//! This crate scans a search path and the current working directory for
//! `.properties` files, parses them with the Java properties text
//! conventions, and merges them into a single read-only lookup table.
//!
//! ```no_run
//! use parrot::Parrot;
//!
//! let parrot = Parrot::load(["app"]);
//! if let Some(url) = parrot.get("database.url") {
//!     println!("connecting to {url}");
//! }
//! ```

pub mod constants;
pub mod global;
mod loader;
mod parrot;
pub mod properties;

pub use loader::{AllowList, ParrotLoader, is_allowed};
pub use parrot::{Parrot, PropertySource};
pub use properties::{Encoding, ParseError, PropertiesError, PropertyTable};
