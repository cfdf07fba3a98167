//! The loaded property table and its read-only accessors.
//!
//! Responsibilities:
//! - Own the merged `PropertyTable` produced by a `ParrotLoader`.
//! - Expose lookups (`get`) and a defensive copy of everything (`all`).
//! - Define the `PropertySource` seam used for injection and test doubles.
//!
//! Invariants:
//! - The table is never mutated after construction.
//! - Values returned by `all()` are copies; changing them does not affect
//!   later lookups.

use crate::loader::ParrotLoader;
use crate::properties::PropertyTable;

/// Anything that can answer property lookups.
///
/// Call sites that need configuration should accept a `PropertySource`
/// rather than reach for [`crate::global::current`], so tests can hand in a
/// fake.
#[cfg_attr(test, mockall::automock)]
pub trait PropertySource {
    /// Value for `key`, or `None` when no ingested file defined it.
    fn property(&self, key: &str) -> Option<String>;

    /// A copy of every known property.
    fn properties(&self) -> PropertyTable;
}

/// Properties merged from every ingested file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parrot {
    properties: PropertyTable,
}

impl Parrot {
    /// Load from the environment, restricted to the given base names.
    ///
    /// Names may carry the `.properties` suffix or not. Passing no names
    /// ingests every discovered file; see [`Parrot::load_all`].
    pub fn load<I, S>(allowed_files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ParrotLoader::new().with_allowed_files(allowed_files).load()
    }

    /// Load every discovered file from the environment.
    pub fn load_all() -> Self {
        ParrotLoader::new().load()
    }

    /// A builder for loading with explicit roots or encoding.
    pub fn loader() -> ParrotLoader {
        ParrotLoader::new()
    }

    /// Wrap an already-built table.
    pub fn from_properties(properties: PropertyTable) -> Self {
        Self { properties }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// A copy of the full table.
    pub fn all(&self) -> PropertyTable {
        self.properties.clone()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl From<PropertyTable> for Parrot {
    fn from(properties: PropertyTable) -> Self {
        Self::from_properties(properties)
    }
}

impl PropertySource for Parrot {
    fn property(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_owned)
    }

    fn properties(&self) -> PropertyTable {
        self.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Parrot {
        Parrot::from_properties(PropertyTable::from([
            ("foo".to_string(), "bar".to_string()),
            ("test".to_string(), "passed".to_string()),
        ]))
    }

    fn describe(source: &dyn PropertySource, key: &str) -> String {
        source
            .property(key)
            .unwrap_or_else(|| format!("<{key} unset>"))
    }

    #[test]
    fn test_get_present_and_absent() {
        let parrot = sample();
        assert_eq!(parrot.get("foo"), Some("bar"));
        assert_eq!(parrot.get("missing"), None);
    }

    #[test]
    fn test_all_is_a_copy() {
        let parrot = sample();
        let mut all = parrot.all();
        all.insert("foo".to_string(), "changed".to_string());
        all.insert("extra".to_string(), "1".to_string());
        all.remove("test");

        assert_eq!(parrot.get("foo"), Some("bar"));
        assert_eq!(parrot.get("extra"), None);
        assert_eq!(parrot.get("test"), Some("passed"));
        assert_eq!(parrot.len(), 2);
    }

    #[test]
    fn test_default_is_empty() {
        let parrot = Parrot::default();
        assert!(parrot.is_empty());
        assert!(parrot.all().is_empty());
    }

    #[test]
    fn test_property_source_for_parrot() {
        let parrot = sample();
        assert_eq!(describe(&parrot, "test"), "passed");
        assert_eq!(describe(&parrot, "nope"), "<nope unset>");
        assert_eq!(parrot.properties(), parrot.all());
    }

    #[test]
    fn test_mocked_property_source() {
        let mut mock = MockPropertySource::new();
        mock.expect_property()
            .withf(|key| key == "test")
            .times(1)
            .returning(|_| Some("substituted".to_string()));

        assert_eq!(describe(&mock, "test"), "substituted");
    }
}
