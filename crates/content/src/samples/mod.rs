//! Code sample catalog for the tabbed panel on the language page.
//!
//! The catalog is a fixed, insertion-ordered mapping from key to sample,
//! populated once at startup and never mutated. Tab order is insertion
//! order; the first entry is the default tab.

mod selection;

pub use selection::SampleSelection;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A single named code sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSample {
    pub key: &'static str,
    pub title: &'static str,
    pub source: &'static str,
}

/// Insertion-ordered collection of samples, keyed by `CodeSample::key`.
#[derive(Debug)]
pub struct SampleCatalog {
    entries: Vec<CodeSample>,
}

impl SampleCatalog {
    pub fn new(entries: Vec<CodeSample>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&CodeSample> {
        self.entries.iter().find(|sample| sample.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Key of the first entry; shown before any interaction.
    pub fn default_key(&self) -> &'static str {
        self.entries.first().map(|sample| sample.key).unwrap_or("")
    }

    /// Samples in tab order.
    pub fn iter(&self) -> impl Iterator<Item = &CodeSample> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.entries.is_empty() {
            return Err("catalog has no samples".into());
        }
        for sample in &self.entries {
            if sample.key.trim().is_empty() {
                return Err("sample key cannot be empty".into());
            }
            if sample.title.trim().is_empty() {
                return Err(format!("sample '{}' has an empty title", sample.key));
            }
            if sample.source.trim().is_empty() {
                return Err(format!("sample '{}' has an empty source", sample.key));
            }
        }
        let mut keys: Vec<&str> = self.entries.iter().map(|s| s.key).collect();
        keys.sort_unstable();
        keys.dedup();
        if keys.len() != self.entries.len() {
            return Err("sample keys must be unique".into());
        }
        Ok(())
    }
}

/// Query-string contract of the code samples panel (`?example=<key>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleQuery {
    pub example: Option<String>,
}

impl SampleQuery {
    pub fn for_key(key: &str) -> Self {
        Self {
            example: Some(key.to_string()),
        }
    }

    /// The requested key, if it names a sample in `catalog`.
    ///
    /// Unknown keys are ignored rather than reported; the set of valid
    /// keys is closed and anything else is a stale or hand-edited URL.
    pub fn selected_in(&self, catalog: &SampleCatalog) -> Option<&'static str> {
        self.example
            .as_deref()
            .and_then(|key| catalog.get(key))
            .map(|sample| sample.key)
    }
}

/// The Replica samples shown on the language page.
pub fn replica_samples() -> &'static SampleCatalog {
    static CATALOG: Lazy<SampleCatalog> = Lazy::new(|| {
        SampleCatalog::new(vec![
            CodeSample {
                key: "basic",
                title: "Basic Actor",
                source: r#"actor User {
    var id: String
    var name: String

    init(id: String, name: String) {
        self.id = id
    }

    func greet() -> String {
        return "Hello, \(name)!"
    }
}"#,
            },
            CodeSample {
                key: "distributed",
                title: "Distributed Actor",
                source: r#"actor Counter {
    var value: Int = 0

    func increment() async {
        value += 1
    }

    func getValue() async -> Int {
        return value
    }
}"#,
            },
            CodeSample {
                key: "single",
                title: "Single Actor",
                source: r#"single actor Cache {
    var data: [String: String] = [:]

    func store(key: String, value: String) {
        data[key] = value
    }

    func fetch(key: String) -> String? {
        return data[key]
    }
}"#,
            },
        ])
    });
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replica_catalog_is_valid() {
        assert!(replica_samples().validate().is_ok());
    }

    #[test]
    fn tab_order_is_insertion_order() {
        let keys: Vec<&str> = replica_samples().iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["basic", "distributed", "single"]);
    }

    #[test]
    fn default_is_first_entry() {
        assert_eq!(replica_samples().default_key(), "basic");
    }

    #[test]
    fn lookup_by_key() {
        let catalog = replica_samples();
        assert!(catalog.get("distributed").unwrap().source.contains("actor Counter"));
        assert!(catalog.get("turbo").is_none());
        assert!(catalog.contains("single"));
        assert!(!catalog.contains(""));
    }

    #[test]
    fn validate_rejects_duplicates_and_blanks() {
        let sample = CodeSample {
            key: "a",
            title: "A",
            source: "actor A {}",
        };
        assert!(SampleCatalog::new(vec![]).validate().is_err());
        assert!(SampleCatalog::new(vec![sample, sample]).validate().is_err());
        assert!(SampleCatalog::new(vec![CodeSample {
            source: " ",
            ..sample
        }])
        .validate()
        .is_err());
    }

    #[test]
    fn query_restores_only_known_keys() {
        let catalog = replica_samples();
        assert_eq!(
            SampleQuery::for_key("single").selected_in(catalog),
            Some("single")
        );
        assert_eq!(SampleQuery::for_key("nope").selected_in(catalog), None);
        assert_eq!(SampleQuery::default().selected_in(catalog), None);
    }
}
