//! Untyped scraped records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One scraped entity as field name -> raw text.
///
/// Fields the scraper could not fill are simply absent, so a partial record
/// is still a valid record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Raw value of a field, untrimmed.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_lookup() {
        let record = RawRecord::new()
            .with("title", " 1. Portal 2 ")
            .with("metascore", "95");
        assert_eq!(record.get("title"), Some(" 1. Portal 2 "));
        assert_eq!(record.get("developer"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn collects_from_pairs() {
        let record: RawRecord = [("app_id", "620"), ("title", "Portal 2")]
            .into_iter()
            .collect();
        assert!(record.contains("app_id"));
        let names: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["app_id", "title"]);
    }
}
