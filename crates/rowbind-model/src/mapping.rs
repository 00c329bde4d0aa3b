//! Caller-supplied association between header column labels and field keys.

use std::collections::BTreeMap;

/// Label-to-key mapping with case-insensitive labels.
///
/// Construction copies and lower-cases the labels, so a caller's own map is
/// never mutated. Field keys (the values) are kept verbatim: they match
/// record field keys byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMapping {
    entries: BTreeMap<String, String>,
}

impl LabelMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one label/key pair. The label is stored lower-cased; inserting
    /// two labels differing only by case keeps the later key.
    pub fn insert(&mut self, label: impl Into<String>, key: impl Into<String>) {
        self.entries.insert(label.into().to_lowercase(), key.into());
    }

    /// Field key for a header cell, matched case-insensitively.
    #[must_use]
    pub fn key_for(&self, label: &str) -> Option<&str> {
        self.entries.get(&label.to_lowercase()).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lower-cased label / key pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, k)| (l.as_str(), k.as_str()))
    }
}

impl<L: Into<String>, K: Into<String>> FromIterator<(L, K)> for LabelMapping {
    fn from_iter<T: IntoIterator<Item = (L, K)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        for (label, key) in iter {
            mapping.insert(label, key);
        }
        mapping
    }
}

impl From<BTreeMap<String, String>> for LabelMapping {
    fn from(entries: BTreeMap<String, String>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<&BTreeMap<String, String>> for LabelMapping {
    fn from(entries: &BTreeMap<String, String>) -> Self {
        entries
            .iter()
            .map(|(l, k)| (l.clone(), k.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_case_insensitively() {
        let mapping: LabelMapping = [("Birth Day", "birthday")].into_iter().collect();
        assert_eq!(mapping.key_for("birth day"), Some("birthday"));
        assert_eq!(mapping.key_for("BIRTH DAY"), Some("birthday"));
        assert_eq!(mapping.key_for("birthday"), None);
    }

    #[test]
    fn keys_are_kept_verbatim() {
        let mapping: LabelMapping = [("Name", "Name_Key")].into_iter().collect();
        assert_eq!(mapping.key_for("name"), Some("Name_Key"));
    }

    #[test]
    fn building_from_a_map_leaves_the_original_intact() {
        let mut original = BTreeMap::new();
        original.insert("Name".to_string(), "name".to_string());
        original.insert("Age".to_string(), "age".to_string());
        let mapping = LabelMapping::from(&original);
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.key_for("NAME"), Some("name"));
        // The caller still sees the labels it wrote.
        assert!(original.contains_key("Name"));
        assert!(!original.contains_key("name"));
    }
}
