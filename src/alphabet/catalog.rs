//! Locale catalog and language-name index.
//!
//! Both tables are built once from a provider and never mutated. The catalog
//! is ordered by locale identifier; the index keeps, for each display
//! language, the last catalog locale seen with that name.

use super::providers::LocaleDataProvider;
use super::types::LocaleDescriptor;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct LocaleCatalog {
    locales: BTreeMap<String, LocaleDescriptor>,
    by_language: BTreeMap<String, String>,
}

impl LocaleCatalog {
    /// Build the catalog and index from a provider's enumeration.
    pub fn from_provider(provider: &dyn LocaleDataProvider) -> Self {
        Self::from_descriptors(provider.available_locales())
    }

    pub fn from_descriptors(descriptors: impl IntoIterator<Item = LocaleDescriptor>) -> Self {
        let locales: BTreeMap<String, LocaleDescriptor> = descriptors
            .into_iter()
            .map(|d| (d.id.clone(), d))
            .collect();

        let mut by_language = BTreeMap::new();
        for (id, desc) in &locales {
            by_language.insert(desc.display_language.clone(), id.clone());
        }

        Self { locales, by_language }
    }

    /// Look up a locale by exact identifier.
    pub fn get(&self, id: &str) -> Option<&LocaleDescriptor> {
        self.locales.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.locales.contains_key(id)
    }

    /// The representative locale for a display language.
    pub fn locale_for_language(&self, display_language: &str) -> Option<&str> {
        self.by_language.get(display_language).map(String::as_str)
    }

    /// Catalog entries in identifier order.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleDescriptor> {
        self.locales.values()
    }

    /// `(display language, locale id)` pairs in display-name order.
    pub fn languages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_language
            .iter()
            .map(|(name, id)| (name.as_str(), id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::providers::StaticLocaleData;

    fn sample() -> LocaleCatalog {
        let provider = StaticLocaleData::new()
            .with_locale("en_US", "English", "abc")
            .with_locale("en", "English", "abc")
            .with_locale("en_NZ", "English", "abc")
            .with_locale("es", "Spanish", "abcñ");
        LocaleCatalog::from_provider(&provider)
    }

    #[test]
    fn test_catalog_ordered_by_id() {
        let catalog = sample();
        let ids: Vec<&str> = catalog.locales().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["en", "en_NZ", "en_US", "es"]);
    }

    #[test]
    fn test_index_keeps_last_seen_locale() {
        let catalog = sample();
        assert_eq!(catalog.locale_for_language("English"), Some("en_US"));
        assert_eq!(catalog.locale_for_language("Spanish"), Some("es"));
        assert_eq!(catalog.locale_for_language("Klingon"), None);
    }

    #[test]
    fn test_exact_lookup() {
        let catalog = sample();
        assert!(catalog.contains("en_NZ"));
        assert!(!catalog.contains("en-NZ"));
        assert!(!catalog.contains("English"));
        assert_eq!(catalog.get("es").unwrap().display_language, "Spanish");
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_languages_listing() {
        let catalog = sample();
        let langs: Vec<(&str, &str)> = catalog.languages().collect();
        assert_eq!(langs, vec![("English", "en_US"), ("Spanish", "es")]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = LocaleCatalog::from_descriptors(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.languages().count(), 0);
    }
}
