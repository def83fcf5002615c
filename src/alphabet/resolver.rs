//! Alphabet resolver — display name or locale id → exemplar letters.
//!
//! Flow: language-name index → catalog membership → provider exemplar set.
//! No fallback beyond the single alias lookup, no caching.

use super::catalog::LocaleCatalog;
use super::providers::{IcuLocaleData, LocaleDataProvider};
use super::types::{Alphabet, AlphabetError, LocaleDescriptor};
use super::DEFAULT_LANGUAGE;
use std::sync::OnceLock;
use tracing::debug;

/// Resolves names against an immutable catalog.
pub struct AlphabetResolver {
    catalog: LocaleCatalog,
    provider: Box<dyn LocaleDataProvider>,
}

impl AlphabetResolver {
    /// Resolver over ICU4X compiled data.
    pub fn new() -> Self {
        Self::with_provider(IcuLocaleData::new())
    }

    /// Resolver over a specific provider (for hosts with their own data, and tests).
    pub fn with_provider(provider: impl LocaleDataProvider + 'static) -> Self {
        let catalog = LocaleCatalog::from_provider(&provider);
        debug!(locales = catalog.len(), "locale catalog built");
        Self {
            catalog,
            provider: Box::new(provider),
        }
    }

    /// Process-wide ICU resolver, built on first use.
    pub fn global() -> &'static AlphabetResolver {
        static GLOBAL: OnceLock<AlphabetResolver> = OnceLock::new();
        GLOBAL.get_or_init(AlphabetResolver::new)
    }

    pub fn catalog(&self) -> &LocaleCatalog {
        &self.catalog
    }

    /// The catalog locale `name` refers to, if any.
    pub fn locale_for(&self, name: &str) -> Option<&LocaleDescriptor> {
        let candidate = self.catalog.locale_for_language(name).unwrap_or(name);
        self.catalog.get(candidate)
    }

    /// Resolve a display language or locale id to its exemplar letters.
    pub fn resolve(&self, name: &str) -> Result<Alphabet, AlphabetError> {
        let desc = self
            .locale_for(name)
            .ok_or_else(|| AlphabetError::NotFound(name.to_string()))?;

        let letters = self.provider.exemplar_set(desc)?;
        debug!(query = name, locale = %desc.id, letters = letters.len(), "alphabet resolved");

        Ok(Alphabet {
            query: name.to_string(),
            locale: desc.id.clone(),
            display_language: desc.display_language.clone(),
            letters,
        })
    }

    /// Resolve with the default language ("English").
    pub fn resolve_default(&self) -> Result<Alphabet, AlphabetError> {
        self.resolve(DEFAULT_LANGUAGE)
    }
}

impl Default for AlphabetResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::providers::StaticLocaleData;

    fn table_resolver() -> AlphabetResolver {
        AlphabetResolver::with_provider(
            StaticLocaleData::new()
                .with_locale("en", "English", "abcdefghijklmnopqrstuvwxyz")
                .with_locale("en_NZ", "English", "abcdefghijklmnopqrstuvwxyz")
                .with_locale("uk", "Ukrainian", "абвгґд"),
        )
    }

    #[test]
    fn test_resolve_locale_id() {
        let resolver = table_resolver();
        let alphabet = resolver.resolve("uk").unwrap();
        assert_eq!(alphabet.locale, "uk");
        assert_eq!(alphabet.display_language, "Ukrainian");
        assert_eq!(alphabet.letters, vec!["а", "б", "в", "г", "ґ", "д"]);
    }

    #[test]
    fn test_resolve_display_name_uses_index() {
        let resolver = table_resolver();
        let alphabet = resolver.resolve("English").unwrap();
        assert_eq!(alphabet.locale, "en_NZ");
        assert_eq!(alphabet.query, "English");
    }

    #[test]
    fn test_locale_for() {
        let resolver = table_resolver();
        assert_eq!(resolver.locale_for("Ukrainian").map(|d| d.id.as_str()), Some("uk"));
        assert_eq!(resolver.locale_for("en").map(|d| d.id.as_str()), Some("en"));
        assert!(resolver.locale_for("ukrainian").is_none());
    }

    #[test]
    fn test_unknown_name_not_found() {
        let resolver = table_resolver();
        match resolver.resolve("not-a-real-language") {
            Err(AlphabetError::NotFound(q)) => assert_eq!(q, "not-a-real-language"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(matches!(resolver.resolve(""), Err(AlphabetError::NotFound(_))));
    }

    #[test]
    fn test_display_name_equals_mapped_locale() {
        let resolver = AlphabetResolver::global();
        for (name, id) in resolver.catalog().languages() {
            assert_eq!(
                resolver.resolve(name).unwrap().letters,
                resolver.resolve(id).unwrap().letters,
                "{} vs {}",
                name,
                id
            );
        }
    }

    #[test]
    fn test_every_catalog_locale_non_empty() {
        let resolver = AlphabetResolver::global();
        assert!(!resolver.catalog().is_empty());
        for desc in resolver.catalog().locales() {
            assert!(!resolver.resolve(&desc.id).unwrap().is_empty(), "{}", desc.id);
        }
    }

    #[test]
    fn test_default_is_english() {
        let resolver = AlphabetResolver::global();
        assert_eq!(
            resolver.resolve_default().unwrap().letters,
            resolver.resolve("English").unwrap().letters
        );
    }

    #[test]
    fn test_spanish_has_33_letters() {
        let alphabet = AlphabetResolver::global().resolve("es").unwrap();
        assert_eq!(alphabet.len(), 33);
        assert_eq!(alphabet.letters.last().map(String::as_str), Some("ü"));
    }

    #[test]
    fn test_regional_variant_matches_language() {
        let resolver = AlphabetResolver::global();
        assert_eq!(
            resolver.resolve("en_NZ").unwrap().letters,
            resolver.resolve("en").unwrap().letters
        );
    }

    #[test]
    fn test_english_is_latin_lowercase() {
        let alphabet = AlphabetResolver::global().resolve("en").unwrap();
        let expected: Vec<String> = ('a'..='z').map(String::from).collect();
        assert_eq!(alphabet.letters, expected);
    }

    #[test]
    fn test_less_common_languages_resolve_by_name() {
        let resolver = AlphabetResolver::global();
        for name in ["Breton", "Xhosa", "Cherokee", "Luxembourgish", "Odia", "Tatar"] {
            let alphabet = resolver
                .resolve(name)
                .unwrap_or_else(|e| panic!("{}: {}", name, e));
            assert!(!alphabet.is_empty(), "{}", name);
            assert_eq!(alphabet.display_language, name);
        }
    }

    #[test]
    fn test_unloadable_locale_is_provider_error() {
        let resolver = AlphabetResolver::with_provider(
            StaticLocaleData::new().with_unloadable_locale("zz", "Broken"),
        );
        match resolver.resolve("Broken") {
            Err(AlphabetError::Provider { locale, .. }) => assert_eq!(locale, "zz"),
            other => panic!("expected Provider error, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let resolver = AlphabetResolver::global();
        let first = resolver.resolve("Ukrainian").unwrap();
        for _ in 0..3 {
            assert_eq!(resolver.resolve("Ukrainian").unwrap(), first);
        }
    }
}
