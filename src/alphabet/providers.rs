//! Locale-data providers: ICU4X compiled CLDR data and an in-memory table.

use super::cldr;
use super::types::{AlphabetError, LocaleDescriptor};
use icu_experimental::displaynames::{DisplayNamesOptions, LanguageDisplayNames};
use icu_locid::subtags::Language;
use icu_locid::{locale, Locale};
use icu_properties::exemplar_chars;
use icu_provider::DataLocale;
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// The two read operations the resolver needs from a locale-data source.
pub trait LocaleDataProvider: Send + Sync {
    /// Every locale this provider has exemplar data for.
    fn available_locales(&self) -> Vec<LocaleDescriptor>;

    /// The basic ("main") exemplar set of `locale`, in provider order.
    fn exemplar_set(&self, locale: &LocaleDescriptor) -> Result<Vec<String>, AlphabetError>;
}

// ─── Display names ──────────────────────────────────────────────

fn english_names() -> Option<LanguageDisplayNames> {
    LanguageDisplayNames::try_new(&locale!("en").into(), DisplayNamesOptions::default())
        .map_err(|e| warn!(error = %e, "English display names unavailable"))
        .ok()
}

/// English display name of a language subtag, or the subtag itself when
/// CLDR has no name for it.
fn display_language(names: Option<&LanguageDisplayNames>, language: &str) -> String {
    language
        .parse::<Language>()
        .ok()
        .and_then(|lang| names?.of(lang))
        .map(str::to_string)
        .unwrap_or_else(|| language.to_string())
}

// ─── ICU4X provider ─────────────────────────────────────────────

/// Exemplar data from ICU4X's compiled CLDR data.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcuLocaleData;

impl IcuLocaleData {
    pub fn new() -> Self {
        Self
    }

    fn parse(id: &str) -> Result<Locale, AlphabetError> {
        id.replace('_', "-")
            .parse::<Locale>()
            .map_err(|e| AlphabetError::Provider {
                locale: id.to_string(),
                message: e.to_string(),
            })
    }

    fn load_main(id: &str, locale: &Locale) -> Result<Vec<String>, AlphabetError> {
        let set = exemplar_chars::exemplars_main(&DataLocale::from(locale)).map_err(|e| {
            AlphabetError::Provider {
                locale: id.to_string(),
                message: e.to_string(),
            }
        })?;
        let list = set.to_code_point_inversion_list_string_list();
        let mut letters: Vec<String> = list.code_points().iter_chars().map(String::from).collect();
        letters.extend(list.strings().iter().map(str::to_string));
        Ok(letters)
    }
}

impl LocaleDataProvider for IcuLocaleData {
    /// CLDR's available locales that have a non-empty main exemplar set.
    fn available_locales(&self) -> Vec<LocaleDescriptor> {
        let names = english_names();
        cldr::locale_ids()
            .map(|id| {
                let mut desc = LocaleDescriptor::new(&id, "");
                desc.display_language = display_language(names.as_ref(), &desc.language);
                desc
            })
            .filter(|desc| match self.exemplar_set(desc) {
                Ok(letters) => !letters.is_empty(),
                Err(e) => {
                    debug!(locale = %desc.id, error = %e, "skipping locale without exemplar data");
                    false
                }
            })
            .collect()
    }

    fn exemplar_set(&self, desc: &LocaleDescriptor) -> Result<Vec<String>, AlphabetError> {
        let locale = Self::parse(&desc.id)?;
        let letters = Self::load_main(&desc.id, &locale);

        // Regional and script locales without their own set inherit the language's.
        match letters {
            Ok(l) if !l.is_empty() || desc.id == desc.language => Ok(l),
            _ => {
                trace!(locale = %desc.id, "falling back to language exemplars");
                let parent = Self::parse(&desc.language)?;
                Self::load_main(&desc.id, &parent)
            }
        }
    }
}

// ─── In-memory provider ─────────────────────────────────────────

/// A provider over an explicit table, for hosts that ship their own data.
#[derive(Debug, Clone, Default)]
pub struct StaticLocaleData {
    locales: Vec<LocaleDescriptor>,
    sets: HashMap<String, Vec<String>>,
}

impl StaticLocaleData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a locale with its exemplar letters. Later calls for the same id
    /// replace the letters but keep the first enumeration position.
    pub fn with_locale(mut self, id: &str, display_language: &str, letters: &str) -> Self {
        self = self.listing(id, display_language);
        self.sets
            .insert(id.to_string(), letters.chars().map(String::from).collect());
        self
    }

    /// Enumerate a locale whose exemplar set cannot be loaded.
    pub fn with_unloadable_locale(self, id: &str, display_language: &str) -> Self {
        self.listing(id, display_language)
    }

    fn listing(mut self, id: &str, display_language: &str) -> Self {
        if !self.locales.iter().any(|d| d.id == id) {
            self.locales.push(LocaleDescriptor::new(id, display_language));
        }
        self
    }
}

impl LocaleDataProvider for StaticLocaleData {
    fn available_locales(&self) -> Vec<LocaleDescriptor> {
        self.locales.clone()
    }

    fn exemplar_set(&self, locale: &LocaleDescriptor) -> Result<Vec<String>, AlphabetError> {
        self.sets
            .get(&locale.id)
            .cloned()
            .ok_or_else(|| AlphabetError::Provider {
                locale: locale.id.clone(),
                message: "no data in table".into(),
            })
    }
}
