//! Core types for the alphabet subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the locale catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleDescriptor {
    /// Locale identifier in underscore form, e.g. "en_NZ".
    pub id: String,
    /// Language subtag, e.g. "en".
    pub language: String,
    /// English display name of the language, e.g. "English".
    pub display_language: String,
}

impl LocaleDescriptor {
    pub fn new(id: &str, display_language: &str) -> Self {
        let language = id.split(['_', '-']).next().unwrap_or(id).to_string();
        Self {
            id: id.to_string(),
            language,
            display_language: display_language.to_string(),
        }
    }
}

/// A resolved alphabet: the letters plus where they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    /// The name as given by the caller.
    pub query: String,
    /// Catalog locale the query resolved to.
    pub locale: String,
    pub display_language: String,
    /// Exemplar letters in provider order.
    pub letters: Vec<String>,
}

impl Alphabet {
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.letters.join(", "))
    }
}

/// Alphabet resolution errors.
#[derive(Debug, thiserror::Error)]
pub enum AlphabetError {
    /// The name matches neither a display language nor a catalog locale.
    #[error("The alphabet \"{0}\" is not known or not available.")]
    NotFound(String),
    /// The provider could not load exemplar data for a locale.
    #[error("Exemplar data for '{locale}' unavailable: {message}")]
    Provider { locale: String, message: String },
}

impl AlphabetError {
    /// The `Alphabet` message tag this error is reported under, if any.
    pub fn message_tag(&self) -> Option<&'static str> {
        match self {
            AlphabetError::NotFound(_) => Some("nalph"),
            AlphabetError::Provider { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_language_subtag() {
        assert_eq!(LocaleDescriptor::new("en_NZ", "English").language, "en");
        assert_eq!(LocaleDescriptor::new("sr_Latn", "Serbian").language, "sr");
        assert_eq!(LocaleDescriptor::new("fil", "Filipino").language, "fil");
    }

    #[test]
    fn test_alphabet_display() {
        let alphabet = Alphabet {
            query: "x".into(),
            locale: "x".into(),
            display_language: "X".into(),
            letters: vec!["a".into(), "b".into(), "ch".into()],
        };
        assert_eq!(alphabet.to_string(), "{a, b, ch}");
        assert_eq!(alphabet.len(), 3);
    }

    #[test]
    fn test_message_tag_only_for_not_found() {
        assert_eq!(AlphabetError::NotFound("x".into()).message_tag(), Some("nalph"));
        let provider = AlphabetError::Provider {
            locale: "zz".into(),
            message: "no data".into(),
        };
        assert_eq!(provider.message_tag(), None);
        assert_eq!(provider.to_string(), "Exemplar data for 'zz' unavailable: no data");
    }

    #[test]
    fn test_not_found_message_quotes_input() {
        let err = AlphabetError::NotFound("not-a-real-language".into());
        assert_eq!(
            err.to_string(),
            "The alphabet \"not-a-real-language\" is not known or not available."
        );
    }
}
