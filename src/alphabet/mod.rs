//! Alphabet subsystem.
//!
//! Maps a display language ("Ukrainian") or a locale identifier ("en_NZ")
//! to the locale's basic exemplar letters, using a catalog built once from
//! the locale-data provider.

pub mod catalog;
mod cldr;
pub mod providers;
pub mod resolver;
pub mod types;

pub use catalog::LocaleCatalog;
pub use providers::{IcuLocaleData, LocaleDataProvider};
pub use resolver::AlphabetResolver;
pub use types::{Alphabet, AlphabetError, LocaleDescriptor};

/// Language used when `Alphabet[]` is called without an argument.
pub const DEFAULT_LANGUAGE: &str = "English";
