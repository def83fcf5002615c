//! Language alphabets for the computer-algebra host.
//!
//! `Alphabet["Ukrainian"]`, `Alphabet["es"]` and `Alphabet[]` resolve a
//! display language or CLDR locale id to the locale's basic lowercase
//! exemplar letters, backed by ICU4X compiled data.

pub mod alphabet;
pub mod builtin;
pub mod config;
pub mod logging;
pub mod server;
