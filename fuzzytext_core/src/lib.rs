pub mod domain;
pub mod text;

pub use domain::{Locale, MinuteBand};
pub use text::{for_locale, FuzzyText};

/// Renders one fuzzy-time phrase for the given locale. Total for all integer
/// inputs: the hour wraps modulo 24 and out-of-range minutes fall back to the
/// generic on-the-hour phrase.
pub fn generate(locale: Locale, hour: i32, minute: i32) -> String {
    for_locale(locale).generate(hour, minute)
}
