// Locale variants of the phrase generator
pub mod dutch;
pub mod german;

pub use dutch::DutchText;
pub use german::GermanText;

use crate::domain::Locale;

/// The capability every locale variant implements: turn an hour/minute pair
/// into one spoken phrase. Total for all integer inputs, never empty.
pub trait FuzzyText: Send + Sync {
    fn generate(&self, hour: i32, minute: i32) -> String;
}

/// Looks up the variant for a locale. Implementors are zero-sized, so the
/// registry hands out static references.
pub fn for_locale(locale: Locale) -> &'static dyn FuzzyText {
    match locale {
        Locale::Dutch => &DutchText,
        Locale::German => &GermanText,
    }
}
