use serde::{Deserialize, Serialize};

/// A supported output language. Each locale carries its own vocabulary and
/// word order behind the shared `FuzzyText` contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    Dutch,
    German,
}

impl Locale {
    /// Resolves a locale tag like "nl", "de-AT" or "dutch" (case-insensitive,
    /// region subtags ignored).
    pub fn from_tag(tag: &str) -> Result<Self, String> {
        let normalized = tag.trim().to_lowercase();
        let primary = normalized.split(['-', '_']).next().unwrap_or("");

        match primary {
            "nl" | "dutch" | "nederlands" => Ok(Locale::Dutch),
            "de" | "german" | "deutsch" => Ok(Locale::German),
            _ => Err(format!("Unknown locale tag: {}", tag)),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Dutch => "nl",
            Locale::German => "de",
        }
    }

    pub fn all() -> &'static [Locale] {
        &[Locale::Dutch, Locale::German]
    }
}

/// Wraps any hour input into the 0-23 day. Floored modulo, so negative and
/// overflowing hours land on the expected clock reading.
pub fn normalize_hour(hour: i32) -> i32 {
    hour.rem_euclid(24)
}

/// The spoken hour for a normalized 0-23 hour: 0 reads as 12.
pub fn clock_face(h24: i32) -> i32 {
    if h24 == 0 {
        12
    } else {
        h24
    }
}

/// The hour following a normalized 0-23 hour, still on the 0-23 day.
pub fn next_hour(h24: i32) -> i32 {
    if h24 == 23 {
        0
    } else {
        h24 + 1
    }
}

/// The mutually exclusive minute categories that decide phrase shape. Offsets
/// carried by a variant are the value fed to the minute lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinuteBand {
    OnTheHour,
    Past(i32),
    QuarterPast,
    ToHalf(i32),
    Half,
    PastHalf(i32),
    QuarterTo,
    ToNext(i32),
    Fallback,
}

impl MinuteBand {
    /// Total over all integers: minutes outside 0-59 take the fallback band
    /// rather than an error, so composers never fail on a bad reading.
    pub fn classify(minute: i32) -> Self {
        match minute {
            0 => MinuteBand::OnTheHour,
            1..=14 => MinuteBand::Past(minute),
            15 => MinuteBand::QuarterPast,
            16..=29 => MinuteBand::ToHalf(30 - minute),
            30 => MinuteBand::Half,
            31..=44 => MinuteBand::PastHalf(minute - 30),
            45 => MinuteBand::QuarterTo,
            46..=59 => MinuteBand::ToNext(60 - minute),
            _ => MinuteBand::Fallback,
        }
    }
}
