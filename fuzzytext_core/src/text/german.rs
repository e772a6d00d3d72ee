use super::FuzzyText;
use crate::domain::{clock_face, next_hour, normalize_hour, MinuteBand};

/// Spoken hour name, same mod-12 fold as the Dutch table. "eins" is the
/// standalone form; the "... Uhr" form needs "ein" and the composer handles
/// that substitution itself.
pub fn hour_word(h: i32) -> &'static str {
    match (h % 12 + 12) % 12 {
        1 => "eins",
        2 => "zwei",
        3 => "drei",
        4 => "vier",
        5 => "fünf",
        6 => "sechs",
        7 => "sieben",
        8 => "acht",
        9 => "neun",
        10 => "zehn",
        11 => "elf",
        0 => "zwölf",
        _ => "zwei",
    }
}

/// Minute offset name for 1-15, plain digits for anything else.
pub fn minute_word(m: i32) -> String {
    match m {
        1 => "eins".to_string(),
        2 => "zwei".to_string(),
        3 => "drei".to_string(),
        4 => "vier".to_string(),
        5 => "fünf".to_string(),
        6 => "sechs".to_string(),
        7 => "sieben".to_string(),
        8 => "acht".to_string(),
        9 => "neun".to_string(),
        10 => "zehn".to_string(),
        11 => "elf".to_string(),
        12 => "zwölf".to_string(),
        13 => "dreizehn".to_string(),
        14 => "vierzehn".to_string(),
        15 => "fünfzehn".to_string(),
        _ => m.to_string(),
    }
}

/// German phrase composer. German shares the Dutch half-hour pivot: "halb elf"
/// is 10:30, and 10:25 reads "fünf vor halb elf".
pub struct GermanText;

impl GermanText {
    // One o'clock inflects: "es ist ein Uhr", but "zehn nach eins".
    fn uhr_word(clock_hr: i32) -> &'static str {
        if clock_hr == 1 {
            "ein"
        } else {
            hour_word(clock_hr)
        }
    }
}

impl FuzzyText for GermanText {
    fn generate(&self, hour: i32, minute: i32) -> String {
        let h24 = normalize_hour(hour);
        let hr = clock_face(h24);
        let hr_text = hour_word(hr);
        let next_text = hour_word(next_hour(h24));

        match MinuteBand::classify(minute) {
            MinuteBand::OnTheHour => match h24 {
                0 => "es ist Mitternacht".to_string(),
                12 => "es ist zwölf Uhr".to_string(),
                _ => format!("es ist {} Uhr", Self::uhr_word(hr)),
            },
            MinuteBand::Past(m) => format!("es ist {} nach {}", minute_word(m), hr_text),
            MinuteBand::QuarterPast => format!("es ist Viertel nach {}", hr_text),
            MinuteBand::ToHalf(m) => format!("es ist {} vor halb {}", minute_word(m), next_text),
            MinuteBand::Half => format!("es ist halb {}", next_text),
            MinuteBand::PastHalf(m) => format!("es ist {} nach halb {}", minute_word(m), next_text),
            MinuteBand::QuarterTo => format!("es ist Viertel vor {}", next_text),
            MinuteBand::ToNext(m) => format!("es ist {} vor {}", minute_word(m), next_text),
            MinuteBand::Fallback => format!("es ist {} Uhr", Self::uhr_word(hr)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen(h: i32, m: i32) -> String {
        GermanText.generate(h, m)
    }

    #[test]
    fn one_golden_phrase_per_band() {
        assert_eq!(gen(8, 0), "es ist acht Uhr");
        assert_eq!(gen(13, 10), "es ist zehn nach eins");
        assert_eq!(gen(10, 15), "es ist Viertel nach zehn");
        assert_eq!(gen(10, 25), "es ist fünf vor halb elf");
        assert_eq!(gen(10, 30), "es ist halb elf");
        assert_eq!(gen(10, 35), "es ist fünf nach halb elf");
        assert_eq!(gen(10, 45), "es ist Viertel vor elf");
        assert_eq!(gen(10, 50), "es ist zehn vor elf");
    }

    #[test]
    fn one_oclock_inflects_to_ein() {
        assert_eq!(gen(1, 0), "es ist ein Uhr");
        assert_eq!(gen(13, 0), "es ist ein Uhr");
        // Only the Uhr form inflects.
        assert_eq!(gen(1, 10), "es ist zehn nach eins");
        assert_eq!(gen(1, 75), "es ist ein Uhr");
    }

    #[test]
    fn midnight_and_noon_speak_differently() {
        assert_eq!(gen(0, 0), "es ist Mitternacht");
        assert_eq!(gen(12, 0), "es ist zwölf Uhr");
    }

    #[test]
    fn half_pivots_on_the_next_hour() {
        assert_eq!(gen(23, 30), "es ist halb zwölf");
        assert_eq!(gen(0, 30), "es ist halb eins");
        assert_eq!(gen(12, 30), "es ist halb eins");
    }

    #[test]
    fn hour_input_wraps_modulo_24() {
        for h in -48..72 {
            for m in [0, 7, 15, 22, 30, 38, 45, 52] {
                assert_eq!(gen(h, m), gen(h + 24, m));
            }
        }
    }

    #[test]
    fn never_fails_and_never_empty() {
        for h in -1000..=1000 {
            for m in -10..=70 {
                assert!(!gen(h, m).is_empty());
            }
        }
    }

    #[test]
    fn bad_minutes_degrade_to_the_generic_hour_phrase() {
        assert_eq!(gen(5, 75), "es ist fünf Uhr");
        assert_eq!(gen(0, -3), "es ist zwölf Uhr");
    }

    #[test]
    fn minute_lexicon_falls_back_to_digits() {
        assert_eq!(minute_word(15), "fünfzehn");
        assert_eq!(minute_word(23), "23");
        assert_eq!(minute_word(-1), "-1");
    }
}
