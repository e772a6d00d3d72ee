use super::FuzzyText;
use crate::domain::{clock_face, next_hour, normalize_hour, MinuteBand};

/// Spoken hour name. The mod-12 fold makes 0 and 12 both read "twaalf"; the
/// final arm is unreachable after the fold but keeps the lookup total.
pub fn hour_word(h: i32) -> &'static str {
    match (h % 12 + 12) % 12 {
        1 => "één",
        2 => "twee",
        3 => "drie",
        4 => "vier",
        5 => "vijf",
        6 => "zes",
        7 => "zeven",
        8 => "acht",
        9 => "negen",
        10 => "tien",
        11 => "elf",
        0 => "twaalf",
        _ => "twee",
    }
}

/// Minute offset name for 1-15. Anything else renders as plain digits, the
/// escape hatch for offsets the band math never produces.
pub fn minute_word(m: i32) -> String {
    match m {
        1 => "één".to_string(),
        2 => "twee".to_string(),
        3 => "drie".to_string(),
        4 => "vier".to_string(),
        5 => "vijf".to_string(),
        6 => "zes".to_string(),
        7 => "zeven".to_string(),
        8 => "acht".to_string(),
        9 => "negen".to_string(),
        10 => "tien".to_string(),
        11 => "elf".to_string(),
        12 => "twaalf".to_string(),
        13 => "dertien".to_string(),
        14 => "veertien".to_string(),
        15 => "vijftien".to_string(),
        _ => m.to_string(),
    }
}

/// Dutch phrase composer. From half past the hour onward the phrase pivots on
/// the *next* hour ("half elf" is 10:30).
pub struct DutchText;

impl FuzzyText for DutchText {
    fn generate(&self, hour: i32, minute: i32) -> String {
        let h24 = normalize_hour(hour);
        let hr_text = hour_word(clock_face(h24));
        let next_text = hour_word(next_hour(h24));

        match MinuteBand::classify(minute) {
            // Minute 0 keys on the 24-hour value: midnight and noon both show
            // "twaalf" on the clock face but speak differently.
            MinuteBand::OnTheHour => match h24 {
                0 => "het is middernacht".to_string(),
                12 => "het is twaalf uur".to_string(),
                _ => format!("het is {} uur", hr_text),
            },
            MinuteBand::Past(m) => format!("het is {} over {}", minute_word(m), hr_text),
            MinuteBand::QuarterPast => format!("het is kwart over {}", hr_text),
            MinuteBand::ToHalf(m) => format!("het is {} voor half {}", minute_word(m), next_text),
            MinuteBand::Half => format!("het is half {}", next_text),
            MinuteBand::PastHalf(m) => format!("het is {} over half {}", minute_word(m), next_text),
            MinuteBand::QuarterTo => format!("het is kwart voor {}", next_text),
            MinuteBand::ToNext(m) => format!("het is {} voor {}", minute_word(m), next_text),
            MinuteBand::Fallback => format!("het is {} uur", hr_text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen(h: i32, m: i32) -> String {
        DutchText.generate(h, m)
    }

    #[test]
    fn one_golden_phrase_per_band() {
        assert_eq!(gen(8, 0), "het is acht uur");
        assert_eq!(gen(17, 5), "het is vijf over vijf");
        assert_eq!(gen(5, 15), "het is kwart over vijf");
        assert_eq!(gen(5, 20), "het is tien voor half zes");
        assert_eq!(gen(10, 30), "het is half elf");
        assert_eq!(gen(10, 35), "het is vijf over half elf");
        assert_eq!(gen(10, 45), "het is kwart voor elf");
        assert_eq!(gen(10, 50), "het is tien voor elf");
    }

    #[test]
    fn midnight_and_noon_speak_differently() {
        assert_eq!(gen(0, 0), "het is middernacht");
        assert_eq!(gen(12, 0), "het is twaalf uur");
        assert_ne!(gen(0, 0), gen(12, 0));
    }

    #[test]
    fn half_pivots_on_the_next_hour() {
        assert_eq!(gen(10, 30), "het is half elf");
        assert_eq!(gen(0, 30), "het is half één");
        assert_eq!(gen(23, 30), "het is half twaalf");
        assert_eq!(gen(11, 30), "het is half twaalf");
    }

    #[test]
    fn quarter_phrases_are_symmetric() {
        for h in 0..24 {
            let past = gen(h, 15);
            let to = gen(h, 45);
            assert!(past.contains("kwart over"), "{}", past);
            assert!(to.contains("kwart voor"), "{}", to);
            assert!(past.ends_with(hour_word(clock_face(h))), "{}", past);
            assert!(to.ends_with(hour_word(next_hour(h))), "{}", to);
        }
    }

    #[test]
    fn end_of_day_rolls_into_twelve() {
        assert_eq!(gen(23, 50), "het is tien voor twaalf");
        assert_eq!(gen(23, 59), "het is één voor twaalf");
        assert_eq!(gen(12, 59), "het is één voor één");
    }

    #[test]
    fn hour_input_wraps_modulo_24() {
        for h in -48..72 {
            for m in [0, 7, 15, 22, 30, 38, 45, 52] {
                assert_eq!(gen(h, m), gen(h + 24, m));
                assert_eq!(gen(h, m), gen(h - 24, m));
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
        assert_eq!(gen(5, 75), "het is vijf uur");
        assert_eq!(gen(5, -3), "het is vijf uur");
        assert_eq!(gen(5, 60), "het is vijf uur");
        // The generic branch, not the midnight special case.
        assert_eq!(gen(0, 75), "het is twaalf uur");
    }

    #[test]
    fn minute_lexicon_falls_back_to_digits() {
        assert_eq!(minute_word(15), "vijftien");
        assert_eq!(minute_word(16), "16");
        assert_eq!(minute_word(42), "42");
        assert_eq!(minute_word(0), "0");
        assert_eq!(minute_word(-7), "-7");
    }

    #[test]
    fn hour_lexicon_folds_through_twelve() {
        assert_eq!(hour_word(0), "twaalf");
        assert_eq!(hour_word(12), "twaalf");
        assert_eq!(hour_word(13), "één");
        assert_eq!(hour_word(-1), "elf");
    }
}
