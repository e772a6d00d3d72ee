use colored::*;
use fuzzytext_core::domain::{clock_face, next_hour, MinuteBand};
use fuzzytext_core::text::{dutch, german};
use fuzzytext_core::{generate, Locale};
use std::mem::discriminant;
use std::process::exit;

// The fixed "quarter" wording per locale, past and to forms.
fn quarter_words(locale: Locale) -> (&'static str, &'static str) {
    match locale {
        Locale::Dutch => ("kwart over", "kwart voor"),
        Locale::German => ("Viertel nach", "Viertel vor"),
    }
}

fn hour_word_fn(locale: Locale) -> fn(i32) -> &'static str {
    match locale {
        Locale::Dutch => dutch::hour_word,
        Locale::German => german::hour_word,
    }
}

/// Every phrase over the grid (and well outside it) must be non-empty.
fn check_totality(locale: Locale) -> usize {
    let mut violations = 0;
    for h in -1000..=1000 {
        for m in -10..=70 {
            if generate(locale, h, m).is_empty() {
                violations += 1;
            }
        }
    }
    violations
}

/// The hour input wraps modulo 24 in both directions.
fn check_hour_wrap(locale: Locale) -> usize {
    let mut violations = 0;
    for h in 0..24 {
        for m in 0..60 {
            let base = generate(locale, h, m);
            if base != generate(locale, h + 24, m) || base != generate(locale, h - 24, m) {
                violations += 1;
            }
        }
    }
    violations
}

/// Midnight and noon both sit on clock-face twelve but must read differently.
fn check_midnight_noon(locale: Locale) -> usize {
    if generate(locale, 0, 0) == generate(locale, 12, 0) {
        1
    } else {
        0
    }
}

/// Sweeping minute 0→59 must cross a band boundary at exactly 1, 15, 16, 30,
/// 31, 45 and 46.
fn check_band_transitions() -> usize {
    let mut transitions = Vec::new();
    for m in 1..60 {
        if discriminant(&MinuteBand::classify(m - 1)) != discriminant(&MinuteBand::classify(m)) {
            transitions.push(m);
        }
    }
    if transitions == [1, 15, 16, 30, 31, 45, 46] {
        0
    } else {
        1
    }
}

/// The half-hour phrase must name the *next* hour, for every hour of the day
/// including the 23→12 and 0→1 wraparounds.
fn check_half_pivot(locale: Locale) -> usize {
    let hour_word = hour_word_fn(locale);
    let mut violations = 0;
    for h in 0..24 {
        let phrase = generate(locale, h, 30);
        if !phrase.ends_with(hour_word(next_hour(h))) {
            println!(
                "   {} {} 30m past {} gave: {}",
                "❌".red(),
                locale.tag(),
                h,
                phrase
            );
            violations += 1;
        }
    }
    violations
}

/// Minutes 15 and 45 carry the quarter word with opposite prepositions and
/// reference the current vs. the next hour.
fn check_quarter_symmetry(locale: Locale) -> usize {
    let (past_words, to_words) = quarter_words(locale);
    let hour_word = hour_word_fn(locale);
    let mut violations = 0;
    for h in 0..24 {
        let past = generate(locale, h, 15);
        let to = generate(locale, h, 45);
        if !past.contains(past_words) || !past.ends_with(hour_word(clock_face(h))) {
            violations += 1;
        }
        if !to.contains(to_words) || !to.ends_with(hour_word(next_hour(h))) {
            violations += 1;
        }
    }
    violations
}

/// Out-of-range minutes must degrade to the generic on-the-hour phrase, never
/// to a crash or an empty string.
fn check_minute_fallback(locale: Locale) -> usize {
    let mut violations = 0;
    for h in 1..24 {
        if h == 12 {
            continue; // noon's minute-0 phrase is the literal form, not the generic one
        }
        for m in [-5, 60, 75, 999] {
            if generate(locale, h, m) != generate(locale, h, 0) {
                violations += 1;
            }
        }
    }
    // Midnight's generic fallback must differ from the minute-0 special case.
    if generate(locale, 0, 75) == generate(locale, 0, 0) {
        violations += 1;
    }
    violations
}

fn main() {
    println!(
        "{}",
        "🔍 Checking fuzzy-time phrases over the full 24x60 grid..."
            .yellow()
            .bold()
    );

    let mut total_violations = 0;

    let band = check_band_transitions();
    report("band transitions at 1/15/16/30/31/45/46", band);
    total_violations += band;

    for &locale in Locale::all() {
        println!("\n{}", format!("--- locale: {} ---", locale.tag()).bold());

        let checks = [
            ("totality (never empty)", check_totality(locale)),
            ("hour wraps modulo 24", check_hour_wrap(locale)),
            ("midnight differs from noon", check_midnight_noon(locale)),
            ("half pivots on next hour", check_half_pivot(locale)),
            ("quarter symmetry", check_quarter_symmetry(locale)),
            ("bad minute falls back to o'clock", check_minute_fallback(locale)),
        ];

        for (name, violations) in checks {
            report(name, violations);
            total_violations += violations;
        }
    }

    println!();
    if total_violations == 0 {
        println!("{}", "✅ All phrase invariants hold.".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} violation(s) found.", total_violations)
                .red()
                .bold()
        );
        exit(1);
    }
}

fn report(name: &str, violations: usize) {
    if violations == 0 {
        println!("   {} {}", "✅".green(), name);
    } else {
        println!("   {} {} ({} violations)", "❌".red(), name, violations);
    }
}
