use fuzzytext_core::Locale;
use regex::Regex;
use std::env;

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub hour: i32,
    pub minute: i32,
    pub locale: Locale,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            hour: 12,
            minute: 0,
            locale: Locale::Dutch,
        }
    }
}

/// Parses a wall-clock reading like "9:41" or "09:41". The engine tolerates
/// out-of-range values, so only the shape is validated here.
pub fn parse_time(s: &str) -> Result<(i32, i32), String> {
    let re = Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap();

    let caps = re
        .captures(s.trim())
        .ok_or_else(|| format!("Expected HH:MM, got: {}", s))?;

    let hour: i32 = caps[1].parse().map_err(|_| "Bad hour".to_string())?;
    let minute: i32 = caps[2].parse().map_err(|_| "Bad minute".to_string())?;

    Ok((hour, minute))
}

/// Parses command-line arguments to set:
/// - the reading to render via --time=HH:MM
/// - the output language via --locale=TAG (or a bare tag like "de")
pub fn parse_config_from_args() -> RenderConfig {
    let args: Vec<String> = env::args().collect();
    let mut config = RenderConfig::default();

    // 1) Clock reading
    if let Some(time_arg) = args.iter().find(|a| a.starts_with("--time=")) {
        if let Some(time_str) = time_arg.strip_prefix("--time=") {
            match parse_time(time_str) {
                Ok((h, m)) => {
                    config.hour = h;
                    config.minute = m;
                }
                Err(e) => eprintln!("Ignoring --time: {}", e),
            }
        }
    }

    // 2) Locale: --locale=TAG wins, otherwise any bare tag like "de" counts,
    // e.g. "cargo run -- de"
    if let Some(locale_arg) = args.iter().find(|a| a.starts_with("--locale=")) {
        if let Some(tag) = locale_arg.strip_prefix("--locale=") {
            match Locale::from_tag(tag) {
                Ok(locale) => config.locale = locale,
                Err(e) => eprintln!("Ignoring --locale: {}", e),
            }
        }
    } else if let Some(locale) = args
        .iter()
        .skip(1)
        .find_map(|a| Locale::from_tag(a).ok())
    {
        config.locale = locale;
    }

    // Otherwise it remains Dutch (the default)
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_time_shapes() {
        assert_eq!(parse_time("9:41"), Ok((9, 41)));
        assert_eq!(parse_time("09:41"), Ok((9, 41)));
        assert_eq!(parse_time(" 23:05 "), Ok((23, 5)));
    }

    #[test]
    fn rejects_malformed_times() {
        assert!(parse_time("941").is_err());
        assert!(parse_time("9:4").is_err());
        assert!(parse_time("nine:forty").is_err());
        assert!(parse_time("").is_err());
    }
}
