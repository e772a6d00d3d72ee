mod cli;

use crate::cli::parse_config_from_args;
use colored::*;
use fuzzytext_core::generate;

fn main() {
    let config = parse_config_from_args();

    let phrase = generate(config.locale, config.hour, config.minute);
    let reading = format!("{:02}:{:02}", config.hour, config.minute);

    println!(
        "{} {} {}",
        reading.bold(),
        format!("[{}]", config.locale.tag()).dimmed(),
        phrase.bright_blue()
    );
}
