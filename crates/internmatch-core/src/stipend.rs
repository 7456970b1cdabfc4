//! Heuristic compensation parser for free-form stipend text.

use regex::Regex;
use std::sync::OnceLock;

fn number_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9,]+").expect("stipend pattern is valid"))
}

/// Extracts a non-negative amount from stipend text.
///
/// "unpaid" anywhere means 0. Otherwise every run of digits (commas are group
/// separators) is read as a number; a range such as `10,000-15,000` averages
/// to its midpoint. Text without numbers parses to 0.
pub fn parse_stipend(text: &str) -> f64 {
    if text.to_lowercase().contains("unpaid") {
        return 0.0;
    }

    let amounts: Vec<f64> = number_runs()
        .find_iter(text)
        .filter_map(|m| {
            let digits: String = m.as_str().chars().filter(char::is_ascii_digit).collect();
            if digits.is_empty() {
                return None;
            }
            digits.parse::<f64>().ok().filter(|v| v.is_finite())
        })
        .collect();

    match amounts.as_slice() {
        [] => 0.0,
        [single] => *single,
        many => many.iter().sum::<f64>() / many.len() as f64,
    }
}
