use std::collections::HashSet;

pub const FALLBACK_REASON: &str = "Relevant based on title and company.";

/// Explains a match by the words shared between the skills text and the
/// title. Shared words are listed in the order they appear in `skills`.
pub fn match_reason(skills: &str, title: &str) -> String {
    let title_words: HashSet<&str> = title.split_whitespace().collect();
    let mut seen = HashSet::new();
    let matched: Vec<&str> = skills
        .split_whitespace()
        .filter(|w| title_words.contains(w) && seen.insert(*w))
        .collect();
    if matched.is_empty() {
        FALLBACK_REASON.to_string()
    } else {
        format!("Matched skills: {}.", matched.join(", "))
    }
}
