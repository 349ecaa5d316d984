use once_cell::sync::Lazy;
use regex::Regex;

use crate::stopwords::is_stopword;

// Letters only, three or more, accepting Spanish accents.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-záéíóúñü]{3,}\b").unwrap());

/// Lowercase `text` and return its candidate terms in order of appearance,
/// stopwords removed.
pub fn terms(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| !is_stopword(w))
        .map(str::to_owned)
        .collect()
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
