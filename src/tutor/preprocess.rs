// src/tutor/preprocess.rs

/// Lowercases, trims and drops everything except ASCII letters, digits,
/// whitespace and `? . ! ,`
pub fn clean_text(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || "?.!,".contains(*c)
        })
        .collect()
}

/// Words of a cleaned question, punctuation stripped
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || "?.!,".contains(c))
        .filter(|w| !w.is_empty())
}
