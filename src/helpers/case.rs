//! Case conversion for identifiers shown as labels
//!
//! Config keys and enum names arrive as `camelCase`, `snake_case` or
//! `kebab-case`. Both converters split them into ASCII alphanumeric words:
//! runs of anything else become a single space, and a lowercase letter
//! followed by an uppercase one starts a new word.

/// Splits `input` into words. Non-ASCII characters act as separators.
fn words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in input.chars() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        if let Some(p) = prev
            && p.is_ascii_lowercase()
            && c.is_ascii_uppercase()
        {
            words.push(std::mem::take(&mut current));
        }

        current.push(c);
        prev = Some(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Uppercases the first character and keeps the rest
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `someConfigKey` -> `Some config key`
pub fn sentence_case(s: &str) -> String {
    let lowered = words(s).join(" ").to_ascii_lowercase();
    capitalize(&lowered)
}

/// `someConfigKey` -> `Some Config Key`
pub fn title_case(s: &str) -> String {
    words(s)
        .iter()
        .map(|word| capitalize(&word.to_ascii_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Which converter to apply, as named on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CaseStyle {
    Sentence,
    Title,
    Capitalize,
}

impl CaseStyle {
    pub fn apply(self, s: &str) -> String {
        match self {
            CaseStyle::Sentence => sentence_case(s),
            CaseStyle::Title => title_case(s),
            CaseStyle::Capitalize => capitalize(s),
        }
    }
}
