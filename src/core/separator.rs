//! List separator extraction from config descriptions
//!
//! List-valued settings are comma separated unless the entry description
//! overrides it with an inline marker, for example
//! `"Keys to bind. ListSeparator=; Default: Q;E"`. The character right after
//! `ListSeparator=` is the separator. Only the first marker counts.
//!
//! A marker at the very end of the description has no character after it.
//! That still yields a custom separator, with the character absent.

use crate::core::model::ConfigEntry;
use serde::{Deserialize, Serialize};

/// Inline marker announcing a custom separator
pub const LIST_SEPARATOR_MARKER: &str = "ListSeparator=";

/// Separator used when the description has no marker
pub const DEFAULT_SEPARATOR: char = ',';

/// Whether the separator came from the description
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SeparatorKind {
    Default,
    Custom,
}

/// Separator for a list-valued config entry
///
/// Serializes as `{"type": "custom", "char": ";"}`. An absent character
/// serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSeparator {
    #[serde(rename = "type")]
    pub kind: SeparatorKind,
    #[serde(rename = "char")]
    pub separator: Option<char>,
}

impl ListSeparator {
    pub const DEFAULT: ListSeparator = ListSeparator {
        kind: SeparatorKind::Default,
        separator: Some(DEFAULT_SEPARATOR),
    };

    pub const fn custom(separator: Option<char>) -> Self {
        Self {
            kind: SeparatorKind::Custom,
            separator,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.kind == SeparatorKind::Custom
    }

    /// Splits a list value into trimmed, non-empty items.
    ///
    /// Without a separator character the whole value is a single item.
    pub fn split<'a>(&self, value: &'a str) -> Vec<&'a str> {
        let value = value.trim();
        match self.separator {
            Some(sep) => value
                .split(sep)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .collect(),
            None if value.is_empty() => Vec::new(),
            None => vec![value],
        }
    }

    /// Joins items with the separator, or with a comma when it is absent
    pub fn join<S: AsRef<str>>(&self, items: &[S]) -> String {
        let sep = self.separator.unwrap_or(DEFAULT_SEPARATOR);
        let mut out = String::new();
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push(sep);
            }
            out.push_str(item.as_ref());
        }
        out
    }
}

impl Default for ListSeparator {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scans a description for the separator marker
pub fn parse_list_separator(description: Option<&str>) -> ListSeparator {
    let Some(description) = description else {
        return ListSeparator::DEFAULT;
    };

    let Some(index) = description.find(LIST_SEPARATOR_MARKER) else {
        return ListSeparator::DEFAULT;
    };

    let separator = description[index + LIST_SEPARATOR_MARKER.len()..]
        .chars()
        .next();
    if separator.is_none() {
        tracing::debug!("List separator marker at end of description, no character follows");
    }

    ListSeparator::custom(separator)
}

/// Separator for a config entry, read from its description
pub fn get_list_separator(entry: &ConfigEntry) -> ListSeparator {
    parse_list_separator(entry.description.as_deref())
}
