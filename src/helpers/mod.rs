//! Display helpers
//!
//! Pure functions that turn raw numbers, timestamps and identifiers into the
//! strings the client shows.

pub mod case;
pub mod formatting;

// Re-export commonly used functions for convenience
pub use case::{CaseStyle, capitalize, sentence_case, title_case};
pub use formatting::{
    Locale, format_time, shorten_file_size, shorten_num, time_since, time_since_now,
};
