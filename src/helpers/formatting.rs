//! Number and time formatting for UI display

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const FILE_SIZE_UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];
const NUM_SUFFIXES: [&str; 5] = ["", "k", "M", "G", "T"];

const SECONDS_PER_YEAR: i64 = 31_536_000;
const SECONDS_PER_MONTH: i64 = 2_592_000;
const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Picks the largest power of `base` not above `value`, capped at the last unit
fn scale(value: u64, base: u64, max_exp: usize) -> (f64, usize) {
    let mut exp = 0;
    let mut divisor = 1u64;
    while exp < max_exp && value / divisor >= base {
        divisor *= base;
        exp += 1;
    }
    (value as f64 / divisor as f64, exp)
}

/// Rounds to one decimal with ties away from zero, so `1.25` shows as `1.3`
fn one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}

/// Shortens a byte count, e.g. `1536` -> `1.5kB`
pub fn shorten_file_size(bytes: u64) -> String {
    let (value, exp) = scale(bytes, 1024, FILE_SIZE_UNITS.len() - 1);
    format!("{}{}", one_decimal(value), FILE_SIZE_UNITS[exp])
}

/// Shortens a count, e.g. `12345` -> `12.3k`. Values below 1000 are printed as-is.
pub fn shorten_num(value: u64) -> String {
    let (scaled, exp) = scale(value, 1000, NUM_SUFFIXES.len() - 1);
    if exp == 0 {
        return value.to_string();
    }
    format!("{}{}", one_decimal(scaled), NUM_SUFFIXES[exp])
}

/// Formats a duration as `H:MM:SS`. Hours are not wrapped.
pub fn format_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}

/// Language of relative time labels
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Locale {
    #[default]
    En,
    ZhCn,
}

/// Unit of a relative time label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, TimeUnit::Years) => "years",
            (Locale::En, TimeUnit::Months) => "months",
            (Locale::En, TimeUnit::Days) => "days",
            (Locale::En, TimeUnit::Hours) => "hours",
            (Locale::En, TimeUnit::Minutes) => "minutes",
            (Locale::En, TimeUnit::Seconds) => "seconds",
            (Locale::ZhCn, TimeUnit::Years) => "年",
            (Locale::ZhCn, TimeUnit::Months) => "个月",
            (Locale::ZhCn, TimeUnit::Days) => "天",
            (Locale::ZhCn, TimeUnit::Hours) => "小时",
            (Locale::ZhCn, TimeUnit::Minutes) => "分钟",
            (Locale::ZhCn, TimeUnit::Seconds) => "秒",
        }
    }
}

/// Splits elapsed seconds into the count and unit shown to the user.
///
/// The largest unit with a count strictly above one wins, so 1.5 years reads
/// as 18 months. Below two minutes the raw seconds are shown.
pub fn elapsed_parts(seconds: i64) -> (i64, TimeUnit) {
    let units = [
        (SECONDS_PER_YEAR, TimeUnit::Years),
        (SECONDS_PER_MONTH, TimeUnit::Months),
        (SECONDS_PER_DAY, TimeUnit::Days),
        (SECONDS_PER_HOUR, TimeUnit::Hours),
        (SECONDS_PER_MINUTE, TimeUnit::Minutes),
    ];

    for (size, unit) in units {
        let interval = seconds.div_euclid(size);
        if interval > 1 {
            return (interval, unit);
        }
    }
    (seconds, TimeUnit::Seconds)
}

/// How long ago `date` was, relative to `now`, e.g. `3 days`
pub fn time_since(date: DateTime<Utc>, now: DateTime<Utc>, locale: Locale) -> String {
    let (count, unit) = elapsed_parts((now - date).num_seconds());
    format!("{count} {}", unit.label(locale))
}

/// [`time_since`] against the current time
pub fn time_since_now(date: DateTime<Utc>, locale: Locale) -> String {
    time_since(date, Utc::now(), locale)
}
