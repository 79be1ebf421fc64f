//! Canonical seed strings.
//!
//! A seed is built from a required base (a calendar day or a free-form label)
//! and up to two personal fields. Dates collapse to `YYYY-MM-DD` so every
//! instant of a day seeds identically; personal fields are trimmed and
//! lower-cased so `"  Alice "` and `"alice"` are the same person.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::trace;

/// Separator placed between the present seed components.
pub const SEED_DELIMITER: char = '|';

/// Base used when the caller's base is empty after trimming.
pub const DEFAULT_BASE: &str = "default";

const ISO_DATE: &str = "%Y-%m-%d";

/// Timestamp layouts without an offset, tried after RFC 3339.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// The base component of a seed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SeedBase {
    /// A calendar day.
    Date(NaiveDate),
    /// A free-form label, used verbatim even if it happens to look like a date.
    Label(String),
    /// Caller-supplied text: a calendar day if it parses as one, else a label.
    Auto(String),
}

impl SeedBase {
    /// The canonical text of this base.
    pub fn canonical(&self) -> String {
        match self {
            Self::Date(date) => date.format(ISO_DATE).to_string(),
            Self::Label(label) => or_default(label.trim()),
            Self::Auto(raw) => {
                let text = raw.trim();
                if text.is_empty() {
                    return DEFAULT_BASE.to_string();
                }
                match parse_calendar_date(text) {
                    Some(date) => {
                        trace!(base = text, %date, "seed base read as calendar date");
                        date.format(ISO_DATE).to_string()
                    }
                    None => text.to_string(),
                }
            }
        }
    }
}

impl From<NaiveDate> for SeedBase {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for SeedBase {
    fn from(text: &str) -> Self {
        Self::Auto(text.to_string())
    }
}

impl From<String> for SeedBase {
    fn from(text: String) -> Self {
        Self::Auto(text)
    }
}

/// Everything a selection is keyed on.
///
/// Built per request and thrown away; two contexts with the same
/// [`canonical`](Self::canonical) string always select the same item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeedContext {
    /// The day or label the selection belongs to.
    pub base: SeedBase,
    /// A person's name, if personalizing.
    pub identity: Option<String>,
    /// A second personal field such as a birth date.
    pub secondary: Option<String>,
}

impl SeedContext {
    /// A context with only a base, date-detected from the text.
    pub fn new(base: impl Into<SeedBase>) -> Self {
        Self {
            base: base.into(),
            identity: None,
            secondary: None,
        }
    }

    /// A context keyed on a calendar day.
    pub fn date(date: NaiveDate) -> Self {
        Self::new(SeedBase::Date(date))
    }

    /// A context keyed on a label that is never read as a date.
    pub fn label(label: impl Into<String>) -> Self {
        Self::new(SeedBase::Label(label.into()))
    }

    /// Build a context from the loose string form callers pass around.
    pub fn from_parts(base: &str, identity: Option<&str>, secondary: Option<&str>) -> Self {
        Self {
            base: SeedBase::from(base),
            identity: identity.map(str::to_string),
            secondary: secondary.map(str::to_string),
        }
    }

    /// Set the identity field.
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Set the secondary field.
    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    /// The canonical seed string: base, identity, secondary joined by
    /// [`SEED_DELIMITER`], with absent or blank personal fields left out.
    pub fn canonical(&self) -> String {
        let mut seed = self.base.canonical();
        let personal = [self.identity.as_deref(), self.secondary.as_deref()];
        for field in personal.into_iter().filter_map(normalize_field) {
            seed.push(SEED_DELIMITER);
            seed.push_str(&field);
        }
        seed
    }
}

/// Canonical seed for the loose string form. Shorthand for
/// `SeedContext::from_parts(..).canonical()`.
pub fn normalize_seed(base: &str, identity: Option<&str>, secondary: Option<&str>) -> String {
    SeedContext::from_parts(base, identity, secondary).canonical()
}

/// Read `input` as a calendar day, if it is one.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 and ISO-8601 timestamps (the date as written
/// in the timestamp's own offset), offset-less timestamps, RFC 2822, and the
/// `Wed Jan 01 2025` day-string shape. Any surrounding text makes it a label.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, ISO_DATE) {
        return Some(date);
    }
    if let Ok(moment) = DateTime::parse_from_rfc3339(text) {
        return Some(moment.date_naive());
    }
    if let Ok(moment) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(moment.date_naive());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(moment) = NaiveDateTime::parse_from_str(text, format) {
            return Some(moment.date());
        }
    }
    if let Ok(moment) = DateTime::parse_from_rfc2822(text) {
        return Some(moment.date_naive());
    }
    NaiveDate::parse_from_str(text, "%a %b %d %Y").ok()
}

fn normalize_field(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn or_default(text: &str) -> String {
    if text.is_empty() {
        DEFAULT_BASE.to_string()
    } else {
        text.to_string()
    }
}
