//! UTC wall-clock timestamps with a fixed microsecond text form.
//!
//! The backing file stores timestamps as `YYYY-MM-DDTHH:MM:SS.ffffff`:
//! ISO-8601 with six fractional digits and no offset marker. Values are
//! treated as UTC throughout. [`Timestamp::now`] truncates to whole
//! microseconds so a value always round-trips through its text form
//! unchanged.

use chrono::{DateTime, Duration, NaiveDateTime, SubsecRound, Utc};
use crate::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

/// Render format. Microseconds are always printed, zero-padded to six digits.
const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Parse format. The fractional part may run short, down to one digit.
const PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse format applied to text whose fraction falls outside the
/// one-to-six digit window. `%.f` would match such text; the exact
/// six-digit form never does.
const STRICT_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%6f";

/// A point in time with microsecond precision.
///
/// Serializes as its canonical text form, e.g. `"2022-01-01T00:00:00.000000"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current time, truncated to whole microseconds.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(6))
    }

    /// Parses the canonical text form.
    ///
    /// The fractional part is required and carries one to six digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTimestamp`] if the text does not match
    /// the `YYYY-MM-DDTHH:MM:SS.ffffff` shape, names an invalid date, or
    /// carries a fraction outside the one-to-six digit window.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let format = match fraction_len(text) {
            1..=6 => PARSE_FORMAT,
            _ => STRICT_PARSE_FORMAT,
        };
        NaiveDateTime::parse_from_str(text, format)
            .map(|naive| Self::from(naive.and_utc()))
            .map_err(|source| Error::MalformedTimestamp {
                text: text.to_string(),
                source,
            })
    }

    /// Returns the next representable instant, one microsecond later.
    ///
    /// Used to keep update timestamps strictly increasing when the clock
    /// has not advanced a full microsecond between two touches.
    #[must_use]
    pub fn tick(&self) -> Self {
        Self(self.0 + Duration::microseconds(1))
    }

    /// The underlying UTC datetime.
    #[must_use]
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    /// Truncates to whole microseconds, keeping the text round-trip exact.
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.trunc_subsecs(6))
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}

/// Length of the fractional part, zero when the text has no dot.
fn fraction_len(text: &str) -> usize {
    text.split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}
