//! Date token formatting.
//!
//! Google Calendar links take dates in one of three compact layouts:
//! `YYYYMMDD` for all-day events, `YYYYMMDDTHHMMSS` for floating times
//! (shown in the viewer's timezone) and `YYYYMMDDTHHMMSSZ` for UTC instants.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GcalError;

/// Which clock the date/time fields are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeSource {
    /// The host's local timezone
    #[default]
    Local,
    /// Coordinated Universal Time
    Utc,
}

/// Output layout of a date token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenStyle {
    /// `YYYYMMDD`
    AllDay,
    /// `YYYYMMDDTHHMMSS`
    #[default]
    Floating,
    /// `YYYYMMDDTHHMMSSZ`
    Instant,
}

impl TokenStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenStyle::AllDay => "all-day",
            TokenStyle::Floating => "floating",
            TokenStyle::Instant => "instant",
        }
    }
}

impl TimeSource {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeSource::Local => "local",
            TimeSource::Utc => "utc",
        }
    }
}

impl fmt::Display for TokenStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TimeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenStyle {
    type Err = GcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all-day" | "allday" | "date" => Ok(TokenStyle::AllDay),
            "floating" => Ok(TokenStyle::Floating),
            "instant" => Ok(TokenStyle::Instant),
            _ => Err(GcalError::UnknownOption {
                kind: "style",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for TimeSource {
    type Err = GcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(TimeSource::Local),
            "utc" => Ok(TimeSource::Utc),
            _ => Err(GcalError::UnknownOption {
                kind: "source",
                value: s.to_string(),
            }),
        }
    }
}

/// How to render a point in time as a date token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormatOptions {
    #[serde(default)]
    pub source: TimeSource,
    #[serde(default)]
    pub style: TokenStyle,
}

impl FormatOptions {
    pub fn new(source: TimeSource, style: TokenStyle) -> Self {
        FormatOptions { source, style }
    }
}

/// Format a point in time as a Google Calendar date token.
///
/// The fields are read from the UTC or host-local view of `value` depending
/// on `options.source`, so a `Local` result depends on the host timezone
/// while its layout does not.
pub fn format_date<Tz: TimeZone>(value: &DateTime<Tz>, options: FormatOptions) -> String {
    match options.source {
        TimeSource::Utc => render_date_time(&value.with_timezone(&Utc), options.style),
        TimeSource::Local => render_date_time(&value.with_timezone(&Local), options.style),
    }
}

/// `YYYYMMDD` with the year as-is and month/day zero-padded.
pub(crate) fn render_date<D: Datelike>(value: &D) -> String {
    format!("{}{:02}{:02}", value.year(), value.month(), value.day())
}

/// `YYYYMMDD` with the year padded to four digits.
pub(crate) fn render_token_date<D: Datelike>(value: &D) -> String {
    format!("{:04}{:02}{:02}", value.year(), value.month(), value.day())
}

pub(crate) fn render_date_time<T: Datelike + Timelike>(value: &T, style: TokenStyle) -> String {
    append_time(render_date(value), value, style)
}

/// Extend a rendered date with the time part `style` asks for.
pub(crate) fn append_time<T: Timelike>(date: String, value: &T, style: TokenStyle) -> String {
    let time = || {
        format!(
            "{:02}{:02}{:02}",
            value.hour(),
            value.minute(),
            value.second()
        )
    };

    match style {
        TokenStyle::AllDay => date,
        TokenStyle::Floating => format!("{}T{}", date, time()),
        TokenStyle::Instant => format!("{}T{}Z", date, time()),
    }
}
