//! Calendar values behind date tokens.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date_format::{TokenStyle, append_time, render_token_date};
use crate::error::{GcalError, GcalResult};
use crate::token::DateToken;

/// Years a four-digit token can carry.
const TOKEN_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// The start or end of an event, in the granularity its token carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTime {
    /// All-day event date
    Date(NaiveDate),
    /// Wall-clock time in whatever timezone the viewer is in
    DateTimeFloating(NaiveDateTime),
    /// Absolute instant
    DateTimeUtc(DateTime<Utc>),
}

impl EventTime {
    /// Parse the calendar value of a token.
    ///
    /// Fails with `InvalidDate` for tokens that are well-formed but name a
    /// date or time that doesn't exist, e.g. `20201340`.
    pub fn from_token(token: &DateToken) -> GcalResult<Self> {
        let s = token.as_str();

        let parsed = match token.style() {
            TokenStyle::AllDay => NaiveDate::parse_from_str(s, "%Y%m%d").map(EventTime::Date),
            TokenStyle::Floating => {
                NaiveDateTime::parse_from_str(s, "%Y%m%dT%H%M%S").map(EventTime::DateTimeFloating)
            }
            TokenStyle::Instant => NaiveDateTime::parse_from_str(s, "%Y%m%dT%H%M%SZ")
                .map(|dt| EventTime::DateTimeUtc(dt.and_utc())),
        };

        parsed.map_err(|e| GcalError::InvalidDate(format!("'{}': {}", s, e)))
    }

    /// Render back to the token layout matching this value's granularity.
    pub fn to_token(&self) -> String {
        match self {
            EventTime::Date(d) => render_token_date(d),
            EventTime::DateTimeFloating(dt) => {
                append_time(render_token_date(dt), dt, TokenStyle::Floating)
            }
            EventTime::DateTimeUtc(dt) => append_time(render_token_date(dt), dt, TokenStyle::Instant),
        }
    }

    fn year(&self) -> i32 {
        match self {
            EventTime::Date(d) => d.year(),
            EventTime::DateTimeFloating(dt) => dt.year(),
            EventTime::DateTimeUtc(dt) => dt.year(),
        }
    }

    /// Shift by `duration`. All-day values move by whole days only.
    ///
    /// Fails with `InvalidDate` when the result no longer fits a token.
    pub fn checked_add(&self, duration: Duration) -> GcalResult<Self> {
        let shifted = match self {
            EventTime::Date(d) => d
                .checked_add_signed(Duration::days(duration.num_days()))
                .map(EventTime::Date),
            EventTime::DateTimeFloating(dt) => {
                dt.checked_add_signed(duration).map(EventTime::DateTimeFloating)
            }
            EventTime::DateTimeUtc(dt) => dt.checked_add_signed(duration).map(EventTime::DateTimeUtc),
        };

        match shifted {
            Some(value) if TOKEN_YEARS.contains(&value.year()) => Ok(value),
            _ => Err(GcalError::InvalidDate(format!(
                "'{}' shifted out of range",
                self.to_token()
            ))),
        }
    }

    /// Default end time: +1 hour for timed events, +1 day for all-day events.
    pub fn default_end(&self) -> GcalResult<Self> {
        match self {
            EventTime::Date(_) => self.checked_add(Duration::days(1)),
            _ => self.checked_add(Duration::hours(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenField;
    use chrono::TimeZone;

    fn event_time(input: &str) -> EventTime {
        EventTime::from_token(&DateToken::parse(TokenField::Start, input).unwrap()).unwrap()
    }

    #[test]
    fn from_token_all_day() {
        assert_eq!(
            event_time("20200221"),
            EventTime::Date(NaiveDate::from_ymd_opt(2020, 2, 21).unwrap())
        );
    }

    #[test]
    fn from_token_floating() {
        assert_eq!(
            event_time("20200321T010000"),
            EventTime::DateTimeFloating(
                NaiveDate::from_ymd_opt(2020, 3, 21)
                    .unwrap()
                    .and_hms_opt(1, 0, 0)
                    .unwrap()
            )
        );
    }

    #[test]
    fn from_token_utc() {
        assert_eq!(
            event_time("2020-03-21T01:00:00Z"),
            EventTime::DateTimeUtc(Utc.with_ymd_and_hms(2020, 3, 21, 1, 0, 0).unwrap())
        );
    }

    #[test]
    fn from_token_rejects_impossible_date() {
        let token = DateToken::parse(TokenField::Start, "20201340").unwrap();
        let err = EventTime::from_token(&token).unwrap_err();
        assert!(matches!(err, GcalError::InvalidDate(_)));

        let token = DateToken::parse(TokenField::Start, "20200221T250000").unwrap();
        assert!(EventTime::from_token(&token).is_err());
    }

    #[test]
    fn to_token_keeps_layout() {
        for input in ["20200221", "20200321T010000", "20200321T010000Z"] {
            assert_eq!(event_time(input).to_token(), input);
        }
    }

    #[test]
    fn default_end_allday_adds_one_day() {
        assert_eq!(event_time("20200228").default_end().unwrap(), event_time("20200229"));
    }

    #[test]
    fn default_end_timed_adds_one_hour() {
        assert_eq!(
            event_time("20201231T233000").default_end().unwrap(),
            event_time("20210101T003000")
        );
        assert_eq!(
            event_time("20200321T010000Z").default_end().unwrap(),
            event_time("20200321T020000Z")
        );
    }

    #[test]
    fn checked_add_truncates_partial_days_for_dates() {
        let start = event_time("20200221");
        assert_eq!(
            start.checked_add(Duration::hours(36)).unwrap(),
            event_time("20200222")
        );
    }

    #[test]
    fn to_token_pads_short_years() {
        let start = event_time("00010101T000000");
        let end = start.default_end().unwrap();
        assert_eq!(end.to_token(), "00010101T010000");
        assert_eq!(event_time("09990615").to_token(), "09990615");
    }

    #[test]
    fn checked_add_rejects_five_digit_years() {
        let err = event_time("99991231").checked_add(Duration::days(1)).unwrap_err();
        assert!(matches!(err, GcalError::InvalidDate(_)));

        let err = event_time("99991231T233000Z").default_end().unwrap_err();
        assert!(matches!(err, GcalError::InvalidDate(_)));
    }

    #[test]
    fn checked_add_rejects_negative_years() {
        let err = event_time("00000101")
            .checked_add(Duration::days(-1))
            .unwrap_err();
        assert!(matches!(err, GcalError::InvalidDate(_)));
    }

    #[test]
    fn checked_add_minutes() {
        let start = event_time("20200321T150000");
        assert_eq!(
            start.checked_add(Duration::minutes(45)).unwrap(),
            event_time("20200321T154500")
        );
    }
}
