//! Google Calendar "add event" URL construction.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::error::{GcalError, GcalResult};
use crate::event_time::EventTime;
use crate::token::{DateToken, TokenField};

/// Base of every generated link. The query string is appended after `?`.
pub const GOOGLE_CALENDAR_EVENT_URL: &str = "https://calendar.google.com/calendar/event";

/// Fields of an event link. Every field is optional and empty strings
/// count as absent.
///
/// `start` and `end` accept any of these layouts, with or without `-`/`:`
/// separators:
///
/// - `20200316T010000Z` - UTC
/// - `20200316T010000` - time local to the viewer
/// - `20200316` - all-day event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventUrlArgs {
    pub start: Option<String>,
    pub end: Option<String>,
    /// Event title, sent as the `text` parameter
    pub title: Option<String>,
    pub location: Option<String>,
    pub details: Option<String>,
}

impl EventUrlArgs {
    pub fn to_url(&self) -> GcalResult<String> {
        google_calendar_event_url(self)
    }

    /// Fill in `end` as `start + duration`, in the same layout as `start`.
    ///
    /// Leaves the args untouched when `end` is already set or `start` is
    /// missing.
    pub fn with_duration(self, duration: Duration) -> GcalResult<Self> {
        self.derive_end(|start| start.checked_add(duration))
    }

    /// Fill in `end` one day (all-day) or one hour (timed) after `start`.
    pub fn with_default_end(self) -> GcalResult<Self> {
        self.derive_end(EventTime::default_end)
    }

    fn derive_end<F>(mut self, shift: F) -> GcalResult<Self>
    where
        F: FnOnce(&EventTime) -> GcalResult<EventTime>,
    {
        if present(&self.end).is_some() {
            return Ok(self);
        }
        let Some(start) = present(&self.start) else {
            return Ok(self);
        };

        let start = EventTime::from_token(&DateToken::parse(TokenField::Start, start)?)?;
        self.end = Some(shift(&start)?.to_token());

        Ok(self)
    }
}

/// Non-empty value of an optional field.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Generate a Google Calendar event URL.
///
/// Returns the complete link or the first validation error; nothing is
/// emitted for absent or empty fields.
pub fn google_calendar_event_url(args: &EventUrlArgs) -> GcalResult<String> {
    let dates = match (present(&args.start), present(&args.end)) {
        (None, None) => None,
        (Some(_), None) => return Err(GcalError::MissingEnd),
        (None, Some(_)) => return Err(GcalError::MissingStart),
        (Some(start), Some(end)) => {
            let start = DateToken::parse(TokenField::Start, start)?;
            let end = DateToken::parse(TokenField::End, end)?;

            if start.style() != end.style() {
                return Err(GcalError::FormatMismatch);
            }

            Some(format!("{}/{}", start, end))
        }
    };

    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("action", "TEMPLATE");

    if let Some(ref dates) = dates {
        query.append_pair("dates", dates);
    }

    let optional = [
        ("text", &args.title),
        ("location", &args.location),
        ("details", &args.details),
    ];
    for (key, value) in optional {
        if let Some(value) = present(value) {
            query.append_pair(key, value);
        }
    }

    let url = format!("{}?{}", GOOGLE_CALENDAR_EVENT_URL, query.finish());
    log::debug!("Built event URL: {}", url);

    Ok(url)
}
