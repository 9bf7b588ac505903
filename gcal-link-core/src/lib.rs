//! Core types for gcal-link.
//!
//! This crate builds Google Calendar "add event" links from loose event
//! fields and formats date/time values into the tokens those links carry:
//! - `event_url` validates the fields and serializes the query string
//! - `date_format` renders a point in time as an all-day, floating or UTC token
//! - `token` and `event_time` give the tokens a typed shape for arithmetic

pub mod config;
pub mod date_format;
pub mod error;
pub mod event_time;
pub mod event_url;
pub mod token;

pub use config::GcalConfig;
pub use date_format::{FormatOptions, TimeSource, TokenStyle, format_date};
pub use error::{GcalError, GcalResult};
pub use event_time::EventTime;
pub use event_url::{EventUrlArgs, GOOGLE_CALENDAR_EVENT_URL, google_calendar_event_url};
pub use token::{DateToken, TokenField};
