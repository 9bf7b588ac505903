//! Validated date tokens.

use std::fmt;

use crate::date_format::TokenStyle;
use crate::error::{GcalError, GcalResult};

/// Which end of the event a token belongs to. Used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenField {
    Start,
    End,
}

impl fmt::Display for TokenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenField::Start => f.write_str("start"),
            TokenField::End => f.write_str("end"),
        }
    }
}

/// A date token in one of the three layouts Google Calendar accepts.
///
/// The value is stored normalized (no `-` or `:` separators), so
/// `2020-03-21T01:00:00Z` and `20200321T010000Z` parse to the same token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateToken {
    value: String,
    style: TokenStyle,
}

impl DateToken {
    /// Normalize and validate `input`, reporting failures against `field`.
    ///
    /// Only the lexical shape is checked here; `EventTime::from_token`
    /// rejects impossible calendar values.
    pub fn parse(field: TokenField, input: &str) -> GcalResult<Self> {
        let value = normalize(input);

        let style = classify(&value).ok_or(GcalError::Malformed { field })?;

        if value != input {
            log::debug!("Normalized {} token '{}' to '{}'", field, input, value);
        }

        Ok(DateToken { value, style })
    }

    pub fn style(&self) -> TokenStyle {
        self.style
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for DateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Strip the `-` and `:` separators of the extended layout.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| !matches!(c, '-' | ':')).collect()
}

/// Match `^\d{8}(T\d{6}Z?)?$` and report which layout it is.
fn classify(value: &str) -> Option<TokenStyle> {
    let bytes = value.as_bytes();
    let digits = |range: &[u8]| range.iter().all(u8::is_ascii_digit);

    match bytes.len() {
        8 if digits(bytes) => Some(TokenStyle::AllDay),
        15 if digits(&bytes[..8]) && bytes[8] == b'T' && digits(&bytes[9..]) => {
            Some(TokenStyle::Floating)
        }
        16 if digits(&bytes[..8])
            && bytes[8] == b'T'
            && digits(&bytes[9..15])
            && bytes[15] == b'Z' =>
        {
            Some(TokenStyle::Instant)
        }
        _ => None,
    }
}
