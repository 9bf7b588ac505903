use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use gcal_link_core::{FormatOptions, format_date};

pub fn run(datetime: Option<&str>, options: FormatOptions) -> Result<()> {
    let value = match datetime {
        Some(s) => parse_datetime(s)?,
        None => Utc::now().fixed_offset(),
    };

    log::debug!(
        "Formatting {} with source={} style={}",
        value.to_rfc3339(),
        options.source,
        options.style
    );

    println!("{}", format_date(&value, options));

    Ok(())
}

fn parse_datetime(input: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(input).with_context(|| {
        format!(
            "Could not parse date/time: \"{}\". Expected RFC 3339, e.g. 2024-03-21T14:30:45Z",
            input
        )
    })
}
