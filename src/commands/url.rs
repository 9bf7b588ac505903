use anyhow::{Context, Result};
use chrono::Duration;
use gcal_link_core::{EventUrlArgs, google_calendar_event_url};
use owo_colors::OwoColorize;

pub fn run(args: EventUrlArgs, duration: Option<&str>, open: bool) -> Result<()> {
    let args = match duration {
        Some(d) => args.with_duration(parse_duration(d)?)?,
        None => args,
    };

    let url = google_calendar_event_url(&args)?;
    println!("{}", url);

    if open {
        open::that(&url).context("Could not open browser")?;
        eprintln!("{}", "  Opened in browser".green());
    }

    Ok(())
}

/// Parse a human duration like "90m" or "2h 30m".
fn parse_duration(input: &str) -> Result<Duration> {
    let std_dur = humantime::parse_duration(input)
        .with_context(|| format!("Could not parse duration: \"{}\"", input))?;
    Duration::from_std(std_dur).context("Duration too large")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration_minutes() {
        assert_eq!(parse_duration("90m").unwrap(), Duration::minutes(90));
    }

    #[test]
    fn parse_duration_compound() {
        assert_eq!(
            parse_duration("1h 30m").unwrap(),
            Duration::hours(1) + Duration::minutes(30)
        );
    }

    #[test]
    fn parse_duration_days() {
        assert_eq!(parse_duration("3days").unwrap(), Duration::days(3));
    }

    #[test]
    fn parse_duration_invalid() {
        let err = parse_duration("a while").unwrap_err();
        assert!(err.to_string().contains("a while"));
    }
}
