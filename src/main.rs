mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gcal_link_core::{EventUrlArgs, GcalConfig, TimeSource, TokenStyle};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(name = "gcal-link")]
#[command(about = "Build Google Calendar \"add event\" links and date tokens")]
struct Cli {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an "add event" link
    Url {
        /// Start (e.g. "20250320T150000Z", "2025-03-20T15:00:00" or "2025-03-20")
        #[arg(short, long)]
        start: Option<String>,

        /// End, in the same layout as start
        #[arg(short, long)]
        end: Option<String>,

        /// Derive the end from start (e.g. "90m", "2h", "3days")
        #[arg(short, long, conflicts_with = "end")]
        duration: Option<String>,

        /// Event title
        #[arg(short, long)]
        title: Option<String>,

        /// Event location
        #[arg(short, long)]
        location: Option<String>,

        /// Event details
        #[arg(long)]
        details: Option<String>,

        /// Open the link in the default browser
        #[arg(long)]
        open: bool,
    },
    /// Format a date/time as a date token
    Format {
        /// RFC 3339 date/time (defaults to now)
        datetime: Option<String>,

        /// Clock to read: local or utc
        #[arg(long)]
        source: Option<TimeSource>,

        /// Token layout: all-day, floating or instant
        #[arg(long)]
        style: Option<TokenStyle>,
    },
    /// Show the config file location and current values
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Url {
            start,
            end,
            duration,
            title,
            location,
            details,
            open,
        } => {
            let args = EventUrlArgs {
                start,
                end,
                title,
                location,
                details,
            };
            let open = open || GcalConfig::load_or_default().open_browser;
            commands::url::run(args, duration.as_deref(), open)
        }
        Commands::Format {
            datetime,
            source,
            style,
        } => {
            let mut options = GcalConfig::load()?.format_options();
            if let Some(source) = source {
                options.source = source;
            }
            if let Some(style) = style {
                options.style = style;
            }
            commands::format::run(datetime.as_deref(), options)
        }
        Commands::Config => commands::config::run(&GcalConfig::load()?),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .ok();
}
