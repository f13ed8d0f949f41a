//! `schedgen`: generate a periodic schedule from the command line.
//!
//! ```text
//! schedgen --start 2014-06-04 --end 2014-09-17 --frequency 1M \
//!          --stub short-initial --convention MF --calendar weekends
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`,
//! `debug` with `--verbose`).

use clap::{Parser, ValueEnum};
use sched_periodic::{Frequency, RollConvention, StubConvention};
use sched_time::{BusinessDayConvention, Date};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod definition;
mod error;
mod output;

pub use error::{CliError, Result};

/// Calendar used for business-day adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CalendarArg {
    /// Every day is a business day.
    Null,
    /// Saturdays and Sundays are holidays.
    Weekends,
}

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Aligned text columns.
    Table,
    /// Comma-separated values with a header row.
    Csv,
}

/// Periodic schedule generator
#[derive(Debug, Parser)]
#[command(name = "schedgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    start: Date,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    end: Date,

    /// Frequency, e.g. 1M, 3M, 2W, 1Y or Term
    #[arg(short, long, default_value = "3M")]
    frequency: Frequency,

    /// Stub convention (none, short-initial, long-initial, short-final, long-final, both)
    #[arg(short, long)]
    stub: Option<StubConvention>,

    /// Roll convention, e.g. Day17, EOM, IMM, DayWed
    #[arg(short, long)]
    roll: Option<RollConvention>,

    /// Prefer rolling at month end when the anchor date is a month end
    #[arg(long)]
    eom: bool,

    /// Business-day convention for regular dates (F, MF, P, MP, NEAREST, NONE)
    #[arg(short, long, default_value = "MF")]
    convention: BusinessDayConvention,

    /// Business-day convention for the start date
    #[arg(long)]
    start_convention: Option<BusinessDayConvention>,

    /// Business-day convention for the end date
    #[arg(long)]
    end_convention: Option<BusinessDayConvention>,

    /// Holiday calendar
    #[arg(long, value_enum, default_value = "weekends")]
    calendar: CalendarArg,

    /// Additional holiday (repeatable)
    #[arg(long = "holiday")]
    holidays: Vec<Date>,

    /// First regular start date (explicit initial stub)
    #[arg(long)]
    first_regular: Option<Date>,

    /// Last regular end date (explicit final stub)
    #[arg(long)]
    last_regular: Option<Date>,

    /// Print only the unadjusted dates
    #[arg(long)]
    unadjusted: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: FormatArg,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Generate and render the schedule described by `cli`.
fn run(cli: &Cli) -> Result<String> {
    let defn = definition::build(cli)?;
    if cli.unadjusted {
        return Ok(output::dates(&defn.create_unadjusted_dates()?));
    }
    let schedule = defn.create_schedule()?;
    info!(periods = schedule.len(), "schedule generated");
    Ok(match cli.format {
        FormatArg::Table => output::table(&schedule),
        FormatArg::Csv => output::csv(&schedule),
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match run(&cli) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
