//! Mapping command-line arguments onto a `ScheduleDefinition`.

use crate::{CalendarArg, Cli, CliError, Result};
use sched_periodic::ScheduleDefinition;
use sched_time::{BespokeCalendar, BusinessDayAdjustment, BusinessDayConvention, Calendar, NullCalendar, WeekendsOnly};
use std::sync::Arc;
use tracing::debug;

/// Build the calendar selected on the command line.
///
/// Any `--holiday` turns the weekend calendar into a bespoke one; holidays
/// are rejected with the null calendar, which has no non-business days.
fn calendar(cli: &Cli) -> Result<Arc<dyn Calendar>> {
    match (cli.calendar, cli.holidays.is_empty()) {
        (CalendarArg::Null, true) => Ok(Arc::new(NullCalendar)),
        (CalendarArg::Null, false) => Err(CliError::InvalidArgument(
            "--holiday requires --calendar weekends".into(),
        )),
        (CalendarArg::Weekends, true) => Ok(Arc::new(WeekendsOnly)),
        (CalendarArg::Weekends, false) => Ok(Arc::new(BespokeCalendar::with_holidays(
            "Bespoke",
            cli.holidays.iter().copied(),
        ))),
    }
}

/// Translate parsed arguments into a validated definition.
pub fn build(cli: &Cli) -> Result<ScheduleDefinition> {
    let calendar = calendar(cli)?;
    let adjustment =
        |convention: BusinessDayConvention| BusinessDayAdjustment::from_shared(convention, calendar.clone());

    let mut builder = ScheduleDefinition::builder()
        .with_start_date(cli.start)
        .with_end_date(cli.end)
        .with_frequency(cli.frequency)
        .with_business_day_adjustment(adjustment(cli.convention));

    if let Some(convention) = cli.start_convention {
        builder = builder.with_start_date_business_day_adjustment(adjustment(convention));
    }
    if let Some(convention) = cli.end_convention {
        builder = builder.with_end_date_business_day_adjustment(adjustment(convention));
    }
    if let Some(stub) = cli.stub {
        builder = builder.with_stub_convention(stub);
    }
    match (&cli.roll, cli.eom) {
        (Some(_), true) => {
            return Err(CliError::InvalidArgument(
                "--roll and --eom cannot be combined".into(),
            ))
        }
        (Some(roll), false) => builder = builder.with_roll_convention(roll.clone()),
        (None, true) => builder = builder.with_roll_convention(sched_periodic::RollConvention::EndOfMonth),
        (None, false) => {}
    }
    if let Some(first) = cli.first_regular {
        builder = builder.with_first_regular_start_date(first);
    }
    if let Some(last) = cli.last_regular {
        builder = builder.with_last_regular_end_date(last);
    }

    let defn = builder.build()?;
    debug!(
        calendar = calendar.name(),
        roll = %defn.effective_roll_convention(),
        "built schedule definition"
    );
    Ok(defn)
}
