//! Rendering of generated schedules.

use sched_periodic::Schedule;
use sched_time::Date;
use std::fmt::Write;

/// Render one date per line.
pub fn dates(dates: &[Date]) -> String {
    dates.iter().map(|d| format!("{d}\n")).collect()
}

/// Render the periods as an aligned text table.
pub fn table(schedule: &Schedule) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<8}  {:<10}  {:<10}  {:<10}  {:<10}  {:>5}",
        "#", "type", "unadj", "unadj end", "start", "end", "days"
    );
    for (i, p) in schedule.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<8}  {}  {}  {}  {}  {:>5}",
            i + 1,
            p.period_type().to_string(),
            p.unadjusted_start_date(),
            p.unadjusted_end_date(),
            p.start_date(),
            p.end_date(),
            p.length_in_days()
        );
    }
    out
}

/// Render the periods as CSV with a header row.
pub fn csv(schedule: &Schedule) -> String {
    let mut out = String::from("index,type,unadjusted_start,unadjusted_end,start,end,days\n");
    for (i, p) in schedule.iter().enumerate() {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{}",
            i + 1,
            p.period_type(),
            p.unadjusted_start_date(),
            p.unadjusted_end_date(),
            p.start_date(),
            p.end_date(),
            p.length_in_days()
        );
    }
    out
}
