//! # sched-time
//!
//! Date, tenor, calendar and business-day-adjustment types used by the
//! schedule generator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Bespoke calendar with user-supplied holidays.
pub mod bespoke_calendar;

/// Business-day adjustment: a convention bound to a calendar.
pub mod business_day_adjustment;

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and the built-in weekend calendars.
pub mod calendar;

/// `Date` type.
pub mod date;

/// IMM and related exchange date helpers.
pub mod imm;

/// `Tenor`: a time span in a `TimeUnit`.
pub mod tenor;

/// `TimeUnit`: days, weeks, months, years.
pub mod time_unit;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bespoke_calendar::BespokeCalendar;
pub use business_day_adjustment::BusinessDayAdjustment;
pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, NullCalendar, WeekendsOnly};
pub use date::Date;
pub use imm::IMM;
pub use tenor::Tenor;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
