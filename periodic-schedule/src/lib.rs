//! # periodic-schedule
//!
//! Periodic schedule generation for financial instruments: accrual and
//! payment periods driven by a frequency, a roll convention, a stub policy
//! and business-day adjustment.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying `sched-*` crates. Application code should depend on this
//! crate rather than the individual crates.
//!
//! ## Quick start
//!
//! ```rust
//! use periodic_schedule::periodic::{Frequency, ScheduleDefinition, StubConvention};
//! use periodic_schedule::time::{BusinessDayAdjustment, BusinessDayConvention, Date, WeekendsOnly};
//!
//! let defn = ScheduleDefinition::builder()
//!     .with_start_date(Date::from_ymd(2014, 6, 4)?)
//!     .with_end_date(Date::from_ymd(2014, 9, 17)?)
//!     .with_frequency(Frequency::P1M)
//!     .with_business_day_adjustment(BusinessDayAdjustment::new(
//!         BusinessDayConvention::ModifiedFollowing,
//!         WeekendsOnly,
//!     ))
//!     .with_stub_convention(StubConvention::ShortInitial)
//!     .build()?;
//!
//! let dates: Vec<String> = defn
//!     .create_unadjusted_dates()?
//!     .iter()
//!     .map(|d| d.to_string())
//!     .collect();
//! assert_eq!(dates, ["2014-06-04", "2014-06-17", "2014-07-17", "2014-08-17", "2014-09-17"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, `Result` alias and precondition macros.
pub use sched_core as core;

/// Dates, tenors, calendars and business-day adjustment.
pub use sched_time as time;

/// Schedule definitions, conventions and generation.
pub use sched_periodic as periodic;

/// Commonly used items in one import.
pub mod prelude {
    pub use sched_periodic::{
        DefinitionError, Frequency, GenerationError, GenerationErrorKind, Period, PeriodType,
        RollConvention, RollRule, Schedule, ScheduleDefinition, StubConvention,
    };
    pub use sched_time::{
        BespokeCalendar, BusinessDayAdjustment, BusinessDayConvention, Calendar, Date,
        NullCalendar, Tenor, TimeUnit, Weekday, WeekendsOnly,
    };
}
