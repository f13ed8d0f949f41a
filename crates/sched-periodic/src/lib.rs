//! # sched-periodic
//!
//! Periodic schedule generation.  A [`ScheduleDefinition`] describes a span
//! of time, a [`Frequency`], optional [`RollConvention`] and
//! [`StubConvention`], and business-day adjustments; from it the generator
//! produces unadjusted dates, adjusted dates, or a full [`Schedule`] of
//! classified [`Period`]s.
//!
//! ```
//! use sched_periodic::{Frequency, ScheduleDefinition, StubConvention};
//! use sched_time::{BusinessDayAdjustment, BusinessDayConvention, Date, WeekendsOnly};
//!
//! let defn = ScheduleDefinition::of_eom(
//!     Date::from_ymd(2014, 6, 4)?,
//!     Date::from_ymd(2014, 9, 17)?,
//!     Frequency::P1M,
//!     BusinessDayAdjustment::new(BusinessDayConvention::ModifiedFollowing, WeekendsOnly),
//!     StubConvention::ShortInitial,
//!     false,
//! )?;
//! let schedule = defn.create_schedule()?;
//! assert_eq!(schedule.len(), 4);
//! assert_eq!(schedule.period(2).map(|p| p.end_date().to_string()), Some("2014-08-18".into()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Schedule definition and its builder.
pub mod definition;

/// Definition and generation errors.
pub mod error;

/// Periodic frequencies.
pub mod frequency;

mod generator;

/// Schedule periods.
pub mod period;

/// Roll conventions and the custom roll rule trait.
pub mod roll_convention;

/// Generated schedules.
pub mod schedule;

/// Stub conventions.
pub mod stub_convention;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use definition::{ScheduleDefinition, ScheduleDefinitionBuilder};
pub use error::{DefinitionError, GenerationError, GenerationErrorKind};
pub use frequency::Frequency;
pub use period::{Period, PeriodType};
pub use roll_convention::{RollConvention, RollRule};
pub use schedule::Schedule;
pub use stub_convention::StubConvention;
