//! `BusinessDayAdjustment`: a business-day convention bound to a calendar.

use crate::business_day_convention::BusinessDayConvention;
use crate::calendar::{Calendar, NullCalendar};
use crate::date::Date;
use sched_core::errors::Result;
use std::sync::Arc;

/// Rule mapping any date onto a business day of a calendar.
///
/// The calendar is shared behind an `Arc`, so adjustments are cheap to clone
/// and can be stored in long-lived definitions.  Two adjustments compare
/// equal when their conventions match and their calendars share a name and
/// the same [added holidays](Calendar::added_holidays).
#[derive(Debug, Clone)]
pub struct BusinessDayAdjustment {
    convention: BusinessDayConvention,
    calendar: Arc<dyn Calendar>,
}

impl BusinessDayAdjustment {
    /// Bind `convention` to `calendar`.
    pub fn new(convention: BusinessDayConvention, calendar: impl Calendar + 'static) -> Self {
        Self {
            convention,
            calendar: Arc::new(calendar),
        }
    }

    /// Bind `convention` to an already shared calendar.
    pub fn from_shared(convention: BusinessDayConvention, calendar: Arc<dyn Calendar>) -> Self {
        Self {
            convention,
            calendar,
        }
    }

    /// The adjustment that leaves every date untouched.
    pub fn none() -> Self {
        Self::new(BusinessDayConvention::Unadjusted, NullCalendar)
    }

    /// The business-day convention.
    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }

    /// The calendar used to decide business days.
    pub fn calendar(&self) -> &dyn Calendar {
        self.calendar.as_ref()
    }

    /// `true` if this adjustment can never move a date.
    pub fn is_none(&self) -> bool {
        self.convention == BusinessDayConvention::Unadjusted
    }

    /// Adjust `date` to a business day.
    pub fn adjust(&self, date: Date) -> Result<Date> {
        self.calendar.adjust(date, self.convention)
    }
}

impl Default for BusinessDayAdjustment {
    fn default() -> Self {
        Self::none()
    }
}

impl PartialEq for BusinessDayAdjustment {
    fn eq(&self, other: &Self) -> bool {
        self.convention == other.convention
            && self.calendar.name() == other.calendar.name()
            && self.calendar.added_holidays() == other.calendar.added_holidays()
    }
}

impl Eq for BusinessDayAdjustment {}

impl std::fmt::Display for BusinessDayAdjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            return write!(f, "None");
        }
        write!(f, "{} using calendar {}", self.convention, self.calendar.name())
    }
}
