//! `Calendar` trait and the built-in weekend calendars.
//!
//! Implementors decide which dates are open for business; the provided
//! `adjust` moves a date onto an open day under a [`BusinessDayConvention`].
//! Only weekend-based calendars and [`BespokeCalendar`](crate::BespokeCalendar)
//! ship here.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use sched_core::errors::Result;

/// A financial calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Weekends Only"`).
    fn name(&self) -> &str;

    /// `true` when the calendar is open on `date`.
    fn is_business_day(&self, date: Date) -> bool;

    /// Negation of [`is_business_day`](Self::is_business_day).
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Saturday and Sunday unless overridden.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Holidays added on top of the calendar's built-in rules, ascending.
    fn added_holidays(&self) -> Vec<Date> {
        Vec::new()
    }

    /// First business day on or after `date`.
    fn following(&self, mut date: Date) -> Result<Date> {
        while self.is_holiday(date) {
            date = date.add_days(1)?;
        }
        Ok(date)
    }

    /// Last business day on or before `date`.
    fn preceding(&self, mut date: Date) -> Result<Date> {
        while self.is_holiday(date) {
            date = date.add_days(-1)?;
        }
        Ok(date)
    }

    /// Move `date` onto a business day using `convention`.
    ///
    /// Fails only if the search for a business day runs past the supported
    /// date range.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => self.following(date),
            BusinessDayConvention::Preceding => self.preceding(date),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.following(date)?;
                if adjusted.month() != date.month() {
                    self.preceding(date)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.preceding(date)?;
                if adjusted.month() != date.month() {
                    self.following(date)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::Nearest => {
                if self.is_business_day(date) {
                    return Ok(date);
                }
                let fwd = self.following(date)?;
                let bwd = self.preceding(date)?;
                if fwd - date <= date - bwd {
                    Ok(fwd)
                } else {
                    Ok(bwd)
                }
            }
        }
    }
}

/// Open every day of the week, used when no adjustment is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }

    fn is_weekend(&self, _date: Date) -> bool {
        false
    }
}

/// Closed on Saturday and Sunday, open every other day.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn null_calendar_leaves_sunday_alone() {
        assert!(!NullCalendar.is_weekend(date(2014, 8, 17)));
        assert_eq!(
            NullCalendar.adjust(date(2014, 8, 17), BusinessDayConvention::Following).unwrap(),
            date(2014, 8, 17)
        );
    }

    #[test]
    fn weekends_only_closes_saturday_and_sunday() {
        let weekdays: Vec<bool> = (16..=18)
            .map(|d| WeekendsOnly.is_business_day(date(2014, 8, d)))
            .collect();
        assert_eq!(weekdays, [false, false, true]);
    }

    #[test]
    fn adjust_following_and_preceding() {
        let cal = WeekendsOnly;
        let saturday = date(2023, 9, 2);
        assert_eq!(
            cal.adjust(saturday, BusinessDayConvention::Following).unwrap(),
            date(2023, 9, 4)
        );
        assert_eq!(
            cal.adjust(saturday, BusinessDayConvention::Preceding).unwrap(),
            date(2023, 9, 1)
        );
    }

    #[test]
    fn modified_conventions_stay_in_month() {
        let cal = WeekendsOnly;
        // Saturday 2013-11-30: following is in December.
        assert_eq!(
            cal.adjust(date(2013, 11, 30), BusinessDayConvention::ModifiedFollowing)
                .unwrap(),
            date(2013, 11, 29)
        );
        // Sunday 2014-08-17 stays in August.
        assert_eq!(
            cal.adjust(date(2014, 8, 17), BusinessDayConvention::ModifiedFollowing)
                .unwrap(),
            date(2014, 8, 18)
        );
        // Saturday 2014-11-01: preceding is in October.
        assert_eq!(
            cal.adjust(date(2014, 11, 1), BusinessDayConvention::ModifiedPreceding)
                .unwrap(),
            date(2014, 11, 3)
        );
    }

    #[test]
    fn nearest_prefers_following_on_tie() {
        let cal = WeekendsOnly;
        // Saturday is nearer to Friday; Sunday is nearer to Monday.
        assert_eq!(
            cal.adjust(date(2014, 8, 16), BusinessDayConvention::Nearest).unwrap(),
            date(2014, 8, 15)
        );
        assert_eq!(
            cal.adjust(date(2014, 8, 17), BusinessDayConvention::Nearest).unwrap(),
            date(2014, 8, 18)
        );
    }

    #[test]
    fn adjust_past_range_is_an_error() {
        #[derive(Debug)]
        struct Closed;
        impl Calendar for Closed {
            fn name(&self) -> &str {
                "Closed"
            }
            fn is_business_day(&self, _date: Date) -> bool {
                false
            }
        }
        let d = date(2199, 12, 1);
        assert!(Closed.adjust(d, BusinessDayConvention::Following).is_err());
        assert_eq!(Closed.adjust(d, BusinessDayConvention::Unadjusted).unwrap(), d);
    }
}
