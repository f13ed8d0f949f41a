//! IMM (International Monetary Market) and related exchange dates.
//!
//! Each date is a fixed weekday rule applied to a month: the third
//! Wednesday for IMM, plus the Australian, New Zealand and Sydney Futures
//! Exchange variants.  The IMM-style roll conventions are built on these.

use crate::date::Date;
use crate::weekday::Weekday;
use sched_core::errors::Result;

/// IMM date utilities.
pub struct IMM;

impl IMM {
    /// Third Wednesday of the given month.
    pub fn third_wednesday(year: u16, month: u8) -> Result<Date> {
        Date::nth_weekday(3, Weekday::Wednesday, year, month)
    }

    /// Australian IMM date: the Thursday before the second Friday.
    pub fn aud_date(year: u16, month: u8) -> Result<Date> {
        Self::sfe_date(year, month)?.add_days(-1)
    }

    /// New Zealand IMM date: the first Wednesday after the ninth.
    pub fn nzd_date(year: u16, month: u8) -> Result<Date> {
        Date::from_ymd(year, month, 10)?.next_or_same(Weekday::Wednesday)
    }

    /// Sydney Futures Exchange date: the second Friday.
    pub fn sfe_date(year: u16, month: u8) -> Result<Date> {
        Date::nth_weekday(2, Weekday::Friday, year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn third_wednesday_every_month() {
        assert_eq!(IMM::third_wednesday(2014, 9).unwrap(), date(2014, 9, 17));
        assert_eq!(IMM::third_wednesday(2014, 10).unwrap(), date(2014, 10, 15));
    }

    #[test]
    fn exchange_variants() {
        // September 2014: second Friday is the 12th.
        assert_eq!(IMM::sfe_date(2014, 9).unwrap(), date(2014, 9, 12));
        assert_eq!(IMM::aud_date(2014, 9).unwrap(), date(2014, 9, 11));
        // First Wednesday after 9 September 2014 is the 10th.
        assert_eq!(IMM::nzd_date(2014, 9).unwrap(), date(2014, 9, 10));
    }
}
