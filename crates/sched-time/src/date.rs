//! `Date` type.
//!
//! Dates are stored as a serial day number where serial 1 is
//! January 1, 1900. The supported range is 1900-01-01 to 2199-12-31; every
//! constructor and arithmetic operation checks it and reports
//! [`Error::Date`] instead of wrapping.

use crate::tenor::Tenor;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use sched_core::errors::{Error, Result};
use sched_core::parsers::parse_iso_date;

/// Days from 1970-01-01 back to 1899-12-31 (serial 0).
const EPOCH_OFFSET: i32 = 25_568;

const MIN_YEAR: u16 = 1900;
const MAX_YEAR: u16 = 2199;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (1 = 1900-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(days_from_civil(year, month, day) + EPOCH_OFFSET))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        civil_from_days(self.0 - EPOCH_OFFSET)
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1900-01-01 (serial 1) was a Monday.
        match Weekday::from_ordinal(((self.0 - 1).rem_euclid(7) + 1) as u8) {
            Some(w) => w,
            None => unreachable!("rem_euclid(7) + 1 is always in 1..=7"),
        }
    }

    /// Number of days in this date's month.
    pub fn length_of_month(&self) -> u8 {
        let (y, m, _) = self.ymd();
        days_in_month(y, m)
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(days_from_civil(y, m, days_in_month(y, m)) + EPOCH_OFFSET)
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self.day_of_month() == self.length_of_month()
    }

    /// Move to `day` within the same month, clamping to the month length.
    ///
    /// `with_day_of_month_clamped(30)` on a February date yields the 28th
    /// (or 29th in a leap year).
    pub fn with_day_of_month_clamped(self, day: u8) -> Self {
        let (y, m, _) = self.ymd();
        let d = day.clamp(1, days_in_month(y, m));
        Date(days_from_civil(y, m, d) + EPOCH_OFFSET)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("adding {n} days overflows")))
            .and_then(Date::from_serial)
    }

    /// Advance by `n` units.  Month and year steps clamp the day to the
    /// target month's length (January 31 + 1 month = February 28/29).
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => n
                .checked_mul(7)
                .ok_or_else(|| Error::Date(format!("adding {n} weeks overflows")))
                .and_then(|days| self.add_days(days)),
            TimeUnit::Months => self.plus_months(n),
            TimeUnit::Years => n
                .checked_mul(12)
                .ok_or_else(|| Error::Date(format!("adding {n} years overflows")))
                .and_then(|months| self.plus_months(months)),
        }
    }

    /// Advance by a [`Tenor`], which may be negative.
    pub fn plus(self, tenor: Tenor) -> Result<Self> {
        self.advance(tenor.length, tenor.unit)
    }

    /// Move back by a [`Tenor`].
    pub fn minus(self, tenor: Tenor) -> Result<Self> {
        self.plus(-tenor)
    }

    /// Advance by `n` months, clamping the day-of-month.
    pub fn plus_months(self, n: i32) -> Result<Self> {
        let (y, m, d) = self.ymd();
        let total = (i32::from(y) * 12 + i32::from(m) - 1)
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("{self} plus {n} months overflows")))?;
        let new_y = total.div_euclid(12);
        let new_m = (total.rem_euclid(12) + 1) as u8;
        let new_y = u16::try_from(new_y)
            .ok()
            .filter(|yr| (MIN_YEAR..=MAX_YEAR).contains(yr))
            .ok_or_else(|| Error::Date(format!("{self} plus {n} months is out of range")))?;
        Date::from_ymd(new_y, new_m, d.min(days_in_month(new_y, new_m)))
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(3, Weekday::Wednesday, 2024, 3)` returns the
    /// third Wednesday of March 2024 (2024-03-20).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month, or the month is outside the supported range.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if !(1..=5).contains(&n) {
            return Err(Error::Date(format!("nth_weekday: n must be in [1, 5], got {n}")));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let day = 1 + first.weekday().days_until(weekday) + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }

    /// Return the first date on or after `self` falling on `weekday`.
    pub fn next_or_same(self, weekday: Weekday) -> Result<Self> {
        self.add_days(i32::from(self.weekday().days_until(weekday)))
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display / parsing ────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse an ISO-8601 `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s).ok_or_else(|| Error::parse(s, "ISO date (YYYY-MM-DD)"))?;
        Date::from_ymd(y, m, d)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(year: u16, month: u8, day: u8) -> i32 {
    let m = i32::from(month);
    let y = i32::from(year) - i32::from(m <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i32::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i32) -> (u16, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y as u16, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
