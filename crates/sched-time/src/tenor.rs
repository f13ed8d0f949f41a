//! `Tenor`: a time span expressed in a [`TimeUnit`].

use crate::time_unit::TimeUnit;
use sched_core::errors::{Error, Result};
use sched_core::parsers::parse_tenor_string;

/// A time span made up of an integer length and a [`TimeUnit`], such as
/// `3M` or `1Y`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tenor {
    /// Number of units.
    pub length: i32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Tenor {
    /// Create a new tenor.
    pub const fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// A tenor of `n` days.
    pub const fn of_days(n: i32) -> Self {
        Self::new(n, TimeUnit::Days)
    }

    /// A tenor of `n` weeks.
    pub const fn of_weeks(n: i32) -> Self {
        Self::new(n, TimeUnit::Weeks)
    }

    /// A tenor of `n` months.
    pub const fn of_months(n: i32) -> Self {
        Self::new(n, TimeUnit::Months)
    }

    /// A tenor of `n` years.
    pub const fn of_years(n: i32) -> Self {
        Self::new(n, TimeUnit::Years)
    }

    /// `true` if the length is zero.
    pub fn is_zero(&self) -> bool {
        self.length == 0
    }

    /// `true` if the length is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.length > 0
    }

    /// `true` for month and year tenors.
    pub fn is_month_based(&self) -> bool {
        matches!(self.unit, TimeUnit::Months | TimeUnit::Years)
    }

    /// `true` for week tenors.
    pub fn is_week_based(&self) -> bool {
        self.unit == TimeUnit::Weeks
    }

    /// Total months for month and year tenors, `None` otherwise.
    pub fn total_months(&self) -> Option<i32> {
        match self.unit {
            TimeUnit::Months => Some(self.length),
            TimeUnit::Years => self.length.checked_mul(12),
            TimeUnit::Days | TimeUnit::Weeks => None,
        }
    }

    /// Negate the tenor (reverse direction).
    pub fn negated(self) -> Self {
        Self {
            length: -self.length,
            unit: self.unit,
        }
    }

    /// Canonical form: whole years expressed in months become years
    /// (`12M` → `1Y`).  Day and week tenors are left alone so that a
    /// weekly tenor keeps its day-of-week meaning.
    pub fn normalized(self) -> Self {
        match self.unit {
            TimeUnit::Months if self.length != 0 && self.length % 12 == 0 => {
                Self::of_years(self.length / 12)
            }
            _ => self,
        }
    }
}

impl std::ops::Neg for Tenor {
    type Output = Self;
    fn neg(self) -> Self {
        self.negated()
    }
}

impl std::fmt::Display for Tenor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.length, self.unit.code())
    }
}

impl std::fmt::Debug for Tenor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tenor({self})")
    }
}

impl std::str::FromStr for Tenor {
    type Err = Error;

    /// Parse `"3M"`, `"1Y"`, `"2W"`, `"10D"` (an ISO `P` prefix is allowed).
    fn from_str(s: &str) -> Result<Self> {
        let (length, code) = parse_tenor_string(s).ok_or_else(|| Error::parse(s, "tenor"))?;
        let unit = TimeUnit::from_code(code).ok_or_else(|| Error::parse(s, "tenor"))?;
        Ok(Tenor::new(length, unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Tenor::of_months(3).to_string(), "3M");
        assert_eq!(Tenor::of_years(1).to_string(), "1Y");
        assert_eq!(Tenor::of_months(-6).to_string(), "-6M");
    }

    #[test]
    fn parse() {
        assert_eq!("3M".parse::<Tenor>().unwrap(), Tenor::of_months(3));
        assert_eq!("p1w".parse::<Tenor>().unwrap(), Tenor::of_weeks(1));
        assert!("3Q".parse::<Tenor>().is_err());
    }

    #[test]
    fn normalized_and_months() {
        assert_eq!(Tenor::of_months(24).normalized(), Tenor::of_years(2));
        assert_eq!(Tenor::of_months(3).normalized(), Tenor::of_months(3));
        assert_eq!(Tenor::of_weeks(2).normalized(), Tenor::of_weeks(2));
        assert_eq!(Tenor::of_years(2).total_months(), Some(24));
        assert_eq!(Tenor::of_days(2).total_months(), None);
        assert!(Tenor::of_years(1).is_month_based());
        assert!(!Tenor::of_days(7).is_week_based());
    }
}
