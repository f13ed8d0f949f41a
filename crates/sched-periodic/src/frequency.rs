//! `Frequency`: the periodic step between regular schedule dates.

use sched_core::errors::{Error, Result};
use sched_core::ensure;
use sched_time::{Tenor, TimeUnit};

/// How often regular periods recur.
///
/// A periodic frequency wraps a strictly positive [`Tenor`]; `Term` means the
/// schedule is a single period from start to end with no rolling at all.
///
/// Build periodic values with [`Frequency::of`] and friends, which check the
/// sign.  Equality and hashing use the normalized tenor, so
/// `Periodic(12M) == P12M`.
#[derive(Debug, Clone, Copy)]
pub enum Frequency {
    /// A regular step such as one month or two weeks.
    Periodic(Tenor),
    /// No periodic rolling: one period covering the whole schedule.
    Term,
}

impl Frequency {
    /// Daily.
    pub const P1D: Frequency = Frequency::Periodic(Tenor::of_days(1));
    /// Weekly.
    pub const P1W: Frequency = Frequency::Periodic(Tenor::of_weeks(1));
    /// Every two weeks.
    pub const P2W: Frequency = Frequency::Periodic(Tenor::of_weeks(2));
    /// Every four weeks.
    pub const P4W: Frequency = Frequency::Periodic(Tenor::of_weeks(4));
    /// Every 13 weeks.
    pub const P13W: Frequency = Frequency::Periodic(Tenor::of_weeks(13));
    /// Every 26 weeks.
    pub const P26W: Frequency = Frequency::Periodic(Tenor::of_weeks(26));
    /// Monthly.
    pub const P1M: Frequency = Frequency::Periodic(Tenor::of_months(1));
    /// Every two months.
    pub const P2M: Frequency = Frequency::Periodic(Tenor::of_months(2));
    /// Quarterly.
    pub const P3M: Frequency = Frequency::Periodic(Tenor::of_months(3));
    /// Every four months.
    pub const P4M: Frequency = Frequency::Periodic(Tenor::of_months(4));
    /// Semi-annual.
    pub const P6M: Frequency = Frequency::Periodic(Tenor::of_months(6));
    /// Annual.
    pub const P12M: Frequency = Frequency::Periodic(Tenor::of_years(1));

    /// A periodic frequency from a tenor.
    ///
    /// The tenor must be strictly positive; whole years given in months are
    /// normalized (`12M` becomes `1Y`).
    pub fn of(tenor: Tenor) -> Result<Self> {
        ensure!(tenor.is_positive(), "frequency must be positive, got {tenor}");
        Ok(Frequency::Periodic(tenor.normalized()))
    }

    /// Every `n` days.
    pub fn of_days(n: i32) -> Result<Self> {
        Self::of(Tenor::of_days(n))
    }

    /// Every `n` weeks.
    pub fn of_weeks(n: i32) -> Result<Self> {
        Self::of(Tenor::of_weeks(n))
    }

    /// Every `n` months.
    pub fn of_months(n: i32) -> Result<Self> {
        Self::of(Tenor::of_months(n))
    }

    /// Every `n` years.
    pub fn of_years(n: i32) -> Result<Self> {
        Self::of(Tenor::of_years(n))
    }

    /// The periodic step, `None` for `Term`.
    pub fn tenor(&self) -> Option<Tenor> {
        match self {
            Frequency::Periodic(tenor) => Some(*tenor),
            Frequency::Term => None,
        }
    }

    /// `true` for the `Term` sentinel.
    pub fn is_term(&self) -> bool {
        matches!(self, Frequency::Term)
    }

    /// `true` if the step is a whole number of months or years.
    pub fn is_month_based(&self) -> bool {
        self.tenor().is_some_and(|t| t.is_month_based())
    }

    /// `true` if the step is a whole number of weeks.
    pub fn is_week_based(&self) -> bool {
        self.tenor().is_some_and(|t| t.is_week_based())
    }

    /// Number of events per year, if it is a whole number.
    ///
    /// A year is taken as 12 months, 52 weeks or 364 days; `Term` has zero
    /// events per year.
    pub fn events_per_year(&self) -> Option<u32> {
        let tenor = match self {
            Frequency::Term => return Some(0),
            Frequency::Periodic(tenor) => *tenor,
        };
        let per_year = match tenor.unit {
            TimeUnit::Days => 364,
            TimeUnit::Weeks => 52,
            TimeUnit::Months => 12,
            TimeUnit::Years => 1,
        };
        let length = u32::try_from(tenor.length).ok().filter(|l| *l > 0)?;
        (per_year % length == 0).then_some(per_year / length)
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Periodic(tenor) => write!(f, "P{tenor}"),
            Frequency::Term => write!(f, "Term"),
        }
    }
}

impl PartialEq for Frequency {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Frequency::Periodic(a), Frequency::Periodic(b)) => a.normalized() == b.normalized(),
            (Frequency::Term, Frequency::Term) => true,
            _ => false,
        }
    }
}

impl Eq for Frequency {}

impl std::hash::Hash for Frequency {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.tenor().map(Tenor::normalized).hash(state);
    }
}

impl std::str::FromStr for Frequency {
    type Err = Error;

    /// Parse `"1M"`, `"P3M"`, `"2W"`, or `"Term"` / `"T"`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("term") || trimmed.eq_ignore_ascii_case("t") {
            return Ok(Frequency::Term);
        }
        let tenor: Tenor = trimmed.parse().map_err(|_| Error::parse(s, "frequency"))?;
        Frequency::of(tenor)
    }
}
