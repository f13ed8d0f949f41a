//! Roll conventions: how regular schedule dates are placed within a month
//! or week.
//!
//! A roll convention normalizes a date onto its "roll day" (the 17th, the
//! last day of the month, the third Wednesday, …) and steps from one roll
//! date to the next by a [`Frequency`].  The standard conventions are
//! variants of [`RollConvention`]; anything else plugs in through the
//! [`RollRule`] trait and [`RollConvention::Custom`].

use crate::frequency::Frequency;
use sched_core::errors::{Error, Result};
use sched_time::{Date, Weekday, IMM};
use std::sync::Arc;

/// A user-supplied roll rule.
///
/// Only [`normalize`](RollRule::normalize) is required; stepping defaults to
/// "add the frequency, then normalize", falling back to a one-month step when
/// normalization would not move the date.
///
/// Implementations are expected to be pure.  A rule that keeps mutable state
/// and returns inconsistent answers is reported by the generator as duplicate
/// or non-converging dates.
pub trait RollRule: std::fmt::Debug + Send + Sync {
    /// Unique name; two custom conventions with the same name compare equal.
    fn name(&self) -> &str;

    /// Move `date` onto the roll day of its month or week.
    fn normalize(&self, date: Date) -> Result<Date>;

    /// `true` if `date` already is a roll date.
    fn matches(&self, date: Date) -> bool {
        self.normalize(date).is_ok_and(|d| d == date)
    }

    /// The roll date one step of `frequency` after `date`.
    fn next(&self, date: Date, frequency: Frequency) -> Result<Date> {
        roll_forward(|d| self.normalize(d), date, frequency)
    }

    /// The roll date one step of `frequency` before `date`.
    fn previous(&self, date: Date, frequency: Frequency) -> Result<Date> {
        roll_backward(|d| self.normalize(d), date, frequency)
    }
}

fn step(frequency: Frequency) -> Result<sched_time::Tenor> {
    frequency
        .tenor()
        .ok_or_else(|| Error::InvalidArgument("cannot roll by the Term frequency".into()))
}

fn roll_forward(
    normalize: impl Fn(Date) -> Result<Date>,
    date: Date,
    frequency: Frequency,
) -> Result<Date> {
    let calculated = normalize(date.plus(step(frequency)?)?)?;
    if calculated > date {
        Ok(calculated)
    } else {
        normalize(date.plus_months(1)?)
    }
}

fn roll_backward(
    normalize: impl Fn(Date) -> Result<Date>,
    date: Date,
    frequency: Frequency,
) -> Result<Date> {
    let calculated = normalize(date.minus(step(frequency)?)?)?;
    if calculated < date {
        Ok(calculated)
    } else {
        normalize(date.plus_months(-1)?)
    }
}

/// Convention used to place regular schedule dates.
#[derive(Debug, Clone)]
pub enum RollConvention {
    /// No normalization: dates are stepped by the frequency as they fall.
    None,
    /// Roll on the last day of the month.
    EndOfMonth,
    /// Roll on a fixed day of the month, clamped to the month length.
    ///
    /// Prefer [`RollConvention::day_of_month`], which checks the range.  Days
    /// from 31 up behave like, and compare equal to, `EndOfMonth`; day 0
    /// behaves like day 1.
    DayOfMonth(u8),
    /// Roll on a fixed day of the week.
    DayOfWeek(Weekday),
    /// Roll on the third Wednesday of the month.
    Imm,
    /// Roll on the Thursday before the second Friday of the month.
    ImmAud,
    /// Roll on the first Wednesday after the ninth day of the month.
    ImmNzd,
    /// Roll on the second Friday of the month.
    Sfe,
    /// A user-supplied rule.
    Custom(Arc<dyn RollRule>),
}

impl RollConvention {
    /// Roll on day `day` of the month; day 31 is end-of-month.
    pub fn day_of_month(day: u8) -> Result<Self> {
        match day {
            1..=30 => Ok(RollConvention::DayOfMonth(day)),
            31 => Ok(RollConvention::EndOfMonth),
            _ => Err(Error::InvalidArgument(format!(
                "day of month must be in [1, 31], got {day}"
            ))),
        }
    }

    /// Wrap a custom rule.
    pub fn custom(rule: impl RollRule + 'static) -> Self {
        RollConvention::Custom(Arc::new(rule))
    }

    /// Derive the convention implied by an anchor date.
    ///
    /// Month-based frequencies roll on the anchor's day of month, or at
    /// month end when `prefer_end_of_month` is set and the anchor is the last
    /// day of its month.  Week-based frequencies roll on the anchor's
    /// weekday.  Anything else derives `None`.
    pub fn derive(anchor: Date, frequency: Frequency, prefer_end_of_month: bool) -> Self {
        if frequency.is_month_based() {
            let day = anchor.day_of_month();
            if day == 31 || (prefer_end_of_month && anchor.is_end_of_month()) {
                RollConvention::EndOfMonth
            } else {
                RollConvention::DayOfMonth(day)
            }
        } else if frequency.is_week_based() {
            RollConvention::DayOfWeek(anchor.weekday())
        } else {
            RollConvention::None
        }
    }

    /// The convention's name, e.g. `Day17`, `EOM`, `IMM`, `DayWed`.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// `true` for [`RollConvention::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, RollConvention::None)
    }

    /// Move `date` onto the roll day of its month or week.
    pub fn normalize(&self, date: Date) -> Result<Date> {
        let (y, m, _) = date.ymd();
        match self {
            RollConvention::None => Ok(date),
            RollConvention::EndOfMonth => Ok(date.end_of_month()),
            RollConvention::DayOfMonth(day) => Ok(date.with_day_of_month_clamped(*day)),
            RollConvention::DayOfWeek(weekday) => date.next_or_same(*weekday),
            RollConvention::Imm => IMM::third_wednesday(y, m),
            RollConvention::ImmAud => IMM::aud_date(y, m),
            RollConvention::ImmNzd => IMM::nzd_date(y, m),
            RollConvention::Sfe => IMM::sfe_date(y, m),
            RollConvention::Custom(rule) => rule.normalize(date),
        }
    }

    /// `true` if `date` already is a roll date.
    pub fn matches(&self, date: Date) -> bool {
        match self {
            RollConvention::Custom(rule) => rule.matches(date),
            _ => self.normalize(date).is_ok_and(|d| d == date),
        }
    }

    /// The roll date one step of `frequency` after `date`.
    ///
    /// The result is `normalize(date + frequency)` when that lies after
    /// `date`; otherwise the step is retried with one month.
    pub fn next(&self, date: Date, frequency: Frequency) -> Result<Date> {
        match self {
            RollConvention::Custom(rule) => rule.next(date, frequency),
            _ => roll_forward(|d| self.normalize(d), date, frequency),
        }
    }

    /// The roll date one step of `frequency` before `date`.
    pub fn previous(&self, date: Date, frequency: Frequency) -> Result<Date> {
        match self {
            RollConvention::Custom(rule) => rule.previous(date, frequency),
            _ => roll_backward(|d| self.normalize(d), date, frequency),
        }
    }

    /// Day of month this convention rolls on, with end-of-month as 31.
    fn month_day(&self) -> Option<u8> {
        match self {
            RollConvention::EndOfMonth => Some(31),
            RollConvention::DayOfMonth(day) => Some((*day).clamp(1, 31)),
            _ => None,
        }
    }
}

impl PartialEq for RollConvention {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.month_day(), other.month_day()) {
            return a == b;
        }
        match (self, other) {
            (RollConvention::DayOfWeek(a), RollConvention::DayOfWeek(b)) => a == b,
            (RollConvention::Custom(a), RollConvention::Custom(b)) => a.name() == b.name(),
            (RollConvention::Custom(_), _) | (_, RollConvention::Custom(_)) => false,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Eq for RollConvention {}

impl std::fmt::Display for RollConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RollConvention::None => write!(f, "None"),
            RollConvention::EndOfMonth => write!(f, "EOM"),
            RollConvention::DayOfMonth(day) => match (*day).clamp(1, 31) {
                31 => write!(f, "EOM"),
                day => write!(f, "Day{day}"),
            },
            RollConvention::DayOfWeek(weekday) => {
                let short = weekday.short_name();
                write!(f, "Day{}{}", &short[..1], short[1..].to_ascii_lowercase())
            }
            RollConvention::Imm => write!(f, "IMM"),
            RollConvention::ImmAud => write!(f, "IMMAUD"),
            RollConvention::ImmNzd => write!(f, "IMMNZD"),
            RollConvention::Sfe => write!(f, "SFE"),
            RollConvention::Custom(rule) => write!(f, "{}", rule.name()),
        }
    }
}

impl std::str::FromStr for RollConvention {
    type Err = Error;

    /// Parse a standard convention name: `None`, `EOM`, `Day1`–`Day31`,
    /// `DayMon`–`DaySun`, `IMM`, `IMMAUD`, `IMMNZD`, `SFE` (any case).
    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        match upper.as_str() {
            "NONE" => return Ok(RollConvention::None),
            "EOM" | "ENDOFMONTH" => return Ok(RollConvention::EndOfMonth),
            "IMM" => return Ok(RollConvention::Imm),
            "IMMAUD" => return Ok(RollConvention::ImmAud),
            "IMMNZD" => return Ok(RollConvention::ImmNzd),
            "SFE" => return Ok(RollConvention::Sfe),
            _ => {}
        }
        let rest = upper
            .strip_prefix("DAY")
            .ok_or_else(|| Error::parse(s, "roll convention"))?;
        if let Ok(day) = rest.parse::<u8>() {
            return RollConvention::day_of_month(day).map_err(|_| Error::parse(s, "roll convention"));
        }
        rest.parse::<Weekday>()
            .map(RollConvention::DayOfWeek)
            .map_err(|_| Error::parse(s, "roll convention"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn day_of_month_clamps() {
        let day30 = RollConvention::day_of_month(30).unwrap();
        assert_eq!(day30.normalize(date(2014, 2, 12)).unwrap(), date(2014, 2, 28));
        assert_eq!(day30.normalize(date(2014, 5, 1)).unwrap(), date(2014, 5, 30));
        assert_eq!(RollConvention::day_of_month(31).unwrap(), RollConvention::EndOfMonth);
        assert!(RollConvention::day_of_month(0).is_err());
        assert!(RollConvention::day_of_month(32).is_err());
    }

    #[test]
    fn next_and_previous() {
        let day30 = RollConvention::DayOfMonth(30);
        assert_eq!(day30.next(date(2013, 11, 30), Frequency::P3M).unwrap(), date(2014, 2, 28));
        assert_eq!(day30.next(date(2014, 2, 28), Frequency::P3M).unwrap(), date(2014, 5, 30));
        assert_eq!(day30.previous(date(2014, 2, 28), Frequency::P3M).unwrap(), date(2013, 11, 30));

        let eom = RollConvention::EndOfMonth;
        assert_eq!(eom.next(date(2014, 2, 28), Frequency::P3M).unwrap(), date(2014, 5, 31));
        assert_eq!(eom.previous(date(2014, 5, 31), Frequency::P3M).unwrap(), date(2014, 2, 28));
    }

    #[test]
    fn imm_family() {
        assert_eq!(RollConvention::Imm.normalize(date(2014, 10, 1)).unwrap(), date(2014, 10, 15));
        assert!(RollConvention::Imm.matches(date(2014, 9, 17)));
        assert_eq!(RollConvention::Imm.next(date(2014, 9, 17), Frequency::P1M).unwrap(), date(2014, 10, 15));
        // A two-day step normalizes back onto the same IMM date, so one month is used.
        let two_days = Frequency::of_days(2).unwrap();
        assert_eq!(RollConvention::Imm.next(date(2014, 9, 17), two_days).unwrap(), date(2014, 10, 15));
        assert_eq!(RollConvention::Imm.previous(date(2014, 10, 15), two_days).unwrap(), date(2014, 9, 17));
        assert_eq!(RollConvention::Sfe.normalize(date(2014, 9, 30)).unwrap(), date(2014, 9, 12));
        assert_eq!(RollConvention::ImmAud.normalize(date(2014, 9, 30)).unwrap(), date(2014, 9, 11));
        assert_eq!(RollConvention::ImmNzd.normalize(date(2014, 9, 30)).unwrap(), date(2014, 9, 10));
    }

    #[test]
    fn day_of_week() {
        let wed = RollConvention::DayOfWeek(Weekday::Wednesday);
        // 2014-09-18 is a Thursday.
        assert_eq!(wed.normalize(date(2014, 9, 18)).unwrap(), date(2014, 9, 24));
        assert_eq!(wed.next(date(2014, 9, 17), Frequency::P1W).unwrap(), date(2014, 9, 24));
        assert_eq!(wed.previous(date(2014, 9, 17), Frequency::P2W).unwrap(), date(2014, 9, 3));
    }

    #[test]
    fn none_steps_plainly() {
        let none = RollConvention::None;
        assert!(none.matches(date(2014, 9, 18)));
        assert_eq!(none.next(date(2015, 5, 27), Frequency::of_days(2).unwrap()).unwrap(), date(2015, 5, 29));
        assert!(none.next(date(2015, 5, 27), Frequency::Term).is_err());
    }

    #[test]
    fn derive_from_anchor() {
        assert_eq!(RollConvention::derive(date(2014, 9, 17), Frequency::P1M, false), RollConvention::DayOfMonth(17));
        assert_eq!(RollConvention::derive(date(2014, 11, 30), Frequency::P3M, true), RollConvention::EndOfMonth);
        assert_eq!(RollConvention::derive(date(2014, 11, 30), Frequency::P3M, false), RollConvention::DayOfMonth(30));
        assert_eq!(RollConvention::derive(date(2014, 5, 31), Frequency::P3M, false), RollConvention::EndOfMonth);
        assert_eq!(RollConvention::derive(date(2014, 5, 30), Frequency::P3M, true), RollConvention::DayOfMonth(30));
        assert_eq!(
            RollConvention::derive(date(2014, 9, 17), Frequency::P2W, false),
            RollConvention::DayOfWeek(Weekday::Wednesday)
        );
        assert_eq!(RollConvention::derive(date(2014, 9, 17), Frequency::P1D, true), RollConvention::None);
        assert_eq!(RollConvention::derive(date(2014, 9, 17), Frequency::Term, true), RollConvention::None);
    }

    #[test]
    fn names_and_parsing() {
        assert_eq!(RollConvention::DayOfMonth(17).to_string(), "Day17");
        assert_eq!(RollConvention::DayOfWeek(Weekday::Thursday).to_string(), "DayThu");
        assert_eq!(RollConvention::EndOfMonth.name(), "EOM");
        assert_eq!("day4".parse::<RollConvention>().unwrap(), RollConvention::DayOfMonth(4));
        assert_eq!("Day31".parse::<RollConvention>().unwrap(), RollConvention::EndOfMonth);
        assert_eq!("DayWed".parse::<RollConvention>().unwrap(), RollConvention::DayOfWeek(Weekday::Wednesday));
        assert_eq!("imm".parse::<RollConvention>().unwrap(), RollConvention::Imm);
        assert!("Day0".parse::<RollConvention>().is_err());
        assert!("Friday".parse::<RollConvention>().is_err());
    }

    #[test]
    fn unchecked_day_of_month_compares_by_behaviour() {
        assert_eq!(RollConvention::DayOfMonth(31), RollConvention::EndOfMonth);
        assert_eq!(RollConvention::DayOfMonth(40), RollConvention::EndOfMonth);
        assert_eq!(RollConvention::DayOfMonth(0), RollConvention::DayOfMonth(1));
        assert_ne!(RollConvention::DayOfMonth(30), RollConvention::EndOfMonth);
        assert_ne!(RollConvention::DayOfMonth(3), RollConvention::Imm);
        let day31 = RollConvention::DayOfMonth(31);
        assert_eq!(day31.to_string(), "EOM");
        assert_eq!(day31.to_string().parse::<RollConvention>().unwrap(), day31);
        assert_eq!(
            day31.next(date(2014, 2, 28), Frequency::P3M).unwrap(),
            RollConvention::EndOfMonth.next(date(2014, 2, 28), Frequency::P3M).unwrap()
        );
    }

    #[derive(Debug)]
    struct FirstOfMonth;

    impl RollRule for FirstOfMonth {
        fn name(&self) -> &str {
            "FirstOfMonth"
        }

        fn normalize(&self, date: Date) -> Result<Date> {
            Ok(date.with_day_of_month_clamped(1))
        }
    }

    #[test]
    fn custom_rule_uses_defaults() {
        let custom = RollConvention::custom(FirstOfMonth);
        assert_eq!(custom.to_string(), "FirstOfMonth");
        assert!(custom.matches(date(2014, 9, 1)));
        assert!(!custom.matches(date(2014, 9, 2)));
        assert_eq!(custom.next(date(2014, 9, 1), Frequency::P1M).unwrap(), date(2014, 10, 1));
        assert_eq!(custom.previous(date(2014, 9, 1), Frequency::P3M).unwrap(), date(2014, 6, 1));
        assert_eq!(custom, RollConvention::custom(FirstOfMonth));
        assert_ne!(custom, RollConvention::DayOfMonth(1));
    }
}
