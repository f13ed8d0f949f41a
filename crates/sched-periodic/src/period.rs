//! `Period`: one accrual period of a generated schedule.

use crate::frequency::Frequency;
use crate::roll_convention::RollConvention;
use sched_time::Date;

/// Position of a period within its schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodType {
    /// The only period of a single-period schedule.
    Term,
    /// The first of several periods.
    Initial,
    /// A period between the first and the last.
    Normal,
    /// The last of several periods.
    Final,
}

impl std::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PeriodType::Term => "Term",
            PeriodType::Initial => "Initial",
            PeriodType::Normal => "Normal",
            PeriodType::Final => "Final",
        };
        write!(f, "{s}")
    }
}

/// A single schedule period with both unadjusted and business-day adjusted
/// bounds.
///
/// The adjusted start is always strictly before the adjusted end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    period_type: PeriodType,
    unadjusted_start_date: Date,
    unadjusted_end_date: Date,
    start_date: Date,
    end_date: Date,
    frequency: Frequency,
    roll_convention: RollConvention,
}

impl Period {
    /// Create a period from its bounds.
    pub fn new(
        period_type: PeriodType,
        unadjusted_start_date: Date,
        unadjusted_end_date: Date,
        start_date: Date,
        end_date: Date,
        frequency: Frequency,
        roll_convention: RollConvention,
    ) -> Self {
        Self {
            period_type,
            unadjusted_start_date,
            unadjusted_end_date,
            start_date,
            end_date,
            frequency,
            roll_convention,
        }
    }

    /// Position of the period within the schedule.
    pub fn period_type(&self) -> PeriodType {
        self.period_type
    }

    /// Start date before business-day adjustment.
    pub fn unadjusted_start_date(&self) -> Date {
        self.unadjusted_start_date
    }

    /// End date before business-day adjustment.
    pub fn unadjusted_end_date(&self) -> Date {
        self.unadjusted_end_date
    }

    /// Adjusted start date.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Adjusted end date.
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Frequency of the schedule this period belongs to.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Effective roll convention of the schedule.
    pub fn roll_convention(&self) -> &RollConvention {
        &self.roll_convention
    }

    /// Number of calendar days between the adjusted start and end.
    pub fn length_in_days(&self) -> i32 {
        self.end_date - self.start_date
    }

    /// `true` if `date` lies in `[start_date, end_date)` (adjusted bounds).
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date < self.end_date
    }

    /// `true` if this is a full period of the schedule's frequency.
    ///
    /// Both unadjusted bounds must be roll dates one step apart.  A `Term`
    /// period is always regular.
    pub fn is_regular(&self) -> bool {
        if self.frequency.is_term() {
            return true;
        }
        let roll = &self.roll_convention;
        let (start, end) = (self.unadjusted_start_date, self.unadjusted_end_date);
        roll.matches(start)
            && roll.matches(end)
            && roll.next(start, self.frequency).is_ok_and(|d| d == end)
            && roll.previous(end, self.frequency).is_ok_and(|d| d == start)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} to {}", self.period_type, self.start_date, self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn monthly(start: Date, end: Date, adj_end: Date) -> Period {
        Period::new(
            PeriodType::Normal,
            start,
            end,
            start,
            adj_end,
            Frequency::P1M,
            RollConvention::DayOfMonth(17),
        )
    }

    #[test]
    fn length_and_contains() {
        let p = monthly(date(2014, 7, 17), date(2014, 8, 17), date(2014, 8, 18));
        assert_eq!(p.length_in_days(), 32);
        assert!(p.contains(date(2014, 7, 17)));
        assert!(p.contains(date(2014, 8, 17)));
        assert!(!p.contains(date(2014, 8, 18)));
        assert_eq!(p.to_string(), "Normal 2014-07-17 to 2014-08-18");
    }

    #[test]
    fn regularity() {
        assert!(monthly(date(2014, 7, 17), date(2014, 8, 17), date(2014, 8, 18)).is_regular());
        assert!(!monthly(date(2014, 6, 4), date(2014, 6, 17), date(2014, 6, 17)).is_regular());
        assert!(!monthly(date(2014, 6, 17), date(2014, 8, 17), date(2014, 8, 18)).is_regular());

        let term = Period::new(
            PeriodType::Term,
            date(2014, 6, 4),
            date(2014, 9, 17),
            date(2014, 6, 4),
            date(2014, 9, 17),
            Frequency::Term,
            RollConvention::None,
        );
        assert!(term.is_regular());
    }
}
