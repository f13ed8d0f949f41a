//! `Schedule`: the ordered periods produced from a
//! [`ScheduleDefinition`](crate::ScheduleDefinition).

use crate::frequency::Frequency;
use crate::period::{Period, PeriodType};
use crate::roll_convention::RollConvention;
use sched_time::Date;

/// A non-empty, chronologically ordered sequence of periods.
///
/// Consecutive periods share their boundary dates: the end of period `i` is
/// the start of period `i + 1`, both unadjusted and adjusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    periods: Vec<Period>,
}

impl Schedule {
    /// Assemble periods from matching unadjusted and adjusted date lists.
    ///
    /// Both lists hold at least two dates and have equal length.
    pub(crate) fn from_dates(
        unadjusted: &[Date],
        adjusted: &[Date],
        frequency: Frequency,
        roll_convention: &RollConvention,
    ) -> Self {
        let count = unadjusted.len().saturating_sub(1);
        let periods = (0..count)
            .map(|i| {
                let period_type = match i {
                    _ if count == 1 => PeriodType::Term,
                    0 => PeriodType::Initial,
                    _ if i == count - 1 => PeriodType::Final,
                    _ => PeriodType::Normal,
                };
                Period::new(
                    period_type,
                    unadjusted[i],
                    unadjusted[i + 1],
                    adjusted[i],
                    adjusted[i + 1],
                    frequency,
                    roll_convention.clone(),
                )
            })
            .collect();
        Self { periods }
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Always `false`: a generated schedule has at least one period.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// The `i`-th period.
    pub fn period(&self, i: usize) -> Option<&Period> {
        self.periods.get(i)
    }

    /// All periods.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Iterate over the periods in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Period> {
        self.periods.iter()
    }

    /// The first period.
    pub fn first_period(&self) -> &Period {
        &self.periods[0]
    }

    /// The last period.
    pub fn last_period(&self) -> &Period {
        &self.periods[self.periods.len() - 1]
    }

    /// `true` if the schedule consists of one period.
    pub fn is_single_period(&self) -> bool {
        self.periods.len() == 1
    }

    /// Frequency the schedule was generated with.
    pub fn frequency(&self) -> Frequency {
        self.first_period().frequency()
    }

    /// Effective roll convention the schedule was generated with.
    pub fn roll_convention(&self) -> &RollConvention {
        self.first_period().roll_convention()
    }

    /// Adjusted start of the first period.
    pub fn start_date(&self) -> Date {
        self.first_period().start_date()
    }

    /// Adjusted end of the last period.
    pub fn end_date(&self) -> Date {
        self.last_period().end_date()
    }

    /// Unadjusted start of the first period.
    pub fn unadjusted_start_date(&self) -> Date {
        self.first_period().unadjusted_start_date()
    }

    /// Unadjusted end of the last period.
    pub fn unadjusted_end_date(&self) -> Date {
        self.last_period().unadjusted_end_date()
    }

    /// All unadjusted boundary dates, `len() + 1` of them.
    pub fn unadjusted_dates(&self) -> Vec<Date> {
        std::iter::once(self.unadjusted_start_date())
            .chain(self.periods.iter().map(Period::unadjusted_end_date))
            .collect()
    }

    /// All adjusted boundary dates, `len() + 1` of them.
    pub fn adjusted_dates(&self) -> Vec<Date> {
        std::iter::once(self.start_date())
            .chain(self.periods.iter().map(Period::end_date))
            .collect()
    }

    /// The first period if it is an irregular initial stub.
    pub fn initial_stub(&self) -> Option<&Period> {
        let first = self.first_period();
        (!self.is_single_period() && !first.is_regular()).then_some(first)
    }

    /// The last period if it is an irregular final stub.
    pub fn final_stub(&self) -> Option<&Period> {
        let last = self.last_period();
        (!self.is_single_period() && !last.is_regular()).then_some(last)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Period;
    type IntoIter = std::slice::Iter<'a, Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn classifies_periods() {
        let unadjusted = [date(2014, 6, 4), date(2014, 6, 17), date(2014, 7, 17), date(2014, 8, 17), date(2014, 9, 17)];
        let adjusted = [date(2014, 6, 4), date(2014, 6, 17), date(2014, 7, 17), date(2014, 8, 18), date(2014, 9, 17)];
        let s = Schedule::from_dates(&unadjusted, &adjusted, Frequency::P1M, &RollConvention::DayOfMonth(17));

        assert_eq!(s.len(), 4);
        let types: Vec<_> = s.iter().map(Period::period_type).collect();
        assert_eq!(
            types,
            [PeriodType::Initial, PeriodType::Normal, PeriodType::Normal, PeriodType::Final]
        );
        assert_eq!(s.unadjusted_dates(), unadjusted);
        assert_eq!(s.adjusted_dates(), adjusted);
        assert_eq!(s.start_date(), date(2014, 6, 4));
        assert_eq!(s.end_date(), date(2014, 9, 17));
        assert_eq!(s.initial_stub().map(Period::start_date), Some(date(2014, 6, 4)));
        assert!(s.final_stub().is_none());
        assert!(s.period(4).is_none());
        assert_eq!(s.roll_convention(), &RollConvention::DayOfMonth(17));
    }

    #[test]
    fn single_period_is_term() {
        let dates = [date(2014, 6, 4), date(2014, 9, 17)];
        let s = Schedule::from_dates(&dates, &dates, Frequency::Term, &RollConvention::None);
        assert!(s.is_single_period());
        assert_eq!(s.first_period().period_type(), PeriodType::Term);
        assert!(s.initial_stub().is_none());
        assert!(s.final_stub().is_none());
        assert_eq!((&s).into_iter().count(), 1);
    }
}
