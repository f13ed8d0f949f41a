//! Bespoke calendar: weekends plus a user-supplied holiday list.

use crate::calendar::Calendar;
use crate::date::Date;
use std::collections::BTreeSet;

/// A calendar whose holidays are supplied at run time, on top of
/// Saturday/Sunday weekends.
#[derive(Debug, Clone)]
pub struct BespokeCalendar {
    name: String,
    holidays: BTreeSet<Date>,
}

impl BespokeCalendar {
    /// Empty holiday list; only weekends are closed.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeSet::new(),
        }
    }

    /// Create a calendar from an iterator of holidays.
    pub fn with_holidays(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Mark `date` as closed. Adding a weekend date has no effect.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date);
    }

    /// Reopen `date` if it was added as a holiday.
    pub fn remove_holiday(&mut self, date: Date) {
        self.holidays.remove(&date);
    }

    /// The explicitly added holidays in ascending order.
    pub fn holidays(&self) -> impl Iterator<Item = Date> + '_ {
        self.holidays.iter().copied()
    }
}

impl Calendar for BespokeCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.holidays.contains(&date)
    }

    fn added_holidays(&self) -> Vec<Date> {
        self.holidays().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BusinessDayConvention;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn without_holidays_only_weekends_close() {
        let bank = BespokeCalendar::new("Bank");
        assert_eq!(bank.name(), "Bank");
        // 2014-08-16 is a Saturday.
        assert!(bank.is_holiday(date(2014, 8, 16)));
        assert!(bank.is_business_day(date(2014, 8, 15)));
        assert!(bank.is_business_day(date(2014, 8, 18)));
    }

    #[test]
    fn holidays_can_be_toggled() {
        let mut bank = BespokeCalendar::new("Bank");
        let christmas = date(2014, 12, 25);
        bank.add_holiday(christmas);
        bank.add_holiday(christmas);
        assert_eq!(bank.holidays().collect::<Vec<_>>(), vec![christmas]);
        assert!(bank.is_holiday(christmas));
        bank.remove_holiday(christmas);
        assert!(bank.is_business_day(christmas));
        assert!(bank.holidays().next().is_none());
    }

    #[test]
    fn holidays_extend_weekend_adjustment() {
        // Monday 2014-08-18 is a holiday, so Sunday the 17th rolls to Tuesday.
        let cal = BespokeCalendar::with_holidays("Bank", [date(2014, 8, 18)]);
        assert_eq!(
            cal.adjust(date(2014, 8, 17), BusinessDayConvention::Following).unwrap(),
            date(2014, 8, 19)
        );
    }
}
