//! Property tests for schedule generation invariants.

use proptest::prelude::*;
use sched_periodic::{Frequency, ScheduleDefinition, StubConvention};
use sched_time::{
    BusinessDayAdjustment, BusinessDayConvention, Date, NullCalendar, WeekendsOnly,
};

fn date_strategy() -> impl Strategy<Value = Date> {
    (1990u16..2080, 1u8..13, 1u8..32)
        .prop_filter_map("valid date", |(y, m, d)| Date::from_ymd(y, m, d).ok())
}

fn frequency_strategy() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::P1M),
        Just(Frequency::P3M),
        Just(Frequency::P6M),
        Just(Frequency::P12M),
        Just(Frequency::P1W),
        Just(Frequency::P2W),
    ]
}

fn stub_strategy() -> impl Strategy<Value = StubConvention> {
    prop_oneof![
        Just(StubConvention::ShortInitial),
        Just(StubConvention::LongInitial),
        Just(StubConvention::ShortFinal),
        Just(StubConvention::LongFinal),
    ]
}

fn definition(
    start: Date,
    span_days: i32,
    frequency: Frequency,
    stub: StubConvention,
    eom: bool,
    bda: BusinessDayAdjustment,
) -> ScheduleDefinition {
    let end = start.add_days(span_days).unwrap();
    ScheduleDefinition::of_eom(start, end, frequency, bda, stub, eom).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn unadjusted_dates_are_ordered_and_bounded(
        start in date_strategy(),
        span_days in 1i32..3_000,
        frequency in frequency_strategy(),
        stub in stub_strategy(),
        eom in any::<bool>(),
    ) {
        let defn = definition(start, span_days, frequency, stub, eom, BusinessDayAdjustment::none());
        let dates = defn.create_unadjusted_dates().unwrap();
        prop_assert!(dates.len() >= 2);
        prop_assert_eq!(dates[0], defn.start_date());
        prop_assert_eq!(dates[dates.len() - 1], defn.end_date());
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]), "not increasing: {:?}", dates);
    }

    #[test]
    fn null_calendar_adjustment_is_identity(
        start in date_strategy(),
        span_days in 1i32..2_000,
        frequency in frequency_strategy(),
        stub in stub_strategy(),
    ) {
        let bda = BusinessDayAdjustment::new(BusinessDayConvention::Following, NullCalendar);
        let defn = definition(start, span_days, frequency, stub, false, bda);
        prop_assert_eq!(defn.create_adjusted_dates().unwrap(), defn.create_unadjusted_dates().unwrap());
    }

    #[test]
    fn schedule_matches_date_lists(
        start in date_strategy(),
        span_days in 1i32..2_000,
        frequency in frequency_strategy(),
        stub in stub_strategy(),
        eom in any::<bool>(),
    ) {
        let bda = BusinessDayAdjustment::new(BusinessDayConvention::ModifiedFollowing, WeekendsOnly);
        let defn = definition(start, span_days, frequency, stub, eom, bda);
        let unadjusted = defn.create_unadjusted_dates().unwrap();
        // Nearby dates may legitimately collapse onto one business day.
        if let Ok(adjusted) = defn.create_adjusted_dates() {
            prop_assert_eq!(adjusted.len(), unadjusted.len());
            prop_assert!(adjusted.windows(2).all(|w| w[0] < w[1]));

            let schedule = defn.create_schedule().unwrap();
            prop_assert_eq!(schedule.len(), unadjusted.len() - 1);
            prop_assert_eq!(schedule.unadjusted_dates(), unadjusted);
            prop_assert_eq!(schedule.adjusted_dates(), adjusted);
            prop_assert!(schedule.iter().all(|p| p.start_date() < p.end_date()));
            prop_assert!(schedule.iter().all(|p| p.roll_convention() == &defn.effective_roll_convention()));
        } else {
            prop_assert!(defn.create_schedule().is_err());
        }
    }
}
