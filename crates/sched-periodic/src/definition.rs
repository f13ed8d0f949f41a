//! `ScheduleDefinition`: the inputs of periodic schedule generation.
//!
//! A definition is immutable once built.  Effective values (roll convention,
//! regular bounds, start/end adjustments) are computed from it on demand,
//! and the three `create_*` methods run the generator.

use crate::error::{DefinitionError, GenerationError};
use crate::frequency::Frequency;
use crate::generator;
use crate::roll_convention::RollConvention;
use crate::schedule::Schedule;
use crate::stub_convention::StubConvention;
use sched_time::{BusinessDayAdjustment, Date};

/// Definition of a periodic schedule.
///
/// `start_date` and `end_date` bound the whole schedule; the optional first
/// regular start and last regular end dates carve explicit stubs off either
/// end.  Dates are unadjusted; business-day adjustment happens only when
/// adjusted dates or a [`Schedule`] are requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDefinition {
    start_date: Date,
    end_date: Date,
    frequency: Frequency,
    business_day_adjustment: BusinessDayAdjustment,
    start_date_business_day_adjustment: Option<BusinessDayAdjustment>,
    end_date_business_day_adjustment: Option<BusinessDayAdjustment>,
    stub_convention: Option<StubConvention>,
    roll_convention: Option<RollConvention>,
    first_regular_start_date: Option<Date>,
    last_regular_end_date: Option<Date>,
}

impl ScheduleDefinition {
    /// Begin building a definition.
    pub fn builder() -> ScheduleDefinitionBuilder {
        ScheduleDefinitionBuilder::default()
    }

    /// Definition with an explicit roll convention.
    pub fn of(
        start_date: Date,
        end_date: Date,
        frequency: Frequency,
        business_day_adjustment: BusinessDayAdjustment,
        stub_convention: StubConvention,
        roll_convention: RollConvention,
    ) -> Result<Self, DefinitionError> {
        Self::builder()
            .with_start_date(start_date)
            .with_end_date(end_date)
            .with_frequency(frequency)
            .with_business_day_adjustment(business_day_adjustment)
            .with_stub_convention(stub_convention)
            .with_roll_convention(roll_convention)
            .build()
    }

    /// Definition whose roll convention is derived from its dates.
    ///
    /// With `end_of_month` set, the roll convention is `EndOfMonth`, which is
    /// honoured only if the roll anchor is itself a month end.
    pub fn of_eom(
        start_date: Date,
        end_date: Date,
        frequency: Frequency,
        business_day_adjustment: BusinessDayAdjustment,
        stub_convention: StubConvention,
        end_of_month: bool,
    ) -> Result<Self, DefinitionError> {
        let builder = Self::builder()
            .with_start_date(start_date)
            .with_end_date(end_date)
            .with_frequency(frequency)
            .with_business_day_adjustment(business_day_adjustment)
            .with_stub_convention(stub_convention);
        if end_of_month {
            builder.with_roll_convention(RollConvention::EndOfMonth).build()
        } else {
            builder.build()
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Start of the schedule, unadjusted.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// End of the schedule, unadjusted.
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// The periodic step.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Adjustment applied to every date not covered by a start/end override.
    pub fn business_day_adjustment(&self) -> &BusinessDayAdjustment {
        &self.business_day_adjustment
    }

    /// Explicit adjustment for the start date, if any.
    pub fn start_date_business_day_adjustment(&self) -> Option<&BusinessDayAdjustment> {
        self.start_date_business_day_adjustment.as_ref()
    }

    /// Explicit adjustment for the end date, if any.
    pub fn end_date_business_day_adjustment(&self) -> Option<&BusinessDayAdjustment> {
        self.end_date_business_day_adjustment.as_ref()
    }

    /// Explicit stub convention, if any.
    pub fn stub_convention(&self) -> Option<StubConvention> {
        self.stub_convention
    }

    /// Explicit roll convention, if any.
    pub fn roll_convention(&self) -> Option<&RollConvention> {
        self.roll_convention.as_ref()
    }

    /// Explicit first regular start date, if any.
    pub fn first_regular_start_date(&self) -> Option<Date> {
        self.first_regular_start_date
    }

    /// Explicit last regular end date, if any.
    pub fn last_regular_end_date(&self) -> Option<Date> {
        self.last_regular_end_date
    }

    // ── Effective values ──────────────────────────────────────────────────────

    /// The roll convention generation will use.
    ///
    /// `Term` never rolls.  An explicit convention is used as given, except
    /// that `None` counts as unset and `EndOfMonth` only expresses a
    /// preference: it applies when the roll anchor is a month end, or when
    /// the frequency gives nothing to derive from.  Otherwise the convention
    /// is derived from the anchor, which is the last regular end date for
    /// backward-rolling stub conventions and the first regular start date
    /// otherwise.
    pub fn effective_roll_convention(&self) -> RollConvention {
        if self.frequency.is_term() {
            return RollConvention::None;
        }
        match &self.roll_convention {
            None | Some(RollConvention::None) => self.derive_roll_convention(false),
            Some(RollConvention::EndOfMonth) => match self.derive_roll_convention(true) {
                RollConvention::None => RollConvention::EndOfMonth,
                derived => derived,
            },
            Some(explicit) => explicit.clone(),
        }
    }

    fn derive_roll_convention(&self, prefer_end_of_month: bool) -> RollConvention {
        let backwards = self
            .stub_convention
            .is_some_and(|stub| stub.is_calculate_backwards());
        let anchor = if backwards {
            self.effective_last_regular_end_date()
        } else {
            self.effective_first_regular_start_date()
        };
        RollConvention::derive(anchor, self.frequency, prefer_end_of_month)
    }

    /// First regular start date, defaulting to the start date.
    pub fn effective_first_regular_start_date(&self) -> Date {
        self.first_regular_start_date.unwrap_or(self.start_date)
    }

    /// Last regular end date, defaulting to the end date.
    pub fn effective_last_regular_end_date(&self) -> Date {
        self.last_regular_end_date.unwrap_or(self.end_date)
    }

    /// Adjustment for the start date, defaulting to the main adjustment.
    pub fn effective_start_date_business_day_adjustment(&self) -> &BusinessDayAdjustment {
        self.start_date_business_day_adjustment
            .as_ref()
            .unwrap_or(&self.business_day_adjustment)
    }

    /// Adjustment for the end date, defaulting to the main adjustment.
    pub fn effective_end_date_business_day_adjustment(&self) -> &BusinessDayAdjustment {
        self.end_date_business_day_adjustment
            .as_ref()
            .unwrap_or(&self.business_day_adjustment)
    }

    // ── Generation ────────────────────────────────────────────────────────────

    /// Generate the unadjusted schedule dates, start and end included.
    pub fn create_unadjusted_dates(&self) -> Result<Vec<Date>, GenerationError> {
        generator::unadjusted_dates(self)
    }

    /// Generate the business-day adjusted schedule dates.
    pub fn create_adjusted_dates(&self) -> Result<Vec<Date>, GenerationError> {
        let unadjusted = generator::unadjusted_dates(self)?;
        generator::adjusted_dates(self, &unadjusted)
    }

    /// Generate the full schedule of classified periods.
    pub fn create_schedule(&self) -> Result<Schedule, GenerationError> {
        let unadjusted = generator::unadjusted_dates(self)?;
        let adjusted = generator::adjusted_dates(self, &unadjusted)?;
        Ok(Schedule::from_dates(
            &unadjusted,
            &adjusted,
            self.frequency,
            &self.effective_roll_convention(),
        ))
    }
}

/// Builder for [`ScheduleDefinition`].
///
/// Start date, end date, frequency and business-day adjustment are required;
/// everything else is optional.
#[derive(Debug, Clone, Default)]
pub struct ScheduleDefinitionBuilder {
    start_date: Option<Date>,
    end_date: Option<Date>,
    frequency: Option<Frequency>,
    business_day_adjustment: Option<BusinessDayAdjustment>,
    start_date_business_day_adjustment: Option<BusinessDayAdjustment>,
    end_date_business_day_adjustment: Option<BusinessDayAdjustment>,
    stub_convention: Option<StubConvention>,
    roll_convention: Option<RollConvention>,
    first_regular_start_date: Option<Date>,
    last_regular_end_date: Option<Date>,
}

impl ScheduleDefinitionBuilder {
    /// Set the start date.
    pub fn with_start_date(mut self, d: Date) -> Self {
        self.start_date = Some(d);
        self
    }

    /// Set the end date.
    pub fn with_end_date(mut self, d: Date) -> Self {
        self.end_date = Some(d);
        self
    }

    /// Set the frequency.
    pub fn with_frequency(mut self, f: Frequency) -> Self {
        self.frequency = Some(f);
        self
    }

    /// Set the main business-day adjustment.
    pub fn with_business_day_adjustment(mut self, bda: BusinessDayAdjustment) -> Self {
        self.business_day_adjustment = Some(bda);
        self
    }

    /// Override the adjustment of the start date.
    pub fn with_start_date_business_day_adjustment(mut self, bda: BusinessDayAdjustment) -> Self {
        self.start_date_business_day_adjustment = Some(bda);
        self
    }

    /// Override the adjustment of the end date.
    pub fn with_end_date_business_day_adjustment(mut self, bda: BusinessDayAdjustment) -> Self {
        self.end_date_business_day_adjustment = Some(bda);
        self
    }

    /// Set the stub convention.
    pub fn with_stub_convention(mut self, stub: StubConvention) -> Self {
        self.stub_convention = Some(stub);
        self
    }

    /// Set the roll convention.
    pub fn with_roll_convention(mut self, roll: RollConvention) -> Self {
        self.roll_convention = Some(roll);
        self
    }

    /// Set the first regular start date, creating an explicit initial stub
    /// when it differs from the start date.
    pub fn with_first_regular_start_date(mut self, d: Date) -> Self {
        self.first_regular_start_date = Some(d);
        self
    }

    /// Set the last regular end date, creating an explicit final stub when it
    /// differs from the end date.
    pub fn with_last_regular_end_date(mut self, d: Date) -> Self {
        self.last_regular_end_date = Some(d);
        self
    }

    /// Validate and build the definition.
    pub fn build(self) -> Result<ScheduleDefinition, DefinitionError> {
        let start = self
            .start_date
            .ok_or(DefinitionError::MissingField("start_date"))?;
        let end = self.end_date.ok_or(DefinitionError::MissingField("end_date"))?;
        let frequency = self
            .frequency
            .ok_or(DefinitionError::MissingField("frequency"))?;
        let business_day_adjustment = self
            .business_day_adjustment
            .ok_or(DefinitionError::MissingField("business_day_adjustment"))?;

        if let Frequency::Periodic(tenor) = frequency {
            if !tenor.is_positive() {
                return Err(DefinitionError::InvalidFrequency(tenor));
            }
        }
        if start >= end {
            return Err(DefinitionError::InvalidDateOrder { start, end });
        }
        if let Some(first) = self.first_regular_start_date {
            if first < start || first >= end {
                return Err(DefinitionError::FirstRegularStartDateOutOfRange {
                    date: first,
                    start,
                    end,
                });
            }
        }
        if let Some(last) = self.last_regular_end_date {
            if last <= start || last > end {
                return Err(DefinitionError::LastRegularEndDateOutOfRange {
                    date: last,
                    start,
                    end,
                });
            }
        }
        if let (Some(first), Some(last)) = (self.first_regular_start_date, self.last_regular_end_date) {
            if first >= last {
                return Err(DefinitionError::InvalidRegularBounds { first, last });
            }
        }

        Ok(ScheduleDefinition {
            start_date: start,
            end_date: end,
            frequency,
            business_day_adjustment,
            start_date_business_day_adjustment: self.start_date_business_day_adjustment,
            end_date_business_day_adjustment: self.end_date_business_day_adjustment,
            stub_convention: self.stub_convention,
            roll_convention: self.roll_convention,
            first_regular_start_date: self.first_regular_start_date,
            last_regular_end_date: self.last_regular_end_date,
        })
    }
}
