//! Date generation: rolling the regular section, attaching stubs and
//! applying business-day adjustment.

use crate::definition::ScheduleDefinition;
use crate::error::{GenerationError, GenerationErrorKind};
use crate::frequency::Frequency;
use crate::roll_convention::RollConvention;
use crate::stub_convention::StubConvention;
use sched_time::Date;
use tracing::{debug, trace};

/// Generate the unadjusted dates of `defn`.
pub(crate) fn unadjusted_dates(defn: &ScheduleDefinition) -> Result<Vec<Date>, GenerationError> {
    let start = defn.start_date();
    let end = defn.end_date();
    let first_regular = defn.effective_first_regular_start_date();
    let last_regular = defn.effective_last_regular_end_date();
    let explicit_initial_stub = first_regular != start;
    let explicit_final_stub = last_regular != end;

    if defn.frequency().is_term() {
        if explicit_initial_stub || explicit_final_stub {
            return Err(GenerationError::new(
                GenerationErrorKind::TermFrequency,
                "explicit stubs must not be specified when using the Term frequency",
            ));
        }
        debug!(%start, %end, "term frequency, single period");
        return Ok(vec![start, end]);
    }

    let implicit = match defn.stub_convention() {
        Some(stub) => Some(stub.to_implicit(explicit_initial_stub, explicit_final_stub)?),
        None => None,
    };
    let roll = defn.effective_roll_convention();
    debug!(
        %start,
        %end,
        %first_regular,
        %last_regular,
        frequency = %defn.frequency(),
        roll = %roll,
        stub = ?implicit,
        "generating unadjusted dates"
    );

    let regular = RegularSection {
        roll: &roll,
        frequency: defn.frequency(),
        first: first_regular,
        last: last_regular,
        stub: implicit,
    };
    let mut dates = if implicit.is_some_and(|s| s.is_calculate_backwards()) {
        regular.roll_backwards()?
    } else {
        regular.roll_forwards()?
    };

    if explicit_initial_stub {
        dates.insert(0, start);
    }
    if explicit_final_stub {
        dates.push(end);
    }
    ensure_strictly_increasing(&dates, GenerationErrorKind::DuplicateUnadjustedDates, "unadjusted")?;
    debug!(count = dates.len(), "generated unadjusted dates");
    Ok(dates)
}

/// Adjust `unadjusted` with the start, main and end adjustments of `defn`.
pub(crate) fn adjusted_dates(
    defn: &ScheduleDefinition,
    unadjusted: &[Date],
) -> Result<Vec<Date>, GenerationError> {
    let last = unadjusted.len().saturating_sub(1);
    let adjusted = unadjusted
        .iter()
        .enumerate()
        .map(|(i, &date)| {
            let bda = if i == 0 {
                defn.effective_start_date_business_day_adjustment()
            } else if i == last {
                defn.effective_end_date_business_day_adjustment()
            } else {
                defn.business_day_adjustment()
            };
            bda.adjust(date)
        })
        .collect::<Result<Vec<_>, _>>()?;
    ensure_strictly_increasing(&adjusted, GenerationErrorKind::DuplicateAdjustedDates, "adjusted")?;
    Ok(adjusted)
}

fn ensure_strictly_increasing(
    dates: &[Date],
    kind: GenerationErrorKind,
    label: &str,
) -> Result<(), GenerationError> {
    if dates.windows(2).all(|w| w[0] < w[1]) {
        return Ok(());
    }
    let listed: Vec<String> = dates.iter().map(Date::to_string).collect();
    Err(GenerationError::new(
        kind,
        format!("schedule calculation resulted in duplicate {label} dates [{}]", listed.join(", ")),
    ))
}

/// The regular part of the schedule, between the first regular start date
/// and the last regular end date.
struct RegularSection<'a> {
    roll: &'a RollConvention,
    frequency: Frequency,
    first: Date,
    last: Date,
    /// Implicit stub convention; `None` when none was specified.
    stub: Option<StubConvention>,
}

impl RegularSection<'_> {
    fn roll_forwards(&self) -> Result<Vec<Date>, GenerationError> {
        if !self.roll.matches(self.first) {
            return Err(GenerationError::new(
                GenerationErrorKind::InvalidStub,
                format!(
                    "date {} does not match roll convention {} when starting to roll forwards",
                    self.first, self.roll
                ),
            ));
        }
        let mut dates = vec![self.first];
        let mut current = self.first;
        loop {
            let next = self.roll.next(current, self.frequency)?;
            trace!(%current, %next, "rolled forwards");
            if next == current {
                return Err(duplicate_roll(self.roll, current));
            }
            if next < current {
                return Err(non_convergence(self.roll, current, next, "forwards"));
            }
            if next >= self.last {
                if next != self.last && dates.len() > 1 {
                    self.resolve_stub(&mut dates)?;
                }
                break;
            }
            dates.push(next);
            current = next;
        }
        dates.push(self.last);
        Ok(dates)
    }

    fn roll_backwards(&self) -> Result<Vec<Date>, GenerationError> {
        if !self.roll.matches(self.last) {
            return Err(GenerationError::new(
                GenerationErrorKind::InvalidStub,
                format!(
                    "date {} does not match roll convention {} when starting to roll backwards",
                    self.last, self.roll
                ),
            ));
        }
        let mut dates = vec![self.last];
        let mut current = self.last;
        loop {
            let previous = self.roll.previous(current, self.frequency)?;
            trace!(%current, %previous, "rolled backwards");
            if previous == current {
                return Err(duplicate_roll(self.roll, current));
            }
            if previous > current {
                return Err(non_convergence(self.roll, current, previous, "backwards"));
            }
            if previous <= self.first {
                if previous != self.first && dates.len() > 1 {
                    self.resolve_stub(&mut dates)?;
                }
                break;
            }
            dates.push(previous);
            current = previous;
        }
        dates.push(self.first);
        dates.reverse();
        Ok(dates)
    }

    /// Rolling overshot the far bound: keep the last rolled date for a short
    /// stub, drop it for a long one.
    fn resolve_stub(&self, dates: &mut Vec<Date>) -> Result<(), GenerationError> {
        match self.stub {
            Some(stub) if stub.is_long() => {
                dates.pop();
                Ok(())
            }
            Some(stub) if stub.is_short() => Ok(()),
            Some(_) => Err(GenerationError::new(
                GenerationErrorKind::InvalidStub,
                format!(
                    "stub convention is None but a stub is needed to reach {} from {} with {} and {}",
                    self.last, self.first, self.frequency, self.roll
                ),
            )),
            None => Err(GenerationError::new(
                GenerationErrorKind::NonConvergence,
                format!(
                    "rolling from {} with {} and {} does not reach {} and no stub convention was given",
                    self.first, self.frequency, self.roll, self.last
                ),
            )),
        }
    }
}

fn duplicate_roll(roll: &RollConvention, date: Date) -> GenerationError {
    GenerationError::new(
        GenerationErrorKind::DuplicateUnadjustedDates,
        format!("duplicate unadjusted dates: roll convention {roll} did not move {date}"),
    )
}

fn non_convergence(roll: &RollConvention, from: Date, to: Date, direction: &str) -> GenerationError {
    GenerationError::new(
        GenerationErrorKind::NonConvergence,
        format!("roll convention {roll} moved from {from} to {to} when rolling {direction}"),
    )
}
