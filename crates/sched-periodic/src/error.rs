//! Errors raised while building a [`ScheduleDefinition`](crate::ScheduleDefinition)
//! and while generating dates from it.

use sched_time::{Date, Tenor};
use thiserror::Error;

/// A schedule definition was rejected at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// A required builder field was never set.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The start date is not strictly before the end date.
    #[error("start date {start} must be before end date {end}")]
    InvalidDateOrder {
        /// Start of the schedule.
        start: Date,
        /// End of the schedule.
        end: Date,
    },

    /// The first regular start date lies outside `[start, end)`.
    #[error("first regular start date {date} must be on or after {start} and before {end}")]
    FirstRegularStartDateOutOfRange {
        /// The offending first regular start date.
        date: Date,
        /// Start of the schedule.
        start: Date,
        /// End of the schedule.
        end: Date,
    },

    /// The last regular end date lies outside `(start, end]`.
    #[error("last regular end date {date} must be after {start} and on or before {end}")]
    LastRegularEndDateOutOfRange {
        /// The offending last regular end date.
        date: Date,
        /// Start of the schedule.
        start: Date,
        /// End of the schedule.
        end: Date,
    },

    /// The first regular start date is not before the last regular end date.
    #[error("first regular start date {first} must be before last regular end date {last}")]
    InvalidRegularBounds {
        /// First regular start date.
        first: Date,
        /// Last regular end date.
        last: Date,
    },

    /// A periodic frequency with a zero or negative tenor.
    #[error("frequency must be positive, got {0}")]
    InvalidFrequency(Tenor),
}

/// The category of a [`GenerationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// The stub convention was violated, or the roll convention does not
    /// match the date rolling starts from.
    InvalidStub,
    /// Explicit stubs were combined with the `Term` frequency.
    TermFrequency,
    /// Rolling did not move towards the target date.
    NonConvergence,
    /// Two unadjusted dates are equal or out of order.
    DuplicateUnadjustedDates,
    /// Two adjusted dates are equal or out of order.
    DuplicateAdjustedDates,
    /// Date arithmetic left the supported date range.
    DateOutOfRange,
}

/// Date generation failed for an otherwise valid definition.
///
/// No partial result is ever produced alongside this error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("periodic schedule generation failed: {message}")]
pub struct GenerationError {
    kind: GenerationErrorKind,
    message: String,
}

impl GenerationError {
    /// Create an error of the given kind.
    pub fn new(kind: GenerationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The category of the failure.
    pub fn kind(&self) -> GenerationErrorKind {
        self.kind
    }

    /// Human-readable detail, without the common prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<sched_core::Error> for GenerationError {
    fn from(err: sched_core::Error) -> Self {
        Self::new(GenerationErrorKind::DateOutOfRange, err.to_string())
    }
}
