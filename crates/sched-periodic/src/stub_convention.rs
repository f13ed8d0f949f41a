//! `StubConvention`: which irregular periods a schedule may have.

use crate::error::{GenerationError, GenerationErrorKind};
use sched_core::errors::Error;

/// Policy for stub (irregular) periods at the start or end of a schedule.
///
/// Initial conventions generate dates backwards from the end of the regular
/// section, so any remainder lands at the start; final conventions generate
/// forwards.  A short stub is shorter than a regular period, a long stub
/// absorbs the remainder into the neighbouring regular period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubConvention {
    /// No stubs: the regular period must divide the schedule exactly.
    None,
    /// A short stub at the start, if needed.
    ShortInitial,
    /// A long stub at the start, if needed.
    LongInitial,
    /// A short stub at the end, if needed.
    ShortFinal,
    /// A long stub at the end, if needed.
    LongFinal,
    /// Explicit stubs at both ends.
    Both,
}

impl StubConvention {
    /// All conventions, in declaration order.
    pub const ALL: [StubConvention; 6] = [
        StubConvention::None,
        StubConvention::ShortInitial,
        StubConvention::LongInitial,
        StubConvention::ShortFinal,
        StubConvention::LongFinal,
        StubConvention::Both,
    ];

    /// `true` if dates are generated backwards from the end.
    pub fn is_calculate_backwards(&self) -> bool {
        matches!(self, StubConvention::ShortInitial | StubConvention::LongInitial)
    }

    /// `true` for the long stub variants.
    pub fn is_long(&self) -> bool {
        matches!(self, StubConvention::LongInitial | StubConvention::LongFinal)
    }

    /// `true` for the short stub variants.
    pub fn is_short(&self) -> bool {
        matches!(self, StubConvention::ShortInitial | StubConvention::ShortFinal)
    }

    /// Resolve the convention that governs the regular section once the
    /// explicit stubs are known.
    ///
    /// An explicit stub on the side this convention would create one makes
    /// the implicit stub unnecessary, so `None` is returned.  Explicit stubs
    /// that contradict the convention are rejected.
    pub fn to_implicit(
        self,
        explicit_initial_stub: bool,
        explicit_final_stub: bool,
    ) -> Result<StubConvention, GenerationError> {
        match self {
            StubConvention::None => {
                if explicit_initial_stub || explicit_final_stub {
                    return Err(GenerationError::new(
                        GenerationErrorKind::InvalidStub,
                        "stub convention is None but explicit stub dates were given",
                    ));
                }
                Ok(StubConvention::None)
            }
            StubConvention::ShortInitial | StubConvention::LongInitial => {
                Ok(if explicit_initial_stub { StubConvention::None } else { self })
            }
            StubConvention::ShortFinal | StubConvention::LongFinal => {
                Ok(if explicit_final_stub { StubConvention::None } else { self })
            }
            StubConvention::Both => {
                if !(explicit_initial_stub && explicit_final_stub) {
                    return Err(GenerationError::new(
                        GenerationErrorKind::InvalidStub,
                        "stub convention is Both but explicit initial and final stub dates were not both given",
                    ));
                }
                Ok(StubConvention::None)
            }
        }
    }

    /// The canonical name, e.g. `ShortInitial`.
    pub fn name(&self) -> &'static str {
        match self {
            StubConvention::None => "None",
            StubConvention::ShortInitial => "ShortInitial",
            StubConvention::LongInitial => "LongInitial",
            StubConvention::ShortFinal => "ShortFinal",
            StubConvention::LongFinal => "LongFinal",
            StubConvention::Both => "Both",
        }
    }
}

impl std::fmt::Display for StubConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for StubConvention {
    type Err = Error;

    /// Accepts `ShortInitial`, `short-initial`, `SHORT_INITIAL` and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| Error::parse(s, "stub convention"))
    }
}
