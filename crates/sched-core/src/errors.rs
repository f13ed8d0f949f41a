//! Error types for the periodic-schedule crates.
//!
//! Date arithmetic, tenor handling and convention lookups all report through
//! the single `thiserror`-derived [`Error`] enum below. Schedule construction
//! and generation have their own, richer error types in `sched-periodic`;
//! those wrap this one where date arithmetic is involved.

use thiserror::Error;

/// The low-level error type used by dates, tenors and conventions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the container.
        size: usize,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A string could not be parsed into the requested type.
    #[error("cannot parse {input:?} as {expected}")]
    Parse {
        /// The offending input.
        input: String,
        /// What the input was expected to be, e.g. `"tenor"`.
        expected: &'static str,
    },
}

impl Error {
    /// Shorthand for building an [`Error::Parse`].
    pub fn parse(input: impl Into<String>, expected: &'static str) -> Self {
        Error::Parse {
            input: input.into(),
            expected,
        }
    }
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use sched_core::{ensure, errors::Error};
/// fn positive(n: i32) -> sched_core::errors::Result<i32> {
///     ensure!(n > 0, "n must be positive, got {n}");
///     Ok(n)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(-1),
///     Err(Error::Precondition("n must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use sched_core::{fail, errors::Error};
/// fn always_err() -> sched_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::Date("year 2300 out of range".into()).to_string(),
            "date error: year 2300 out of range"
        );
        assert_eq!(
            Error::IndexOutOfRange { index: 4, size: 3 }.to_string(),
            "index (4) out of range [0, 3)"
        );
        assert_eq!(
            Error::parse("3Q", "tenor").to_string(),
            "cannot parse \"3Q\" as tenor"
        );
    }

    #[test]
    fn fail_macro_returns_runtime() {
        fn run() -> Result<u8> {
            fail!("bad {}", 42);
        }
        assert_eq!(run(), Err(Error::Runtime("bad 42".into())));
    }
}
