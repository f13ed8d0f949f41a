//! Error type for the `schedgen` binary.

use sched_periodic::{DefinitionError, GenerationError};
use thiserror::Error;

/// Anything that can go wrong between argument parsing and output.
#[derive(Debug, Error)]
pub enum CliError {
    /// The arguments do not form a valid schedule definition.
    #[error("invalid schedule definition: {0}")]
    Definition(#[from] DefinitionError),

    /// The definition is valid but no schedule could be generated.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Arguments that contradict each other.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
