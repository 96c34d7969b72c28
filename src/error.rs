//! ## Errors
//! The error type shared by the rolling and reporting operations.

use thiserror::Error;

/// Failures of [crate::roller::Roller] and [crate::histogram::Histogram] operations. These are
/// always raised before any dice are rolled or any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("invalid argument: {name} must be at least 1, got {value}")]
    InvalidArgument { name: &'static str, value: u32 },
}

pub type Result<T> = std::result::Result<T, RollError>;

/// Check that the parameter `name` is at least one.
pub(crate) fn ensure_positive(name: &'static str, value: u32) -> Result<()> {
    if value < 1 {
        return Err(RollError::InvalidArgument { name, value });
    }
    Ok(())
}
