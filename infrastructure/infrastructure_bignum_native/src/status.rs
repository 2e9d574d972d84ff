//! Engine Status Codes
//!
//! Non-success statuses reported by native engine calls, each with the
//! diagnostic text surfaced to callers.

use std::fmt;

use entities_bignum::BigNumError;

/// Non-success status of a native engine call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Buffer allocation failed
    Mem,
    /// Operand outside the call's domain
    Val,
    /// Requested size exceeds the configured precision limit
    Max,
}

impl Status {
    /// Diagnostic text for this status
    pub fn describe(self) -> &'static str {
        match self {
            Status::Mem => "Out of heap",
            Status::Val => "Value out of range",
            Status::Max => "Maximum precision exceeded",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl std::error::Error for Status {}

impl From<Status> for BigNumError {
    fn from(status: Status) -> Self {
        log::debug!("native engine call failed: {}", status);
        BigNumError::NativeOperationFailure(status.describe().to_string())
    }
}
