//! Error types for interval parsing.

use thiserror::Error;

use crate::interval::IntervalUnit;

/// Why an interval string was rejected.
///
/// Exactly one of these is raised per failed parse; nothing is retried or
/// silently coerced. Format problems always win over the calendar-magnitude
/// rule, so a malformed string never reports a calendar error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    /// The input is not a positive integer immediately followed by a known
    /// unit code, or its magnitude is zero.
    #[error("Invalid interval format: {interval}")]
    InvalidFormat {
        /// The offending input, echoed back for diagnostics.
        interval: String,
    },

    /// A calendar unit (`w`, `M`, `y`) was given a magnitude other than 1.
    #[error("Invalid calendar interval: {interval}, value must be 1")]
    InvalidCalendarInterval {
        /// The offending input, echoed back for diagnostics.
        interval: String,
        /// The magnitude that was parsed before the rule fired.
        value: u64,
        /// The calendar unit involved.
        unit: IntervalUnit,
    },
}

pub type Result<T> = std::result::Result<T, IntervalError>;
