//! # bucketspan
//!
//! Validation and classification for date-histogram interval strings.
//!
//! An interval string pairs a positive integer magnitude with a unit code:
//! `"250ms"`, `"7d"`, `"1M"`. Fixed units (milliseconds through days) accept
//! any positive magnitude. Calendar units (weeks, months, years) vary in
//! real-world length and accept only a magnitude of 1. Parsing is a pure
//! function that returns either the classified interval or one of two typed
//! errors, so callers such as form validators and histogram query builders
//! can branch on exactly what went wrong.
//!
//! ```
//! use bucketspan::{parse_interval, IntervalType, IntervalUnit};
//!
//! let interval = parse_interval("7d")?;
//! assert_eq!(interval.value, 7);
//! assert_eq!(interval.unit, IntervalUnit::Day);
//! assert_eq!(interval.interval_type, IntervalType::Fixed);
//! # Ok::<(), bucketspan::IntervalError>(())
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — Unit codes, classification, and the interval parser
//! - [`error`] — Error types

pub mod error;
pub mod interval;

pub use error::IntervalError;
pub use interval::{parse_interval, IntervalType, IntervalUnit, ParsedInterval};
