//! Parsing and classification of date-histogram interval strings.
//!
//! An interval string is a positive integer magnitude immediately followed by
//! a unit code: `"250ms"`, `"7d"`, `"1M"`. Parsing is a pure function over
//! the input string (no clock access, no shared state) and is safe to call
//! concurrently from any number of callers.
//!
//! # Design Principle
//!
//! Units fall into two families. Fixed units (`ms`, `s`, `m`, `h`, `d`) name
//! spans of constant real-world length and accept any positive magnitude.
//! Calendar units (`w`, `M`, `y`) name spans whose length depends on where
//! they land in the calendar, so only a magnitude of exactly 1 names a
//! well-defined span. `"12M"` is rejected rather than coerced to `"1y"`:
//! twelve calendar months do not always equal one year. Anything that cannot
//! be accepted exactly as written is a typed error, never a guess.
//!
//! # Format
//!
//! - magnitude: one or more ASCII digits with a value of at least 1
//! - unit: exactly one of `ms`, `s`, `m`, `h`, `d`, `w`, `M`, `y`
//!   (case-sensitive: `m` is minutes, `M` is months)
//! - nothing else: no whitespace, no sign, no decimal point, no trailing text

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::IntervalError;

// ── Unit classification ─────────────────────────────────────────────────────

/// How a unit's real-world length behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalType {
    /// Constant length regardless of calendar context (`ms` through `d`).
    Fixed,
    /// Length varies with calendar context (`w`, `M`, `y`).
    Calendar,
}

impl IntervalType {
    /// The wire name, `"fixed"` or `"calendar"`.
    pub fn as_str(self) -> &'static str {
        match self {
            IntervalType::Fixed => "fixed",
            IntervalType::Calendar => "calendar",
        }
    }
}

impl fmt::Display for IntervalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized interval unit.
///
/// Variants are declared smallest span first, so the derived ordering ranks
/// units by the amount of time they cover:
/// `Millisecond < Second < ... < Month < Year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum IntervalUnit {
    /// Milliseconds (`ms`).
    #[serde(rename = "ms")]
    Millisecond,
    /// Seconds (`s`).
    #[serde(rename = "s")]
    Second,
    /// Minutes (`m`).
    #[serde(rename = "m")]
    Minute,
    /// Hours (`h`).
    #[serde(rename = "h")]
    Hour,
    /// Days (`d`).
    #[serde(rename = "d")]
    Day,
    /// Weeks (`w`).
    #[serde(rename = "w")]
    Week,
    /// Months (`M`).
    #[serde(rename = "M")]
    Month,
    /// Years (`y`).
    #[serde(rename = "y")]
    Year,
}

impl IntervalUnit {
    /// Every recognized unit, smallest span first.
    pub const ALL: [IntervalUnit; 8] = [
        IntervalUnit::Millisecond,
        IntervalUnit::Second,
        IntervalUnit::Minute,
        IntervalUnit::Hour,
        IntervalUnit::Day,
        IntervalUnit::Week,
        IntervalUnit::Month,
        IntervalUnit::Year,
    ];

    /// The wire code for this unit (`"ms"`, `"s"`, ..., `"M"`, `"y"`).
    pub fn as_str(self) -> &'static str {
        match self {
            IntervalUnit::Millisecond => "ms",
            IntervalUnit::Second => "s",
            IntervalUnit::Minute => "m",
            IntervalUnit::Hour => "h",
            IntervalUnit::Day => "d",
            IntervalUnit::Week => "w",
            IntervalUnit::Month => "M",
            IntervalUnit::Year => "y",
        }
    }

    /// Look up a unit by its wire code.
    ///
    /// Codes are case-sensitive and mutually exclusive: `"m"` is minutes,
    /// `"M"` is months. Returns `None` for anything else.
    pub fn from_code(code: &str) -> Option<IntervalUnit> {
        match code {
            "ms" => Some(IntervalUnit::Millisecond),
            "s" => Some(IntervalUnit::Second),
            "m" => Some(IntervalUnit::Minute),
            "h" => Some(IntervalUnit::Hour),
            "d" => Some(IntervalUnit::Day),
            "w" => Some(IntervalUnit::Week),
            "M" => Some(IntervalUnit::Month),
            "y" => Some(IntervalUnit::Year),
            _ => None,
        }
    }

    /// Whether this unit names a fixed or a calendar interval.
    ///
    /// The classification is a constant property of the unit; no parsed
    /// interval may disagree with it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketspan::{IntervalType, IntervalUnit};
    ///
    /// assert_eq!(IntervalUnit::Hour.interval_type(), IntervalType::Fixed);
    /// assert_eq!(IntervalUnit::Month.interval_type(), IntervalType::Calendar);
    /// ```
    pub fn interval_type(self) -> IntervalType {
        match self {
            IntervalUnit::Millisecond
            | IntervalUnit::Second
            | IntervalUnit::Minute
            | IntervalUnit::Hour
            | IntervalUnit::Day => IntervalType::Fixed,
            IntervalUnit::Week | IntervalUnit::Month | IntervalUnit::Year => IntervalType::Calendar,
        }
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── parse_interval ──────────────────────────────────────────────────────────

/// A validated interval expression.
///
/// Constructed only on the successful path of [`parse_interval`] (or
/// `str::parse`), so the fields are always mutually consistent:
/// `interval_type` equals `unit.interval_type()`, `value` is at least 1, and
/// a calendar `interval_type` implies `value == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedInterval {
    /// The positive integer magnitude (`250` in `"250ms"`).
    pub value: u64,
    /// The unit (`ms` in `"250ms"`).
    pub unit: IntervalUnit,
    /// Fixed or calendar, looked up from the unit.
    #[serde(rename = "type")]
    pub interval_type: IntervalType,
}

/// Parse and classify an interval string.
///
/// # Arguments
///
/// * `input` — An interval expression such as `"250ms"`, `"7d"`, or `"1M"`
///
/// # Returns
///
/// A [`ParsedInterval`] carrying the magnitude, the unit, and the unit's
/// classification. Re-parsing the same string always yields a structurally
/// identical result.
///
/// # Errors
///
/// Returns [`IntervalError::InvalidFormat`] when the input is not a positive
/// integer immediately followed by a known unit code. This covers empty
/// input, a missing magnitude or unit, whitespace, signs, decimal points,
/// unknown codes, and a magnitude of zero. Returns
/// [`IntervalError::InvalidCalendarInterval`] when a calendar unit carries a
/// magnitude other than 1. Format checks run first: `"0w"` is a format
/// error, not a calendar error.
///
/// # Examples
///
/// ```
/// use bucketspan::{parse_interval, IntervalType, IntervalUnit};
///
/// let interval = parse_interval("250ms").unwrap();
/// assert_eq!(interval.value, 250);
/// assert_eq!(interval.unit, IntervalUnit::Millisecond);
/// assert_eq!(interval.interval_type, IntervalType::Fixed);
///
/// // Only a single calendar unit names a well-defined span.
/// assert!(parse_interval("1M").is_ok());
/// assert!(parse_interval("12M").is_err());
/// ```
pub fn parse_interval(input: &str) -> Result<ParsedInterval, IntervalError> {
    let digits_end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    let (digits, code) = input.split_at(digits_end);

    if digits.is_empty() || code.is_empty() {
        return Err(invalid_format(input));
    }

    let unit = IntervalUnit::from_code(code).ok_or_else(|| invalid_format(input))?;

    // A digit run that overflows u64 is not a representable magnitude.
    let value: u64 = digits.parse().map_err(|_| invalid_format(input))?;

    if value == 0 {
        return Err(invalid_format(input));
    }

    let interval_type = unit.interval_type();
    if interval_type == IntervalType::Calendar && value != 1 {
        return Err(IntervalError::InvalidCalendarInterval {
            interval: input.to_string(),
            value,
            unit,
        });
    }

    Ok(ParsedInterval {
        value,
        unit,
        interval_type,
    })
}

impl FromStr for ParsedInterval {
    type Err = IntervalError;

    /// Equivalent to [`parse_interval`], enabling `"7d".parse()`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_interval(s)
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn invalid_format(input: &str) -> IntervalError {
    IntervalError::InvalidFormat {
        interval: input.to_string(),
    }
}
