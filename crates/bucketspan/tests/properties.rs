//! Property tests for the interval grammar and the classification rules.

use proptest::prelude::*;

use bucketspan::{parse_interval, IntervalError, IntervalType, IntervalUnit, ParsedInterval};

const FIXED_UNITS: [IntervalUnit; 5] = [
    IntervalUnit::Millisecond,
    IntervalUnit::Second,
    IntervalUnit::Minute,
    IntervalUnit::Hour,
    IntervalUnit::Day,
];

const CALENDAR_UNITS: [IntervalUnit; 3] = [
    IntervalUnit::Week,
    IntervalUnit::Month,
    IntervalUnit::Year,
];

fn fixed_unit() -> impl Strategy<Value = IntervalUnit> {
    (0..FIXED_UNITS.len()).prop_map(|i| FIXED_UNITS[i])
}

fn calendar_unit() -> impl Strategy<Value = IntervalUnit> {
    (0..CALENDAR_UNITS.len()).prop_map(|i| CALENDAR_UNITS[i])
}

fn any_unit() -> impl Strategy<Value = IntervalUnit> {
    (0..IntervalUnit::ALL.len()).prop_map(|i| IntervalUnit::ALL[i])
}

/// A well-formed expression with one noise character spliced in at a random
/// position. The noise alphabet avoids digits and unit letters, so the splice
/// can never produce another well-formed expression.
fn expression_with_noise() -> impl Strategy<Value = String> {
    ("[1-9][0-9]{0,3}(ms|s|m|h|d|w|M|y)", "[ .xz+-]").prop_flat_map(|(base, noise)| {
        let len = base.len();
        (0..=len).prop_map(move |index| {
            let mut input = base.clone();
            input.insert_str(index, &noise);
            input
        })
    })
}

proptest! {
    #[test]
    fn fixed_units_accept_any_positive_magnitude(value in 1u64.., unit in fixed_unit()) {
        let input = format!("{value}{unit}");
        prop_assert_eq!(
            parse_interval(&input),
            Ok(ParsedInterval {
                value,
                unit,
                interval_type: IntervalType::Fixed,
            })
        );
    }

    #[test]
    fn calendar_units_reject_magnitudes_above_one(value in 2u64.., unit in calendar_unit()) {
        let input = format!("{value}{unit}");
        prop_assert_eq!(
            parse_interval(&input),
            Err(IntervalError::InvalidCalendarInterval {
                interval: input.clone(),
                value,
                unit,
            })
        );
    }

    #[test]
    fn zero_magnitude_is_rejected_for_every_unit(zeros in "0{1,4}", unit in any_unit()) {
        let input = format!("{zeros}{unit}");
        prop_assert_eq!(
            parse_interval(&input),
            Err(IntervalError::InvalidFormat {
                interval: input.clone(),
            })
        );
    }

    #[test]
    fn parsing_is_idempotent(input in ".{0,12}") {
        prop_assert_eq!(parse_interval(&input), parse_interval(&input));
    }

    #[test]
    fn accepted_inputs_decompose_as_digits_then_code(input in ".{0,12}") {
        if let Ok(parsed) = parse_interval(&input) {
            let code = parsed.unit.as_str();
            let digits = input
                .strip_suffix(code)
                .expect("accepted input must end with the unit code");
            prop_assert!(!digits.is_empty());
            prop_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
            prop_assert_eq!(digits.parse::<u64>().unwrap(), parsed.value);
            prop_assert!(parsed.value >= 1);
            prop_assert_eq!(parsed.interval_type, parsed.unit.interval_type());
            if parsed.interval_type == IntervalType::Calendar {
                prop_assert_eq!(parsed.value, 1);
            }
        }
    }

    #[test]
    fn well_formed_expressions_never_report_a_format_error(
        input in "[1-9][0-9]{0,3}(ms|s|m|h|d|w|M|y)",
    ) {
        let result = parse_interval(&input);
        prop_assert!(
            !matches!(result, Err(IntervalError::InvalidFormat { .. })),
            "well-formed input {} reported a format error",
            input
        );
    }

    #[test]
    fn noise_anywhere_breaks_the_format(input in expression_with_noise()) {
        prop_assert_eq!(
            parse_interval(&input),
            Err(IntervalError::InvalidFormat {
                interval: input.clone(),
            })
        );
    }
}
