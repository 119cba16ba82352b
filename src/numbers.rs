//! Pattern 3: Numeric Challenges
//! Absolute sums, type filtering, min/max extraction, and fixed-format
//! assembly over numeric sequences.

use std::fmt;

use itertools::{Itertools, MinMaxResult};

/// A single element of a mixed-type sequence.
///
/// Numbers and booleans print bare; text prints verbatim. That keeps
/// joins over mixed sequences readable: `[1, "a", true]` joins to
/// `"1atrue"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(number) => write!(f, "{}", number),
            Value::Text(text) => write!(f, "{}", text),
            Value::Bool(flag) => write!(f, "{}", flag),
        }
    }
}

/// Sums the absolute values; an empty sequence sums to `0.0`.
pub fn get_absolute_sum(nums: &[f64]) -> f64 {
    nums.iter().map(|number| number.abs()).sum()
}

/// Returns a new sequence without the text elements, order preserved.
pub fn remove_strings(seq: &[Value]) -> Vec<Value> {
    seq.iter()
        .filter(|value| !matches!(value, Value::Text(_)))
        .cloned()
        .collect()
}

/// Returns `(min, max)` of the sequence, or `None` when it is empty.
///
/// A singleton yields `(x, x)`. Ordering is `f64::total_cmp`, so the
/// result is defined even when NaN slips in.
pub fn find_min_max(nums: &[f64]) -> Option<(f64, f64)> {
    match nums.iter().copied().minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(only) => Some((only, only)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}

/// Formats ten digits as `(ddd) ddd-dddd`.
///
/// Works on a copy of the digits' textual forms, inserting the literal
/// marks at fixed positions 0, 4, 5, and 9. Each position clamps to the
/// current length, so inputs of any other length come back garbled but
/// never panic; callers wanting a well-formed number must pass exactly
/// ten digits.
pub fn get_tel_no(digits: &[u8]) -> String {
    let mut working: Vec<String> = digits.iter().map(u8::to_string).collect();
    for (position, mark) in [(0, "("), (4, ")"), (5, " "), (9, "-")] {
        working.insert(position.min(working.len()), mark.to_string());
    }
    working.concat()
}



#[cfg(test)]
mod min_max_tests {
    use super::*;

    #[test]
    fn empty_sequence_has_no_extremes() {
        assert_eq!(find_min_max(&[]), None);
    }

    #[test]
    fn finds_both_extremes() {
        assert_eq!(find_min_max(&[3.0, 1.0, 2.0]), Some((1.0, 3.0)));
    }

    #[test]
    fn singleton_is_its_own_min_and_max() {
        assert_eq!(find_min_max(&[4.5]), Some((4.5, 4.5)));
    }
}

#[cfg(test)]
mod tel_no_tests {
    use super::*;

    #[test]
    fn formats_ten_digits() {
        assert_eq!(
            get_tel_no(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0]),
            "(123) 456-7890"
        );
    }

    #[test]
    fn short_input_garbles_without_panicking() {
        // same shape the position-clamped insertions always produce
        assert_eq!(get_tel_no(&[1, 2]), "(12) -");
    }
}
