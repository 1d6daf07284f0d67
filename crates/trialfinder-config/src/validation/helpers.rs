//! Range checks shared by the section validators.

use std::fmt::Display;

/// Record `name` unless `min <= value <= max`.
///
/// NaN fails both comparisons, so it is always reported.
pub(crate) fn check_range<T>(errors: &mut Vec<String>, name: &str, value: T, min: T, max: T)
where
    T: PartialOrd + Display + Copy,
{
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} must be within {min}..={max}, got {value}"));
    }
}
