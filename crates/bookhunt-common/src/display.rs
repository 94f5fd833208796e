//! Formatting helpers for presenting book rows.
//!
//! Both shells render the same columns, so the rules for missing values,
//! ratings, and status labels live here.

use std::fmt::Display;

use crate::ReadingStatus;

/// Placeholder shown for a missing optional value.
pub const MISSING: &str = "N/A";

/// Render an optional value, falling back to [`MISSING`].
///
/// # Examples
///
/// ```
/// use bookhunt_common::display::or_missing;
///
/// assert_eq!(or_missing(Some(1949)), "1949");
/// assert_eq!(or_missing(None::<i64>), "N/A");
/// ```
pub fn or_missing<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// Render a rating out of five.
///
/// Whole and half ratings keep one decimal place so `4.0` does not collapse
/// to `4`.
///
/// # Examples
///
/// ```
/// use bookhunt_common::display::format_rating;
///
/// assert_eq!(format_rating(Some(4.5)), "4.5/5");
/// assert_eq!(format_rating(Some(4.0)), "4.0/5");
/// assert_eq!(format_rating(Some(3.25)), "3.25/5");
/// assert_eq!(format_rating(None), "N/A");
/// ```
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) if (r * 10.0).fract() == 0.0 => format!("{:.1}/5", r),
        Some(r) => format!("{}/5", r),
        None => MISSING.to_string(),
    }
}

/// Render a status as a title-cased label.
///
/// # Examples
///
/// ```
/// use bookhunt_common::ReadingStatus;
/// use bookhunt_common::display::format_status;
///
/// assert_eq!(format_status(&ReadingStatus::ToRead), "To Read");
/// assert_eq!(format_status(&ReadingStatus::CurrentlyReading), "Currently Reading");
/// ```
pub fn format_status(status: &ReadingStatus) -> String {
    status
        .as_str()
        .replace('-', " ")
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
