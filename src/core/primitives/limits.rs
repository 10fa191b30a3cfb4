//! Shared limits and rounding constants
//!
//! Centralized so the HTTP layer and the CLI report identical numbers.

/// Page requested when the query omits `page`
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the query omits `page_size` and config doesn't override it
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Decimal places kept on reported scores
pub const SCORE_DECIMALS: i32 = 5;

/// Decimal places kept on normalized weights
pub const WEIGHT_DECIMALS: i32 = 2;

/// Base of the next/prev links in listing responses
pub const LISTING_URL: &str = "motorsport/";

/// Round to a fixed number of decimals, ties to even.
///
/// The tie test is made on the exact binary value, so `0.125` is a tie
/// (rounds to `0.12`) while `2.675`, stored just below, rounds down.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let lower = (value * factor).floor();
    // single rounding: the sign of value*factor - (lower + 0.5) is exact
    let diff = value.mul_add(factor, -(lower + 0.5));
    let rounded = if diff > 0.0 || (diff == 0.0 && lower % 2.0 != 0.0) {
        lower + 1.0
    } else {
        lower
    };
    rounded / factor
}
