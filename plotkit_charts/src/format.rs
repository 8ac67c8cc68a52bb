// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for labels.

use alloc::format;
use alloc::string::String;

/// Formats `value` with exactly `decimals` digits after the point.
///
/// Negative zero prints as `0`, not `-0`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.decimals$}")
}

/// Formats `value` with at most `max_decimals` digits, dropping trailing zeros.
pub fn format_compact(value: f64, max_decimals: usize) -> String {
    let mut s = format_fixed(value, max_decimals);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// The default axis-line position formatter: two decimals.
pub fn format_position(position: f64) -> String {
    format_fixed(position, 2)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn fixed_keeps_requested_digits() {
        assert_eq!(format_fixed(1.5, 2), "1.50");
        assert_eq!(format_fixed(-0.0, 2), "0.00");
        assert_eq!(format_position(12.345_6), "12.35");
    }

    #[test]
    fn compact_trims_trailing_zeros() {
        assert_eq!(format_compact(2.5, 2), "2.5");
        assert_eq!(format_compact(10.0, 2), "10");
        assert_eq!(format_compact(2.0 / 3.0, 2), "0.67");
        assert_eq!(format_compact(-0.001, 2), "0");
        assert_eq!(format_compact(120.0, 0), "120");
    }
}
