// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip value formatting.
//!
//! The tooltip shows currency amounts with three significant digits and an
//! SI suffix: `250000` formats as `$250k`, `1234567` as `$1.23M`. Trailing
//! zeros are kept so the digit count stays fixed (`1500` is `$1.50k`).

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const SI_SUFFIXES: &[(i32, &str)] = &[
    (0, ""),
    (3, "k"),
    (6, "M"),
    (9, "G"),
    (12, "T"),
    (15, "P"),
    (18, "E"),
    (21, "Z"),
    (24, "Y"),
];

/// Formats a currency amount with 3 significant digits and an SI suffix.
pub fn format_currency_si(value: f64) -> String {
    if !value.is_finite() {
        return alloc::format!("${value}");
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs == 0.0 {
        return alloc::format!("{sign}$0.00");
    }

    // Engineering exponent: a multiple of 3 such that the scaled value lands
    // in [1, 1000). Sub-unit amounts are left unscaled (no milli-dollars).
    let mut exp = {
        let e = (abs.log10().floor() / 3.0).floor() * 3.0;
        let e = e.clamp(0.0, 24.0);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to 0..=24")]
        {
            e as i32
        }
    };
    let mut scaled = abs / 10_f64.powf(f64::from(exp));

    // Rounding to 3 significant digits can carry into the next prefix
    // (999.6 rounds to 1000, which reads as 1.00 of the next suffix).
    let decimals = |s: f64| -> usize {
        if s >= 100.0 {
            0
        } else if s >= 10.0 {
            1
        } else {
            2
        }
    };
    let mut d = decimals(scaled);
    let factor = 10_f64.powf(d as f64);
    scaled = (scaled * factor).round() / factor;
    if scaled >= 1000.0 && exp < 24 {
        scaled /= 1000.0;
        exp += 3;
    }
    d = decimals(scaled);

    let suffix = SI_SUFFIXES
        .iter()
        .find(|(e, _)| *e == exp)
        .map(|(_, s)| *s)
        .unwrap_or("");
    alloc::format!("{sign}${scaled:.prec$}{suffix}", prec = d)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn rounds_to_three_significant_digits() {
        assert_eq!(format_currency_si(250_000.0), "$250k");
        assert_eq!(format_currency_si(1_234_567.0), "$1.23M");
        assert_eq!(format_currency_si(1_500.0), "$1.50k");
        assert_eq!(format_currency_si(999.0), "$999");
    }

    #[test]
    fn carries_into_the_next_prefix() {
        assert_eq!(format_currency_si(999_600.0), "$1.00M");
    }

    #[test]
    fn handles_sign_zero_and_small_values() {
        assert_eq!(format_currency_si(0.0), "$0.00");
        assert_eq!(format_currency_si(-250_000.0), "-$250k");
        assert_eq!(format_currency_si(0.25), "$0.25");
    }
}
