// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Year tick generation and calendar helpers.
//!
//! This is intentionally small and `no_std`-friendly. It models time as a
//! numeric value in **fractional calendar years** (`1999.5` is mid-1999),
//! and provides:
//! - "nice" whole-year tick steps (1/2/5/10...)
//! - tick label formatting (the four-digit `"%Y"` style)
//! - year/month extraction used by the tooltip's fiscal-year alignment

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Returns whole-year tick values covering the domain, at a "nice" step.
///
/// Ticks are clamped to the domain (the axis draws no ticks outside the
/// plot), and steps are whole numbers of years: 1, 2, 5, 10, 20, 50, ...
pub fn nice_year_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }

    let span = max - min;
    let step = nice_year_step(span / count.max(1) as f64);

    let start = (min / step).ceil() * step;
    let stop = (max / step).floor() * step;
    if stop < start {
        return Vec::new();
    }

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_year_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 1.0 {
        return 1.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    (nice * base).max(1.0)
}

/// Formats a tick value as a four-digit year label.
pub fn format_year(v: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    alloc::format!("{}", year_of(v))
}

/// Returns the calendar year of a fractional-year value.
pub fn year_of(t: f64) -> i32 {
    let y = t.floor().clamp(i32::MIN as f64, i32::MAX as f64);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
    {
        y as i32
    }
}

/// Returns the zero-based month index (`0` = January) of a fractional year.
pub fn month_index_of(t: f64) -> u32 {
    let frac = t - t.floor();
    let m = (frac * 12.0).floor().clamp(0.0, 11.0);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to 0..=11")]
    #[allow(clippy::cast_sign_loss, reason = "clamped to 0..=11")]
    {
        m as u32
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn year_ticks_use_whole_year_steps() {
        let ticks = nice_year_ticks(1998.0, 2000.0, 10);
        assert_eq!(ticks, alloc::vec![1998.0, 1999.0, 2000.0]);
    }

    #[test]
    fn year_ticks_widen_step_for_long_spans() {
        let ticks = nice_year_ticks(1900.0, 2000.0, 10);
        assert!(ticks.len() >= 2, "expected at least two ticks");
        let step = ticks[1] - ticks[0];
        assert_eq!(step, 10.0);
        assert!(ticks.iter().all(|t| t % 10.0 == 0.0), "expected decade ticks");
    }

    #[test]
    fn fractional_year_decomposition() {
        assert_eq!(year_of(1999.0), 1999);
        assert_eq!(year_of(1999.99), 1999);
        assert_eq!(month_index_of(1999.0), 0);
        // June is index 5; 0.5 lands exactly on the July boundary.
        assert_eq!(month_index_of(1999.49), 5);
        assert_eq!(month_index_of(1999.5), 6);
        assert_eq!(format_year(1999.7), "1999");
    }
}
