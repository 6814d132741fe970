// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny scale utilities.
//!
//! Three scales cover the whole chart: a linear scale for stacked values
//! (instantiated with an inverted range so larger values sit higher on
//! screen), a year scale for the time dimension, and an ordinal color scale
//! for the layer palette. The continuous scales support `invert`, which the
//! tooltip uses to turn a cursor position back into a point in time.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;

use crate::time;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a linear scale (domain only, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a value from range space back into domain space.
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return d0;
        }
        let t = (y - r0) / denom;
        d0 + t * (d1 - d0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new(self.domain, range)
    }
}

/// A time scale over fractional calendar years.
///
/// Time is numeric: `1999.0` is the start of 1999 and `1999.5` is mid-1999.
/// Tick generation picks whole-year steps; see [`time::nice_year_ticks`].
#[derive(Clone, Copy, Debug)]
pub struct ScaleYears {
    inner: ScaleLinear,
}

/// Specification for a year scale (domain only, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleYearsSpec {
    /// Domain in fractional years.
    pub domain: (f64, f64),
}

impl ScaleYears {
    /// Creates a new year scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            inner: ScaleLinear::new(domain, range),
        }
    }

    /// Maps a fractional year into range space.
    pub fn map(&self, t: f64) -> f64 {
        self.inner.map(t)
    }

    /// Maps a range-space coordinate back into a fractional year.
    pub fn invert(&self, x: f64) -> f64 {
        self.inner.invert(x)
    }

    /// Returns whole-year tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        time::nice_year_ticks(self.inner.domain_min(), self.inner.domain_max(), count)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.inner.domain_min()
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.inner.domain_max()
    }
}

impl ScaleYearsSpec {
    /// Creates a new year scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleYears {
        ScaleYears::new(self.domain, range)
    }
}

/// An ordinal color scale: layer index into a fixed palette.
///
/// Indexes past the palette fall back to the overflow color; the legend
/// truncates at the palette length but rendering never does.
#[derive(Clone, Debug)]
pub struct ScaleOrdinal {
    colors: Vec<Color>,
    overflow: Color,
}

impl ScaleOrdinal {
    /// Creates a new ordinal scale over `colors` with an overflow fallback.
    pub fn new(colors: Vec<Color>, overflow: Color) -> Self {
        Self { colors, overflow }
    }

    /// Returns the color for a layer index.
    pub fn color(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or(self.overflow)
    }

    /// Returns the overflow color used past the palette.
    pub fn overflow(&self) -> Color {
        self.overflow
    }

    /// Returns the number of explicit palette entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` when the palette has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Infer a `(min, max)` extent over an iterator of numeric values.
///
/// Non-finite values are ignored. Returns `None` if no finite values are
/// present.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}
