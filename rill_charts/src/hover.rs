// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer interaction: hover dimming, tooltip lookup, cursor guide.
//!
//! Hover is a per-chart state machine over {idle, hovered(layer)}. Entering
//! a layer dims every other layer to 0.6 over 250 ms; leaving restores all
//! layers. Each layer owns exactly one opacity [`Transition`], and state
//! changes retarget it from the currently sampled value, so rapid pointer
//! movement never queues overlapping fades.
//!
//! The tooltip lookup reproduces the dataset's fiscal-year convention: the
//! cursor's fractional year is split into year and month, and a month index
//! of June or later advances the displayed year while stepping the lookup
//! offset back by one. Values are then indexed by integer offset from the
//! most recent year (positional, not by date equality).

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::BezPath;
use peniko::Color;
use peniko::color::palette::css;

use crate::animate::Transition;
use crate::format::format_currency_si;
use crate::mark::{Mark, StrokeStyle};
use crate::scale::{ScaleLinear, ScaleYears};
use crate::stack::StackedLayer;
use crate::time::{month_index_of, year_of};
use crate::z_order;

/// Opacity a non-hovered layer dims to.
const DIM_OPACITY: f64 = 0.6;

/// Horizontal offset of the cursor guide from the pointer.
const GUIDE_OFFSET: f64 = 5.0;

/// Hover state for the whole chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverState {
    /// No layer is hovered.
    Idle,
    /// The layer at this index is hovered.
    Hovered(usize),
}

/// Per-layer opacity driver for hover dimming.
#[derive(Clone, Debug)]
pub struct LayerHover {
    state: HoverState,
    opacities: Vec<Transition>,
}

impl LayerHover {
    /// Creates an idle hover controller for `layer_count` layers.
    pub fn new(layer_count: usize) -> Self {
        Self {
            state: HoverState::Idle,
            opacities: alloc::vec![Transition::settled(1.0); layer_count],
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> HoverState {
        self.state
    }

    /// Pointer entered a layer: dim everything else.
    pub fn enter(&mut self, layer: usize, now: f64) {
        self.state = HoverState::Hovered(layer);
        for (i, t) in self.opacities.iter_mut().enumerate() {
            let target = if i == layer { 1.0 } else { DIM_OPACITY };
            if t.target() != target {
                t.retarget(target, now);
            }
        }
    }

    /// Pointer left the chart: restore every layer.
    pub fn leave(&mut self, now: f64) {
        self.state = HoverState::Idle;
        for t in self.opacities.iter_mut() {
            if t.target() != 1.0 {
                t.retarget(1.0, now);
            }
        }
    }

    /// Samples a layer's opacity at `now`.
    pub fn opacity(&self, layer: usize, now: f64) -> f64 {
        self.opacities
            .get(layer)
            .map(|t| t.value_at(now))
            .unwrap_or(1.0)
    }

    /// Returns `true` while any fade is still in flight.
    pub fn is_animating(&self, now: f64) -> bool {
        self.opacities.iter().any(|t| !t.is_complete(now))
    }
}

/// What the tooltip shows for a hovered layer.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipModel {
    /// Display year (fiscal-adjusted).
    pub year: i32,
    /// Hovered category key.
    pub key: String,
    /// Swatch color (the layer's fill).
    pub color: Color,
    /// Raw value for that year.
    pub value: f64,
}

impl TooltipModel {
    /// The formatted value row, e.g. `$250k USD`.
    pub fn value_label(&self) -> String {
        alloc::format!("{} USD", format_currency_si(self.value))
    }
}

/// Splits a fractional year into the displayed year and the lookup offset.
///
/// `index = last_year − year`, then a month index of June (6) or later
/// advances the year and steps the offset back: the dataset buckets by
/// fiscal year, so the second half of a calendar year belongs to the next
/// label. A negative offset (cursor past the newest bucket) comes back as
/// `None`; bounds against the series length are the caller's problem.
pub fn fiscal_lookup(t: f64, last_year: i32) -> (i32, Option<usize>) {
    let mut year = year_of(t);
    let month = month_index_of(t);
    let mut index = i64::from(last_year) - i64::from(year);
    if month >= 6 {
        index -= 1;
        year += 1;
    }
    let index = usize::try_from(index).ok();
    (year, index)
}

/// Builds the tooltip for a hovered layer at a cursor position.
///
/// Returns `None` when the cursor maps outside the layer's series; the
/// tooltip hides instead of faulting on an out-of-range lookup.
pub fn tooltip_at(
    layer: &StackedLayer,
    color: Color,
    x_scale: &ScaleYears,
    mouse_x: f64,
    last_year: i32,
) -> Option<TooltipModel> {
    let t = x_scale.invert(mouse_x);
    let (year, index) = fiscal_lookup(t, last_year);
    let point = layer.points.get(index?)?;
    Some(TooltipModel {
        year,
        key: layer.key.clone(),
        color,
        value: point.value,
    })
}

/// Maps a pointer position to the layer whose band contains it.
///
/// The x coordinate picks the nearest sample index; the y coordinate is
/// inverted into stacked-value space and tested against each band's
/// `[y0, y0 + y]` interval at that index.
pub fn hit_test(
    layers: &[StackedLayer],
    x_scale: &ScaleYears,
    y_scale: &ScaleLinear,
    px: f64,
    py: f64,
) -> Option<usize> {
    let t = x_scale.invert(px);
    let v = y_scale.invert(py);

    for (li, layer) in layers.iter().enumerate() {
        let nearest = layer
            .points
            .iter()
            .min_by(|a, b| {
                let da = (a.x - t).abs();
                let db = (b.x - t).abs();
                da.partial_cmp(&db).unwrap_or(core::cmp::Ordering::Equal)
            })?;
        if v >= nearest.y0 && v <= nearest.y0 + nearest.y {
            return Some(li);
        }
    }
    None
}

/// The full-height cursor guide line.
#[derive(Clone, Copy, Debug, Default)]
pub struct GuideLine {
    x: Option<f64>,
}

impl GuideLine {
    /// Creates a hidden guide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracks a pointer move; the guide sits slightly right of the cursor.
    pub fn track(&mut self, mouse_x: f64) {
        self.x = Some(mouse_x + GUIDE_OFFSET);
    }

    /// Hides the guide.
    pub fn clear(&mut self) {
        self.x = None;
    }

    /// Generates the guide mark spanning the plot height.
    pub fn mark(&self, plot_top: f64, plot_bottom: f64) -> Option<Mark> {
        let x = self.x?;
        let mut line = BezPath::new();
        line.move_to((x, plot_top));
        line.line_to((x, plot_bottom));
        Some(Mark::stroked_path(
            z_order::GUIDE,
            line,
            StrokeStyle::solid(css::WHITE, 1.0),
        ))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;
    use crate::stack::StackPoint;

    fn layer(key: &str, values: &[(f64, f64, f64, f64)]) -> StackedLayer {
        StackedLayer {
            key: key.to_string(),
            points: values
                .iter()
                .map(|&(x, value, y0, y)| StackPoint { x, value, y0, y })
                .collect(),
        }
    }

    #[test]
    fn enter_dims_everything_but_the_hovered_layer() {
        let mut hover = LayerHover::new(3);
        hover.enter(1, 0.0);
        // Mid-fade, the hovered layer holds at 1.0 while others descend.
        assert_eq!(hover.opacity(1, 0.1), 1.0);
        assert!(hover.opacity(0, 0.1) < 1.0);
        // Settled.
        assert!((hover.opacity(0, 1.0) - 0.6).abs() < 1e-9);
        assert!((hover.opacity(2, 1.0) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn leave_restores_from_the_sampled_value() {
        let mut hover = LayerHover::new(2);
        hover.enter(0, 0.0);
        // Interrupt the dim halfway; the restore starts from mid-value.
        let mid = hover.opacity(1, 0.125);
        hover.leave(0.125);
        let resumed = hover.opacity(1, 0.125);
        assert!((mid - resumed).abs() < 1e-9, "restore must not jump");
        assert_eq!(hover.state(), HoverState::Idle);
        assert_eq!(hover.opacity(1, 1.0), 1.0);
        assert!(!hover.is_animating(1.0), "fades settle after 250ms");
    }

    #[test]
    fn fiscal_cutoff_advances_year_from_june() {
        // May 1999: plain offset.
        assert_eq!(fiscal_lookup(1999.4, 2000), (1999, Some(1)));
        // June 1999: counts toward 2000, offset steps back.
        assert_eq!(fiscal_lookup(1999.5, 2000), (2000, Some(0)));
        // Past the most recent year the offset goes negative.
        assert_eq!(fiscal_lookup(2000.6, 2000), (2001, None));
    }

    #[test]
    fn tooltip_hides_outside_the_series() {
        let l = layer("Alpha", &[(2000.0, 9.0, 0.0, 9.0), (1999.0, 7.0, 0.0, 7.0)]);
        let x = ScaleYears::new((1998.0, 2000.0), (0.0, 100.0));

        let tip = tooltip_at(&l, css::BLACK, &x, 99.0, 2000).expect("in-range lookup");
        assert_eq!(tip.year, 2000);
        assert_eq!(tip.value, 9.0);
        assert_eq!(tip.value_label(), "$9.00 USD");

        // Cursor dragged past the plot edge into the next fiscal bucket:
        // the offset goes negative and the tooltip hides.
        assert_eq!(tooltip_at(&l, css::BLACK, &x, 130.0, 2000), None);
    }

    #[test]
    fn hit_test_picks_the_containing_band() {
        let layers = [
            layer("A", &[(1998.0, 2.0, 0.0, 2.0), (1999.0, 2.0, 0.0, 2.0)]),
            layer("B", &[(1998.0, 4.0, 2.0, 4.0), (1999.0, 4.0, 2.0, 4.0)]),
        ];
        let x = ScaleYears::new((1998.0, 1999.0), (0.0, 100.0));
        let y = ScaleLinear::new((0.0, 6.0), (100.0, 0.0));

        // The vertical middle of the plot maps to value 3, inside B [2, 6].
        assert_eq!(hit_test(&layers, &x, &y, 50.0, 50.0), Some(1));
        // Near the bottom of the plot, inside A [0, 2].
        assert_eq!(hit_test(&layers, &x, &y, 50.0, 85.0), Some(0));
        // Below every band.
        assert_eq!(hit_test(&layers, &x, &y, 50.0, 110.0), None);
    }
}
