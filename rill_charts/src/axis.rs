// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bottom time axis mark generation.
//!
//! The chart has exactly one axis: a bottom-oriented year axis with a domain
//! line, inner tick marks, and tick labels. There are no end caps on the
//! domain line, and first/last labels are clamped inside the plot so they
//! never overhang the view.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use crate::mark::{Mark, StrokeStyle, TextAnchor, TextBaseline};
use crate::scale::{ScaleYears, ScaleYearsSpec};
use crate::time;
use crate::z_order;

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            label_fill: rule.brush.clone(),
            rule,
            label_font_size: 10.0,
        }
    }
}

/// A bottom-oriented year axis.
#[derive(Clone, Debug)]
pub struct AxisSpec {
    /// The axis scale specification.
    pub scale: ScaleYearsSpec,
    /// Approximate number of ticks.
    pub tick_count: usize,
    /// Tick line length, drawn downward from the domain line.
    pub tick_size: f64,
    /// Padding between the tick end and the tick label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
}

impl AxisSpec {
    /// Creates a bottom axis over the given year domain.
    pub fn bottom(scale: ScaleYearsSpec) -> Self {
        Self {
            scale,
            tick_count: 10,
            tick_size: 5.0,
            tick_padding: 3.0,
            style: AxisStyle::default(),
        }
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Instantiates the axis scale for a given plot rectangle.
    pub fn scale_continuous(&self, plot: Rect) -> ScaleYears {
        self.scale.instantiate((plot.x0, plot.x1))
    }

    /// Generate axis marks along the bottom edge of `plot`.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        let y = plot.y1;
        let tick_size = self.tick_size.abs();
        let scale = self.scale_continuous(plot);
        let ticks = scale.ticks(self.tick_count);

        let mut out = Vec::new();

        // Domain line, flat (no outer tick caps).
        let mut domain = BezPath::new();
        domain.move_to((plot.x0, y));
        domain.line_to((plot.x1, y));
        out.push(Mark::stroked_path(
            z_order::AXIS_RULES,
            domain,
            self.style.rule.clone(),
        ));

        let ticks_len = ticks.len();
        for (i, v) in ticks.iter().copied().enumerate() {
            let x = scale.map(v);
            if x < plot.x0 - 1.0e-9 || x > plot.x1 + 1.0e-9 {
                continue;
            }

            let mut tick = BezPath::new();
            tick.move_to((x, y));
            tick.line_to((x, y + tick_size));
            out.push(Mark::stroked_path(
                z_order::AXIS_RULES,
                tick,
                self.style.rule.clone(),
            ));

            // Clamp the first and last labels inside the plot.
            let (anchor, x) = if i == 0 {
                (TextAnchor::Start, x.clamp(plot.x0, plot.x1))
            } else if i + 1 == ticks_len {
                (TextAnchor::End, x.clamp(plot.x0, plot.x1))
            } else {
                (TextAnchor::Middle, x)
            };
            out.push(Mark::text(
                z_order::AXIS_LABELS,
                Point::new(x, y + tick_size + self.tick_padding),
                time::format_year(v),
                self.style.label_font_size,
                anchor,
                TextBaseline::Hanging,
                self.style.label_fill.clone(),
            ));
        }

        out
    }
}

/// A muted axis style that reads well over the backdrop.
pub(crate) fn default_axis_style() -> AxisStyle {
    AxisStyle {
        rule: StrokeStyle::solid(css::BLACK.with_alpha(160.0 / 255.0), 1.0),
        label_fill: css::BLACK.with_alpha(200.0 / 255.0).into(),
        label_font_size: 10.0,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::mark::MarkPayload;

    #[test]
    fn bottom_axis_emits_domain_ticks_and_labels() {
        let axis = AxisSpec::bottom(ScaleYearsSpec::new((1998.0, 2000.0)));
        let plot = Rect::new(15.0, 20.0, 415.0, 470.0);
        let marks = axis.marks(plot);

        let paths = marks
            .iter()
            .filter(|m| matches!(m.payload, MarkPayload::Path(_)))
            .count();
        let labels: Vec<&str> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();

        // Domain line + one tick per year.
        assert_eq!(paths, 1 + 3);
        assert_eq!(labels, ["1998", "1999", "2000"]);
    }

    #[test]
    fn edge_labels_clamp_and_anchor_inward() {
        let axis = AxisSpec::bottom(ScaleYearsSpec::new((1998.0, 2000.0)));
        let plot = Rect::new(0.0, 0.0, 100.0, 50.0);
        let texts: Vec<_> = axis
            .marks(plot)
            .into_iter()
            .filter_map(|m| match m.payload {
                MarkPayload::Text(t) => Some(t),
                _ => None,
            })
            .collect();

        assert_eq!(texts.first().map(|t| t.anchor), Some(TextAnchor::Start));
        assert_eq!(texts.last().map(|t| t.anchor), Some(TextAnchor::End));
        assert!(texts.iter().all(|t| t.pos.x >= 0.0 && t.pos.x <= 100.0));
    }
}
