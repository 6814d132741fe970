// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smoothed band path generation for stacked layers.
//!
//! Each layer renders as one closed path: the top edge (`y0 + y`) walked
//! left to right, the bottom edge (`y0`) walked back right to left. Both
//! edges are cardinal-spline interpolated: interior points get tangents
//! `a·(p[i+1] − p[i−1])` with `a = (1 − tension)/2`, joined by Hermite
//! cubics with quadratic end caps. The edges are nudged apart by a fixed
//! sub-pixel inset so adjacent bands meet without hairline gaps.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Vec2};
use peniko::Brush;

use crate::scale::{ScaleLinear, ScaleYears};
use crate::stack::StackedLayer;
use crate::{Mark, z_order};

/// Default cardinal tension for layer bands.
pub(crate) const DEFAULT_TENSION: f64 = 0.7;

/// Default edge inset in scene units.
pub(crate) const DEFAULT_EDGE_INSET: f64 = 0.2;

/// Appends a cardinal spline through `pts` to `path`.
///
/// Assumes the current path point is `pts[0]`. Runs of fewer than three
/// points degrade to straight lines.
fn cardinal_through(path: &mut BezPath, pts: &[Point], tension: f64) {
    if pts.len() < 3 {
        for &q in &pts[1..] {
            path.line_to(q);
        }
        return;
    }

    let a = (1.0 - tension) / 2.0;
    let tangents: Vec<Vec2> = (1..pts.len() - 1)
        .map(|i| (pts[i + 1] - pts[i - 1]) * a)
        .collect();

    // Quadratic cap into the first interior point.
    let t0 = tangents[0];
    path.quad_to(pts[1] - t0 * (2.0 / 3.0), pts[1]);

    if tangents.len() > 1 {
        let mut c2 = pts[2] - tangents[1];
        path.curve_to(pts[1] + t0, c2, pts[2]);
        let mut prev_end = pts[2];
        for i in 2..tangents.len() {
            let end = pts[i + 1];
            let next_c2 = end - tangents[i];
            // Smooth join: reflect the previous control across the knot.
            let c1 = prev_end + (prev_end - c2);
            path.curve_to(c1, next_c2, end);
            c2 = next_c2;
            prev_end = end;
        }
    }

    // Quadratic cap out of the last interior point.
    let last_interior = pts[pts.len() - 2];
    let t_last = tangents[tangents.len() - 1];
    path.quad_to(last_interior + t_last * (2.0 / 3.0), pts[pts.len() - 1]);
}

/// Builds a closed band path between a top and bottom edge.
///
/// `top` and `bottom` are both in left-to-right order; the bottom edge is
/// traversed in reverse to close the band.
pub fn band_path(top: &[Point], bottom: &[Point], tension: f64) -> BezPath {
    let mut path = BezPath::new();
    let Some(&first) = top.first() else {
        return path;
    };
    path.move_to(first);
    cardinal_through(&mut path, top, tension);

    let reversed: Vec<Point> = bottom.iter().rev().copied().collect();
    if let Some(&b0) = reversed.first() {
        path.line_to(b0);
        cardinal_through(&mut path, &reversed, tension);
    }
    path.close_path();
    path
}

/// A per-layer band mark builder.
#[derive(Clone, Debug)]
pub struct LayerBandSpec {
    /// X scale mapping fractional years into scene x.
    pub x_scale: ScaleYears,
    /// Y scale mapping stacked values into scene y.
    pub y_scale: ScaleLinear,
    /// Fill paint for the band.
    pub fill: Brush,
    /// Cardinal tension in `[0, 1]`.
    pub tension: f64,
    /// Sub-pixel nudge applied to both edges after y-mapping.
    pub edge_inset: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl LayerBandSpec {
    /// Creates a band spec with default fill, tension and inset.
    pub fn new(x_scale: ScaleYears, y_scale: ScaleLinear) -> Self {
        Self {
            x_scale,
            y_scale,
            fill: Brush::default(),
            tension: DEFAULT_TENSION,
            edge_inset: DEFAULT_EDGE_INSET,
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the cardinal tension.
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension.clamp(0.0, 1.0);
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the band mark for a stacked layer.
    pub fn mark(&self, layer: &StackedLayer) -> Mark {
        let top: Vec<Point> = layer
            .points
            .iter()
            .map(|p| {
                Point::new(
                    self.x_scale.map(p.x),
                    self.y_scale.map(p.y0 + p.y) + self.edge_inset,
                )
            })
            .collect();
        let bottom: Vec<Point> = layer
            .points
            .iter()
            .map(|p| Point::new(self.x_scale.map(p.x), self.y_scale.map(p.y0) - self.edge_inset))
            .collect();

        Mark::path(self.z_index, band_path(&top, &bottom, self.tension), self.fill.clone())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use kurbo::{PathEl, Shape};

    use super::*;

    #[test]
    fn two_point_edges_stay_linear() {
        let top = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let bottom = vec![Point::new(0.0, 5.0), Point::new(10.0, 5.0)];
        let path = band_path(&top, &bottom, DEFAULT_TENSION);
        assert!(
            path.elements()
                .iter()
                .all(|el| !matches!(el, PathEl::CurveTo(..) | PathEl::QuadTo(..))),
            "short edges must not produce curves"
        );
    }

    #[test]
    fn spline_interpolates_the_edge_points() {
        let top: Vec<Point> = (0..5)
            .map(|i| Point::new(f64::from(i) * 10.0, f64::from(i % 2) * 4.0))
            .collect();
        let bottom: Vec<Point> = top.iter().map(|p| Point::new(p.x, p.y + 20.0)).collect();
        let path = band_path(&top, &bottom, DEFAULT_TENSION);

        // Every on-curve endpoint of the generated segments is one of the
        // input points; the spline passes through its knots.
        let mut on_curve = vec![];
        for el in path.elements() {
            match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => on_curve.push(*p),
                PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => on_curve.push(*p),
                PathEl::ClosePath => {}
            }
        }
        for p in &on_curve {
            let hit = top
                .iter()
                .chain(bottom.iter())
                .any(|q| (q.x - p.x).abs() < 1e-9 && (q.y - p.y).abs() < 1e-9);
            assert!(hit, "unexpected on-curve point {p:?}");
        }

        // The band is a closed region with positive area.
        assert!(path.area().abs() > 0.0, "band should enclose area");
    }
}
