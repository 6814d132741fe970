// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain render payloads.
//!
//! A [`Mark`] is what this crate hands to a renderer: a geometric payload, a
//! z-index for paint order, and an opacity (the channel the hover and intro
//! animations drive). There is no retained scene or diffing here; the chart
//! is recomputed once per data load and per interaction sample.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Anchor at the start (left edge) of the text.
    Start,
    /// Anchor at the horizontal center.
    Middle,
    /// Anchor at the end (right edge).
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// Baseline through the vertical center.
    Middle,
    /// The usual alphabetic baseline.
    Alphabetic,
    /// Baseline at the top of the text ("hanging").
    Hanging,
}

/// A paint + width pair for stroked paths (domain lines, ticks, guides).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// A filled (and optionally stroked) path.
#[derive(Clone, Debug)]
pub struct PathMark {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Optional stroke.
    pub stroke: Option<StrokeStyle>,
}

/// An axis-aligned filled rectangle.
#[derive(Clone, Debug)]
pub struct RectMark {
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// A run of unshaped text.
#[derive(Clone, Debug)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// Mark geometry variants.
#[derive(Clone, Debug)]
pub enum MarkPayload {
    /// A filled/stroked path.
    Path(PathMark),
    /// A filled rectangle.
    Rect(RectMark),
    /// A text run.
    Text(TextMark),
}

/// A renderable mark: payload + paint order + opacity.
#[derive(Clone, Debug)]
pub struct Mark {
    /// Rendering order hint; renderers sort ascending (stable).
    pub z_index: i32,
    /// Whole-mark opacity in `[0, 1]`.
    pub opacity: f64,
    /// Geometry and paint.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a fully opaque path mark.
    pub fn path(z_index: i32, path: BezPath, fill: impl Into<Brush>) -> Self {
        Self {
            z_index,
            opacity: 1.0,
            payload: MarkPayload::Path(PathMark {
                path,
                fill: fill.into(),
                stroke: None,
            }),
        }
    }

    /// Creates a fully opaque stroked (unfilled) path mark.
    pub fn stroked_path(z_index: i32, path: BezPath, stroke: StrokeStyle) -> Self {
        Self {
            z_index,
            opacity: 1.0,
            payload: MarkPayload::Path(PathMark {
                path,
                fill: Brush::Solid(peniko::Color::TRANSPARENT),
                stroke: Some(stroke),
            }),
        }
    }

    /// Creates a fully opaque rect mark.
    pub fn rect(z_index: i32, rect: Rect, fill: impl Into<Brush>) -> Self {
        Self {
            z_index,
            opacity: 1.0,
            payload: MarkPayload::Rect(RectMark {
                rect,
                fill: fill.into(),
            }),
        }
    }

    /// Creates a fully opaque text mark.
    pub fn text(
        z_index: i32,
        pos: Point,
        text: impl Into<String>,
        font_size: f64,
        anchor: TextAnchor,
        baseline: TextBaseline,
        fill: impl Into<Brush>,
    ) -> Self {
        Self {
            z_index,
            opacity: 1.0,
            payload: MarkPayload::Text(TextMark {
                pos,
                text: text.into(),
                font_size,
                anchor,
                baseline,
                fill: fill.into(),
            }),
        }
    }

    /// Sets the mark opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}
