// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Streamgraph chart building blocks.
//!
//! This crate turns a categorical time series into a renderable streamgraph:
//! - **Shaping** groups records by category and computes a silhouette-offset
//!   stack (each category gets a non-overlapping band per time point).
//! - **Scales** map years and stacked values into plot coordinates.
//! - **Guides** (a bottom time axis, a truncating legend) are generated as
//!   plain marks.
//! - **Interaction** is modeled explicitly: a per-layer hover state machine
//!   with cancelable opacity transitions, a tooltip model, a cursor guide,
//!   and a curtain intro animation.
//!
//! Marks are plain payloads (paths, rects, text) with a z-index and an
//! opacity; rendering backends consume them in z order. Time is numeric
//! (fractional calendar years), so the crate stays `no_std`; callers sample
//! a clock at the edge and pass plain seconds into the animation types.

#![no_std]

extern crate alloc;

mod animate;
mod area;
mod axis;
mod chart;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod hover;
mod layout;
mod legend;
mod mark;
mod measure;
mod scale;
mod stack;
mod time;
mod z_order;

pub use animate::{Easing, IntroAnimation, Transition};
pub use area::{LayerBandSpec, band_path};
pub use axis::{AxisSpec, AxisStyle};
pub use chart::{ChartConfig, ChartScales, SceneState, StreamChartSpec};
pub use format::format_currency_si;
pub use hover::{
    GuideLine, HoverState, LayerHover, TooltipModel, fiscal_lookup, hit_test, tooltip_at,
};
pub use layout::{Breakpoint, ChartLayout, Margins, Size, chart_height, tip_x};
pub use legend::{LegendEntry, LegendSwatchesSpec, OTHER_KEY, build_legend};
pub use mark::{
    Mark, MarkPayload, PathMark, RectMark, StrokeStyle, TextAnchor, TextBaseline, TextMark,
};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use scale::{ScaleLinear, ScaleLinearSpec, ScaleOrdinal, ScaleYears, ScaleYearsSpec, extent};
pub use stack::{Record, SeriesGroup, StackOffset, StackPoint, StackedLayer, group_by_key, stack};
pub use time::{format_year, month_index_of, nice_year_ticks, year_of};
pub use z_order::*;
