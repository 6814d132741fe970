// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend construction and mark generation.
//!
//! The legend truncates: the first six layers get explicit entries keyed by
//! palette index, and any further layers collapse into a single cosmetic
//! "Other" entry. Rendering is not truncated (every layer still draws), so
//! "Other" stands in for colors, not values.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::layout::Size;
use crate::mark::{Mark, TextAnchor, TextBaseline};
use crate::measure::TextMeasurer;
use crate::scale::ScaleOrdinal;
use crate::stack::StackedLayer;
use crate::z_order;

/// The synthetic key appended when the legend truncates.
pub const OTHER_KEY: &str = "Other";

/// A legend row: category key and swatch color.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Category key (or [`OTHER_KEY`]).
    pub key: String,
    /// Swatch color.
    pub color: Color,
}

/// Builds legend entries for a set of stacked layers.
///
/// The first `min(palette.len(), layers.len())` layers are listed with their
/// palette colors; when more layers exist than palette entries, one
/// `"Other"` entry in the overflow color is appended.
pub fn build_legend(layers: &[StackedLayer], palette: &ScaleOrdinal) -> Vec<LegendEntry> {
    let mut entries: Vec<LegendEntry> = layers
        .iter()
        .take(palette.len())
        .enumerate()
        .map(|(i, layer)| LegendEntry {
            key: layer.key.clone(),
            color: palette.color(i),
        })
        .collect();

    if layers.len() > palette.len() {
        entries.push(LegendEntry {
            key: String::from(OTHER_KEY),
            color: palette.overflow(),
        });
    }

    entries
}

/// A titled vertical list of color swatches with text labels.
#[derive(Clone, Debug)]
pub struct LegendSwatchesSpec {
    /// Optional legend title, shown above the rows.
    pub title: Option<String>,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Label font size.
    pub font_size: f64,
    /// Title font size.
    pub title_font_size: f64,
    /// Label color.
    pub text_fill: Brush,
    /// Entries in display order.
    pub entries: Vec<LegendEntry>,
}

impl LegendSwatchesSpec {
    /// Creates a legend specification with defaults.
    pub fn new(title: Option<String>, entries: Vec<LegendEntry>) -> Self {
        Self {
            title,
            swatch_size: 10.0,
            row_gap: 6.0,
            label_dx: 6.0,
            font_size: 10.0,
            title_font_size: 12.0,
            text_fill: css::BLACK.into(),
            entries,
        }
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    fn row_height(&self) -> f64 {
        self.swatch_size.max(self.font_size)
    }

    fn title_height(&self) -> f64 {
        match &self.title {
            Some(_) => self.title_font_size + self.row_gap,
            None => 0.0,
        }
    }

    /// Measures the desired legend size.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> Size {
        let mut width = match &self.title {
            Some(t) => measurer.width(t, self.title_font_size),
            None => 0.0,
        };
        for e in &self.entries {
            let w = self.swatch_size + self.label_dx + measurer.width(&e.key, self.font_size);
            width = width.max(w);
        }
        let rows = self.entries.len() as f64;
        let height = self.title_height() + rows * self.row_height() + (rows - 1.0).max(0.0) * self.row_gap;
        Size { width, height }
    }

    /// Generates legend marks at the given origin with a shared opacity.
    ///
    /// The opacity is how the fade-in reveal animates the whole block.
    pub fn marks(&self, x: f64, y: f64, opacity: f64) -> Vec<Mark> {
        let mut out = Vec::new();

        if let Some(title) = &self.title {
            out.push(
                Mark::text(
                    z_order::LEGEND_LABELS,
                    Point::new(x, y),
                    title.clone(),
                    self.title_font_size,
                    TextAnchor::Start,
                    TextBaseline::Hanging,
                    self.text_fill.clone(),
                )
                .with_opacity(opacity),
            );
        }

        let row_height = self.row_height();
        for (i, entry) in self.entries.iter().enumerate() {
            let row_y = y + self.title_height() + i as f64 * (row_height + self.row_gap);
            let swatch_y = row_y + (row_height - self.swatch_size) * 0.5;

            out.push(
                Mark::rect(
                    z_order::LEGEND_SWATCHES,
                    Rect::new(x, swatch_y, x + self.swatch_size, swatch_y + self.swatch_size),
                    entry.color,
                )
                .with_opacity(opacity),
            );
            out.push(
                Mark::text(
                    z_order::LEGEND_LABELS,
                    Point::new(x + self.swatch_size + self.label_dx, row_y + row_height * 0.5),
                    entry.key.clone(),
                    self.font_size,
                    TextAnchor::Start,
                    TextBaseline::Middle,
                    self.text_fill.clone(),
                )
                .with_opacity(opacity),
            );
        }

        out
    }
}
