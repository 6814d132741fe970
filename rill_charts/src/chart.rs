// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart composition.
//!
//! [`StreamChartSpec`] owns the chart configuration (palette, layout
//! inputs, legend title) and assembles the complete mark list from stacked
//! layers: background, layer bands, bottom axis, legend, cursor guide,
//! tooltip, and the intro overlay. Ambient state like the color range and
//! the current breakpoint travels through this spec explicitly.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use peniko::color::palette::css;

use crate::animate::IntroAnimation;
use crate::area::LayerBandSpec;
use crate::axis::{AxisSpec, default_axis_style};
use crate::hover::{GuideLine, LayerHover, TooltipModel};
use crate::layout::{Breakpoint, ChartLayout, Margins, tip_x};
use crate::legend::{LegendSwatchesSpec, build_legend};
use crate::mark::{Mark, TextAnchor, TextBaseline};
use crate::measure::TextMeasurer;
use crate::scale::{ScaleLinear, ScaleOrdinal, ScaleYears, ScaleYearsSpec, extent};
use crate::stack::StackedLayer;
use crate::time::year_of;
use crate::z_order;

/// Chart-wide color configuration.
///
/// Passed explicitly wherever colors are needed; there is no page-global
/// palette.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    /// Layer palette, indexed by layer order.
    pub palette: Vec<Color>,
    /// Color for layers (and the legend's "Other" row) past the palette.
    pub overflow: Color,
    /// Chart backdrop, also the curtain color.
    pub backdrop: Color,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            palette: alloc::vec![
                Color::from_rgb8(0x66, 0xc2, 0xa5),
                Color::from_rgb8(0xfc, 0x8d, 0x62),
                Color::from_rgb8(0x8d, 0xa0, 0xcb),
                Color::from_rgb8(0xe7, 0x8a, 0xc3),
                Color::from_rgb8(0xa6, 0xd8, 0x54),
                Color::from_rgb8(0xff, 0xd9, 0x2f),
            ],
            overflow: Color::from_rgb8(0xb3, 0xb3, 0xb3),
            backdrop: Color::from_rgb8(0xfc, 0xfc, 0xfc),
        }
    }
}

impl ChartConfig {
    /// Returns the ordinal color scale over this palette.
    pub fn ordinal(&self) -> ScaleOrdinal {
        ScaleOrdinal::new(self.palette.clone(), self.overflow)
    }
}

/// The calibrated continuous scales for one data load.
#[derive(Clone, Copy, Debug)]
pub struct ChartScales {
    /// Year scale over the data's date extent.
    pub x: ScaleYears,
    /// Value scale over `[0, max(y0 + y)]`, range inverted.
    pub y: ScaleLinear,
}

/// Interaction and animation state folded into one scene sample.
#[derive(Clone, Debug, Default)]
pub struct SceneState<'a> {
    /// Hover controller; `None` renders every layer fully opaque.
    pub hover: Option<&'a LayerHover>,
    /// Tooltip model plus the cursor x it anchors to.
    pub tooltip: Option<(TooltipModel, f64)>,
    /// Cursor guide line.
    pub guide: GuideLine,
    /// Intro overlay; `None` once the page has settled.
    pub intro: Option<&'a IntroAnimation>,
    /// Legend fade-in opacity.
    pub legend_opacity: f64,
    /// Sample time in seconds.
    pub now: f64,
}

impl SceneState<'_> {
    /// A settled scene: no hover, no intro, legend fully revealed.
    pub fn settled() -> Self {
        Self {
            legend_opacity: 1.0,
            ..Self::default()
        }
    }
}

/// A composed streamgraph description.
#[derive(Clone, Debug)]
pub struct StreamChartSpec {
    /// Color configuration.
    pub config: ChartConfig,
    /// Viewport width in pixels; drives the breakpoint and plot width.
    pub viewport_width: f64,
    /// Legend title (the `layerType` page parameter, used verbatim).
    pub legend_title: Option<String>,
    /// Margins around the plot.
    pub margins: Margins,
    /// Approximate axis tick count.
    pub tick_count: usize,
}

impl StreamChartSpec {
    /// Creates a chart spec for a viewport width.
    pub fn new(config: ChartConfig, viewport_width: f64) -> Self {
        Self {
            config,
            viewport_width,
            legend_title: None,
            margins: Margins::default(),
            tick_count: 10,
        }
    }

    /// Sets the legend title.
    pub fn with_legend_title(mut self, title: impl Into<String>) -> Self {
        self.legend_title = Some(title.into());
        self
    }

    /// Returns the breakpoint for the configured viewport.
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::for_width(self.viewport_width)
    }

    /// Computes the chart layout.
    pub fn layout(&self) -> ChartLayout {
        ChartLayout::arrange(self.viewport_width, self.breakpoint(), self.margins)
    }

    /// Calibrates the continuous scales against stacked layers.
    ///
    /// Returns `None` when the layers carry no finite samples.
    pub fn calibrate(&self, layers: &[StackedLayer]) -> Option<ChartScales> {
        let layout = self.layout();
        let points = || layers.iter().flat_map(|l| l.points.iter());

        let (x0, x1) = extent(points().map(|p| p.x))?;
        let (_, top) = extent(points().map(|p| p.y0 + p.y))?;

        Some(ChartScales {
            x: ScaleYears::new((x0, x1), (layout.plot.x0, layout.plot.x1)),
            y: ScaleLinear::new((0.0, top), layout.value_range()),
        })
    }

    /// The most recent calendar year in the data; anchors tooltip lookups.
    pub fn last_year(&self, layers: &[StackedLayer]) -> Option<i32> {
        let (_, max) = extent(layers.iter().flat_map(|l| l.points.iter().map(|p| p.x)))?;
        Some(year_of(max))
    }

    /// The bottom time axis for calibrated scales.
    pub fn axis(&self, scales: &ChartScales) -> AxisSpec {
        AxisSpec::bottom(ScaleYearsSpec::new((
            scales.x.domain_min(),
            scales.x.domain_max(),
        )))
        .with_tick_count(self.tick_count)
        .with_style(default_axis_style())
    }

    /// Generates the layer band marks, dimmed per the hover state.
    pub fn layer_marks(
        &self,
        layers: &[StackedLayer],
        scales: &ChartScales,
        hover: Option<&LayerHover>,
        now: f64,
    ) -> Vec<Mark> {
        let ordinal = self.config.ordinal();
        layers
            .iter()
            .enumerate()
            .map(|(i, layer)| {
                let opacity = hover.map(|h| h.opacity(i, now)).unwrap_or(1.0);
                LayerBandSpec::new(scales.x, scales.y)
                    .with_fill(ordinal.color(i))
                    .with_z_index(z_order::SERIES_FILL + i32::try_from(i).unwrap_or(i32::MAX))
                    .mark(layer)
                    .with_opacity(opacity)
            })
            .collect()
    }

    /// Generates the legend marks inside the plot's top-left corner.
    pub fn legend_marks(&self, layers: &[StackedLayer], opacity: f64) -> Vec<Mark> {
        let entries = build_legend(layers, &self.config.ordinal());
        let spec = LegendSwatchesSpec::new(self.legend_title.clone(), entries);
        let plot = self.layout().plot;
        spec.marks(plot.x0 + 10.0, plot.y0 + 10.0, opacity)
    }

    /// Generates the tooltip marks for a hovered value.
    pub fn tooltip_marks(
        &self,
        tip: &TooltipModel,
        mouse_x: f64,
        measurer: &dyn TextMeasurer,
    ) -> Vec<Mark> {
        const PAD: f64 = 8.0;
        const SWATCH: f64 = 10.0;
        let year_text = alloc::format!("{}", tip.year);
        let value_text = tip.value_label();

        let key_row_w = SWATCH + 4.0 + measurer.width(&tip.key, 10.0);
        let width = 2.0 * PAD
            + measurer
                .width(&year_text, 12.0)
                .max(key_row_w)
                .max(measurer.width(&value_text, 10.0));
        let row_h = 14.0;
        let height = 2.0 * PAD + 3.0 * row_h;

        let plot = self.layout().plot;
        let left = tip_x(mouse_x, self.breakpoint(), self.viewport_width, width);
        let top = plot.y0 + 40.0;

        let mut out = Vec::new();
        out.push(Mark::rect(
            z_order::TOOLTIP,
            Rect::new(left, top, left + width, top + height),
            css::WHITE,
        ));
        out.push(Mark::text(
            z_order::TOOLTIP,
            Point::new(left + PAD, top + PAD),
            year_text,
            12.0,
            TextAnchor::Start,
            TextBaseline::Hanging,
            css::BLACK,
        ));
        out.push(Mark::rect(
            z_order::TOOLTIP,
            Rect::new(
                left + PAD,
                top + PAD + row_h + (row_h - SWATCH) * 0.5,
                left + PAD + SWATCH,
                top + PAD + row_h + (row_h - SWATCH) * 0.5 + SWATCH,
            ),
            tip.color,
        ));
        out.push(Mark::text(
            z_order::TOOLTIP,
            Point::new(left + PAD + SWATCH + 4.0, top + PAD + 1.5 * row_h),
            tip.key.clone(),
            10.0,
            TextAnchor::Start,
            TextBaseline::Middle,
            css::BLACK,
        ));
        out.push(Mark::text(
            z_order::TOOLTIP,
            Point::new(left + PAD, top + PAD + 2.0 * row_h),
            value_text,
            10.0,
            TextAnchor::Start,
            TextBaseline::Hanging,
            css::BLACK,
        ));
        out
    }

    /// Assembles the full scene for one interaction/animation sample.
    ///
    /// Marks come back sorted by z-index (stable within a band).
    pub fn scene(
        &self,
        layers: &[StackedLayer],
        scales: &ChartScales,
        measurer: &dyn TextMeasurer,
        state: &SceneState<'_>,
    ) -> Vec<Mark> {
        let layout = self.layout();
        let mut marks = Vec::new();

        marks.push(Mark::rect(
            z_order::PLOT_BACKGROUND,
            Rect::new(0.0, 0.0, layout.view.width, layout.view.height),
            self.config.backdrop,
        ));

        marks.extend(self.layer_marks(layers, scales, state.hover, state.now));
        marks.extend(self.axis(scales).marks(layout.plot));
        marks.extend(self.legend_marks(layers, state.legend_opacity));

        if let Some(guide) = state.guide.mark(layout.plot.y0, layout.plot.y1) {
            marks.push(guide);
        }
        if let Some(intro) = state.intro {
            marks.extend(intro.marks(state.now));
        }
        if let Some((tip, mouse_x)) = &state.tooltip {
            marks.extend(self.tooltip_marks(tip, *mouse_x, measurer));
        }

        marks.sort_by_key(|m| m.z_index);
        marks
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;
    use crate::measure::HeuristicTextMeasurer;
    use crate::stack::{Record, StackOffset, group_by_key, stack};

    fn records() -> Vec<Record> {
        let mut out = Vec::new();
        for year in [2000.0, 1999.0, 1998.0] {
            for key in ["A", "B"] {
                out.push(Record {
                    year,
                    value: 10.0,
                    key: key.to_string(),
                });
            }
        }
        out
    }

    fn layers() -> Vec<StackedLayer> {
        stack(&group_by_key(&records()), StackOffset::Silhouette)
    }

    #[test]
    fn calibrate_spans_the_data_extent() {
        let spec = StreamChartSpec::new(ChartConfig::default(), 1000.0);
        let layers = layers();
        let scales = spec.calibrate(&layers).expect("finite data");

        assert_eq!(scales.x.domain_min(), 1998.0);
        assert_eq!(scales.x.domain_max(), 2000.0);
        assert_eq!(scales.y.domain_min(), 0.0);
        assert_eq!(scales.y.domain_max(), 20.0);
        assert_eq!(spec.last_year(&layers), Some(2000));
    }

    #[test]
    fn empty_layers_do_not_calibrate() {
        let spec = StreamChartSpec::new(ChartConfig::default(), 1000.0);
        assert!(spec.calibrate(&[]).is_none(), "no data, no scales");
        assert_eq!(spec.last_year(&[]), None);
    }

    #[test]
    fn scene_is_sorted_and_carries_the_legend_title() {
        let spec = StreamChartSpec::new(ChartConfig::default(), 1000.0)
            .with_legend_title("Revenue");
        let layers = layers();
        let scales = spec.calibrate(&layers).expect("finite data");
        let marks = spec.scene(
            &layers,
            &scales,
            &HeuristicTextMeasurer,
            &SceneState::settled(),
        );

        assert!(
            marks.windows(2).all(|w| w[0].z_index <= w[1].z_index),
            "scene must be z-sorted"
        );
        let titles: Vec<_> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                crate::mark::MarkPayload::Text(t) if t.text == "Revenue" => Some(t),
                _ => None,
            })
            .collect();
        assert_eq!(titles.len(), 1);
    }

    #[test]
    fn hovered_scene_dims_the_other_layer() {
        let spec = StreamChartSpec::new(ChartConfig::default(), 1000.0);
        let layers = layers();
        let scales = spec.calibrate(&layers).expect("finite data");

        let mut hover = LayerHover::new(layers.len());
        hover.enter(0, 0.0);
        let state = SceneState {
            hover: Some(&hover),
            now: 1.0,
            legend_opacity: 1.0,
            ..SceneState::default()
        };
        let marks = spec.scene(&layers, &scales, &HeuristicTextMeasurer, &state);

        let band_opacities: Vec<f64> = marks
            .iter()
            .filter(|m| {
                m.z_index >= z_order::SERIES_FILL && m.z_index < z_order::AXIS_RULES
            })
            .map(|m| m.opacity)
            .collect();
        assert_eq!(band_opacities, vec![1.0, 0.6]);
    }
}
