// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Streamgraph SVG demo.
//!
//! Renders a CSV time series as a silhouette-stacked streamgraph and writes
//! it to an SVG file. Interactive state is driven headlessly: `--hover x,y`
//! runs the pointer pipeline (hit-test, dimming, tooltip, guide line) and
//! `--at seconds` samples the intro animation timeline instead of the
//! settled chart.

mod svg;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rill_charts::{
    ChartConfig, GuideLine, HeuristicTextMeasurer, IntroAnimation, LayerHover, Mark,
    PLOT_BACKGROUND, SceneState, StackOffset, StreamChartSpec, TOOLTIP, TextAnchor, TextBaseline,
    Transition, group_by_key, hit_test, stack, tooltip_at,
};
use rill_data::{LoadError, load_records, param_value};
use tracing::{error, info};

/// Seconds by which every load-time animation has settled.
const SETTLED: f64 = 10.0;

#[derive(Debug, Parser)]
#[command(name = "rill_charts_demo")]
#[command(about = "Render a CSV time series as a streamgraph SVG.")]
struct Args {
    /// Page URL carrying `csvpath` and `layerType` query parameters.
    #[arg(long)]
    page_url: Option<String>,

    /// CSV path; overrides the page URL parameter.
    #[arg(long)]
    csvpath: Option<String>,

    /// Legend title; overrides the page URL parameter.
    #[arg(long)]
    layer_type: Option<String>,

    /// Viewport width in pixels (drives the responsive breakpoint).
    #[arg(long, default_value_t = 1000.0)]
    viewport_width: f64,

    /// Pointer position `x,y` to run the hover pipeline headlessly.
    #[arg(long)]
    hover: Option<String>,

    /// Intro timeline sample time in seconds (the wipe runs 0.1..1.1).
    #[arg(long)]
    at: Option<f64>,

    /// Output SVG path.
    #[arg(long, default_value = "streamgraph.svg")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let csvpath = match (&args.csvpath, &args.page_url) {
        (Some(path), _) => path.clone(),
        (None, Some(url)) => param_value(url, "csvpath")
            .map(str::to_owned)
            .context("page URL has no `csvpath` parameter")?,
        (None, None) => bail!("pass --csvpath or a --page-url with a `csvpath` parameter"),
    };
    let layer_type = args.layer_type.clone().or_else(|| {
        args.page_url
            .as_deref()
            .and_then(|url| param_value(url, "layerType"))
            .map(str::to_owned)
    });

    let spec = {
        let mut spec = StreamChartSpec::new(ChartConfig::default(), args.viewport_width);
        if let Some(title) = &layer_type {
            spec = spec.with_legend_title(title.clone());
        }
        spec
    };

    let records = match load_records(&csvpath) {
        Ok(records) => records,
        Err(err) => {
            error!(%csvpath, %err, "could not load chart data");
            write_fallback(&args, &spec, &err)?;
            bail!("could not load {csvpath}: {err}");
        }
    };
    info!(rows = records.len(), %csvpath, "loaded chart data");

    let layers = stack(&group_by_key(&records), StackOffset::Silhouette);
    let Some(scales) = spec.calibrate(&layers) else {
        write_fallback_message(&args, &spec, "CSV contained no data rows")?;
        bail!("{csvpath} contained no data rows");
    };

    let now = args.at.unwrap_or(SETTLED);
    let layout = spec.layout();
    let intro = IntroAnimation::new(layout.plot, spec.config.backdrop, 0.0);

    // The legend fades in over 300 ms as soon as data arrives.
    let legend_fade = Transition::new(0.0, 1.0, 0.0).with_duration(0.3);

    let mut hover = LayerHover::new(layers.len());
    let mut guide = GuideLine::new();
    let mut tooltip = None;

    if let Some(pointer) = &args.hover {
        let (px, py) = parse_point(pointer)?;
        guide.track(px);
        if let Some(layer) = hit_test(&layers, &scales.x, &scales.y, px, py) {
            // Enter early enough that the dim has settled by the sample time.
            hover.enter(layer, now - 1.0);
            let last_year = spec.last_year(&layers).context("data has no years")?;
            let ordinal = spec.config.ordinal();
            tooltip = tooltip_at(&layers[layer], ordinal.color(layer), &scales.x, px, last_year)
                .map(|tip| (tip, px));
            if tooltip.is_none() {
                info!(px, "cursor outside the series; tooltip hidden");
            }
        }
    }

    let state = SceneState {
        hover: Some(&hover),
        tooltip,
        guide,
        intro: Some(&intro),
        legend_opacity: legend_fade.value_at(now),
        now,
    };

    let marks = spec.scene(&layers, &scales, &HeuristicTextMeasurer, &state);
    let document = svg::render(layout.view, &marks);
    std::fs::write(&args.out, document)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    info!(
        out = %args.out.display(),
        layers = layers.len(),
        marks = marks.len(),
        "wrote streamgraph"
    );
    Ok(())
}

/// Renders the load error as a visible chart-sized fallback, so a bad
/// resource never leaves a silently blank page.
fn write_fallback(args: &Args, spec: &StreamChartSpec, err: &LoadError) -> Result<()> {
    write_fallback_message(args, spec, &format!("Could not load chart data: {err}"))
}

fn write_fallback_message(args: &Args, spec: &StreamChartSpec, message: &str) -> Result<()> {
    let layout = spec.layout();
    let marks = vec![
        Mark::rect(
            PLOT_BACKGROUND,
            kurbo::Rect::new(0.0, 0.0, layout.view.width, layout.view.height),
            spec.config.backdrop,
        ),
        Mark::text(
            TOOLTIP,
            kurbo::Point::new(layout.view.width * 0.5, layout.view.height * 0.5),
            message,
            12.0,
            TextAnchor::Middle,
            TextBaseline::Middle,
            peniko::color::palette::css::BLACK,
        ),
    ];
    let document = svg::render(layout.view, &marks);
    std::fs::write(&args.out, document)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    Ok(())
}

fn parse_point(raw: &str) -> Result<(f64, f64)> {
    let (x, y) = raw
        .split_once(',')
        .with_context(|| format!("--hover expects `x,y`, got {raw:?}"))?;
    Ok((
        x.trim().parse().with_context(|| format!("bad x in {raw:?}"))?,
        y.trim().parse().with_context(|| format!("bad y in {raw:?}"))?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_points_parse() {
        assert_eq!(parse_point("10,20.5").unwrap(), (10.0, 20.5));
        assert!(parse_point("10").is_err(), "missing comma must fail");
        assert!(parse_point("a,b").is_err(), "non-numeric must fail");
    }
}
