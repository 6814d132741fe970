// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for chart-generated marks.
//!
//! Marks carry an explicit `z_index` for render ordering. The chart layer sets
//! z-indexes consistently so callers don't have to hand-tune paint order.
//!
//! These values are intentionally coarse. Renderers should use a stable sort
//! by `z_index` so marks generated earlier stay behind marks generated later
//! within the same band.

/// Plot background/frame fills.
pub const PLOT_BACKGROUND: i32 = -100;

/// Filled series marks (the layer bands).
pub const SERIES_FILL: i32 = 0;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels and title.
pub const LEGEND_LABELS: i32 = 70;

/// The cursor guide line, above series but below overlays.
pub const GUIDE: i32 = 90;
/// The intro curtain, covering everything but the tooltip.
pub const CURTAIN: i32 = 100;
/// The hover tooltip.
pub const TOOLTIP: i32 = 110;
