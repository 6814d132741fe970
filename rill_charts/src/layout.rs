// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive layout: breakpoints, chart sizing, tooltip clamping.
//!
//! Layout is a pure function of the viewport width. There is no shared
//! "current breakpoint" anywhere: callers recompute on resize and pass the
//! width into whatever needs it (notably [`tip_x`]).

use kurbo::Rect;

/// A width/height pair in scene units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in scene units.
    pub width: f64,
    /// Height in scene units.
    pub height: f64,
}

/// A named viewport-width tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    /// Narrow viewports, up to and including 480 px.
    Xs,
    /// Everything wider.
    Md,
}

impl Breakpoint {
    /// Returns the breakpoint for a viewport width.
    pub fn for_width(width: f64) -> Self {
        if width <= 480.0 { Self::Xs } else { Self::Md }
    }
}

/// Pre-margin chart height for a breakpoint.
pub fn chart_height(bp: Breakpoint) -> f64 {
    match bp {
        Breakpoint::Xs => 250.0,
        Breakpoint::Md => 500.0,
    }
}

/// Fixed margins around the plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin (axis strip).
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 30.0,
            left: 15.0,
        }
    }
}

/// Arranged chart layout: outer view plus the inner plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds.
    pub view: Size,
    /// The plot rectangle (view inset by margins).
    pub plot: Rect,
}

impl ChartLayout {
    /// Computes the layout for a viewport width and breakpoint.
    pub fn arrange(viewport_width: f64, bp: Breakpoint, margins: Margins) -> Self {
        let width = (viewport_width - margins.left - margins.right).max(0.0);
        let height = (chart_height(bp) - margins.top - margins.bottom).max(0.0);
        Self {
            view: Size {
                width: viewport_width.max(0.0),
                height: chart_height(bp),
            },
            plot: Rect::new(
                margins.left,
                margins.top,
                margins.left + width,
                margins.top + height,
            ),
        }
    }

    /// The y-scale output range: inverted, with a 10 px pad below the top of
    /// the plot so the tallest stack never touches the margin.
    pub fn value_range(&self) -> (f64, f64) {
        (self.plot.y1 - 10.0, self.plot.y0)
    }
}

/// Clamps a tooltip's left offset so it never overflows the right edge.
///
/// Near the edge the tooltip flips to the left of the cursor; elsewhere it
/// trails the cursor by a small gap. The safety margin and gap differ by
/// breakpoint.
pub fn tip_x(mouse_x: f64, bp: Breakpoint, viewport_width: f64, tip_width: f64) -> f64 {
    match bp {
        Breakpoint::Xs => {
            if mouse_x > viewport_width - tip_width - 20.0 {
                mouse_x - tip_width
            } else {
                mouse_x
            }
        }
        Breakpoint::Md => {
            if mouse_x > viewport_width - tip_width - 30.0 {
                mouse_x - 45.0 - tip_width
            } else {
                mouse_x + 10.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn breakpoint_splits_at_480() {
        assert_eq!(Breakpoint::for_width(0.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(480.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(480.1), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(1920.0), Breakpoint::Md);
    }

    #[test]
    fn chart_heights_per_breakpoint() {
        assert_eq!(chart_height(Breakpoint::Xs), 250.0);
        assert_eq!(chart_height(Breakpoint::Md), 500.0);
    }

    #[test]
    fn arrange_insets_by_margins() {
        let layout = ChartLayout::arrange(1000.0, Breakpoint::Md, Margins::default());
        assert_eq!(layout.plot, Rect::new(15.0, 20.0, 980.0, 470.0));
        assert_eq!(layout.value_range(), (460.0, 20.0));
    }

    #[test]
    fn tooltip_clamps_near_the_right_edge() {
        // md: trailing gap away from the edge, flip + 45px pullback near it.
        assert_eq!(tip_x(100.0, Breakpoint::Md, 1000.0, 120.0), 110.0);
        assert_eq!(tip_x(900.0, Breakpoint::Md, 1000.0, 120.0), 900.0 - 45.0 - 120.0);
        // xs: no gap, plain flip.
        assert_eq!(tip_x(100.0, Breakpoint::Xs, 480.0, 120.0), 100.0);
        assert_eq!(tip_x(400.0, Breakpoint::Xs, 480.0, 120.0), 280.0);
    }
}
