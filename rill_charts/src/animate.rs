// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned, cancelable transitions and the intro animation.
//!
//! Time is a plain `f64` in seconds; callers sample a monotonic clock at the
//! edge and pass it in. A [`Transition`] is a value tween with a delay,
//! duration and easing. Retargeting starts from the *currently sampled*
//! value: a hover that interrupts an in-flight fade continues from wherever
//! the fade got to, instead of stacking a second animation on top.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Rect};
use peniko::Color;
use peniko::color::palette::css;

use crate::mark::{Mark, StrokeStyle};
use crate::z_order;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Easing curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Cubic ease-in-out (the default for hover fades).
    CubicInOut,
    /// Exponential ease-in, `2^(10(t-1))` (the curtain wipe).
    ExpIn,
}

impl Easing {
    fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * t * t * t
                } else {
                    let t = t - 2.0;
                    0.5 * (t * t * t + 2.0)
                }
            }
            Self::ExpIn => {
                if t <= 0.0 {
                    0.0
                } else {
                    2.0_f64.powf(10.0 * (t - 1.0))
                }
            }
        }
    }
}

/// A value tween with delay, duration and easing.
#[derive(Clone, Copy, Debug)]
pub struct Transition {
    from: f64,
    to: f64,
    start: f64,
    delay: f64,
    duration: f64,
    easing: Easing,
}

/// The default fade duration in seconds (hover dims, tooltip fades).
const FADE_DURATION: f64 = 0.25;

impl Transition {
    /// Creates a tween from `from` to `to` starting at `now`, with the
    /// default 250 ms duration and cubic-in-out easing.
    pub fn new(from: f64, to: f64, now: f64) -> Self {
        Self {
            from,
            to,
            start: now,
            delay: 0.0,
            duration: FADE_DURATION,
            easing: Easing::CubicInOut,
        }
    }

    /// Creates an already-settled transition holding `value`.
    pub fn settled(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            delay: 0.0,
            duration: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Sets the delay before the tween begins.
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Sets the tween duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    /// Sets the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Samples the tween at `now`.
    pub fn value_at(&self, now: f64) -> f64 {
        let elapsed = now - self.start - self.delay;
        if elapsed <= 0.0 {
            return self.from;
        }
        if self.duration <= 0.0 || elapsed >= self.duration {
            return self.to;
        }
        let t = self.easing.apply(elapsed / self.duration);
        self.from + (self.to - self.from) * t
    }

    /// Returns the value the tween is heading toward.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Returns the absolute time the tween settles.
    pub fn end_time(&self) -> f64 {
        self.start + self.delay + self.duration
    }

    /// Returns `true` once the tween has settled.
    pub fn is_complete(&self, now: f64) -> bool {
        now >= self.end_time()
    }

    /// Redirects the tween toward a new target, starting from the currently
    /// sampled value. This cancels the in-flight tween: there is never more
    /// than one animation per value.
    pub fn retarget(&mut self, to: f64, now: f64) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.delay = 0.0;
    }
}

/// The intro reveal: a backdrop-colored curtain anchored at the right edge
/// of the plot wipes to zero width, uncovering the chart left to right; a
/// guide line rides the curtain edge and fades out once the wipe completes.
#[derive(Clone, Debug)]
pub struct IntroAnimation {
    plot: Rect,
    fill: Color,
    wipe: Transition,
    guide_slide: Transition,
    guide_fade: Transition,
}

impl IntroAnimation {
    /// Creates the intro timeline starting at `now`.
    pub fn new(plot: Rect, fill: Color, now: f64) -> Self {
        let wipe = Transition::new(plot.width(), 0.0, now)
            .with_delay(0.1)
            .with_duration(1.0)
            .with_easing(Easing::ExpIn);
        let guide_slide = Transition::new(plot.x0, plot.x1, now)
            .with_delay(0.1)
            .with_duration(1.0)
            .with_easing(Easing::ExpIn);
        let guide_fade = Transition::new(1.0, 0.0, wipe.end_time());
        Self {
            plot,
            fill,
            wipe,
            guide_slide,
            guide_fade,
        }
    }

    /// Returns `true` once the curtain and the trailing fade are done.
    pub fn is_complete(&self, now: f64) -> bool {
        self.guide_fade.is_complete(now)
    }

    /// Generates the intro overlay marks for time `now`.
    pub fn marks(&self, now: f64) -> Vec<Mark> {
        let mut out = Vec::new();

        let width = self.wipe.value_at(now);
        if width > 0.0 {
            out.push(Mark::rect(
                z_order::CURTAIN,
                Rect::new(self.plot.x1 - width, self.plot.y0, self.plot.x1, self.plot.y1),
                self.fill,
            ));
        }

        let opacity = if now < self.guide_fade.end_time() {
            if self.wipe.is_complete(now) {
                self.guide_fade.value_at(now)
            } else {
                1.0
            }
        } else {
            0.0
        };
        if opacity > 0.0 {
            let x = self.guide_slide.value_at(now);
            let mut line = BezPath::new();
            line.move_to((x, self.plot.y0));
            line.line_to((x, self.plot.y1));
            out.push(
                Mark::stroked_path(z_order::CURTAIN, line, StrokeStyle::solid(css::WHITE, 1.0))
                    .with_opacity(opacity),
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn transition_respects_delay_and_duration() {
        let t = Transition::new(0.0, 10.0, 1.0)
            .with_delay(0.5)
            .with_duration(1.0)
            .with_easing(Easing::Linear);
        assert_eq!(t.value_at(1.2), 0.0);
        assert!((t.value_at(2.0) - 5.0).abs() < 1e-9);
        assert_eq!(t.value_at(3.0), 10.0);
        assert!(t.is_complete(2.5));
    }

    #[test]
    fn retarget_starts_from_the_sampled_value() {
        let mut t = Transition::new(1.0, 0.6, 0.0).with_easing(Easing::Linear);
        // Halfway through the dim, hover moves elsewhere: restore to 1.0.
        let mid = t.value_at(0.125);
        assert!((mid - 0.8).abs() < 1e-9);
        t.retarget(1.0, 0.125);
        assert!((t.value_at(0.125) - 0.8).abs() < 1e-9);
        assert_eq!(t.target(), 1.0);
        assert_eq!(t.value_at(0.5), 1.0);
    }

    #[test]
    fn exp_ease_hits_both_ends() {
        assert_eq!(Easing::ExpIn.apply(0.0), 0.0);
        assert_eq!(Easing::ExpIn.apply(1.0), 1.0);
        assert!(Easing::ExpIn.apply(0.5) < 0.5, "exp-in starts slow");
    }

    #[test]
    fn curtain_shrinks_to_reveal_left_to_right() {
        let plot = Rect::new(15.0, 20.0, 415.0, 470.0);
        let intro = IntroAnimation::new(plot, css::WHITE, 0.0);

        // Before the delay elapses the curtain covers the full plot.
        let marks = intro.marks(0.05);
        assert!(!marks.is_empty(), "curtain should be present");

        // After the wipe the curtain mark disappears and the guide fades.
        assert!(intro.is_complete(2.0));
        assert!(intro.marks(2.0).is_empty(), "intro leaves nothing behind");
    }
}
