// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouping and silhouette stacking.
//!
//! Records arrive flat (one row per category per time point). Shaping runs
//! in two steps:
//! 1. [`group_by_key`] nests rows into one [`SeriesGroup`] per category,
//!    preserving first-seen key order.
//! 2. [`stack`] assigns each group a baseline offset `y0` and thickness `y`
//!    per time index, so bands can be drawn without overlap.
//!
//! Stacking is positional: groups are expected to share the same time grid
//! (every category observed at every time point), and offsets at time index
//! `j` are computed across all groups' `j`-th points.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// One observation of a category at a point in time.
///
/// `year` is a fractional calendar year; records parsed from the CSV land on
/// whole years.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Time of the observation, in fractional calendar years.
    pub year: f64,
    /// Observed value.
    pub value: f64,
    /// Category key.
    pub key: String,
}

/// All records sharing a key, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesGroup {
    /// Category key.
    pub key: String,
    /// `(year, value)` pairs in input order.
    pub points: Vec<(f64, f64)>,
}

/// A stacked sample: time, raw value, baseline offset, and band thickness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackPoint {
    /// Time in fractional calendar years.
    pub x: f64,
    /// Raw input value.
    pub value: f64,
    /// Baseline offset of the band.
    pub y0: f64,
    /// Band thickness.
    pub y: f64,
}

/// A category group augmented with per-sample stack offsets.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedLayer {
    /// Category key.
    pub key: String,
    /// Stacked samples in input order.
    pub points: Vec<StackPoint>,
}

/// Stack baseline offset mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackOffset {
    /// Plain bottom-up stacking from 0.
    Zero,
    /// Streamgraph silhouette: every time index's stack is centered on the
    /// midline of the tallest stack. The baseline at index `j` is
    /// `(max_total − total_j) / 2`, so offsets stay non-negative and the
    /// value scale's `[0, max(y0 + y)]` domain covers the whole stream.
    Silhouette,
}

/// Nests records into per-category groups, preserving first-seen key order.
pub fn group_by_key(records: &[Record]) -> Vec<SeriesGroup> {
    let mut groups: Vec<SeriesGroup> = Vec::new();
    for r in records {
        match groups.iter_mut().find(|g| g.key == r.key) {
            Some(g) => g.points.push((r.year, r.value)),
            None => groups.push(SeriesGroup {
                key: r.key.clone(),
                points: alloc::vec![(r.year, r.value)],
            }),
        }
    }
    groups
}

/// Computes stack offsets for each group, in group order.
///
/// Offsets at time index `j` are computed across every group's `j`-th point;
/// a group with fewer points than the others simply stops contributing (its
/// thickness is treated as 0 past its end).
pub fn stack(groups: &[SeriesGroup], offset: StackOffset) -> Vec<StackedLayer> {
    let samples = groups.iter().map(|g| g.points.len()).max().unwrap_or(0);

    let totals: Vec<f64> = (0..samples)
        .map(|j| {
            groups
                .iter()
                .filter_map(|g| g.points.get(j))
                .map(|&(_, v)| v)
                .sum()
        })
        .collect();
    let max_total = totals.iter().copied().fold(0.0_f64, f64::max);

    let mut layers: Vec<StackedLayer> = groups
        .iter()
        .map(|g| StackedLayer {
            key: g.key.clone(),
            points: Vec::with_capacity(g.points.len()),
        })
        .collect();

    for (j, &total) in totals.iter().enumerate() {
        let mut cursor = match offset {
            StackOffset::Zero => 0.0,
            StackOffset::Silhouette => (max_total - total) * 0.5,
        };
        for (g, layer) in groups.iter().zip(layers.iter_mut()) {
            let Some(&(x, v)) = g.points.get(j) else {
                continue;
            };
            layer.points.push(StackPoint {
                x,
                value: v,
                y0: cursor,
                y: v,
            });
            cursor += v;
        }
    }

    layers
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    fn rec(year: f64, value: f64, key: &str) -> Record {
        Record {
            year,
            value,
            key: key.to_string(),
        }
    }

    #[test]
    fn grouping_preserves_first_seen_key_order() {
        let records = vec![
            rec(1998.0, 1.0, "C"),
            rec(1998.0, 2.0, "A"),
            rec(1998.0, 3.0, "B"),
            rec(1999.0, 4.0, "A"),
            rec(1999.0, 5.0, "C"),
        ];
        let groups = group_by_key(&records);
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["C", "A", "B"]);
        assert_eq!(groups[0].points, vec![(1998.0, 1.0), (1999.0, 5.0)]);
    }

    #[test]
    fn zero_offset_stacks_bottom_up() {
        let groups = group_by_key(&[
            rec(1998.0, 2.0, "A"),
            rec(1998.0, 3.0, "B"),
        ]);
        let layers = stack(&groups, StackOffset::Zero);
        assert_eq!(layers[0].points[0].y0, 0.0);
        assert_eq!(layers[1].points[0].y0, 2.0);
    }

    #[test]
    fn silhouette_bands_are_gapless_and_centered() {
        // Three categories present at every time point.
        let mut records = Vec::new();
        for (year, values) in [(1998.0, [1.0, 2.0, 3.0]), (1999.0, [4.0, 1.0, 2.0])] {
            for (key, v) in ["A", "B", "C"].iter().zip(values) {
                records.push(rec(year, v, key));
            }
        }
        let groups = group_by_key(&records);
        let layers = stack(&groups, StackOffset::Silhouette);

        // The tallest stack (7.0 at 1999) pins the midline at 3.5.
        let max_total = 7.0;
        for j in 0..2 {
            let total: f64 = layers.iter().map(|l| l.points[j].y).sum();
            let input_total: f64 = groups.iter().map(|g| g.points[j].1).sum();
            assert_eq!(total, input_total);

            // Bands tile [min y0, max y0+y] with no gaps or overlap.
            let mut cursor = (max_total - total) * 0.5;
            assert!(cursor >= 0.0, "silhouette offsets stay non-negative");
            for layer in &layers {
                let p = layer.points[j];
                assert!((p.y0 - cursor).abs() < 1e-12, "gap before {}", layer.key);
                cursor = p.y0 + p.y;
            }
            // Each stack is centered on the shared midline.
            let mid = (layers[0].points[j].y0 + cursor) * 0.5;
            assert!((mid - max_total * 0.5).abs() < 1e-12, "stack not centered");
        }
    }

    #[test]
    fn short_groups_stop_contributing() {
        let groups = vec![
            SeriesGroup {
                key: "A".to_string(),
                points: vec![(1998.0, 1.0), (1999.0, 2.0)],
            },
            SeriesGroup {
                key: "B".to_string(),
                points: vec![(1998.0, 3.0)],
            },
        ];
        let layers = stack(&groups, StackOffset::Zero);
        assert_eq!(layers[0].points.len(), 2);
        assert_eq!(layers[1].points.len(), 1);
        assert_eq!(layers[0].points[1].y0, 0.0);
    }
}
