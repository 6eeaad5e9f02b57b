//! Consensus merging of line candidates.
//!
//! Each orientation stream is folded independently: a candidate is pinned
//! to its two border intercepts, then either absorbed by the first existing
//! consensus line whose endpoints are close enough, or appended as a new
//! consensus line of weight 1. The fold is order dependent; the first match
//! wins even if a later consensus line would be closer.
//!
//! - [`consensus`]: the weighted [`ConsensusLine`] value.
//! - [`strategy`]: endpoint matching rules ([`MergeStrategy`]).

pub mod consensus;
pub mod strategy;

pub use consensus::ConsensusLine;
pub use strategy::MergeStrategy;

use crate::types::{Axis, ImageDims, PolarLine};
use log::debug;

/// Divisor applied to the image height to derive the default merge threshold.
pub const DEFAULT_THRESHOLD_DIVISOR: f64 = 18.0;

/// Default merge threshold for an image: one eighteenth of its height.
pub fn default_distance_threshold(dims: ImageDims) -> f64 {
    dims.height as f64 / DEFAULT_THRESHOLD_DIVISOR
}

/// Folds `candidates` into consensus lines using the intercept strategy.
///
/// Candidates whose orientation does not match `axis` or whose border
/// intercepts are undefined are skipped.
pub fn merge_stream(
    candidates: &[PolarLine],
    axis_limit: f64,
    distance_threshold: f64,
    axis: Axis,
) -> Vec<ConsensusLine> {
    merge_stream_with(
        candidates,
        axis_limit,
        distance_threshold,
        axis,
        MergeStrategy::Intercept,
    )
}

/// Same fold as [`merge_stream`] with an explicit matching rule.
pub fn merge_stream_with(
    candidates: &[PolarLine],
    axis_limit: f64,
    distance_threshold: f64,
    axis: Axis,
    strategy: MergeStrategy,
) -> Vec<ConsensusLine> {
    let mut merged: Vec<ConsensusLine> = Vec::new();
    let mut skipped = 0usize;
    for candidate in candidates {
        let observation = match ConsensusLine::from_polar(*candidate, axis_limit, axis) {
            Ok(line) => line,
            Err(err) => {
                skipped += 1;
                debug!(
                    "merge_stream[{axis:?}]: skip rho={:.2} theta={:.4}: {err}",
                    candidate.distance, candidate.angle
                );
                continue;
            }
        };
        fold_into(&mut merged, observation, distance_threshold, axis, strategy);
    }
    debug!(
        "merge_stream[{axis:?}]: {} candidates -> {} consensus lines ({} skipped, strategy={strategy:?})",
        candidates.len(),
        merged.len(),
        skipped
    );
    merged
}

/// Merges `observation` into the first compatible line, or appends it.
fn fold_into(
    lines: &mut Vec<ConsensusLine>,
    observation: ConsensusLine,
    threshold: f64,
    axis: Axis,
    strategy: MergeStrategy,
) {
    for line in lines.iter_mut() {
        if let Some(updated) = line.merged(&observation, threshold, strategy, axis) {
            *line = updated;
            return;
        }
    }
    lines.push(observation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn vertical(x: f64) -> PolarLine {
        PolarLine::new(x, 0.0)
    }

    fn offsets(lines: &[ConsensusLine]) -> Vec<(i32, f64)> {
        lines.iter().map(|l| (l.endpoint_a.x, l.weight)).collect()
    }

    #[test]
    fn transitive_merge_depends_on_order() {
        // C1~C2 and C2~C3 are within 10 px, C1~C3 is not.
        let (c1, c2, c3) = (vertical(100.0), vertical(109.0), vertical(112.0));

        let forward = merge_stream(&[c1, c2, c3], 500.0, 10.0, Axis::Y);
        assert_eq!(forward.len(), 1);
        // (100 + 109) / 2 = 104.5 -> 104; (104 * 2 + 112) / 3 = 106.67 -> 106
        assert_eq!(forward[0].endpoint_a, Point::new(106, 0));
        assert_eq!(forward[0].endpoint_b, Point::new(106, 500));
        assert_eq!(forward[0].weight, 3.0);

        let shuffled = merge_stream(&[c1, c3, c2], 500.0, 10.0, Axis::Y);
        assert_eq!(offsets(&shuffled), vec![(104, 2.0), (112, 1.0)]);
    }

    #[test]
    fn first_match_wins_over_best_match() {
        let lines = [vertical(100.0), vertical(116.0), vertical(109.0)];
        let merged = merge_stream(&lines, 500.0, 10.0, Axis::Y);
        // 109 is closer to 116 but 100 was created first.
        assert_eq!(offsets(&merged), vec![(104, 2.0), (116, 1.0)]);
    }

    #[test]
    fn threshold_is_strict() {
        let merged = merge_stream(&[vertical(100.0), vertical(110.0)], 500.0, 10.0, Axis::Y);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn weight_is_conserved() {
        let candidates = [
            vertical(100.0),
            PolarLine::new(50.0, FRAC_PI_2),
            vertical(103.0),
            PolarLine::new(80.0, FRAC_PI_4),
            vertical(300.0),
            vertical(101.0),
            vertical(305.0),
            PolarLine::new(70.0, FRAC_PI_2),
        ];
        let verticals = merge_stream(&candidates, 500.0, 10.0, Axis::Y);
        let total: f64 = verticals.iter().map(|l| l.weight).sum();
        assert_eq!(total, 5.0);
        assert_eq!(verticals.len(), 2);

        let horizontals = merge_stream(&candidates, 500.0, 10.0, Axis::X);
        let total: f64 = horizontals.iter().map(|l| l.weight).sum();
        assert_eq!(total, 2.0);
    }

    #[test]
    fn streams_do_not_share_candidates() {
        let candidates = [vertical(100.0), PolarLine::new(100.0, FRAC_PI_2)];
        assert_eq!(merge_stream(&candidates, 500.0, 10.0, Axis::Y).len(), 1);
        assert_eq!(merge_stream(&candidates, 500.0, 10.0, Axis::X).len(), 1);
    }

    #[test]
    fn empty_stream_is_valid() {
        let only_diagonals = [PolarLine::new(10.0, FRAC_PI_4)];
        assert!(merge_stream(&only_diagonals, 500.0, 10.0, Axis::X).is_empty());
        assert!(merge_stream(&[], 500.0, 10.0, Axis::Y).is_empty());
    }

    #[test]
    fn saturated_intercepts_stay_separate() {
        // Intercepts far off the image saturate to i32::MAX / i32::MIN.
        let lines = [PolarLine::new(3e9, 0.0), PolarLine::new(-3e9, 0.0)];
        for strategy in [MergeStrategy::Intercept, MergeStrategy::Euclidean] {
            let merged = merge_stream_with(&lines, 500.0, 10.0, Axis::Y, strategy);
            assert_eq!(merged.len(), 2, "{strategy:?}");
            assert_eq!(merged[0].endpoint_a.x, i32::MAX);
            assert_eq!(merged[1].endpoint_a.x, i32::MIN);
        }
        let twice = merge_stream(&[lines[0], lines[0]], 500.0, 10.0, Axis::Y);
        assert_eq!(twice.len(), 1);
        assert_eq!(twice[0].weight, 2.0);
    }

    #[test]
    fn euclidean_strategy_folds_the_same_axis_aligned_lines() {
        let lines = [vertical(100.0), vertical(104.0), vertical(200.0)];
        let merged = merge_stream_with(&lines, 500.0, 10.0, Axis::Y, MergeStrategy::Euclidean);
        assert_eq!(offsets(&merged), vec![(102, 2.0), (200, 1.0)]);
    }

    #[test]
    fn default_threshold_scales_with_height() {
        assert_eq!(default_distance_threshold(ImageDims::new(640, 360)), 20.0);
        assert_relative_eq!(
            default_distance_threshold(ImageDims::new(500, 500)),
            27.777_777_777_777_78,
            epsilon = 1e-9
        );
    }
}
