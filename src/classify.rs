//! Orientation classification of polar line candidates.

use crate::types::{Orientation, PolarLine};
use serde::Serialize;

/// A line counts as vertical when `|sin(angle)|` stays under this bound.
pub const VERTICAL_SIN_TOL: f64 = 0.1;
/// A line counts as horizontal when `|cos(angle)|` stays under this bound.
pub const HORIZONTAL_COS_TOL: f64 = 0.1;

/// Classifies a Hough angle (normal direction, radians).
///
/// Horizontal is tested first. The two bands are disjoint because
/// `sin² + cos² = 1`, so the order only matters if the tolerances are raised
/// above `1/√2`. Everything else is a near-diagonal and maps to
/// [`Orientation::None`].
#[inline]
pub fn classify(angle_radians: f64) -> Orientation {
    if angle_radians.cos().abs() < HORIZONTAL_COS_TOL {
        Orientation::Horizontal
    } else if angle_radians.sin().abs() < VERTICAL_SIN_TOL {
        Orientation::Vertical
    } else {
        Orientation::None
    }
}

/// Candidates partitioned by orientation, each stream in input order.
#[derive(Clone, Debug, Default, Serialize)]
pub struct OrientationSplit {
    pub horizontal: Vec<PolarLine>,
    pub vertical: Vec<PolarLine>,
    pub dropped: Vec<PolarLine>,
}

pub fn split_by_orientation(candidates: &[PolarLine]) -> OrientationSplit {
    let mut split = OrientationSplit::default();
    for line in candidates {
        match classify(line.angle) {
            Orientation::Horizontal => split.horizontal.push(*line),
            Orientation::Vertical => split.vertical.push(*line),
            Orientation::None => split.dropped.push(*line),
        }
    }
    split
}
