use crate::geometry::point_distance;
use crate::types::{Axis, Point};
use serde::{Deserialize, Serialize};

/// Rule deciding whether two endpoint pairs describe the same physical line.
///
/// Endpoints are always paired by position (near border with near border);
/// crossed pairings are never tried.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Compare only the offset coordinate of each endpoint (`y` for
    /// horizontals, `x` for verticals). Both deltas must be under threshold.
    #[default]
    Intercept,
    /// Compare the Euclidean distance of each endpoint pair. Both distances
    /// must be under threshold.
    Euclidean,
}

impl MergeStrategy {
    pub fn endpoints_match(
        self,
        a: (Point, Point),
        b: (Point, Point),
        threshold: f64,
        axis: Axis,
    ) -> bool {
        match self {
            MergeStrategy::Intercept => {
                let d0 = (axis.offset_of(a.0) as f64 - axis.offset_of(b.0) as f64).abs();
                let d1 = (axis.offset_of(a.1) as f64 - axis.offset_of(b.1) as f64).abs();
                d0 < threshold && d1 < threshold
            }
            MergeStrategy::Euclidean => {
                point_distance(a.0, b.0) < threshold && point_distance(a.1, b.1) < threshold
            }
        }
    }
}
