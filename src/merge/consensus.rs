use super::strategy::MergeStrategy;
use crate::classify::classify;
use crate::error::GeometryError;
use crate::geometry::{border_intercepts, point_weighted_average, PointPair};
use crate::types::{Axis, Point, PolarLine};
use serde::{Deserialize, Serialize};

/// One or more detections of the same physical line, pinned by the two
/// points where it crosses a border pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsensusLine {
    /// Number of detections folded into this line.
    pub weight: f64,
    /// Intercept with the near border (`x = 0` or `y = 0`).
    pub endpoint_a: Point,
    /// Intercept with the far border (`x = limit` or `y = limit`).
    pub endpoint_b: Point,
}

impl ConsensusLine {
    pub fn new(weight: f64, endpoint_a: Point, endpoint_b: Point) -> Self {
        Self {
            weight,
            endpoint_a,
            endpoint_b,
        }
    }

    /// Single-detection consensus line for a candidate of the `axis` stream.
    pub fn from_polar(line: PolarLine, axis_limit: f64, axis: Axis) -> Result<Self, GeometryError> {
        let expected = axis.orientation();
        let found = classify(line.angle);
        if found != expected {
            return Err(GeometryError::OrientationMismatch { expected, found });
        }
        let (a, b) = border_intercepts(line, axis_limit, axis)
            .ok_or(GeometryError::ParallelToBorder { axis })?;
        Ok(Self::new(1.0, a, b))
    }

    #[inline]
    pub fn endpoints(&self) -> PointPair {
        (self.endpoint_a, self.endpoint_b)
    }

    /// Weighted average of `self` and `other` if their endpoints match under
    /// `strategy`; `None` otherwise.
    ///
    /// Weights add up; each endpoint becomes the weight-averaged point,
    /// truncated toward zero.
    pub fn merged(
        &self,
        other: &ConsensusLine,
        threshold: f64,
        strategy: MergeStrategy,
        axis: Axis,
    ) -> Option<ConsensusLine> {
        if !strategy.endpoints_match(self.endpoints(), other.endpoints(), threshold, axis) {
            return None;
        }
        Some(ConsensusLine {
            weight: self.weight + other.weight,
            endpoint_a: point_weighted_average(
                self.endpoint_a,
                other.endpoint_a,
                self.weight,
                other.weight,
            ),
            endpoint_b: point_weighted_average(
                self.endpoint_b,
                other.endpoint_b,
                self.weight,
                other.weight,
            ),
        })
    }
}
