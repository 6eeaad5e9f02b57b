//! Geometry kernel: line intersections and border intercepts.
//!
//! All arithmetic runs in `f64`; results are truncated toward zero with
//! [`Point::truncated`]. Degenerate configurations (parallel lines) yield
//! `None` rather than an error.

use crate::types::{Axis, ImageDims, Point, PolarLine};
use nalgebra::Vector3;
use std::f64::consts::{FRAC_PI_2, PI};

/// Line given by two points it passes through.
pub type PointPair = (Point, Point);

/// Intersects two lines given by point pairs.
///
/// Both lines are lifted to homogeneous form (`p × q`) and intersected with a
/// second cross product. With integer inputs every intermediate value is exact,
/// so the only rounding happens in the final division. Returns `None` when the
/// determinant is exactly zero.
pub fn intersect_cartesian(line_a: PointPair, line_b: PointPair) -> Option<Point> {
    let la = homogeneous(line_a.0).cross(&homogeneous(line_a.1));
    let lb = homogeneous(line_b.0).cross(&homogeneous(line_b.1));
    let x = la.cross(&lb);
    if x[2] == 0.0 {
        return None;
    }
    Some(Point::truncated(x[0] / x[2], x[1] / x[2]))
}

#[inline]
fn homogeneous(p: Point) -> Vector3<f64> {
    Vector3::new(p.x as f64, p.y as f64, 1.0)
}

/// Intersects two lines in Hesse normal form.
///
/// The denominator is `sin(angle_a - angle_b)`. Returns `None` when it is
/// exactly zero, or when the angles differ by an exact multiple of π (the
/// sine of `π` is not zero in floating point, but the lines are parallel).
pub fn intersect_polar(line_a: PolarLine, line_b: PolarLine) -> Option<Point> {
    let delta = line_a.angle - line_b.angle;
    let denominator = delta.sin();
    if denominator == 0.0 || delta.rem_euclid(PI) == 0.0 {
        return None;
    }
    let x = line_b.distance * line_a.angle.sin() - line_a.distance * line_b.angle.sin();
    let y = line_a.distance * line_b.angle.cos() - line_b.distance * line_a.angle.cos();
    Some(Point::truncated(x / denominator, y / denominator))
}

/// Intersects `line` with the two borders of `axis`: `x = 0` and
/// `x = axis_limit` for [`Axis::X`], `y = 0` and `y = axis_limit` for
/// [`Axis::Y`].
///
/// The near border comes first. Returns `None` if the line is parallel to the
/// border pair.
pub fn border_intercepts(line: PolarLine, axis_limit: f64, axis: Axis) -> Option<PointPair> {
    let angle = match axis {
        Axis::X => 0.0,
        Axis::Y => FRAC_PI_2,
    };
    let near = intersect_polar(line, PolarLine::new(0.0, angle))?;
    let far = intersect_polar(line, PolarLine::new(axis_limit, angle))?;
    Some((near, far))
}

/// Intersection of two polar lines, kept only if it falls inside the image.
pub fn visible_intersection(line_a: PolarLine, line_b: PolarLine, dims: ImageDims) -> Option<Point> {
    intersect_polar(line_a, line_b).filter(|p| dims.contains(*p))
}

/// Points where an arbitrary line crosses the image frame.
///
/// Borders are tested in the order top, bottom, left, right. A line through a
/// corner reports that corner once per border it touches.
pub fn visible_border_points(line: PolarLine, dims: ImageDims) -> Vec<Point> {
    let borders = [
        PolarLine::new(0.0, FRAC_PI_2),
        PolarLine::new(dims.height as f64, FRAC_PI_2),
        PolarLine::new(0.0, 0.0),
        PolarLine::new(dims.width as f64, 0.0),
    ];
    borders
        .iter()
        .filter_map(|border| visible_intersection(line, *border, dims))
        .collect()
}

/// Euclidean distance between two pixels.
#[inline]
pub fn point_distance(a: Point, b: Point) -> f64 {
    let dx = a.x as f64 - b.x as f64;
    let dy = a.y as f64 - b.y as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Weighted mean of two points, truncated toward zero.
pub fn point_weighted_average(a: Point, b: Point, weight_a: f64, weight_b: f64) -> Point {
    let weight = weight_a + weight_b;
    let x = (a.x as f64 * weight_a + b.x as f64 * weight_b) / weight;
    let y = (a.y as f64 * weight_a + b.y as f64 * weight_b) / weight;
    Point::truncated(x, y)
}
