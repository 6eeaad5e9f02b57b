use serde::{Deserialize, Serialize};

/// Pixel coordinate. Produced from float geometry by truncation toward zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncates float coordinates toward zero (`3.9 -> 3`, `-0.5 -> 0`).
    #[inline]
    pub fn truncated(x: f64, y: f64) -> Self {
        Self {
            x: x as i32,
            y: y as i32,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> [f64; 2] {
        [self.x as f64, self.y as f64]
    }
}

/// Line in Hesse normal form: `x cos(angle) + y sin(angle) = distance`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolarLine {
    pub distance: f64,
    /// Angle of the normal in radians.
    pub angle: f64,
}

impl PolarLine {
    pub const fn new(distance: f64, angle: f64) -> Self {
        Self { distance, angle }
    }
}

/// Coarse orientation of a detected line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
    None,
}

impl Orientation {
    /// Border axis a line of this orientation is clipped against.
    pub fn axis(self) -> Option<Axis> {
        match self {
            Orientation::Horizontal => Some(Axis::X),
            Orientation::Vertical => Some(Axis::Y),
            Orientation::None => None,
        }
    }
}

/// Pair of image borders used to pin a line down by two points.
///
/// - `X`: the borders `x = 0` and `x = limit`; used for horizontal lines,
///   whose intercepts differ in `y`.
/// - `Y`: the borders `y = 0` and `y = limit`; used for vertical lines,
///   whose intercepts differ in `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Orientation of lines that this border pair crosses.
    pub fn orientation(self) -> Orientation {
        match self {
            Axis::X => Orientation::Horizontal,
            Axis::Y => Orientation::Vertical,
        }
    }

    /// Coordinate along which two lines of this stream are told apart.
    #[inline]
    pub fn offset_of(self, p: Point) -> i32 {
        match self {
            Axis::X => p.y,
            Axis::Y => p.x,
        }
    }

    /// Border limit for this axis given the source image size.
    pub fn limit(self, dims: ImageDims) -> f64 {
        match self {
            Axis::X => dims.width as f64,
            Axis::Y => dims.height as f64,
        }
    }
}

/// Pixel dimensions of the source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDims {
    pub width: u32,
    pub height: u32,
}

impl ImageDims {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x as i64 <= self.width as i64 && p.y as i64 <= self.height as i64
    }
}
