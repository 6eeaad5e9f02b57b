//! Intersection grid built from the two consensus-line families.

use crate::geometry::intersect_cartesian;
use crate::merge::ConsensusLine;
use crate::types::Point;
use log::warn;
use serde::Serialize;

/// Dense matrix of intersection points, indexed `[horizontal][vertical]`.
///
/// Rows run top to bottom, columns left to right.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GridMatrix {
    pub rows: usize,
    pub cols: usize,
    /// Row-major storage, `rows * cols` entries.
    pub points: Vec<Point>,
}

/// Quadrilateral between two adjacent rows and two adjacent columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    /// Top-left, top-right, bottom-right, bottom-left.
    pub corners: [Point; 4],
}

impl GridMatrix {
    #[inline]
    pub fn get(&self, h: usize, v: usize) -> Option<Point> {
        if h < self.rows && v < self.cols {
            Some(self.points[h * self.cols + v])
        } else {
            None
        }
    }

    pub fn row(&self, h: usize) -> Option<&[Point]> {
        if h < self.rows {
            Some(&self.points[h * self.cols..(h + 1) * self.cols])
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Cells spanned by adjacent intersections; `(rows-1) x (cols-1)` of them.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        let cell_rows = self.rows.saturating_sub(1);
        let cell_cols = self.cols.saturating_sub(1);
        (0..cell_rows).flat_map(move |r| {
            (0..cell_cols).map(move |c| {
                let at = |h: usize, v: usize| self.points[h * self.cols + v];
                GridCell {
                    row: r,
                    col: c,
                    corners: [at(r, c), at(r, c + 1), at(r + 1, c + 1), at(r + 1, c)],
                }
            })
        })
    }
}

/// Intersects every horizontal consensus line with every vertical one.
///
/// Horizontals are ordered by the `y` of their first endpoint, verticals by
/// the `x` of theirs; ties keep input order. A pair that fails to intersect
/// is stored as `(0, 0)`.
pub fn build_grid(horizontals: &[ConsensusLine], verticals: &[ConsensusLine]) -> GridMatrix {
    let mut rows: Vec<&ConsensusLine> = horizontals.iter().collect();
    let mut cols: Vec<&ConsensusLine> = verticals.iter().collect();
    rows.sort_by_key(|line| line.endpoint_a.y);
    cols.sort_by_key(|line| line.endpoint_a.x);

    let mut points = Vec::with_capacity(rows.len() * cols.len());
    for (h, row) in rows.iter().enumerate() {
        for (v, col) in cols.iter().enumerate() {
            let point = intersect_cartesian(row.endpoints(), col.endpoints()).unwrap_or_else(|| {
                warn!("build_grid: lines h={h} v={v} do not intersect, using (0, 0)");
                Point::default()
            });
            points.push(point);
        }
    }

    GridMatrix {
        rows: rows.len(),
        cols: cols.len(),
        points,
    }
}
