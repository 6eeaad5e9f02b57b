#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod extractor;
pub mod grid;
pub mod merge;
pub mod source;
pub mod types;

// Building blocks, also used by the driver and tools.
pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{ExtractError, GeometryError};
pub use crate::extractor::{Extraction, ExtractorParams, GridExtractor};
pub use crate::grid::{build_grid, GridCell, GridMatrix};
pub use crate::merge::{merge_stream, merge_stream_with, ConsensusLine, MergeStrategy};
pub use crate::source::{JsonLineSource, LineCandidates, LineSource};
pub use crate::types::{Axis, ImageDims, Orientation, Point, PolarLine};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use grid_extractor::prelude::*;
/// use std::f64::consts::FRAC_PI_2;
///
/// let input = LineCandidates::new(
///     ImageDims::new(500, 500),
///     vec![
///         PolarLine::new(100.0, 0.0),
///         PolarLine::new(400.0, 0.0),
///         PolarLine::new(100.0, FRAC_PI_2),
///         PolarLine::new(400.0, FRAC_PI_2),
///     ],
/// );
/// let out = GridExtractor::new(ExtractorParams::default()).process(&input);
/// assert_eq!((out.grid.rows, out.grid.cols), (2, 2));
/// ```
pub mod prelude {
    pub use crate::types::{ImageDims, Point, PolarLine};
    pub use crate::{ExtractorParams, GridExtractor, GridMatrix, LineCandidates};
}
