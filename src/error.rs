use crate::types::{Axis, Orientation};
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a candidate cannot become a consensus line.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GeometryError {
    #[error("line orientation {found:?} does not match {expected:?} stream")]
    OrientationMismatch {
        expected: Orientation,
        found: Orientation,
    },
    #[error("line is parallel to the {axis:?} border pair")]
    ParallelToBorder { axis: Axis },
}

/// Failures at the edges of the crate: config, candidate files, reports.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDims { width: u32, height: u32 },
}
