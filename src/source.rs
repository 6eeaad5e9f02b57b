//! Boundary with the line-detection stage.
//!
//! Edge detection and the Hough transform live outside this crate. Whatever
//! runs them hands over a [`LineCandidates`] through [`LineSource`].

use crate::error::ExtractError;
use crate::io::read_json_file;
use crate::types::{ImageDims, PolarLine};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw Hough output for one image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineCandidates {
    pub dims: ImageDims,
    /// Candidates in detector order; the merge fold depends on this order.
    pub lines: Vec<PolarLine>,
}

impl LineCandidates {
    pub fn new(dims: ImageDims, lines: Vec<PolarLine>) -> Self {
        Self { dims, lines }
    }

    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.dims.width == 0 || self.dims.height == 0 {
            return Err(ExtractError::InvalidDims {
                width: self.dims.width,
                height: self.dims.height,
            });
        }
        Ok(())
    }
}

/// Supplier of line candidates (a Hough stage, a recording, a fixture).
pub trait LineSource {
    fn candidates(&mut self) -> Result<LineCandidates, ExtractError>;
}

impl LineSource for LineCandidates {
    fn candidates(&mut self) -> Result<LineCandidates, ExtractError> {
        Ok(self.clone())
    }
}

/// Reads candidates previously dumped as JSON.
#[derive(Clone, Debug)]
pub struct JsonLineSource {
    path: PathBuf,
}

impl JsonLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for JsonLineSource {
    fn candidates(&mut self) -> Result<LineCandidates, ExtractError> {
        let candidates: LineCandidates = read_json_file(&self.path)?;
        candidates.validate()?;
        Ok(candidates)
    }
}
