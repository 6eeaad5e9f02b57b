//! JSON configuration for the `grid_extract` driver.

use crate::error::ExtractError;
use crate::extractor::ExtractorParams;
use crate::io::read_json_file;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Where to write the JSON report. Printed to stdout when absent.
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    /// JSON file with the Hough candidates and image size.
    pub input: PathBuf,
    #[serde(default)]
    pub extractor: ExtractorParams,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, ExtractError> {
    read_json_file(path)
}
