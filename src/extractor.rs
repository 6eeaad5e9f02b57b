//! Line consolidation pipeline: classify -> merge per family -> intersect.

use crate::classify::split_by_orientation;
use crate::diagnostics::{CandidateCounts, ExtractionTrace, Stage};
use crate::error::ExtractError;
use crate::grid::{build_grid, GridMatrix};
use crate::merge::{default_distance_threshold, merge_stream_with, ConsensusLine, MergeStrategy};
use crate::source::{LineCandidates, LineSource};
use crate::types::{Axis, ImageDims};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Knobs of the consolidation pipeline.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorParams {
    /// Maximum intercept difference (pixels) at which two detections are
    /// still the same line. `None` uses `height / 18`.
    pub distance_threshold: Option<f64>,
    pub strategy: MergeStrategy,
}

impl ExtractorParams {
    pub fn threshold_for(&self, dims: ImageDims) -> f64 {
        self.distance_threshold
            .filter(|t| t.is_finite() && *t > 0.0)
            .unwrap_or_else(|| default_distance_threshold(dims))
    }
}

/// Output of one run: both consensus families and their intersection grid.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    pub dims: ImageDims,
    pub distance_threshold: f64,
    pub horizontals: Vec<ConsensusLine>,
    pub verticals: Vec<ConsensusLine>,
    pub grid: GridMatrix,
    pub trace: ExtractionTrace,
}

pub struct GridExtractor {
    params: ExtractorParams,
}

impl GridExtractor {
    pub fn new(params: ExtractorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ExtractorParams {
        &self.params
    }

    pub fn process(&self, input: &LineCandidates) -> Extraction {
        let t0 = Instant::now();
        let dims = input.dims;
        let threshold = self.params.threshold_for(dims);
        let mut trace = ExtractionTrace::default();

        let split = trace.timed(Stage::Classify, || split_by_orientation(&input.lines));
        trace.counts = CandidateCounts {
            total: input.lines.len(),
            horizontal: split.horizontal.len(),
            vertical: split.vertical.len(),
            dropped: split.dropped.len(),
        };

        let strategy = self.params.strategy;
        let horizontals = trace.timed(Stage::MergeHorizontal, || {
            merge_stream_with(
                &split.horizontal,
                Axis::X.limit(dims),
                threshold,
                Axis::X,
                strategy,
            )
        });
        let verticals = trace.timed(Stage::MergeVertical, || {
            merge_stream_with(
                &split.vertical,
                Axis::Y.limit(dims),
                threshold,
                Axis::Y,
                strategy,
            )
        });
        let grid = trace.timed(Stage::Grid, || build_grid(&horizontals, &verticals));

        trace.total_ms = t0.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "GridExtractor::process {}x{} threshold={:.2}: {} lines -> {} horizontal, {} vertical, grid {}x{}",
            dims.width,
            dims.height,
            threshold,
            input.lines.len(),
            horizontals.len(),
            verticals.len(),
            grid.rows,
            grid.cols
        );

        Extraction {
            dims,
            distance_threshold: threshold,
            horizontals,
            verticals,
            grid,
            trace,
        }
    }

    /// Pulls candidates from `source` and runs [`GridExtractor::process`].
    pub fn process_source<S: LineSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<Extraction, ExtractError> {
        let candidates = source.candidates()?;
        candidates.validate()?;
        Ok(self.process(&candidates))
    }
}
