//! Per-run trace of the extraction pipeline: candidate counts and stage clocks.

use serde::Serialize;
use std::time::Instant;

/// Pipeline stages timed by [`GridExtractor`](crate::GridExtractor).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Classify,
    MergeHorizontal,
    MergeVertical,
    Grid,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Classify => "classify",
            Stage::MergeHorizontal => "merge_horizontal",
            Stage::MergeVertical => "merge_vertical",
            Stage::Grid => "grid",
        }
    }
}

/// How the input candidates were distributed across the two families.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateCounts {
    pub total: usize,
    pub horizontal: usize,
    pub vertical: usize,
    /// Near-diagonal candidates excluded from both families.
    pub dropped: usize,
}

/// Candidate counts plus wall-clock time spent in each stage.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionTrace {
    pub counts: CandidateCounts,
    pub stage_ms: Vec<(Stage, f64)>,
    pub total_ms: f64,
}

impl ExtractionTrace {
    /// Runs `f`, recording its duration under `stage`.
    pub fn timed<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let t = Instant::now();
        let out = f();
        self.stage_ms.push((stage, t.elapsed().as_secs_f64() * 1000.0));
        out
    }

    pub fn stage(&self, stage: Stage) -> Option<f64> {
        self.stage_ms
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, ms)| *ms)
    }

    /// Sum of the recorded stages; never more than `total_ms` once set.
    pub fn staged_ms(&self) -> f64 {
        self.stage_ms.iter().map(|(_, ms)| ms).sum()
    }
}
