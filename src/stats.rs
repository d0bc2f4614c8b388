//! Per-stage timing statistics for the render pipeline
//!
//! Every pipeline stage records one wall-clock duration per run. Reports go
//! through the logger at debug level so release callers pay nothing unless a
//! logger is installed.

use std::time::{Duration, Instant};

/// Pipeline stages that can be timed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading and decoding the source file
    FileRead,
    /// Block downsampling per channel
    Downsample,
    /// Stereo to mono merge
    Merge,
    /// Peak measurement / normalization
    Normalize,
    /// Building the point sequence
    BuildPoints,
    /// Injecting points into the path
    BuildPath,
    /// Applying the view transform
    Transform,
    /// End-to-end pipeline time
    Total,
}

impl Stage {
    /// Stage label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Stage::FileRead => "fileread",
            Stage::Downsample => "downsample",
            Stage::Merge => "merge",
            Stage::Normalize => "normalize",
            Stage::BuildPoints => "buildpoints",
            Stage::BuildPath => "buildpath",
            Stage::Transform => "transform",
            Stage::Total => "total",
        }
    }
}

/// Recorded durations for one pipeline run
///
/// Recording the same stage twice keeps the latest measurement.
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    entries: Vec<(Stage, Duration)>,
}

impl RenderStats {
    /// Create an empty stats record
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a duration for a stage, replacing any earlier measurement
    pub fn record(&mut self, stage: Stage, duration: Duration) {
        if let Some(entry) = self.entries.iter_mut().find(|(s, _)| *s == stage) {
            entry.1 = duration;
        } else {
            self.entries.push((stage, duration));
        }
    }

    /// Duration recorded for a stage, if any
    pub fn get(&self, stage: Stage) -> Option<Duration> {
        self.entries
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, d)| *d)
    }

    /// Recorded (stage, duration) pairs in recording order
    pub fn entries(&self) -> &[(Stage, Duration)] {
        &self.entries
    }

    /// Log one debug line per recorded stage
    pub fn log_report(&self) {
        for (stage, duration) in &self.entries {
            log::debug!("{}: {:.3} ms", stage.label(), duration.as_secs_f64() * 1000.0);
        }
    }
}

/// Run a closure, recording its wall-clock duration under `stage`
pub fn timed<T>(stats: &mut RenderStats, stage: Stage, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = f();
    stats.record(stage, start.elapsed());
    result
}
