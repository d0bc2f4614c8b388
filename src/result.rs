//! Render result types

use kurbo::BezPath;
use serde::{Deserialize, Serialize};

use crate::geometry::outline::PathStyle;
use crate::sampler::downsample::DownsampleStrategy;
use crate::stats::RenderStats;

/// Complete waveform render result
#[derive(Debug, Clone)]
pub struct Waveform {
    /// View-space path geometry, ready for the consumer to stroke or fill
    pub path: BezPath,

    /// Number of downsampled frames spanning the view width
    pub frame_count: usize,

    /// Peak absolute amplitude measured before normalization
    pub peak: f32,

    /// Render metadata
    pub metadata: RenderMetadata,

    /// Per-stage timing for this run
    pub stats: RenderStats,
}

/// Render metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderMetadata {
    /// Source frames consumed per channel
    pub source_frames: usize,

    /// Downsampled frames produced
    pub output_frames: usize,

    /// Downsample factor applied
    pub ds_factor: usize,

    /// Block reduction strategy used
    pub strategy: DownsampleStrategy,

    /// Path construction style used
    pub style: PathStyle,

    /// Whether amplitudes were normalized to the peak
    pub normalized: bool,

    /// End-to-end processing time in milliseconds
    pub processing_time_ms: f32,
}
