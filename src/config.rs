//! Configuration parameters for waveform rendering

use crate::geometry::outline::PathStyle;
use crate::sampler::downsample::DownsampleStrategy;

/// Base downsample factor for zoomed-in views (default: 64)
pub const DS_FACTOR_BASE: usize = 64;

/// Downsample factor for full-track slider views (default: 4096)
pub const DS_FACTOR_SLIDER: usize = 4096;

/// Initial downsample factor for scroller views (default: 512)
pub const DS_FACTOR_SCROLLER_INITIAL: usize = 512;

/// Vertical scale applied to waveform amplitude (default: 0.9)
///
/// Keeps the peaks of a full-scale signal just inside the view bounds.
pub const WAVEFORM_Y_SCALE: f64 = 0.9;

/// Waveform rendering configuration parameters
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Downsample strategy per block (default: MaxValue)
    pub strategy: DownsampleStrategy,

    /// Path construction style (default: Outline)
    pub style: PathStyle,

    /// Scale amplitudes by 1/peak before building geometry (default: false)
    ///
    /// When off, the y scale assumes samples already sit in [-1.0, 1.0].
    pub normalize: bool,

    /// Vertical scale factor in view space (default: 0.9)
    pub y_scale: f64,

    /// Downsample channel blocks on the rayon pool (default: false)
    ///
    /// Worth enabling for full-track renders at small factors; for short
    /// segments the split overhead outweighs the win.
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            strategy: DownsampleStrategy::MaxValue,
            style: PathStyle::Outline,
            normalize: false,
            y_scale: WAVEFORM_Y_SCALE,
            parallel: false,
        }
    }
}
