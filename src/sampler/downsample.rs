//! Block downsampling of PCM channels
//!
//! Reduces each block of `factor` consecutive samples to a single value. All
//! strategies work on absolute values: waveform geometry mirrors amplitudes
//! around the midline, so sign carries no information at this stage.
//!
//! # Example
//!
//! ```
//! use waverender::sampler::downsample::{downsample_channel, DownsampleStrategy};
//!
//! let samples = vec![0.1, -0.9, 0.2, 0.3];
//! let reduced = downsample_channel(&samples, 2, DownsampleStrategy::MaxValue)?;
//! assert_eq!(reduced, vec![0.9, 0.3]);
//! # Ok::<(), waverender::RenderError>(())
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Strategy for reducing a block of samples to one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownsampleStrategy {
    /// Maximum absolute value in the block (preserves transients)
    MaxValue,
    /// Mean absolute value in the block (smoother envelope)
    AvgValue,
    /// Absolute value of the first sample in the block (fastest, aliases)
    SampleValue,
}

fn reduce_block(block: &[f32], strategy: DownsampleStrategy) -> f32 {
    match strategy {
        DownsampleStrategy::MaxValue => block.iter().map(|&x| x.abs()).fold(0.0f32, f32::max),
        DownsampleStrategy::AvgValue => {
            block.iter().map(|&x| x.abs()).sum::<f32>() / block.len() as f32
        }
        DownsampleStrategy::SampleValue => block[0].abs(),
    }
}

/// Downsample one channel by an integer factor
///
/// Output length is `samples.len() / factor`; a trailing partial block is
/// dropped, matching the truncating frame-length adjustment of block
/// processors.
///
/// # Arguments
///
/// * `samples` - Channel samples
/// * `factor` - Block size, must be > 0
/// * `strategy` - Block reduction strategy
///
/// # Errors
///
/// Returns `RenderError::InvalidInput` if `factor` is zero
pub fn downsample_channel(
    samples: &[f32],
    factor: usize,
    strategy: DownsampleStrategy,
) -> Result<Vec<f32>, RenderError> {
    if factor == 0 {
        return Err(RenderError::InvalidInput(
            "Downsample factor must be > 0".to_string(),
        ));
    }

    let out_len = samples.len() / factor;
    Ok(samples[..out_len * factor]
        .chunks_exact(factor)
        .map(|block| reduce_block(block, strategy))
        .collect())
}

/// Downsample one channel by an integer factor, splitting blocks across the
/// rayon pool
///
/// Produces output identical to [`downsample_channel`]; worth using for
/// full-track renders where millions of source frames feed one view.
///
/// # Errors
///
/// Returns `RenderError::InvalidInput` if `factor` is zero
pub fn downsample_channel_parallel(
    samples: &[f32],
    factor: usize,
    strategy: DownsampleStrategy,
) -> Result<Vec<f32>, RenderError> {
    if factor == 0 {
        return Err(RenderError::InvalidInput(
            "Downsample factor must be > 0".to_string(),
        ));
    }

    let out_len = samples.len() / factor;
    log::debug!(
        "Parallel downsample: {} samples, factor={}, {} blocks",
        samples.len(),
        factor,
        out_len
    );

    Ok(samples[..out_len * factor]
        .par_chunks_exact(factor)
        .map(|block| reduce_block(block, strategy))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_value_takes_block_abs_max() {
        let samples = vec![0.1, -0.8, 0.3, 0.2, 0.5, -0.4];
        let out = downsample_channel(&samples, 3, DownsampleStrategy::MaxValue).unwrap();
        assert_eq!(out, vec![0.8, 0.5]);
    }

    #[test]
    fn test_avg_value_takes_block_abs_mean() {
        let samples = vec![0.2, -0.4, 0.6, 0.0];
        let out = downsample_channel(&samples, 2, DownsampleStrategy::AvgValue).unwrap();
        assert!((out[0] - 0.3).abs() < 1e-6);
        assert!((out[1] - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_sample_value_takes_first_abs() {
        let samples = vec![-0.2, 0.9, 0.1, 0.9];
        let out = downsample_channel(&samples, 2, DownsampleStrategy::SampleValue).unwrap();
        assert_eq!(out, vec![0.2, 0.1]);
    }

    #[test]
    fn test_partial_trailing_block_is_dropped() {
        let samples = vec![0.5, 0.5, 0.5, 0.9];
        let out = downsample_channel(&samples, 3, DownsampleStrategy::MaxValue).unwrap();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_zero_factor_is_rejected() {
        assert!(downsample_channel(&[0.1], 0, DownsampleStrategy::MaxValue).is_err());
        assert!(downsample_channel_parallel(&[0.1], 0, DownsampleStrategy::MaxValue).is_err());
    }

    #[test]
    fn test_parallel_matches_serial() {
        let samples: Vec<f32> = (0..10_000)
            .map(|i| ((i as f32) * 0.37).sin() * 0.8)
            .collect();

        for strategy in [
            DownsampleStrategy::MaxValue,
            DownsampleStrategy::AvgValue,
            DownsampleStrategy::SampleValue,
        ] {
            let serial = downsample_channel(&samples, 64, strategy).unwrap();
            let parallel = downsample_channel_parallel(&samples, 64, strategy).unwrap();
            assert_eq!(serial, parallel, "strategy {:?} diverged", strategy);
        }
    }
}
