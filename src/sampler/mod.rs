//! Downsampling pipeline over one decoded asset
//!
//! A [`Sampler`] owns the decoded PCM for a single asset and serves
//! [`SampleBuffer`]s for windows of it: full-track overviews at a derived
//! factor, or zoomed segments at an explicit factor. Each request runs
//! downsample → merge → peak; normalization is left to the render pipeline so
//! one buffer can serve both normalized and raw geometry.

pub mod buffer;
pub mod downsample;

use std::path::Path;

use crate::error::RenderError;
use crate::io::decoder::{decode_audio, DecodedAudio};
use crate::preprocessing::channel_mixer::stereo_to_mono;
use crate::preprocessing::normalization::peak;

pub use buffer::SampleBuffer;
pub use downsample::DownsampleStrategy;

use downsample::{downsample_channel, downsample_channel_parallel};

/// One window of samples to extract and reduce
///
/// Exactly one of `output_frames` and `ds_factor` may be left unspecified;
/// the missing one is derived from the asset length. Supplying both pins a
/// zoomed segment; supplying neither is an error.
#[derive(Debug, Clone, Copy)]
pub struct SampleRequest {
    /// First source frame of the window
    pub start_frame: u64,

    /// Number of downsampled output frames (0 = derive from `ds_factor`)
    pub output_frames: u32,

    /// Downsample factor (`None` = derive from `output_frames`)
    pub ds_factor: Option<usize>,
}

impl SampleRequest {
    /// Whole-asset overview at a width-derived factor
    pub fn whole_asset(output_frames: u32) -> Self {
        Self {
            start_frame: 0,
            output_frames,
            ds_factor: None,
        }
    }

    /// Whole-asset overview at an explicit factor
    pub fn with_factor(ds_factor: usize) -> Self {
        Self {
            start_frame: 0,
            output_frames: 0,
            ds_factor: Some(ds_factor),
        }
    }

    /// Zoomed segment with explicit position, width, and factor
    pub fn segment(start_frame: u64, output_frames: u32, ds_factor: usize) -> Self {
        Self {
            start_frame,
            output_frames,
            ds_factor: Some(ds_factor),
        }
    }
}

/// Serves downsampled windows of one decoded asset
#[derive(Debug, Default)]
pub struct Sampler {
    audio: Option<DecodedAudio>,
}

impl Sampler {
    /// Create a sampler with no asset loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sampler over already-decoded audio
    pub fn from_decoded(audio: DecodedAudio) -> Self {
        Self { audio: Some(audio) }
    }

    /// Decode an asset and make it the sampler's source
    ///
    /// Replaces any previously loaded asset. On decode failure the previous
    /// asset is dropped and the error is propagated.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::DecodingError` if the file cannot be decoded
    pub fn set_asset(&mut self, path: &Path) -> Result<(), RenderError> {
        self.audio = None;
        self.audio = Some(decode_audio(path)?);
        Ok(())
    }

    /// Number of source frames in the loaded asset (0 when none is loaded)
    pub fn frame_count(&self) -> usize {
        self.audio.as_ref().map_or(0, |a| a.frame_count())
    }

    /// Sample rate of the loaded asset
    pub fn sample_rate(&self) -> Option<u32> {
        self.audio.as_ref().map(|a| a.sample_rate)
    }

    /// Extract and reduce one window of the asset
    ///
    /// Resolves the factor/width pair, downsamples each channel, merges to
    /// mono, and measures the peak. Windows extending past the end of the
    /// asset are clamped; a window that clamps to nothing yields an empty
    /// buffer.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidInput` when no asset is loaded, when
    /// neither `output_frames` nor `ds_factor` is specified, or when
    /// `ds_factor` is zero.
    pub fn samples(
        &self,
        request: &SampleRequest,
        strategy: DownsampleStrategy,
        parallel: bool,
    ) -> Result<SampleBuffer, RenderError> {
        let audio = self
            .audio
            .as_ref()
            .ok_or_else(|| RenderError::InvalidInput("no asset loaded".to_string()))?;

        let total = audio.frame_count();
        let start = (request.start_frame as usize).min(total);
        let available = total - start;

        let (factor, output_frames) = match (request.ds_factor, request.output_frames) {
            (None, 0) => {
                return Err(RenderError::InvalidInput(
                    "Invalid output_frames, ds_factor combination".to_string(),
                ));
            }
            (Some(0), _) => {
                return Err(RenderError::InvalidInput(
                    "Downsample factor must be > 0".to_string(),
                ));
            }
            (None, n) => ((available / n as usize).max(1), n as usize),
            (Some(f), 0) => (f, available / f),
            (Some(f), n) => (f, n as usize),
        };

        // Clamp the window to what the asset can supply.
        let window = (output_frames * factor).min(available);
        let output_frames = window / factor;
        let window = output_frames * factor;

        log::debug!(
            "Sampling window: start={}, frames={}, factor={}, output={}",
            start,
            window,
            factor,
            output_frames
        );

        let left = &audio.left[start..start + window];
        let right = &audio.right[start..start + window];

        let (left_ds, right_ds) = if parallel {
            (
                downsample_channel_parallel(left, factor, strategy)?,
                downsample_channel_parallel(right, factor, strategy)?,
            )
        } else {
            (
                downsample_channel(left, factor, strategy)?,
                downsample_channel(right, factor, strategy)?,
            )
        };

        let merged = stereo_to_mono(&left_ds, &right_ds)?;
        let buffer_peak = peak(&merged);

        Ok(SampleBuffer::new(merged, buffer_peak))
    }
}
