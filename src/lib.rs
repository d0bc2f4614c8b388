//! # Waverender
//!
//! A waveform geometry engine for audio visualization, turning decoded PCM
//! into 2D path geometry ready to stroke, fill, or mask.
//!
//! ## Features
//!
//! - **Downsampling**: block reduction by peak, average, or sampled value,
//!   with a parallel variant for full-track overviews
//! - **Path construction**: disjoint strokes, linked lines, or a closed
//!   mirrored outline, built by ordered point injection
//! - **View mapping**: one affine from sample space into view bounds
//! - **Session facade**: apply an audio-session category and option set
//!   through a one-method platform backend
//!
//! ## Quick Start
//!
//! ```no_run
//! use kurbo::Rect;
//! use waverender::{render_waveform, RenderConfig};
//!
//! // Decoded stereo samples, normalized to [-1.0, 1.0]
//! let left = vec![0.0f32; 44100];
//! let right = vec![0.0f32; 44100];
//!
//! let bounds = Rect::new(0.0, 0.0, 800.0, 200.0);
//! let waveform = render_waveform(&left, &right, bounds, 512, &RenderConfig::default())?;
//!
//! println!("{} frames, peak {:.3}", waveform.frame_count, waveform.peak);
//! # Ok::<(), waverender::RenderError>(())
//! ```
//!
//! ## Architecture
//!
//! The render pipeline follows this flow:
//!
//! ```text
//! PCM Input → Downsample → Merge → Normalize → Build Points → Build Path → Transform
//! ```
//!
//! Session configuration is independent of the pipeline; see the [`session`]
//! module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod preprocessing;
pub mod result;
pub mod sampler;
pub mod session;
pub mod stats;

// Re-export main types
pub use config::RenderConfig;
pub use error::RenderError;
pub use geometry::injector::inject_points;
pub use geometry::outline::PathStyle;
pub use result::{RenderMetadata, Waveform};
pub use sampler::{DownsampleStrategy, SampleBuffer, SampleRequest, Sampler};
pub use session::{configure, Category, CategoryOptions, SessionBackend, SessionError};

// Geometry primitives, re-exported so consumers need no direct kurbo dep
pub use kurbo::{Affine, BezPath, Point, Rect};

use std::path::Path;
use std::time::Instant;

use crate::geometry::{outline, transform::view_transform};
use crate::preprocessing::channel_mixer::stereo_to_mono;
use crate::preprocessing::normalization::{normalize_peak, peak};
use crate::sampler::buffer::SampleBuffer as Buffer;
use crate::sampler::downsample::{downsample_channel, downsample_channel_parallel};
use crate::stats::{timed, RenderStats, Stage};

fn run_pipeline(
    left: &[f32],
    right: &[f32],
    bounds: Rect,
    ds_factor: usize,
    config: &RenderConfig,
    stats: &mut RenderStats,
) -> Result<(BezPath, usize, f32), RenderError> {
    if left.is_empty() {
        return Err(RenderError::InvalidInput("Empty audio samples".to_string()));
    }
    if ds_factor == 0 {
        return Err(RenderError::InvalidInput(
            "Downsample factor must be > 0".to_string(),
        ));
    }

    let (left_ds, right_ds) = timed(
        stats,
        Stage::Downsample,
        || -> Result<(Vec<f32>, Vec<f32>), RenderError> {
            if config.parallel {
                Ok((
                    downsample_channel_parallel(left, ds_factor, config.strategy)?,
                    downsample_channel_parallel(right, ds_factor, config.strategy)?,
                ))
            } else {
                Ok((
                    downsample_channel(left, ds_factor, config.strategy)?,
                    downsample_channel(right, ds_factor, config.strategy)?,
                ))
            }
        },
    )?;

    let mut merged = timed(stats, Stage::Merge, || stereo_to_mono(&left_ds, &right_ds))?;

    let buffer_peak = timed(stats, Stage::Normalize, || {
        if config.normalize {
            normalize_peak(&mut merged)
        } else {
            peak(&merged)
        }
    });

    let buffer = Buffer::new(merged, buffer_peak);
    let frame_count = buffer.len();

    let sequences = timed(stats, Stage::BuildPoints, || {
        outline::build_points(&buffer, config.style)
    });

    let mut path = BezPath::new();
    timed(stats, Stage::BuildPath, || {
        outline::inject_sequences(&mut path, &sequences)
    });

    timed(stats, Stage::Transform, || {
        // Normalization already happened in the buffer stage when requested;
        // the transform must not divide by the peak a second time.
        let tf = view_transform(bounds, frame_count, buffer_peak, false, config.y_scale);
        path.apply_affine(tf);
    });

    Ok((path, frame_count, buffer_peak))
}

/// Render waveform geometry from decoded stereo samples
///
/// Runs the full pipeline (downsample, merge, optional peak normalization,
/// point building, path injection, view transform) and returns the mapped
/// path with its metadata and stage timings.
///
/// # Arguments
///
/// * `left` - Left channel samples, normalized to [-1.0, 1.0]
/// * `right` - Right channel samples, same length as `left`
/// * `bounds` - Target view rectangle
/// * `ds_factor` - Downsample factor (source frames per output frame)
/// * `config` - Rendering configuration
///
/// # Errors
///
/// Returns `RenderError` for empty input, a zero factor, or mismatched
/// channel lengths
///
/// # Example
///
/// ```no_run
/// use kurbo::Rect;
/// use waverender::{render_waveform, RenderConfig};
///
/// let samples = vec![0.0f32; 44100 * 30]; // 30 seconds of silence
/// let bounds = Rect::new(0.0, 0.0, 800.0, 200.0);
/// let waveform = render_waveform(&samples, &samples, bounds, 4096, &RenderConfig::default())?;
/// # Ok::<(), waverender::RenderError>(())
/// ```
pub fn render_waveform(
    left: &[f32],
    right: &[f32],
    bounds: Rect,
    ds_factor: usize,
    config: &RenderConfig,
) -> Result<Waveform, RenderError> {
    let start_time = Instant::now();
    let mut stats = RenderStats::new();

    log::debug!(
        "Rendering waveform: {} frames, factor={}, style={:?}",
        left.len(),
        ds_factor,
        config.style
    );

    let (path, frame_count, buffer_peak) =
        run_pipeline(left, right, bounds, ds_factor, config, &mut stats)?;

    stats.record(Stage::Total, start_time.elapsed());
    stats.log_report();

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    Ok(Waveform {
        path,
        frame_count,
        peak: buffer_peak,
        metadata: RenderMetadata {
            source_frames: left.len(),
            output_frames: frame_count,
            ds_factor,
            strategy: config.strategy,
            style: config.style,
            normalized: config.normalize,
            processing_time_ms,
        },
        stats,
    })
}

/// Decode an audio file and render its full-track waveform
///
/// Convenience wrapper: decodes the file, derives the downsample factor from
/// the requested output width, and runs the same pipeline as
/// [`render_waveform`]. The decode is timed under the file-read stage.
///
/// # Arguments
///
/// * `path` - Path to an audio file
/// * `bounds` - Target view rectangle
/// * `output_frames` - Downsampled frames to spread across the width
/// * `config` - Rendering configuration
///
/// # Errors
///
/// Returns `RenderError::DecodingError` if the file cannot be decoded, or
/// `RenderError::InvalidInput` for a zero `output_frames`
pub fn render_file(
    path: &Path,
    bounds: Rect,
    output_frames: u32,
    config: &RenderConfig,
) -> Result<Waveform, RenderError> {
    if output_frames == 0 {
        return Err(RenderError::InvalidInput(
            "Output frames must be > 0".to_string(),
        ));
    }

    let start_time = Instant::now();
    let mut stats = RenderStats::new();

    let audio = timed(&mut stats, Stage::FileRead, || {
        io::decoder::decode_audio(path)
    })?;

    let ds_factor = (audio.frame_count() / output_frames as usize).max(1);

    let (path, frame_count, buffer_peak) = run_pipeline(
        &audio.left,
        &audio.right,
        bounds,
        ds_factor,
        config,
        &mut stats,
    )?;

    stats.record(Stage::Total, start_time.elapsed());
    stats.log_report();

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    Ok(Waveform {
        path,
        frame_count,
        peak: buffer_peak,
        metadata: RenderMetadata {
            source_frames: audio.frame_count(),
            output_frames: frame_count,
            ds_factor,
            strategy: config.strategy,
            style: config.style,
            normalized: config.normalize,
            processing_time_ms,
        },
        stats,
    })
}
