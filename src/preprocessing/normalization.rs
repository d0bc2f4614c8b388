//! Peak measurement and normalization
//!
//! The waveform pipeline scales amplitudes to the signal peak rather than to a
//! loudness target: geometry only needs peaks to touch the top of the view.

/// Numerical stability epsilon for divisions
const EPSILON: f32 = 1e-10;

/// Maximum absolute sample value
///
/// Returns 0.0 for an empty slice.
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|&x| x.abs()).fold(0.0f32, f32::max)
}

/// Normalize samples in place so the peak reaches 1.0
///
/// Silent or near-silent input (peak at or below epsilon) is left untouched.
///
/// # Arguments
///
/// * `samples` - Samples to normalize (modified in-place)
///
/// # Returns
///
/// The pre-normalization peak
pub fn normalize_peak(samples: &mut [f32]) -> f32 {
    let peak = peak(samples);

    if peak <= EPSILON {
        log::warn!("Audio is silent or extremely quiet, cannot normalize");
        return peak;
    }

    let scale = 1.0 / peak;
    for sample in samples.iter_mut() {
        *sample *= scale;
    }

    log::debug!("Peak normalization: peak={:.6}, scale={:.6}", peak, scale);

    peak
}
