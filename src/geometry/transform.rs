//! Sample-space to view-space transforms
//!
//! Geometry is built with x as the frame index and y as signed amplitude in
//! [-1.0, 1.0]. One affine maps that into view bounds: x stretched across the
//! width, y scaled to half the height and translated onto the vertical
//! midline. The y axis grows downward, matching the 2D raster convention;
//! positive amplitudes land below the midline unless the consumer flips.

use kurbo::{Affine, Rect};

/// Numerical floor for peak-relative scaling
const MIN_PEAK: f32 = 1e-10;

/// Affine mapping sample-space waveform geometry into `bounds`
///
/// # Arguments
///
/// * `bounds` - Target view rectangle
/// * `frame_count` - Number of frames spanning the width; 0 leaves x unscaled
/// * `peak` - Pre-normalization peak, used when `normalize` is set
/// * `normalize` - Scale amplitudes by 1/peak so peaks touch the view edge
/// * `y_scale` - Fraction of the half-height amplitudes may occupy
///
/// # Example
///
/// ```
/// use kurbo::{Point, Rect};
/// use waverender::geometry::transform::view_transform;
///
/// let tf = view_transform(Rect::new(0.0, 0.0, 200.0, 100.0), 100, 1.0, false, 1.0);
/// assert_eq!(tf * Point::new(0.0, 0.0), Point::new(0.0, 50.0));
/// assert_eq!(tf * Point::new(100.0, 1.0), Point::new(200.0, 100.0));
/// ```
pub fn view_transform(
    bounds: Rect,
    frame_count: usize,
    peak: f32,
    normalize: bool,
    y_scale: f64,
) -> Affine {
    let y_gain = if normalize && peak > MIN_PEAK {
        y_scale / peak as f64
    } else {
        y_scale
    };

    let sx = if frame_count > 0 {
        bounds.width() / frame_count as f64
    } else {
        1.0
    };
    let sy = (bounds.height() / 2.0) * y_gain;

    Affine::translate((bounds.x0, bounds.y0 + bounds.height() / 2.0))
        * Affine::scale_non_uniform(sx, sy)
}
