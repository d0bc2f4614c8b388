//! Waveform path geometry
//!
//! Builds `kurbo::BezPath` geometry from downsampled sample buffers:
//! - Point injection (ordered point sequences into a mutable path)
//! - Outline construction (stroke / linked-line / filled-outline styles)
//! - View-space transforms (sample space to view bounds)
//!
//! All geometry is produced in sample space (x = frame index, y = amplitude)
//! and mapped into view space with an affine transform; nothing here strokes,
//! fills, or displays.

pub mod injector;
pub mod outline;
pub mod transform;
