//! Waveform outline construction
//!
//! Turns a downsampled buffer into point sequences in sample space
//! (x = frame index, y = amplitude) and injects them into a path. Three
//! styles:
//!
//! - `Strokes`: one vertical segment per frame, from +amplitude to
//!   -amplitude, each its own subpath
//! - `LinkedLines`: a single connected zigzag alternating the mirror per
//!   frame
//! - `Outline`: the top edge forward, the mirrored bottom edge in reverse,
//!   closed; the shape fill and mask consumers want

use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

use crate::geometry::injector::inject_points;
use crate::sampler::buffer::SampleBuffer;

/// Path construction style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathStyle {
    /// Disjoint vertical strokes, one per frame
    Strokes,
    /// Single connected zigzag line
    LinkedLines,
    /// Closed mirrored outline
    Outline,
}

/// One subpath worth of points
#[derive(Debug, Clone)]
pub struct PointSequence {
    /// Points in draw order
    pub points: Vec<Point>,
    /// Close the subpath after the last point
    pub close: bool,
}

/// Build the point sequences for a buffer in the given style
///
/// Coordinates are in sample space: x is the frame index, y the signed
/// amplitude. An empty buffer produces no sequences.
pub fn build_points(buffer: &SampleBuffer, style: PathStyle) -> Vec<PointSequence> {
    let frames = buffer.frames();
    if frames.is_empty() {
        return Vec::new();
    }

    match style {
        PathStyle::Strokes => frames
            .iter()
            .enumerate()
            .map(|(idx, &value)| PointSequence {
                points: vec![
                    Point::new(idx as f64, value as f64),
                    Point::new(idx as f64, -value as f64),
                ],
                close: false,
            })
            .collect(),
        PathStyle::LinkedLines => {
            let mut points = Vec::with_capacity(frames.len() * 2 + 1);
            points.push(Point::new(0.0, 0.0));
            for (idx, &value) in frames.iter().enumerate() {
                let modifier = if idx % 2 == 0 { 1.0 } else { -1.0 };
                let v = value as f64 * modifier;
                points.push(Point::new(idx as f64, v));
                points.push(Point::new(idx as f64, -v));
            }
            vec![PointSequence {
                points,
                close: false,
            }]
        }
        PathStyle::Outline => {
            let mut points = Vec::with_capacity(frames.len() * 2 + 1);
            points.push(Point::new(0.0, 0.0));
            for (idx, &value) in frames.iter().enumerate() {
                points.push(Point::new(idx as f64, value as f64));
            }
            for (idx, &value) in frames.iter().enumerate().rev() {
                points.push(Point::new(idx as f64, -value as f64));
            }
            vec![PointSequence {
                points,
                close: true,
            }]
        }
    }
}

/// Inject point sequences into a path, one subpath each
pub fn inject_sequences(path: &mut BezPath, sequences: &[PointSequence]) {
    for sequence in sequences {
        inject_points(path, &sequence.points, true);
        if sequence.close && !sequence.points.is_empty() {
            path.close_path();
        }
    }
}

/// Build a complete path for a buffer in the given style
pub fn build_path(buffer: &SampleBuffer, style: PathStyle) -> BezPath {
    let mut path = BezPath::new();
    inject_sequences(&mut path, &build_points(buffer, style));
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    fn buffer(frames: &[f32]) -> SampleBuffer {
        let peak = frames.iter().map(|&x| x.abs()).fold(0.0f32, f32::max);
        SampleBuffer::new(frames.to_vec(), peak)
    }

    #[test]
    fn test_empty_buffer_builds_empty_path() {
        let path = build_path(&buffer(&[]), PathStyle::Outline);
        assert!(path.elements().is_empty());
    }

    #[test]
    fn test_strokes_are_disjoint_subpaths() {
        let path = build_path(&buffer(&[0.5, 0.25]), PathStyle::Strokes);

        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.5)),
                PathEl::LineTo(Point::new(0.0, -0.5)),
                PathEl::MoveTo(Point::new(1.0, 0.25)),
                PathEl::LineTo(Point::new(1.0, -0.25)),
            ]
        );
    }

    #[test]
    fn test_linked_lines_form_one_subpath() {
        let path = build_path(&buffer(&[0.5, 0.25]), PathStyle::LinkedLines);
        let elements = path.elements();

        // One move, then 2 lines per frame
        assert_eq!(elements.len(), 5);
        assert!(matches!(elements[0], PathEl::MoveTo(p) if p == Point::new(0.0, 0.0)));
        assert!(elements[1..].iter().all(|e| matches!(e, PathEl::LineTo(_))));
        // Odd frames mirror the alternation
        assert!(matches!(elements[3], PathEl::LineTo(p) if p == Point::new(1.0, -0.25)));
        assert!(matches!(elements[4], PathEl::LineTo(p) if p == Point::new(1.0, 0.25)));
    }

    #[test]
    fn test_outline_is_closed_and_mirrored() {
        let path = build_path(&buffer(&[0.5, 0.25, 0.75]), PathStyle::Outline);
        let elements = path.elements();

        // Move + 3 top edges + 3 bottom edges + close
        assert_eq!(elements.len(), 8);
        assert!(matches!(elements[0], PathEl::MoveTo(p) if p == Point::new(0.0, 0.0)));
        assert!(matches!(elements[3], PathEl::LineTo(p) if p == Point::new(2.0, 0.75)));
        // Bottom edge runs in reverse frame order
        assert!(matches!(elements[4], PathEl::LineTo(p) if p == Point::new(2.0, -0.75)));
        assert!(matches!(elements[6], PathEl::LineTo(p) if p == Point::new(0.0, -0.5)));
        assert!(matches!(elements[7], PathEl::ClosePath));
    }

    #[test]
    fn test_build_points_sample_space_x_is_frame_index() {
        let sequences = build_points(&buffer(&[0.1, 0.2, 0.3]), PathStyle::Strokes);

        assert_eq!(sequences.len(), 3);
        for (idx, sequence) in sequences.iter().enumerate() {
            assert_eq!(sequence.points[0].x, idx as f64);
        }
    }
}
