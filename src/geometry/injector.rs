//! Point injection into mutable paths
//!
//! Appends an ordered point sequence onto an existing path as connected line
//! segments. The path is caller-owned and mutated in place; the sequence is
//! consumed in order, so sequence order is draw order.

use kurbo::{BezPath, Point};

/// Append a point sequence to a path as connected line segments
///
/// The first point starts a new subpath (a move without drawing) when
/// `as_new_subpath` is true or when the path holds no elements yet; otherwise
/// it continues from the current pen position with a line segment. Every
/// subsequent point appends a line segment and advances the pen.
///
/// An empty sequence leaves the path untouched. A single point on a fresh
/// subpath contributes only the moved-to position, no drawable segment.
///
/// # Arguments
///
/// * `path` - Path to mutate; exclusive access enforces the single-writer rule
/// * `points` - Points in draw order
/// * `as_new_subpath` - Start a fresh subpath instead of continuing the
///   current one
///
/// # Example
///
/// ```
/// use kurbo::{BezPath, Point};
/// use waverender::geometry::injector::inject_points;
///
/// let mut path = BezPath::new();
/// inject_points(
///     &mut path,
///     &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
///     true,
/// );
/// assert_eq!(path.elements().len(), 2);
/// ```
pub fn inject_points(path: &mut BezPath, points: &[Point], as_new_subpath: bool) {
    let Some((&first, rest)) = points.split_first() else {
        return;
    };

    if as_new_subpath || path.elements().is_empty() {
        path.move_to(first);
    } else {
        path.line_to(first);
    }

    for &point in rest {
        path.line_to(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_empty_sequence_leaves_path_unchanged() {
        let mut path = BezPath::new();
        inject_points(&mut path, &[], true);
        assert!(path.elements().is_empty());

        let mut path = BezPath::new();
        path.move_to(p(1.0, 2.0));
        let before = path.elements().to_vec();
        inject_points(&mut path, &[], false);
        assert_eq!(path.elements(), before.as_slice());
    }

    #[test]
    fn test_single_point_moves_without_drawing() {
        let mut path = BezPath::new();
        inject_points(&mut path, &[p(3.0, 4.0)], true);

        assert_eq!(path.elements(), &[PathEl::MoveTo(p(3.0, 4.0))]);
    }

    #[test]
    fn test_three_points_yield_two_segments() {
        let mut path = BezPath::new();
        inject_points(&mut path, &[p(0.0, 0.0), p(1.0, 2.0), p(2.0, 0.0)], true);

        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(p(0.0, 0.0)),
                PathEl::LineTo(p(1.0, 2.0)),
                PathEl::LineTo(p(2.0, 0.0)),
            ]
        );
    }

    #[test]
    fn test_second_call_as_new_subpath_moves() {
        let mut path = BezPath::new();
        inject_points(&mut path, &[p(0.0, 0.0), p(1.0, 0.0)], true);
        inject_points(&mut path, &[p(5.0, 5.0), p(6.0, 5.0)], true);

        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(p(0.0, 0.0)),
                PathEl::LineTo(p(1.0, 0.0)),
                PathEl::MoveTo(p(5.0, 5.0)),
                PathEl::LineTo(p(6.0, 5.0)),
            ]
        );
    }

    #[test]
    fn test_second_call_continuing_draws_through() {
        let mut path = BezPath::new();
        inject_points(&mut path, &[p(0.0, 0.0), p(1.0, 0.0)], true);
        inject_points(&mut path, &[p(5.0, 5.0), p(6.0, 5.0)], false);

        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(p(0.0, 0.0)),
                PathEl::LineTo(p(1.0, 0.0)),
                PathEl::LineTo(p(5.0, 5.0)),
                PathEl::LineTo(p(6.0, 5.0)),
            ]
        );
    }

    #[test]
    fn test_continuing_into_empty_path_still_moves_first() {
        // There is no pen position to continue from, so the first point must
        // become a move even when the caller asked to continue.
        let mut path = BezPath::new();
        inject_points(&mut path, &[p(1.0, 1.0), p(2.0, 2.0)], false);

        assert_eq!(
            path.elements(),
            &[PathEl::MoveTo(p(1.0, 1.0)), PathEl::LineTo(p(2.0, 2.0))]
        );
    }
}
