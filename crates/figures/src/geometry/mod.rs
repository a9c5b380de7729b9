//! Enclosing-shape primitives used by the classifier.
//!
//! All routines take outline coordinates as `Coord<f64>` and work on the
//! convex hull of the input, so point order and concavities do not matter.

pub mod circle;
pub mod rect;
pub mod triangle;

pub use circle::{min_enclosing_circle, Circle};
pub use rect::{min_area_rect, min_area_rect_area};
pub use triangle::{min_enclosing_triangle, min_enclosing_triangle_area};

use geo::{Area, ConvexHull};
use geo_types::{Coord, LineString, MultiPoint, Polygon};

pub(crate) fn cross(a: Coord<f64>, b: Coord<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

pub(crate) fn norm(a: Coord<f64>) -> f64 {
    a.x.hypot(a.y)
}

/// Unsigned area of a closed ring given without its closing point
pub fn polygon_area(points: &[Coord<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    Polygon::new(LineString::from(points.to_vec()), vec![]).unsigned_area()
}

/// Convex hull with positive orientation, no closing point and no
/// collinear vertices.
pub fn convex_hull(points: &[Coord<f64>]) -> Vec<Coord<f64>> {
    if points.is_empty() {
        return Vec::new();
    }

    let multi: MultiPoint<f64> = points.iter().copied().collect();
    let mut ring: Vec<Coord<f64>> = multi.convex_hull().exterior().0.clone();
    ring.dedup();
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    if ring.is_empty() {
        // Single distinct point
        ring.push(points[0]);
    }

    if ring.len() >= 3 {
        let signed = Polygon::new(LineString::from(ring.clone()), vec![]).signed_area();
        if signed < 0.0 {
            ring.reverse();
        }
        ring = drop_collinear(ring);
    }

    ring
}

fn drop_collinear(ring: Vec<Coord<f64>>) -> Vec<Coord<f64>> {
    let n = ring.len();
    let kept: Vec<Coord<f64>> = (0..n)
        .filter(|&i| {
            let prev = ring[(i + n - 1) % n];
            let next = ring[(i + 1) % n];
            let a = ring[i] - prev;
            let b = next - ring[i];
            cross(a, b).abs() > 1e-12 * norm(a) * norm(b)
        })
        .map(|i| ring[i])
        .collect();

    if kept.len() < 3 {
        ring
    } else {
        kept
    }
}

#[cfg(test)]
pub(crate) fn coords(points: &[(f64, f64)]) -> Vec<Coord<f64>> {
    points.iter().map(|&(x, y)| Coord { x, y }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polygon_area() {
        let square = coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        assert_relative_eq!(polygon_area(&square), 16.0);
        assert_eq!(polygon_area(&square[..2]), 0.0);
    }

    #[test]
    fn test_hull_is_positively_oriented() {
        let points = coords(&[
            (0.0, 0.0), (2.0, 1.0), (4.0, 0.0), (3.0, 2.0),
            (4.0, 4.0), (2.0, 3.0), (0.0, 4.0), (2.0, 2.0),
        ]);
        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 4);
        let signed = Polygon::new(LineString::from(hull.clone()), vec![]).signed_area();
        assert!(signed > 0.0);
        assert_relative_eq!(polygon_area(&hull), 16.0);
    }

    #[test]
    fn test_hull_drops_collinear_points() {
        let points = coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert_eq!(convex_hull(&points).len(), 4);
    }

    #[test]
    fn test_hull_of_single_point() {
        let hull = convex_hull(&coords(&[(3.0, 5.0), (3.0, 5.0)]));
        assert_eq!(hull, coords(&[(3.0, 5.0)]));
    }
}
