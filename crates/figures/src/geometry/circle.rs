use std::f64::consts::PI;

use geo_types::Coord;

use super::{convex_hull, cross, norm};

/// Relative slack when testing whether a point lies inside a circle.
const CONTAINS_EPS: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Coord<f64>,
    pub radius: f64,
}

impl Circle {
    fn from_point(center: Coord<f64>) -> Self {
        Self { center, radius: 0.0 }
    }

    fn from_diameter(a: Coord<f64>, b: Coord<f64>) -> Self {
        let center = (a + b) / 2.0;
        Self { center, radius: norm(a - center) }
    }

    /// Circle through three points; falls back to the widest diameter when
    /// the points are collinear.
    fn from_triangle(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> Self {
        let ab = b - a;
        let ac = c - a;
        let d = 2.0 * cross(ab, ac);
        if d.abs() <= f64::EPSILON * norm(ab) * norm(ac) {
            return [
                Self::from_diameter(a, b),
                Self::from_diameter(a, c),
                Self::from_diameter(b, c),
            ]
            .into_iter()
            .fold(Self::from_point(a), |best, circle| {
                if circle.radius > best.radius { circle } else { best }
            });
        }

        let ab2 = ab.x * ab.x + ab.y * ab.y;
        let ac2 = ac.x * ac.x + ac.y * ac.y;
        let offset = Coord {
            x: (ac.y * ab2 - ab.y * ac2) / d,
            y: (ab.x * ac2 - ac.x * ab2) / d,
        };
        Self { center: a + offset, radius: norm(offset) }
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn contains(&self, p: Coord<f64>) -> bool {
        norm(p - self.center) <= self.radius * (1.0 + CONTAINS_EPS) + CONTAINS_EPS
    }
}

/// Smallest circle containing every point (incremental Welzl construction).
///
/// Returns `None` for empty input.
pub fn min_enclosing_circle(points: &[Coord<f64>]) -> Option<Circle> {
    let hull = convex_hull(points);
    let first = *hull.first()?;

    let mut circle = Circle::from_point(first);
    for i in 0..hull.len() {
        if circle.contains(hull[i]) {
            continue;
        }
        circle = Circle::from_point(hull[i]);
        for j in 0..i {
            if circle.contains(hull[j]) {
                continue;
            }
            circle = Circle::from_diameter(hull[i], hull[j]);
            for k in 0..j {
                if !circle.contains(hull[k]) {
                    circle = Circle::from_triangle(hull[i], hull[j], hull[k]);
                }
            }
        }
    }

    Some(circle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::coords;
    use approx::assert_relative_eq;

    #[test]
    fn test_square_circumcircle() {
        let square = coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let circle = min_enclosing_circle(&square).unwrap();
        assert_relative_eq!(circle.center.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(circle.center.y, 5.0, epsilon = 1e-9);
        assert_relative_eq!(circle.radius, 50f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_obtuse_triangle_uses_diameter() {
        let points = coords(&[(0.0, 0.0), (10.0, 0.0), (5.0, 1.0)]);
        let circle = min_enclosing_circle(&points).unwrap();
        assert_relative_eq!(circle.center.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(circle.center.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(circle.radius, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_encloses_all_points() {
        let points: Vec<Coord<f64>> = (0..60)
            .map(|i| {
                let t = i as f64 * 0.7;
                Coord { x: 40.0 * t.cos() + (i % 7) as f64, y: 25.0 * t.sin() - (i % 5) as f64 }
            })
            .collect();
        let circle = min_enclosing_circle(&points).unwrap();
        assert!(points.iter().all(|&p| circle.contains(p)));
        // At least two points sit on the boundary of a minimal circle
        let on_boundary = points
            .iter()
            .filter(|&&p| (norm(p - circle.center) - circle.radius).abs() < 1e-6)
            .count();
        assert!(on_boundary >= 2);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(min_enclosing_circle(&[]).is_none());
        let single = min_enclosing_circle(&coords(&[(2.0, 3.0)])).unwrap();
        assert_eq!(single.radius, 0.0);
        assert_eq!(single.area(), 0.0);
    }
}
