use geo::MinimumRotatedRect;
use geo_types::{Coord, MultiPoint};

use super::polygon_area;

/// Corners of the minimum-area rotated rectangle around `points`.
pub fn min_area_rect(points: &[Coord<f64>]) -> Option<Vec<Coord<f64>>> {
    if points.is_empty() {
        return None;
    }
    let multi: MultiPoint<f64> = points.iter().copied().collect();
    let rect = multi.minimum_rotated_rect()?;

    let mut corners = rect.exterior().0.clone();
    while corners.len() > 1 && corners.first() == corners.last() {
        corners.pop();
    }
    Some(corners)
}

/// Area of the minimum rotated rectangle with its corners snapped to the
/// nearest pixel, as a pixel-space box would be drawn.
pub fn min_area_rect_area(points: &[Coord<f64>]) -> f64 {
    let Some(corners) = min_area_rect(points) else {
        return 0.0;
    };
    let snapped: Vec<Coord<f64>> = corners
        .into_iter()
        .map(|c| Coord { x: c.x.round(), y: c.y.round() })
        .collect();
    polygon_area(&snapped)
}
