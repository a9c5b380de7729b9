use image::{imageops, GrayImage};
use imageproc::{
    contours::{find_contours, BorderType},
    point::Point,
};
use crate::{error::Result, traits::ContourExtractor, types::Outline};

/// Imageproc-based extractor keeping only the outermost borders.
///
/// Hole borders and every border nested inside a hole are dropped, and
/// straight runs of the traced boundary are collapsed to their end points.
/// Pixels beyond the frame count as background, so regions touching the
/// image edge are traced like any other.
#[derive(Debug, Clone, Default)]
pub struct ExternalContourExtractor;

impl ContourExtractor for ExternalContourExtractor {
    fn extract_contours(&self, binary_image: &GrayImage) -> Result<Vec<Outline>> {
        let padded = pad_with_background(binary_image);
        let contours = find_contours::<i32>(&padded);

        let result = contours
            .into_iter()
            .filter(|contour| {
                matches!(contour.border_type, BorderType::Outer) && contour.parent.is_none()
            })
            .map(|contour| {
                let points: Vec<Point<i32>> = contour
                    .points
                    .iter()
                    .map(|p| Point::new(p.x - 1, p.y - 1))
                    .collect();
                Outline::new(compress_runs(&points))
            })
            .filter(|outline| !outline.is_empty())
            .collect();

        Ok(result)
    }
}

/// Copy of `image` inside a one pixel black frame.
///
/// imageproc only starts an outer border at a pixel with a background pixel
/// to its left, which column 0 never has.
fn pad_with_background(image: &GrayImage) -> GrayImage {
    let (width, height) = image.dimensions();
    let mut padded = GrayImage::new(width + 2, height + 2);
    imageops::replace(&mut padded, image, 1, 1);
    padded
}

/// Drop every point whose incoming and outgoing steps point the same way.
///
/// The input is treated as a closed ring; a repeated closing point is removed.
pub fn compress_runs(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let mut ring = points.to_vec();
    ring.dedup();
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }

    let n = ring.len();
    if n < 3 {
        return ring;
    }

    let step = |a: Point<i32>, b: Point<i32>| ((b.x - a.x).signum(), (b.y - a.y).signum());

    (0..n)
        .filter(|&i| {
            let prev = ring[(i + n - 1) % n];
            let next = ring[(i + 1) % n];
            step(prev, ring[i]) != step(ring[i], next)
        })
        .map(|i| ring[i])
        .collect()
}
