use image::{Rgb, RgbImage};
use imageproc::{
    drawing::{draw_line_segment_mut, draw_polygon_mut},
    point::Point,
};

/// Paint the interior and boundary of a closed polygon.
///
/// Outlines with fewer than three vertices are drawn as a segment or a
/// single pixel. Anything outside the canvas is clipped.
pub fn fill_polygon(canvas: &mut RgbImage, poly: &[Point<i32>], color: Rgb<u8>) {
    match poly {
        [] => {}
        [p] => {
            let (width, height) = canvas.dimensions();
            if (0..width as i32).contains(&p.x) && (0..height as i32).contains(&p.y) {
                canvas.put_pixel(p.x as u32, p.y as u32, color);
            }
        }
        [a, b] => draw_line_segment_mut(
            canvas,
            (a.x as f32, a.y as f32),
            (b.x as f32, b.y as f32),
            color,
        ),
        [first, .., last] if first == last => fill_polygon(canvas, &poly[..poly.len() - 1], color),
        _ => draw_polygon_mut(canvas, poly, color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    fn points(coords: &[(i32, i32)]) -> Vec<Point<i32>> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn painted(canvas: &RgbImage) -> usize {
        canvas.pixels().filter(|&&p| p == RED).count()
    }

    #[test]
    fn test_fill_covers_boundary_and_interior() {
        let mut canvas = RgbImage::new(20, 20);
        fill_polygon(&mut canvas, &points(&[(2, 3), (2, 8), (11, 8), (11, 3)]), RED);
        assert_eq!(painted(&canvas), 10 * 6);
        assert_eq!(*canvas.get_pixel(11, 8), RED);
        assert_eq!(*canvas.get_pixel(12, 8), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_fill_full_frame() {
        let mut canvas = RgbImage::new(16, 9);
        fill_polygon(&mut canvas, &points(&[(0, 0), (0, 8), (15, 8), (15, 0)]), RED);
        assert_eq!(painted(&canvas), 16 * 9);
    }

    #[test]
    fn test_fill_triangle_stays_inside_bounds() {
        let mut canvas = RgbImage::new(30, 30);
        fill_polygon(&mut canvas, &points(&[(5, 25), (25, 25), (15, 5)]), RED);
        assert_eq!(*canvas.get_pixel(15, 20), RED);
        assert_eq!(*canvas.get_pixel(5, 5), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(25, 5), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_fill_clips_to_canvas() {
        let mut canvas = RgbImage::new(10, 10);
        fill_polygon(&mut canvas, &points(&[(-5, -5), (-5, 20), (20, 20), (20, -5)]), RED);
        assert_eq!(painted(&canvas), 100);
    }

    #[test]
    fn test_single_point() {
        let mut canvas = RgbImage::new(5, 5);
        fill_polygon(&mut canvas, &points(&[(2, 2)]), RED);
        assert_eq!(painted(&canvas), 1);

        fill_polygon(&mut canvas, &points(&[(7, 7)]), RED);
        assert_eq!(painted(&canvas), 1);
    }

    #[test]
    fn test_segment() {
        let mut canvas = RgbImage::new(10, 10);
        fill_polygon(&mut canvas, &points(&[(1, 4), (6, 4)]), RED);
        assert_eq!(painted(&canvas), 6);
    }

    #[test]
    fn test_closed_ring_does_not_panic() {
        let mut canvas = RgbImage::new(20, 20);
        fill_polygon(&mut canvas, &points(&[(2, 3), (2, 8), (11, 8), (11, 3), (2, 3)]), RED);
        assert_eq!(painted(&canvas), 10 * 6);
    }

    #[test]
    fn test_empty_outline() {
        let mut canvas = RgbImage::new(4, 4);
        fill_polygon(&mut canvas, &[], RED);
        assert_eq!(painted(&canvas), 0);
    }
}
