//! Synthetic images shared by the unit tests.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

pub const SIZE: u32 = 512;

#[derive(Debug, Clone, Copy)]
pub enum Layout {
    Gray,
    Rgb,
}

fn from_mask(layout: Layout, inside: impl Fn(f64, f64) -> bool) -> DynamicImage {
    let value = |x: u32, y: u32| if inside(x as f64, y as f64) { 255 } else { 0 };
    match layout {
        Layout::Gray => DynamicImage::ImageLuma8(GrayImage::from_fn(SIZE, SIZE, |x, y| {
            Luma([value(x, y)])
        })),
        Layout::Rgb => DynamicImage::ImageRgb8(RgbImage::from_fn(SIZE, SIZE, |x, y| {
            let v = value(x, y);
            Rgb([v, v, v])
        })),
    }
}

fn side(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> f64 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

/// One white circle, rectangle and triangle on black, well apart.
pub fn figures_image(layout: Layout) -> DynamicImage {
    let triangle = [(60.0, 470.0), (170.0, 270.0), (280.0, 470.0)];
    from_mask(layout, |x, y| {
        let circle = (x - 140.0).powi(2) + (y - 140.0).powi(2) <= 100.0 * 100.0;
        let rectangle = (300.0..=470.0).contains(&x) && (40.0..=200.0).contains(&y);
        let sides: Vec<f64> = (0..3)
            .map(|i| side(triangle[i], triangle[(i + 1) % 3], (x, y)))
            .collect();
        let in_triangle = sides.iter().all(|&s| s >= 0.0) || sides.iter().all(|&s| s <= 0.0);
        circle || rectangle || in_triangle
    })
}

/// A rectangle flush with the left edge and a circle resting on the bottom row.
pub fn edge_figures_image(layout: Layout) -> DynamicImage {
    from_mask(layout, |x, y| {
        let rectangle = x <= 120.0 && (40.0..=180.0).contains(&y);
        let circle = (x - 350.0).powi(2) + (y - 411.0).powi(2) <= 100.0 * 100.0;
        rectangle || circle
    })
}

pub fn black_image(layout: Layout) -> DynamicImage {
    from_mask(layout, |_, _| false)
}

pub fn white_image(layout: Layout) -> DynamicImage {
    from_mask(layout, |_, _| true)
}
