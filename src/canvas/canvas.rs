use eframe::egui::ColorImage;
use image::{Rgba, RgbaImage};

use crate::utils::profiler::ScopeTimer;
use crate::utils::vector::Vec2;

/// Background the canvas starts with and returns to on clear.
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Default canvas edge in pixels.
pub const DEFAULT_SIZE: u32 = 400;

/// Single-layer drawing surface backed by an 8-bit RGBA buffer.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    /// Current canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Current canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Copy of the whole canvas. Later edits do not affect the copy.
    pub fn snapshot(&self) -> RgbaImage {
        let _timer = ScopeTimer::new("canvas_snapshot");
        self.image.clone()
    }

    /// Fill the whole canvas with one color.
    pub fn clear(&mut self, color: Rgba<u8>) {
        for px in self.image.pixels_mut() {
            *px = color;
        }
    }

    /// Blend a filled disc onto the canvas. Pixels are covered when their
    /// center lies within `radius` of `center`.
    pub fn draw_disc(&mut self, center: Vec2, radius: f32, color: Rgba<u8>) {
        if radius.is_nan() || radius <= 0.0 || self.width() == 0 || self.height() == 0 {
            return;
        }

        let max_x = self.width() as f32 - 1.0;
        let max_y = self.height() as f32 - 1.0;
        let min_x = (center.x - radius).floor();
        let min_y = (center.y - radius).floor();
        let hi_x = (center.x + radius).ceil();
        let hi_y = (center.y + radius).ceil();
        if hi_x < 0.0 || hi_y < 0.0 || min_x > max_x || min_y > max_y {
            return;
        }

        let x0 = min_x.max(0.0) as u32;
        let y0 = min_y.max(0.0) as u32;
        let x1 = hi_x.min(max_x) as u32;
        let y1 = hi_y.min(max_y) as u32;
        let r2 = radius * radius;

        for y in y0..=y1 {
            let dy = y as f32 + 0.5 - center.y;
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    pub fn blend_pixel(&mut self, x: u32, y: u32, src: Rgba<u8>) {
        if let Some(dst) = self.image.get_pixel_mut_checked(x, y) {
            *dst = alpha_over(src, *dst);
        }
    }
}

/// Straight-alpha "source over destination".
pub fn alpha_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let src_a = f32::from(src[3]) / 255.0;
    let dst_a = f32::from(dst[3]) / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let s = f32::from(src[i]) / 255.0;
        let d = f32::from(dst[i]) / 255.0;
        let c = (s * src_a + d * dst_a * (1.0 - src_a)) / out_a;
        (c.clamp(0.0, 1.0) * 255.0).round() as u8
    };

    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a.clamp(0.0, 1.0) * 255.0).round() as u8,
    ])
}

/// Convert a pixel buffer into an egui image for texture upload.
pub fn color_image(buffer: &RgbaImage) -> ColorImage {
    let _timer = ScopeTimer::new("color_image");
    let size = [buffer.width() as usize, buffer.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, buffer.as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn snapshot_is_detached_from_the_live_canvas() {
        let mut canvas = Canvas::new(8, 8, BACKGROUND);
        let snapshot = canvas.snapshot();
        canvas.draw_disc(Vec2::new(4.0, 4.0), 3.0, BLACK);
        assert_eq!(*snapshot.get_pixel(4, 4), BACKGROUND);
        assert_eq!(canvas.pixel(4, 4), Some(BLACK));
    }

    #[test]
    fn disc_covers_pixel_centers_inside_the_radius() {
        let mut canvas = Canvas::new(10, 10, BACKGROUND);
        canvas.draw_disc(Vec2::new(5.0, 5.0), 1.0, BLACK);
        let covered: Vec<(u32, u32)> = canvas
            .image()
            .enumerate_pixels()
            .filter(|(_, _, px)| **px == BLACK)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(covered, vec![(4, 4), (5, 4), (4, 5), (5, 5)]);
    }

    #[test]
    fn disc_is_clipped_to_bounds() {
        let mut canvas = Canvas::new(4, 4, BACKGROUND);
        canvas.draw_disc(Vec2::new(-1.0, -1.0), 2.5, BLACK);
        assert_eq!(canvas.pixel(0, 0), Some(BLACK));
        assert_eq!(canvas.pixel(3, 3), Some(BACKGROUND));

        canvas.draw_disc(Vec2::new(100.0, 100.0), 5.0, BLACK);
        assert_eq!(canvas.pixel(3, 3), Some(BACKGROUND));
    }

    #[test]
    fn zero_radius_draws_nothing() {
        let mut canvas = Canvas::new(4, 4, BACKGROUND);
        canvas.draw_disc(Vec2::new(2.0, 2.0), 0.0, BLACK);
        assert!(canvas.image().pixels().all(|px| *px == BACKGROUND));
    }

    #[test]
    fn clear_resets_every_pixel() {
        let mut canvas = Canvas::new(6, 6, BACKGROUND);
        canvas.draw_disc(Vec2::new(3.0, 3.0), 3.0, BLACK);
        canvas.clear(BACKGROUND);
        assert!(canvas.image().pixels().all(|px| *px == BACKGROUND));
    }

    #[test]
    fn alpha_over_blends_translucent_source() {
        let out = alpha_over(Rgba([0, 0, 0, 128]), BACKGROUND);
        assert_eq!(out[3], 255);
        assert!((126..=128).contains(&out[0]));
        assert_eq!(alpha_over(BLACK, BACKGROUND), BLACK);
    }

    #[test]
    fn color_image_matches_buffer_size() {
        let canvas = Canvas::new(7, 3, BACKGROUND);
        let img = color_image(canvas.image());
        assert_eq!(img.size, [7, 3]);
        assert_eq!(img.pixels.len(), 21);
    }
}
