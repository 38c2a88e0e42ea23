//! Fill-mode preview: a bounded flood fill around the cursor.
//!
//! Starting from a seed pixel, the pass walks 4-connected neighbors that stay
//! within a circular radius. Each visited pixel is compared with the color of
//! the neighbor that queued it. Similar pixels are painted translucent red and
//! keep spreading; the first dissimilar pixel on a branch is painted
//! translucent green and the branch stops there.

use image::{Rgba, RgbaImage};
use log::trace;

use crate::utils::color::rgb_distance;

/// RGB distance below which two neighboring pixels count as the same region.
pub const DEFAULT_THRESHOLD: f64 = 10.0;

/// Overlay color for pixels inside the region.
pub const SIMILAR_COLOR: Rgba<u8> = Rgba([255, 0, 0, 32]);
/// Overlay color for the boundary pixels where propagation stopped.
pub const DISSIMILAR_COLOR: Rgba<u8> = Rgba([0, 255, 0, 32]);

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

// Push order is +x, -x, +y, -y, so -y is popped first.
const NEIGHBORS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Similar,
    Dissimilar,
}

impl Classification {
    /// Strictly below the threshold is similar; equal or above is not.
    pub fn from_distance(distance: f64, threshold: f64) -> Self {
        if distance < threshold {
            Classification::Similar
        } else {
            Classification::Dissimilar
        }
    }

    pub fn overlay_color(self) -> Rgba<u8> {
        match self {
            Classification::Similar => SIMILAR_COLOR,
            Classification::Dissimilar => DISSIMILAR_COLOR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightOptions {
    pub threshold: f64,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Pixel counts produced by one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighlightSummary {
    pub similar: usize,
    pub dissimilar: usize,
}

impl HighlightSummary {
    pub fn visited(&self) -> usize {
        self.similar + self.dissimilar
    }
}

/// Work item: a pixel waiting to be classified against `reference`.
#[derive(Clone, Copy, Debug)]
struct PendingPixel {
    x: u32,
    y: u32,
    reference: Rgba<u8>,
}

/// Reusable highlighter state. The overlay, visited grid and work stack are
/// kept between passes to avoid reallocating every frame, but each pass
/// resets them completely before it starts.
pub struct RegionHighlighter {
    options: HighlightOptions,
    overlay: RgbaImage,
    visited: Vec<bool>,
    stack: Vec<PendingPixel>,
}

impl RegionHighlighter {
    /// Create a highlighter whose overlay starts fully transparent at the given size.
    pub fn new(width: u32, height: u32, options: HighlightOptions) -> Self {
        let len = pixel_count(width, height);
        Self {
            options,
            overlay: RgbaImage::new(width, height),
            visited: vec![false; len],
            stack: Vec::with_capacity(len),
        }
    }

    pub fn options(&self) -> HighlightOptions {
        self.options
    }

    /// Overlay produced by the most recent pass.
    pub fn overlay(&self) -> &RgbaImage {
        &self.overlay
    }

    pub fn into_overlay(self) -> RgbaImage {
        self.overlay
    }

    /// Run one full pass over `source`, seeded at `seed` and bounded by `radius`.
    ///
    /// The seed is clamped onto the buffer and also serves as the center of the
    /// radius test. An empty buffer or a negative (or NaN) radius visits nothing.
    pub fn run(&mut self, source: &RgbaImage, seed: (i32, i32), radius: f64) -> HighlightSummary {
        let (width, height) = source.dimensions();
        self.reset(width, height);

        let mut summary = HighlightSummary::default();
        if width == 0 || height == 0 || radius.is_nan() || radius < 0.0 {
            return summary;
        }

        let cx = i64::from(seed.0).clamp(0, i64::from(width) - 1);
        let cy = i64::from(seed.1).clamp(0, i64::from(height) - 1);
        let center = (cx, cy);

        // The seed is its own reference, so it always lands in the region.
        let (sx, sy) = (cx as u32, cy as u32);
        let seed_idx = self.index(sx, sy);
        self.visited[seed_idx] = true;
        self.stack.push(PendingPixel {
            x: sx,
            y: sy,
            reference: *source.get_pixel(sx, sy),
        });

        while let Some(item) = self.stack.pop() {
            let color = *source.get_pixel(item.x, item.y);
            let class = Classification::from_distance(
                rgb_distance(color, item.reference),
                self.options.threshold,
            );
            self.overlay.put_pixel(item.x, item.y, class.overlay_color());

            match class {
                Classification::Similar => {
                    summary.similar += 1;
                    for (dx, dy) in NEIGHBORS {
                        self.try_push(
                            i64::from(item.x) + dx,
                            i64::from(item.y) + dy,
                            center,
                            radius,
                            color,
                        );
                    }
                }
                Classification::Dissimilar => summary.dissimilar += 1,
            }
        }

        trace!(
            "highlight pass at ({cx}, {cy}) r={radius}: {} similar, {} dissimilar",
            summary.similar,
            summary.dissimilar
        );
        summary
    }

    fn try_push(&mut self, x: i64, y: i64, center: (i64, i64), radius: f64, reference: Rgba<u8>) {
        let (width, height) = self.overlay.dimensions();
        if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
            return;
        }

        let dx = (x - center.0) as f64;
        let dy = (y - center.1) as f64;
        if (dx * dx + dy * dy).sqrt() > radius {
            return;
        }

        let (x, y) = (x as u32, y as u32);
        let idx = self.index(x, y);
        if self.visited[idx] {
            return;
        }
        self.visited[idx] = true;
        self.stack.push(PendingPixel { x, y, reference });
    }

    fn reset(&mut self, width: u32, height: u32) {
        if self.overlay.dimensions() == (width, height) {
            for px in self.overlay.pixels_mut() {
                *px = CLEAR;
            }
            self.visited.fill(false);
        } else {
            let len = pixel_count(width, height);
            self.overlay = RgbaImage::new(width, height);
            self.visited = vec![false; len];
            self.stack = Vec::with_capacity(len);
        }
        self.stack.clear();
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.overlay.width() as usize + x as usize
    }
}

impl Default for RegionHighlighter {
    fn default() -> Self {
        Self::new(0, 0, HighlightOptions::default())
    }
}

fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// One-shot pass with default options, returning an owned overlay.
pub fn highlight_region(source: &RgbaImage, seed: (i32, i32), radius: f64) -> RgbaImage {
    let (width, height) = source.dimensions();
    let mut highlighter = RegionHighlighter::new(width, height, HighlightOptions::default());
    highlighter.run(source, seed, radius);
    highlighter.into_overlay()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn painted(overlay: &RgbaImage) -> usize {
        overlay.pixels().filter(|px| px[3] != 0).count()
    }

    #[test]
    fn threshold_is_strictly_less_than() {
        assert_eq!(Classification::from_distance(9.999, 10.0), Classification::Similar);
        assert_eq!(Classification::from_distance(10.0, 10.0), Classification::Dissimilar);
        assert_eq!(Classification::from_distance(10.001, 10.0), Classification::Dissimilar);
    }

    #[test]
    fn integer_colors_at_the_threshold() {
        // (6, 8, 0) is exactly 10 away from black.
        let mut source = RgbaImage::from_pixel(2, 1, BLACK);
        source.put_pixel(1, 0, Rgba([6, 8, 0, 255]));
        let overlay = highlight_region(&source, (0, 0), 5.0);
        assert_eq!(*overlay.get_pixel(0, 0), SIMILAR_COLOR);
        assert_eq!(*overlay.get_pixel(1, 0), DISSIMILAR_COLOR);

        // sqrt(99) stays inside.
        source.put_pixel(1, 0, Rgba([3, 3, 9, 255]));
        let overlay = highlight_region(&source, (0, 0), 5.0);
        assert_eq!(*overlay.get_pixel(1, 0), SIMILAR_COLOR);
    }

    #[test]
    fn seed_is_always_similar() {
        let mut source = RgbaImage::from_pixel(3, 3, WHITE);
        source.put_pixel(1, 1, Rgba([12, 200, 77, 255]));
        let overlay = highlight_region(&source, (1, 1), 3.0);
        assert_eq!(*overlay.get_pixel(1, 1), SIMILAR_COLOR);
    }

    #[test]
    fn zero_radius_visits_only_the_seed() {
        let source = RgbaImage::from_pixel(5, 5, WHITE);
        let mut highlighter = RegionHighlighter::new(5, 5, HighlightOptions::default());
        let summary = highlighter.run(&source, (2, 2), 0.0);
        assert_eq!(summary, HighlightSummary { similar: 1, dissimilar: 0 });
        assert_eq!(*highlighter.overlay().get_pixel(2, 2), SIMILAR_COLOR);
        assert_eq!(painted(highlighter.overlay()), 1);
    }

    #[test]
    fn out_of_bounds_seed_is_clamped() {
        let source = RgbaImage::from_pixel(4, 3, WHITE);
        let overlay = highlight_region(&source, (50, -7), 0.0);
        assert_eq!(*overlay.get_pixel(3, 0), SIMILAR_COLOR);
        assert_eq!(painted(&overlay), 1);
    }

    #[test]
    fn degenerate_inputs_visit_nothing() {
        let source = RgbaImage::from_pixel(4, 4, WHITE);
        let mut highlighter = RegionHighlighter::new(4, 4, HighlightOptions::default());
        assert_eq!(highlighter.run(&source, (1, 1), -1.0).visited(), 0);
        assert_eq!(highlighter.run(&source, (1, 1), f64::NAN).visited(), 0);
        assert_eq!(painted(highlighter.overlay()), 0);

        let empty = RgbaImage::new(0, 0);
        assert_eq!(highlighter.run(&empty, (0, 0), 10.0).visited(), 0);
        assert_eq!(highlighter.overlay().dimensions(), (0, 0));
    }

    #[test]
    fn reference_is_the_queuing_neighbor() {
        // Each step is 5 apart, so the row is one region even though the ends
        // are far apart.
        let mut source = RgbaImage::new(20, 1);
        for x in 0..20 {
            let v = (x * 5) as u8;
            source.put_pixel(x, 0, Rgba([v, v, v, 255]));
        }
        let overlay = highlight_region(&source, (0, 0), 100.0);
        assert!(overlay.pixels().all(|px| *px == SIMILAR_COLOR));
    }

    #[test]
    fn passes_do_not_leak_into_each_other() {
        let source = RgbaImage::from_pixel(30, 30, WHITE);
        let mut highlighter = RegionHighlighter::new(30, 30, HighlightOptions::default());
        highlighter.run(&source, (5, 5), 2.0);
        highlighter.run(&source, (25, 25), 2.0);
        assert_eq!(*highlighter.overlay().get_pixel(5, 5), CLEAR);
        assert_eq!(*highlighter.overlay().get_pixel(25, 25), SIMILAR_COLOR);
    }

    #[test]
    fn custom_threshold_widens_the_region() {
        let mut source = RgbaImage::from_pixel(2, 1, BLACK);
        source.put_pixel(1, 0, Rgba([30, 0, 0, 255]));
        let mut highlighter = RegionHighlighter::new(2, 1, HighlightOptions { threshold: 31.0 });
        let summary = highlighter.run(&source, (0, 0), 1.0);
        assert_eq!(summary.dissimilar, 0);
        assert_eq!(summary.similar, 2);
    }
}
