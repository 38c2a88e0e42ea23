use image::Rgba;

use crate::canvas::Canvas;
use crate::utils::vector::{Vec2, distance};

/// Dab centers between two cursor samples, one per pixel of travel.
///
/// For a segment of rounded length `len > 0` this yields `len` points starting
/// at `from` and stopping one step short of `to`, which becomes the start of
/// the next segment. A segment that rounds to zero yields `to` once, so a
/// stationary cursor still leaves a mark.
#[derive(Clone, Debug)]
pub struct StrokeSteps {
    from: Vec2,
    to: Vec2,
    len: u32,
    next: u32,
}

impl StrokeSteps {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        // NaN and negative lengths saturate to 0.
        let len = distance(from, to).round() as u32;
        Self {
            from,
            to,
            len,
            next: 0,
        }
    }

    fn total(&self) -> u32 {
        self.len.max(1)
    }
}

impl Iterator for StrokeSteps {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.next >= self.total() {
            return None;
        }
        let i = self.next;
        self.next += 1;

        if self.len == 0 {
            return Some(self.to);
        }
        let len = self.len as f32;
        let i = i as f32;
        Some((self.from * (len - i) + self.to * i) / len)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.total() - self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for StrokeSteps {}

/// Stamp discs of `diameter` along the segment. Returns the number of dabs.
pub fn paint_segment(
    canvas: &mut Canvas,
    from: Vec2,
    to: Vec2,
    diameter: f32,
    color: Rgba<u8>,
) -> usize {
    let radius = diameter / 2.0;
    let mut dabs = 0;
    for p in StrokeSteps::new(from, to) {
        canvas.draw_disc(p, radius, color);
        dabs += 1;
    }
    dabs
}
