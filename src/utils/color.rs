use eframe::egui::Color32;
use image::Rgba;

/// Brush color edited in HSV. Hue is in degrees, saturation and value in 0..1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HsvColor {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Default for HsvColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl HsvColor {
    pub const BLACK: Self = Self {
        h: 0.0,
        s: 0.0,
        v: 0.0,
    };

    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Convert into opaque 8-bit RGBA.
    pub fn to_rgba(&self) -> Rgba<u8> {
        // hue is wrapped into [0,360) so callers can pass any float
        let h = ((self.h % 360.0) + 360.0) % 360.0 / 360.0;
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - (((h * 6.0) % 2.0) - 1.0).abs());
        let m = v - c;

        let (r1, g1, b1) = match (h * 6.0).floor() as i32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgba([
            to_channel(r1 + m),
            to_channel(g1 + m),
            to_channel(b1 + m),
            u8::MAX,
        ])
    }

    /// Convert to egui's 8-bit color format for swatches.
    pub fn to_color32(&self) -> Color32 {
        let Rgba([r, g, b, _]) = self.to_rgba();
        Color32::from_rgb(r, g, b)
    }
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Euclidean distance between two colors in RGB space. Alpha is ignored.
pub fn rgb_distance(a: Rgba<u8>, b: Rgba<u8>) -> f64 {
    let dr = f64::from(a[0]) - f64::from(b[0]);
    let dg = f64::from(a[1]) - f64::from(b[1]);
    let db = f64::from(a[2]) - f64::from(b[2]);
    (dr * dr + dg * dg + db * db).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues_convert_exactly() {
        assert_eq!(HsvColor::new(0.0, 1.0, 1.0).to_rgba(), Rgba([255, 0, 0, 255]));
        assert_eq!(HsvColor::new(120.0, 1.0, 1.0).to_rgba(), Rgba([0, 255, 0, 255]));
        assert_eq!(HsvColor::new(240.0, 1.0, 1.0).to_rgba(), Rgba([0, 0, 255, 255]));
        assert_eq!(HsvColor::new(360.0, 1.0, 1.0).to_rgba(), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(HsvColor::new(200.0, 0.0, 1.0).to_rgba(), Rgba([255, 255, 255, 255]));
        assert_eq!(HsvColor::default().to_rgba(), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn rgb_distance_ignores_alpha() {
        let a = Rgba([6, 8, 0, 0]);
        let b = Rgba([0, 0, 0, 255]);
        assert_eq!(rgb_distance(a, b), 10.0);
    }
}
