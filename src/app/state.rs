use log::warn;

use crate::canvas::canvas::DEFAULT_SIZE;
use crate::utils::color::HsvColor;
use crate::utils::vector::Vec2;

pub const MIN_BRUSH_SIZE: f32 = 0.0;
pub const MAX_BRUSH_SIZE: f32 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BrushMode {
    /// Freehand discs along the cursor path.
    #[default]
    Normal,
    /// Region preview around the cursor; the canvas is left untouched.
    Fill,
}

impl BrushMode {
    pub fn label(&self) -> &'static str {
        match self {
            BrushMode::Normal => "Normal",
            BrushMode::Fill => "Fill",
        }
    }
}

/// Everything the brush panels edit, passed by reference each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SketchState {
    pub brush_color: HsvColor,
    pub brush_size: f32,
    pub mode: BrushMode,
    pub prev_pointer: Vec2,
    clear_requested: bool,
}

impl Default for SketchState {
    fn default() -> Self {
        Self {
            brush_color: HsvColor::BLACK,
            brush_size: 1.0,
            mode: BrushMode::Normal,
            prev_pointer: Vec2::ZERO,
            clear_requested: false,
        }
    }
}

impl SketchState {
    pub fn set_brush_size(&mut self, size: f32) {
        self.brush_size = clamp_brush_size(size);
    }

    /// Fill radius derived from the brush diameter.
    pub fn fill_radius(&self) -> f64 {
        f64::from(self.brush_size) / 2.0
    }

    pub fn request_clear(&mut self) {
        self.clear_requested = true;
    }

    pub fn clear_requested(&self) -> bool {
        self.clear_requested
    }

    /// Returns whether a clear was pending and resets the flag.
    pub fn take_clear_request(&mut self) -> bool {
        std::mem::take(&mut self.clear_requested)
    }
}

pub fn clamp_brush_size(size: f32) -> f32 {
    if size.is_nan() {
        return MIN_BRUSH_SIZE;
    }
    size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE)
}

/// Command-line options read once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
        }
    }
}

/// Parse `--size WxH` / `--size=WxH`. Anything unrecognised is logged and skipped.
pub fn parse_launch_args<I>(args: I) -> LaunchOptions
where
    I: IntoIterator<Item = String>,
{
    let mut options = LaunchOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let value = match arg.as_str() {
            "--size" => args.next(),
            other => match other.strip_prefix("--size=") {
                Some(v) => Some(v.to_string()),
                None => {
                    warn!("ignoring unknown argument {other:?}");
                    continue;
                }
            },
        };

        match value.as_deref().and_then(parse_size) {
            Some((width, height)) => {
                options.width = width;
                options.height = height;
            }
            None => warn!("ignoring malformed canvas size {value:?}, expected WxH"),
        }
    }
    options
}

fn parse_size(value: &str) -> Option<(u32, u32)> {
    let (w, h) = value.split_once(['x', 'X'])?;
    let w: u32 = w.trim().parse().ok()?;
    let h: u32 = h.trim().parse().ok()?;
    (w > 0 && h > 0).then_some((w, h))
}
