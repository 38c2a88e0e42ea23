use image::RgbaImage;

use crate::app::state::{BrushMode, LaunchOptions, SketchState};
use crate::brush_engine::highlight::{HighlightOptions, HighlightSummary, RegionHighlighter};
use crate::brush_engine::stroke::paint_segment;
use crate::canvas::Canvas;
use crate::canvas::canvas::BACKGROUND;
use crate::utils::profiler::ScopeTimer;
use crate::utils::vector::Vec2;

/// Pointer state polled once per frame, in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// `None` when the pointer is outside the window.
    pub pointer: Option<Vec2>,
    pub primary_down: bool,
}

/// Which textures need uploading after a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    pub canvas_dirty: bool,
    pub overlay_dirty: bool,
}

/// Owns the canvas, the brush state and the fill previewer, and advances
/// them one frame at a time.
pub struct SketchSession {
    pub state: SketchState,
    canvas: Canvas,
    highlighter: RegionHighlighter,
    last_highlight: Option<HighlightSummary>,
}

impl SketchSession {
    pub fn new(options: &LaunchOptions) -> Self {
        Self {
            state: SketchState::default(),
            canvas: Canvas::new(options.width, options.height, BACKGROUND),
            highlighter: RegionHighlighter::new(
                options.width,
                options.height,
                HighlightOptions::default(),
            ),
            last_highlight: None,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Fill preview from the latest Fill-mode frame.
    pub fn overlay(&self) -> &RgbaImage {
        self.highlighter.overlay()
    }

    pub fn last_highlight(&self) -> Option<HighlightSummary> {
        self.last_highlight
    }

    pub fn step(&mut self, input: FrameInput) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();

        if let Some(pointer) = input.pointer {
            match self.state.mode {
                BrushMode::Normal => {
                    if input.primary_down {
                        paint_segment(
                            &mut self.canvas,
                            self.state.prev_pointer,
                            pointer,
                            self.state.brush_size,
                            self.state.brush_color.to_rgba(),
                        );
                        outcome.canvas_dirty = true;
                    }
                    self.state.prev_pointer = pointer;
                }
                BrushMode::Fill => {
                    let _timer = ScopeTimer::new("fill_preview");
                    let snapshot = self.canvas.snapshot();
                    let radius = self.state.fill_radius();
                    let summary = self.highlighter.run(&snapshot, pointer.to_pixel(), radius);
                    self.last_highlight = Some(summary);
                    outcome.overlay_dirty = true;
                }
            }
        }

        if self.state.take_clear_request() {
            self.canvas.clear(BACKGROUND);
            outcome.canvas_dirty = true;
        }

        outcome
    }
}
