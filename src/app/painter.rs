use eframe::egui;
use eframe::egui::{Color32, TextureHandle, TextureOptions};
use log::debug;

use crate::app::session::{FrameInput, FrameOutcome, SketchSession};
use crate::app::state::LaunchOptions;
use crate::canvas::color_image;
use crate::ui;
use crate::utils::profiler::ScopeTimer;
use crate::utils::vector::Vec2;

fn full_uv() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}

/// Main egui application: presents the canvas and the fill overlay and feeds
/// pointer input into the session each frame.
pub struct SketchApp {
    session: SketchSession,
    canvas_texture: TextureHandle,
    overlay_texture: TextureHandle,
}

impl SketchApp {
    pub fn new(cc: &eframe::CreationContext<'_>, options: LaunchOptions) -> Self {
        let session = SketchSession::new(&options);
        let canvas_texture = cc.egui_ctx.load_texture(
            "canvas",
            color_image(session.canvas().image()),
            TextureOptions::NEAREST,
        );
        let overlay_texture = cc.egui_ctx.load_texture(
            "fill_overlay",
            color_image(session.overlay()),
            TextureOptions::NEAREST,
        );
        Self {
            session,
            canvas_texture,
            overlay_texture,
        }
    }

    fn upload(&mut self, outcome: FrameOutcome) {
        if outcome.canvas_dirty {
            let _timer = ScopeTimer::new("canvas_upload");
            self.canvas_texture
                .set(color_image(self.session.canvas().image()), TextureOptions::NEAREST);
        }
        if outcome.overlay_dirty {
            let _timer = ScopeTimer::new("overlay_upload");
            self.overlay_texture
                .set(color_image(self.session.overlay()), TextureOptions::NEAREST);
            if let Some(summary) = self.session.last_highlight() {
                debug!(
                    "fill preview: {} similar, {} dissimilar",
                    summary.similar, summary.dissimilar
                );
            }
        }
    }
}

impl eframe::App for SketchApp {
    /// Run the panels, advance one frame of painting, then draw everything.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::brush_settings::brush_settings_panel(ctx, &mut self.session.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::from_gray(40)))
            .show(ctx, |ui| {
                let canvas = self.session.canvas();
                let size = egui::vec2(canvas.width() as f32, canvas.height() as f32);
                let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

                let pointer = ctx
                    .input(|i| i.pointer.latest_pos())
                    .map(|pos| Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y));
                let outcome = self.session.step(FrameInput {
                    pointer,
                    primary_down: response.is_pointer_button_down_on(),
                });
                self.upload(outcome);

                let painter = ui.painter_at(rect);
                painter.image(self.canvas_texture.id(), rect, full_uv(), Color32::WHITE);
                painter.image(self.overlay_texture.id(), rect, full_uv(), Color32::WHITE);

                if let Some(pos) = response.hover_pos() {
                    painter.circle_stroke(
                        pos,
                        self.session.state.brush_size / 2.0,
                        egui::Stroke::new(1.0, Color32::RED),
                    );
                }
            });

        // The session is polled every frame, like a game loop.
        ctx.request_repaint();
    }
}
