use crate::app::state::{BrushMode, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, SketchState};
use crate::ui::color_picker::hsv_picker;
use eframe::egui;

/// Side panel with the brush size, clear button, color and mode controls.
pub fn brush_settings_panel(ctx: &egui::Context, state: &mut SketchState) {
    egui::SidePanel::right("brush settings")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Brush");
            ui.separator();

            ui.label("Size:");
            ui.add(
                egui::Slider::new(&mut state.brush_size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE)
                    .fixed_decimals(2),
            );

            ui.add_space(5.0);
            if ui.button("Clear").clicked() {
                state.request_clear();
            }

            ui.separator();
            hsv_picker(ui, &mut state.brush_color);

            ui.separator();
            ui.label("Mode:");
            for mode in [BrushMode::Normal, BrushMode::Fill] {
                ui.radio_value(&mut state.mode, mode, mode.label());
            }
        });
}
