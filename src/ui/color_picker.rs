use eframe::egui;
use egui::Color32;

use crate::utils::color::HsvColor;

const SLIDER_MIN: f32 = 140.0;
const SLIDER_MAX: f32 = 240.0;
const SWATCH_HEIGHT: f32 = 24.0;

fn slider_width(ui: &egui::Ui) -> f32 {
    ui.available_width().clamp(SLIDER_MIN, SLIDER_MAX)
}

/// Horizontal bar painted with `color_at(t)` for t in 0..1; `value` follows the pointer.
fn gradient_slider(
    ui: &mut egui::Ui,
    width: f32,
    value: &mut f32,
    label: &str,
    color_at: &dyn Fn(f32) -> Color32,
) -> bool {
    ui.label(label);
    let bar_height = 18.0;
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, bar_height), egui::Sense::click_and_drag());
    let painter = ui.painter();
    let radius = bar_height * 0.5;

    let steps = 48;
    let mut mesh = egui::Mesh::default();
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = egui::lerp(rect.x_range(), t);
        let color = color_at(t);
        mesh.colored_vertex(egui::pos2(x, rect.top()), color);
        mesh.colored_vertex(egui::pos2(x, rect.bottom()), color);
        if i > 0 {
            let base = (i * 2) as u32;
            mesh.add_triangle(base - 2, base - 1, base);
            mesh.add_triangle(base - 1, base + 1, base);
        }
    }
    painter.add(egui::Shape::mesh(mesh));
    painter.rect_stroke(rect, radius, egui::Stroke::new(1.0, Color32::from_gray(80)));

    let handle_x = egui::lerp(rect.x_range(), value.clamp(0.0, 1.0));
    let handle_rect = egui::Rect::from_center_size(
        egui::pos2(handle_x, rect.center().y),
        egui::vec2(8.0, bar_height + 4.0),
    );
    painter.rect_filled(handle_rect, radius, Color32::from_white_alpha(180));
    painter.rect_stroke(handle_rect, radius, egui::Stroke::new(1.0, Color32::from_gray(40)));

    if response.clicked() || response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            let t = ((pos.x - rect.left()) / rect.width()).clamp(0.0, 1.0);
            if (t - *value).abs() > f32::EPSILON {
                *value = t;
                return true;
            }
        }
    }
    false
}

/// Hue, saturation and value bars plus a swatch of the result.
pub fn hsv_picker(ui: &mut egui::Ui, color: &mut HsvColor) -> bool {
    let width = slider_width(ui);
    let current = *color;
    let mut changed = false;

    let (swatch, _) =
        ui.allocate_exact_size(egui::vec2(width, SWATCH_HEIGHT), egui::Sense::hover());
    ui.painter().rect_filled(swatch, 4.0, current.to_color32());

    let mut hue = current.h.rem_euclid(360.0) / 360.0;
    if gradient_slider(ui, width, &mut hue, "Hue", &|t| {
        HsvColor::new(t * 360.0, 1.0, 1.0).to_color32()
    }) {
        color.h = hue * 360.0;
        changed = true;
    }

    if gradient_slider(ui, width, &mut color.s, "Saturation", &|t| {
        HsvColor::new(current.h, t, current.v.max(0.2)).to_color32()
    }) {
        changed = true;
    }

    if gradient_slider(ui, width, &mut color.v, "Value", &|t| {
        HsvColor::new(current.h, current.s, t).to_color32()
    }) {
        changed = true;
    }

    changed
}
