//! egui panels that edit the brush state.
pub mod brush_settings;
pub mod color_picker;
