//! The live drawing surface and its conversion to egui textures.
pub mod canvas;

pub use canvas::{Canvas, color_image};
