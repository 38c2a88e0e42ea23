pub mod app;
pub mod brush_engine;
pub mod canvas;
pub mod ui;
pub mod utils;

pub use app::{BrushMode, LaunchOptions, SketchApp, SketchSession, SketchState, parse_launch_args};
