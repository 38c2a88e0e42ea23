use eframe::egui;
use log::info;
use sketch_lab::{SketchApp, parse_launch_args};

/// Width reserved for the brush panel next to the canvas.
const PANEL_WIDTH: f32 = 220.0;

/// Launch the native egui application.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let launch = parse_launch_args(std::env::args().skip(1));
    info!("starting with a {}x{} canvas", launch.width, launch.height);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            launch.width as f32 + PANEL_WIDTH,
            (launch.height as f32).max(420.0),
        ]),
        ..Default::default()
    };
    eframe::run_native(
        "SketchLab",
        options,
        Box::new(move |cc| Ok(Box::new(SketchApp::new(cc, launch)))),
    )
}
