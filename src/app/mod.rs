pub mod painter;
pub mod session;
pub mod state;

pub use painter::SketchApp;
pub use session::{FrameInput, FrameOutcome, SketchSession};
pub use state::{BrushMode, LaunchOptions, SketchState, parse_launch_args};
