//! Brush behaviour: stroke interpolation for Normal mode and the region
//! highlighter used by the Fill preview.
pub mod highlight;
pub mod stroke;

pub use highlight::{
    Classification, HighlightOptions, HighlightSummary, RegionHighlighter, highlight_region,
};
pub use stroke::{StrokeSteps, paint_segment};
