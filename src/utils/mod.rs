//! Small shared helpers: colors, canvas-space vectors and scope timing.
pub mod color;
pub mod profiler;
pub mod vector;
