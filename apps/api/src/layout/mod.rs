// Section Formatter: marker-based section extraction, long-token sanitization
// and the draw-command builder. Pure, synchronous, no I/O.

pub mod document;
pub mod sanitize;
pub mod sections;

// Re-export the types other modules hold on to (state, render backends).
pub use document::{DrawCommand, RenderStyle};
