//! FocusPair Render Engine
//!
//! Turns per-tick analysis results into the composite diagnostic view:
//! annotated feed panes, an absolute-difference pane, the score history
//! chart, and the final one- or four-pane layout.
//!
//! ```text
//! gray feed 0 ──► annotate ───┐
//! gray feed 1 ──► annotate ───┤
//!                             ├──► compose ──► composite frame
//! |feed0 − feed1| ────────────┤
//! history ──► chart / blank ──┘
//! ```
//!
//! All operations produce freshly owned buffers; nothing here aliases
//! the grayscale frames the scorer reads.

pub mod compose;
pub mod graph;
pub mod overlay;

pub use compose::{Compositor, ViewMode};
pub use graph::render_history_graph;
