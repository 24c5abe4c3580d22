//! FocusPair Session
//!
//! Ties the analysis and render crates into a tick-driven comparison
//! pipeline and owns the session-scoped control state (view mode,
//! freeze and graph toggles, termination).
//!
//! Frame acquisition and presentation stay outside: collaborators feed
//! raw frames in and take composite frames out.
//!
//! ```text
//! feed 0 ─┐                                            ┌─► composite
//!         ├─► normalize ─► score ─► history ─► compose ┤
//! feed 1 ─┘                   ▲                        └─► score pair
//!                             │
//!              ControlState (freeze / graph / mode / stop)
//! ```

pub mod launch;
pub mod pipeline;
pub mod source;
pub mod state;

pub use pipeline::{ComparisonPipeline, TickOutput};
pub use source::{FrameSequenceSource, FrameSource, StillSource};
pub use state::{ControlState, DisplayToggles, ViewMode};
