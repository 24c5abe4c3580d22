//! Session control state shared between the tick loop and input handling.
//!
//! Toggle events may arrive on a different thread than the tick loop,
//! and the flags are read mid-pipeline. Each field is a single scalar
//! with one writer and one reader, so the whole struct is a set of
//! atomics behind an `Arc` rather than a lock.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

pub use focuspair_render::compose::ViewMode;

const MODE_ANALYTICS_4Q: u8 = 0;
const MODE_SIDE_BY_SIDE: u8 = 1;

/// Snapshot of the display flags for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayToggles {
    /// Suspend history recording; samples keep being computed but are
    /// discarded.
    pub freeze_history: bool,

    /// Show the history chart in the fourth quadrant.
    pub show_graph: bool,
}

/// Live session controls, flipped by the input collaborator and read by
/// the pipeline once per tick.
#[derive(Debug, Default)]
pub struct ControlState {
    freeze_history: AtomicBool,
    show_graph: AtomicBool,
    mode: AtomicU8,
    stop: AtomicBool,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip history freezing; returns the new value.
    pub fn toggle_freeze(&self) -> bool {
        !self.freeze_history.fetch_xor(true, Ordering::SeqCst)
    }

    /// Flip chart visibility; returns the new value.
    pub fn toggle_graph(&self) -> bool {
        !self.show_graph.fetch_xor(true, Ordering::SeqCst)
    }

    /// Switch to the other layout; returns the new mode.
    pub fn toggle_mode(&self) -> ViewMode {
        let previous = self.mode.fetch_xor(1, Ordering::SeqCst);
        decode_mode(previous ^ 1)
    }

    /// Select a layout directly (offline harnesses).
    pub fn set_view_mode(&self, mode: ViewMode) {
        self.mode.store(encode_mode(mode), Ordering::SeqCst);
    }

    /// Set chart visibility directly (offline harnesses).
    pub fn set_show_graph(&self, show: bool) {
        self.show_graph.store(show, Ordering::SeqCst);
    }

    pub fn view_mode(&self) -> ViewMode {
        decode_mode(self.mode.load(Ordering::SeqCst))
    }

    pub fn toggles(&self) -> DisplayToggles {
        DisplayToggles {
            freeze_history: self.freeze_history.load(Ordering::SeqCst),
            show_graph: self.show_graph.load(Ordering::SeqCst),
        }
    }

    /// Request session termination.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    pub fn stop_requested(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }
}

fn encode_mode(mode: ViewMode) -> u8 {
    match mode {
        ViewMode::Analytics4Q => MODE_ANALYTICS_4Q,
        ViewMode::SideBySide => MODE_SIDE_BY_SIDE,
    }
}

fn decode_mode(raw: u8) -> ViewMode {
    match raw {
        MODE_SIDE_BY_SIDE => ViewMode::SideBySide,
        _ => ViewMode::Analytics4Q,
    }
}
