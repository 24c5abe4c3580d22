//! The per-tick comparison pipeline.
//!
//! One external timer drives one full pass per tick: normalize both
//! frames, score them, fold the pair into the history, and composite
//! the diagnostic view. The pass is synchronous and never suspends; a
//! tick that observes an empty input frame aborts with no partial state
//! mutation.

use std::sync::Arc;

use image::{DynamicImage, GrayImage, RgbImage};

use focuspair_analysis::gray::{is_empty, normalize_frame};
use focuspair_analysis::history::ScoreHistory;
use focuspair_analysis::score::ScorePair;
use focuspair_analysis::sharpness::{CenterWeightedMask, SharpnessScorer};
use focuspair_common::error::FocusResult;
use focuspair_render::compose::{Compositor, ViewMode};
use focuspair_render::graph::render_history_graph;

use crate::state::ControlState;

/// One tick's observable result.
#[derive(Debug)]
pub struct TickOutput {
    /// The composite diagnostic frame, sized by the active layout.
    pub composite: RgbImage,

    /// Normalized sharpness of the two feeds.
    pub scores: ScorePair,

    /// Layout the composite was assembled with.
    pub mode: ViewMode,
}

/// Owns the per-session analysis state and runs one full pass per tick.
pub struct ComparisonPipeline {
    scorer: SharpnessScorer,
    compositor: Compositor,
    history: ScoreHistory,
    controls: Arc<ControlState>,
    width: u32,
    height: u32,
    ticks_processed: u64,
    ticks_skipped: u64,
}

impl ComparisonPipeline {
    /// Build the session pipeline.
    ///
    /// Fails when the capture dimensions cannot produce a valid weight
    /// mask; this is the startup configuration check, not a per-tick
    /// error path.
    pub fn new(width: u32, height: u32, controls: Arc<ControlState>) -> FocusResult<Self> {
        let mask = CenterWeightedMask::new(width, height)?;
        Ok(Self {
            scorer: SharpnessScorer::new(mask),
            compositor: Compositor::new(width, height),
            history: ScoreHistory::new(),
            controls,
            width,
            height,
            ticks_processed: 0,
            ticks_skipped: 0,
        })
    }

    /// Run one full pipeline pass over the two raw frames.
    ///
    /// Returns `None` when either frame is empty: the tick is skipped
    /// with no history mutation and no composite. The next tick
    /// naturally retries.
    pub fn tick(&mut self, frame0: DynamicImage, frame1: DynamicImage) -> Option<TickOutput> {
        if is_empty(&frame0) || is_empty(&frame1) {
            self.ticks_skipped += 1;
            tracing::debug!(skipped = self.ticks_skipped, "empty input frame; skipping tick");
            return None;
        }

        let gray0 = normalize_frame(frame0, self.width, self.height);
        let gray1 = normalize_frame(frame1, self.width, self.height);

        let raw0 = self.scorer.score(&gray0);
        let raw1 = self.scorer.score(&gray1);
        let scores = ScorePair::from_raw(raw0, raw1);

        let toggles = self.controls.toggles();
        self.history.set_frozen(toggles.freeze_history);
        self.history.append(scores);

        let mode = self.controls.view_mode();
        let composite = self.render(mode, &gray0, &gray1, scores, toggles.show_graph);

        self.ticks_processed += 1;
        tracing::trace!(
            raw0,
            raw1,
            pct0 = scores.feed0,
            pct1 = scores.feed1,
            ?mode,
            "tick scored"
        );

        Some(TickOutput {
            composite,
            scores,
            mode,
        })
    }

    fn render(
        &self,
        mode: ViewMode,
        gray0: &GrayImage,
        gray1: &GrayImage,
        scores: ScorePair,
        show_graph: bool,
    ) -> RgbImage {
        let feed0 = self.compositor.annotate(gray0, scores.feed0);
        let feed1 = self.compositor.annotate(gray1, scores.feed1);
        let diff = self.compositor.difference(gray0, gray1);
        let graph = if show_graph {
            render_history_graph(&self.history, self.width, self.height)
        } else {
            self.compositor.blank_pane()
        };
        self.compositor.compose(mode, &feed0, &feed1, &diff, &graph)
    }

    pub fn history(&self) -> &ScoreHistory {
        &self.history
    }

    pub fn controls(&self) -> &Arc<ControlState> {
        &self.controls
    }

    /// Ticks that produced a composite.
    pub fn ticks_processed(&self) -> u64 {
        self.ticks_processed
    }

    /// Ticks skipped because a feed delivered an empty frame.
    pub fn ticks_skipped(&self) -> u64 {
        self.ticks_skipped
    }
}
