//! Composite layout assembly.
//!
//! The composite is built from same-sized panes: two annotated feeds,
//! the absolute-difference pane, and the chart (or a blank stand-in).
//! Layouts are fixed; switching is instantaneous and carries no state
//! beyond the mode value itself.

use image::{imageops, DynamicImage, GrayImage, RgbImage};

use crate::overlay;

/// Output layout selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Two annotated feeds side by side.
    SideBySide,
    /// Four quadrants: annotated feeds on top, difference and chart below.
    #[default]
    Analytics4Q,
}

impl ViewMode {
    /// The other mode; used by the view toggle.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::SideBySide => ViewMode::Analytics4Q,
            ViewMode::Analytics4Q => ViewMode::SideBySide,
        }
    }
}

/// Assembles annotated panes into the composite diagnostic view.
///
/// Every pane shares the session capture dimensions; the composite is
/// twice as wide, and twice as tall in four-quadrant mode.
#[derive(Debug, Clone)]
pub struct Compositor {
    pane_width: u32,
    pane_height: u32,
}

impl Compositor {
    pub fn new(pane_width: u32, pane_height: u32) -> Self {
        Self {
            pane_width,
            pane_height,
        }
    }

    /// Composite dimensions for a layout.
    pub fn output_size(&self, mode: ViewMode) -> (u32, u32) {
        match mode {
            ViewMode::SideBySide => (self.pane_width * 2, self.pane_height),
            ViewMode::Analytics4Q => (self.pane_width * 2, self.pane_height * 2),
        }
    }

    /// Expand a grayscale feed into a display buffer and stamp its
    /// percentage label.
    ///
    /// The returned buffer is distinct from `gray`, which the scorer and
    /// the difference pane may still need untouched.
    pub fn annotate(&self, gray: &GrayImage, percent: u8) -> RgbImage {
        let mut pane = DynamicImage::ImageLuma8(gray.clone()).into_rgb8();
        overlay::draw_score_label(&mut pane, &format!("{percent}%"));
        pane
    }

    /// Absolute per-pixel difference of the two grayscale feeds,
    /// expanded to three channels. Highlights misalignment and motion
    /// between the feeds.
    pub fn difference(&self, gray0: &GrayImage, gray1: &GrayImage) -> RgbImage {
        let mut diff = GrayImage::new(self.pane_width, self.pane_height);
        for (out, (a, b)) in diff
            .pixels_mut()
            .zip(gray0.pixels().zip(gray1.pixels()))
        {
            out.0[0] = a.0[0].abs_diff(b.0[0]);
        }
        DynamicImage::ImageLuma8(diff).into_rgb8()
    }

    /// A black pane, substituted for the chart when graph display is off.
    pub fn blank_pane(&self) -> RgbImage {
        RgbImage::new(self.pane_width, self.pane_height)
    }

    /// Assemble the selected layout from prepared panes.
    ///
    /// `diff` and `graph` are ignored in side-by-side mode.
    pub fn compose(
        &self,
        mode: ViewMode,
        feed0: &RgbImage,
        feed1: &RgbImage,
        diff: &RgbImage,
        graph: &RgbImage,
    ) -> RgbImage {
        let (out_width, out_height) = self.output_size(mode);
        let mut canvas = RgbImage::new(out_width, out_height);
        let pane_w = i64::from(self.pane_width);
        let pane_h = i64::from(self.pane_height);

        imageops::replace(&mut canvas, feed0, 0, 0);
        imageops::replace(&mut canvas, feed1, pane_w, 0);
        if mode == ViewMode::Analytics4Q {
            imageops::replace(&mut canvas, diff, 0, pane_h);
            imageops::replace(&mut canvas, graph, pane_w, pane_h);
        }
        canvas
    }
}
