//! Compose a one-shot diagnostic view from two stills.

use std::path::PathBuf;
use std::sync::Arc;

use focuspair_session::pipeline::ComparisonPipeline;
use focuspair_session::state::{ControlState, ViewMode};

use super::parse_view_mode;

pub fn run(image0: PathBuf, image1: PathBuf, output: PathBuf, layout: &str) -> anyhow::Result<()> {
    let mode = parse_view_mode(layout)?;

    let frame0 = image::open(&image0)
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {e}", image0.display()))?;
    let frame1 = image::open(&image1)
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {e}", image1.display()))?;

    let (width, height) = (frame0.width(), frame0.height());
    let controls = Arc::new(ControlState::new());
    controls.set_view_mode(mode);

    let mut pipeline = ComparisonPipeline::new(width, height, controls)?;
    let out = pipeline
        .tick(frame0, frame1)
        .ok_or_else(|| anyhow::anyhow!("cannot compose from an empty image"))?;

    out.composite.save(&output)?;

    let (out_w, out_h) = out.composite.dimensions();
    println!(
        "Wrote {} ({out_w}x{out_h}, {}): feed 0 at {}%, feed 1 at {}%",
        output.display(),
        match out.mode {
            ViewMode::Analytics4Q => "quad",
            ViewMode::SideBySide => "side-by-side",
        },
        out.scores.feed0,
        out.scores.feed1,
    );

    Ok(())
}
