//! Paced tick loop over two frame sources.
//!
//! The offline counterpart of a live session: a tokio interval plays
//! the external timer, the sources play the cameras, and each tick's
//! composite lands in the output directory. Ctrl-C maps to the session
//! terminate event.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use focuspair_common::config::SessionConfig;
use focuspair_session::pipeline::ComparisonPipeline;
use focuspair_session::source::{FrameSequenceSource, FrameSource, StillSource};
use focuspair_session::state::ControlState;

use super::parse_view_mode;

pub async fn run(
    feed0: PathBuf,
    feed1: PathBuf,
    output: PathBuf,
    fps: u32,
    ticks: u64,
    layout: &str,
    graph: bool,
) -> anyhow::Result<()> {
    let mode = parse_view_mode(layout)?;

    let config = SessionConfig::load();
    config.validate()?;

    let mut source0 = open_source(&feed0)?;
    let mut source1 = open_source(&feed1)?;

    let controls = Arc::new(ControlState::new());
    controls.set_view_mode(mode);
    controls.set_show_graph(graph);

    let mut pipeline = ComparisonPipeline::new(
        config.capture.width,
        config.capture.height,
        controls.clone(),
    )?;

    std::fs::create_dir_all(&output)?;

    // Ctrl-C is the terminate toggle.
    {
        let controls = controls.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                controls.request_stop();
            }
        });
    }

    let fps = fps.max(1);
    let mut ticker = tokio::time::interval(Duration::from_secs_f64(1.0 / f64::from(fps)));
    let mut produced: u64 = 0;
    let mut index: u64 = 0;

    println!(
        "Running at {} fps ({}x{} capture), output in {}",
        fps,
        config.capture.width,
        config.capture.height,
        output.display()
    );

    loop {
        if controls.stop_requested() {
            println!("Stop requested.");
            break;
        }
        if ticks > 0 && index >= ticks {
            break;
        }
        ticker.tick().await;
        index += 1;

        let frame0 = source0.grab()?;
        let frame1 = source1.grab()?;

        let Some(out) = pipeline.tick(frame0, frame1) else {
            // A feed delivered an empty frame. In open-ended mode that
            // means a sequence is exhausted and the run is over; with a
            // tick budget we keep going and let the next tick retry.
            if ticks == 0 {
                break;
            }
            continue;
        };

        let path = output.join(format!("composite-{index:05}.png"));
        out.composite.save(&path)?;
        produced += 1;
        tracing::debug!(
            tick = index,
            pct0 = out.scores.feed0,
            pct1 = out.scores.feed1,
            "composite written"
        );
    }

    println!(
        "Wrote {produced} composites ({} ticks skipped).",
        pipeline.ticks_skipped()
    );
    Ok(())
}

/// A directory becomes a frame sequence; anything else is a still.
fn open_source(path: &Path) -> anyhow::Result<Box<dyn FrameSource>> {
    if path.is_dir() {
        Ok(Box::new(FrameSequenceSource::open(path)?))
    } else {
        Ok(Box::new(StillSource::open(path)?))
    }
}
