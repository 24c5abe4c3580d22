//! Score two stills against each other.

use std::path::PathBuf;

use serde::Serialize;

use focuspair_analysis::gray;
use focuspair_analysis::score::ScorePair;
use focuspair_analysis::sharpness::{CenterWeightedMask, SharpnessScorer};

#[derive(Serialize)]
struct ScoreReport {
    image0: PathBuf,
    image1: PathBuf,
    raw0: f64,
    raw1: f64,
    percent0: u8,
    percent1: u8,
}

pub fn run(image0: PathBuf, image1: PathBuf, json: bool) -> anyhow::Result<()> {
    let frame0 = image::open(&image0)
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {e}", image0.display()))?;
    let frame1 = image::open(&image1)
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {e}", image1.display()))?;

    if gray::is_empty(&frame0) || gray::is_empty(&frame1) {
        anyhow::bail!("cannot score an empty image");
    }

    // The first still defines the session dimensions; the second is
    // resampled onto them, matching live-session behavior.
    let (width, height) = (frame0.width(), frame0.height());
    let scorer = SharpnessScorer::new(CenterWeightedMask::new(width, height)?);

    let gray0 = gray::normalize_frame(frame0, width, height);
    let gray1 = gray::normalize_frame(frame1, width, height);

    let raw0 = scorer.score(&gray0);
    let raw1 = scorer.score(&gray1);
    let pair = ScorePair::from_raw(raw0, raw1);

    if json {
        let report = ScoreReport {
            image0,
            image1,
            raw0,
            raw1,
            percent0: pair.feed0,
            percent1: pair.feed1,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Comparing at {width}x{height}:");
    println!("  {}: raw {raw0:.3} -> {}%", image0.display(), pair.feed0);
    println!("  {}: raw {raw1:.3} -> {}%", image1.display(), pair.feed1);
    if pair.feed0 == pair.feed1 {
        println!("Both feeds are equally sharp.");
    } else if pair.feed0 > pair.feed1 {
        println!("Feed 0 is sharper.");
    } else {
        println!("Feed 1 is sharper.");
    }

    Ok(())
}
