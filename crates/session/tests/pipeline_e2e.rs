//! End-to-end pipeline scenarios: two raw frames in, one composite out.

use std::sync::Arc;

use image::{DynamicImage, GrayImage, Luma, Rgb};

use focuspair_session::pipeline::ComparisonPipeline;
use focuspair_session::state::{ControlState, ViewMode};

/// A frame with a single hard vertical edge at the horizontal center.
fn edge_frame(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Luma([0])
        } else {
            Luma([255])
        }
    }))
}

fn flat_frame(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([128])))
}

fn pipeline(width: u32, height: u32) -> (ComparisonPipeline, Arc<ControlState>) {
    let controls = Arc::new(ControlState::new());
    let pipeline = ComparisonPipeline::new(width, height, controls.clone())
        .expect("valid capture dimensions");
    (pipeline, controls)
}

#[test]
fn identical_edge_feeds_read_100_100() {
    // The concrete reference scenario: 640x480 capture, both feeds
    // showing the same vertical edge at x=320.
    let (mut pipeline, _) = pipeline(640, 480);

    let out = pipeline
        .tick(edge_frame(640, 480), edge_frame(640, 480))
        .expect("both frames valid");

    assert_eq!(out.scores.feed0, 100);
    assert_eq!(out.scores.feed1, 100);
    assert_eq!(out.mode, ViewMode::Analytics4Q);
    assert_eq!(out.composite.dimensions(), (1280, 960));
}

#[test]
fn sharper_feed_wins_the_comparison() {
    let (mut pipeline, _) = pipeline(64, 48);

    let out = pipeline
        .tick(edge_frame(64, 48), flat_frame(64, 48))
        .unwrap();
    assert_eq!(out.scores.feed0, 100);
    assert_eq!(out.scores.feed1, 0);
}

#[test]
fn empty_frame_skips_the_tick_entirely() {
    let (mut pipeline, _) = pipeline(64, 48);

    pipeline
        .tick(edge_frame(64, 48), flat_frame(64, 48))
        .unwrap();
    let recorded = pipeline.history().len();

    let out = pipeline.tick(edge_frame(64, 48), DynamicImage::new_luma8(0, 0));
    assert!(out.is_none());
    assert_eq!(pipeline.history().len(), recorded);
    assert_eq!(pipeline.ticks_skipped(), 1);
    assert_eq!(pipeline.ticks_processed(), 1);
}

#[test]
fn side_by_side_layout_halves_the_height() {
    let (mut pipeline, controls) = pipeline(64, 48);
    controls.toggle_mode();

    let out = pipeline
        .tick(edge_frame(64, 48), edge_frame(64, 48))
        .unwrap();
    assert_eq!(out.mode, ViewMode::SideBySide);
    assert_eq!(out.composite.dimensions(), (128, 48));
}

#[test]
fn freeze_holds_the_history_still() {
    let (mut pipeline, controls) = pipeline(64, 48);

    pipeline
        .tick(edge_frame(64, 48), flat_frame(64, 48))
        .unwrap();
    assert_eq!(pipeline.history().len(), 1);

    controls.toggle_freeze();
    // Swapped feeds produce a very different pair, but nothing records.
    for _ in 0..3 {
        pipeline
            .tick(flat_frame(64, 48), edge_frame(64, 48))
            .unwrap();
    }
    assert_eq!(pipeline.history().len(), 1);

    controls.toggle_freeze();
    pipeline
        .tick(flat_frame(64, 48), edge_frame(64, 48))
        .unwrap();
    assert_eq!(pipeline.history().len(), 2);
}

#[test]
fn mismatched_input_resolution_is_resampled() {
    let (mut pipeline, _) = pipeline(64, 48);

    // A feed negotiating a different resolution still composes at the
    // session capture dimensions.
    let out = pipeline
        .tick(edge_frame(32, 24), edge_frame(128, 96))
        .unwrap();
    assert_eq!(out.composite.dimensions(), (128, 96));
}

#[test]
fn graph_pane_lights_up_once_history_accumulates() {
    let (mut pipeline, controls) = pipeline(64, 48);
    controls.set_show_graph(true);

    // Alternate which feed is sharper so each tick records a distinct pair.
    pipeline
        .tick(edge_frame(64, 48), flat_frame(64, 48))
        .unwrap();
    let out = pipeline
        .tick(flat_frame(64, 48), edge_frame(64, 48))
        .unwrap();
    assert!(pipeline.history().len() >= 2);

    // Bottom-right quadrant: the feed-0 series is green.
    let mut green = 0;
    for y in 48..96 {
        for x in 64..128 {
            if out.composite.get_pixel(x, y) == &Rgb([0, 255, 0]) {
                green += 1;
            }
        }
    }
    assert!(green > 0, "expected chart pixels in the graph quadrant");
}

#[test]
fn graph_pane_stays_blank_when_disabled() {
    let (mut pipeline, _) = pipeline(64, 48);

    pipeline
        .tick(edge_frame(64, 48), flat_frame(64, 48))
        .unwrap();
    let out = pipeline
        .tick(flat_frame(64, 48), edge_frame(64, 48))
        .unwrap();

    for y in 48..96 {
        for x in 64..128 {
            assert_eq!(out.composite.get_pixel(x, y), &Rgb([0, 0, 0]));
        }
    }
}

#[test]
fn degenerate_capture_dimensions_refuse_to_start() {
    let controls = Arc::new(ControlState::new());
    assert!(ComparisonPipeline::new(0, 480, controls).is_err());
}
