//! Show the resolved configuration and derived capture launch strings.

use focuspair_analysis::sharpness::CenterWeightedMask;
use focuspair_common::config::SessionConfig;
use focuspair_session::launch::{build_libcamera_launch, CaptureParams};

pub fn run() -> anyhow::Result<()> {
    let config = SessionConfig::load();

    println!("FocusPair configuration:");
    println!(
        "  Capture: {}x{} @ {} fps",
        config.capture.width, config.capture.height, config.capture.fps
    );
    println!("  Log level: {}", config.logging.level);

    match config.validate() {
        Ok(()) => println!("  Validation: OK"),
        Err(e) => {
            println!("  Validation: FAILED ({e})");
            return Ok(());
        }
    }

    match CenterWeightedMask::new(config.capture.width, config.capture.height) {
        Ok(mask) => println!("  Weight mask: {}x{} built", mask.width(), mask.height()),
        Err(e) => println!("  Weight mask: FAILED ({e})"),
    }

    println!("\nCapture launch strings:");
    for camera_id in 0..2 {
        let params = CaptureParams {
            camera_id,
            width: config.capture.width,
            height: config.capture.height,
            fps: config.capture.fps,
            ..Default::default()
        };
        println!("  feed {camera_id}: {}", build_libcamera_launch(&params));
    }

    Ok(())
}
