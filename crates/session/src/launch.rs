//! GStreamer launch string construction for libcamera feeds.
//!
//! Opening devices is a collaborator concern; this module only builds
//! the launch strings such a collaborator hands to its pipeline. The
//! shape mirrors what the capture stack negotiates: YUV420 from the
//! driver, videoconvert to GRAY8 (or BGR), and an appsink that keeps at
//! most one buffer so a slow tick never reads stale frames.

use serde::{Deserialize, Serialize};

/// Per-feed capture parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureParams {
    /// libcamera camera index.
    pub camera_id: u32,

    pub width: u32,
    pub height: u32,
    pub fps: u32,

    /// Ask the pipeline for single-channel GRAY8 output instead of BGR,
    /// skipping the color round-trip for feeds that only get scored.
    pub force_gray: bool,
}

impl Default for CaptureParams {
    fn default() -> Self {
        Self {
            camera_id: 0,
            width: 640,
            height: 480,
            fps: 30,
            force_gray: true,
        }
    }
}

impl CaptureParams {
    pub fn with_camera_id(camera_id: u32) -> Self {
        Self {
            camera_id,
            ..Default::default()
        }
    }
}

/// Build a libcamerasrc launch string addressing a camera by index.
pub fn build_libcamera_launch(params: &CaptureParams) -> String {
    format!(
        "libcamerasrc camera-id={} ! {}",
        params.camera_id,
        caps_and_sink(params)
    )
}

/// Build a launch string addressing a camera by its full libcamera name.
/// Needed on multi-camera boards where indices are unstable across boots.
pub fn build_libcamera_launch_named(camera_name: &str, params: &CaptureParams) -> String {
    format!(
        "libcamerasrc camera-name={} ! {}",
        camera_name,
        caps_and_sink(params)
    )
}

fn caps_and_sink(params: &CaptureParams) -> String {
    let format = if params.force_gray { "GRAY8" } else { "BGR" };
    format!(
        "video/x-raw,format=YUV420,width={},height={},framerate={}/1 ! videoconvert ! video/x-raw,format={} ! appsink drop=true max-buffers=1 sync=false",
        params.width, params.height, params.fps, format
    )
}
