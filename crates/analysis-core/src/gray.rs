//! Grayscale normalization for incoming frames.
//!
//! Cameras negotiate their own output: a feed may deliver single-channel
//! GRAY8 or three-channel color, and some pipelines settle on a different
//! resolution than the one requested. Everything downstream (the scorer,
//! the difference pane) assumes one channel at the session capture size,
//! so all frames pass through here first.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage};

/// True if a frame carries no pixels — the failed-grab sentinel for a tick.
pub fn is_empty(frame: &DynamicImage) -> bool {
    frame.width() == 0 || frame.height() == 0
}

/// Convert a raw frame into a single-channel image matching the session
/// capture dimensions.
///
/// Single-channel input passes through without a pixel copy; color input
/// is reduced with the standard color-to-luma weighting. Frames that
/// arrive at a different negotiated resolution are resampled bilinearly.
///
/// Empty frames are the caller's responsibility to filter out beforehand.
pub fn normalize_frame(frame: DynamicImage, width: u32, height: u32) -> GrayImage {
    let gray = frame.into_luma8();

    if gray.dimensions() == (width, height) {
        return gray;
    }

    tracing::trace!(
        from_width = gray.width(),
        from_height = gray.height(),
        to_width = width,
        to_height = height,
        "resampling frame to capture dimensions"
    );
    imageops::resize(&gray, width, height, FilterType::Triangle)
}
