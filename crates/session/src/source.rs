//! Frame acquisition boundary.
//!
//! Real device capture lives outside this workspace; the pipeline only
//! needs something that hands it one raw frame per tick. A failed grab
//! is signaled by an empty (zero-size) frame — the pipeline skips that
//! tick and the next one naturally retries. Errors are reserved for
//! unrecoverable source failures.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use focuspair_common::error::{FocusError, FocusResult};

/// Supplies one raw frame per tick.
pub trait FrameSource {
    fn grab(&mut self) -> FocusResult<DynamicImage>;
}

/// Repeats one still image forever. Offline stand-in for a live feed.
#[derive(Debug)]
pub struct StillSource {
    frame: DynamicImage,
}

impl StillSource {
    pub fn open(path: &Path) -> FocusResult<Self> {
        if !path.exists() {
            return Err(FocusError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            frame: image::open(path)?,
        })
    }

    pub fn from_frame(frame: DynamicImage) -> Self {
        Self { frame }
    }
}

impl FrameSource for StillSource {
    fn grab(&mut self) -> FocusResult<DynamicImage> {
        Ok(self.frame.clone())
    }
}

/// Plays an ordered directory of stills, one per tick, then delivers
/// empty frames once exhausted.
pub struct FrameSequenceSource {
    frames: Vec<PathBuf>,
    next: usize,
}

impl FrameSequenceSource {
    /// Collect the image files in `dir`, lexicographically ordered.
    pub fn open(dir: &Path) -> FocusResult<Self> {
        let mut frames: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| is_image_path(path))
            .collect();
        frames.sort();

        if frames.is_empty() {
            return Err(FocusError::capture(format!(
                "no image files found in {}",
                dir.display()
            )));
        }

        tracing::debug!(count = frames.len(), dir = %dir.display(), "frame sequence opened");
        Ok(Self { frames, next: 0 })
    }

    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.next)
    }
}

impl FrameSource for FrameSequenceSource {
    fn grab(&mut self) -> FocusResult<DynamicImage> {
        let Some(path) = self.frames.get(self.next) else {
            return Ok(DynamicImage::new_luma8(0, 0));
        };
        self.next += 1;
        Ok(image::open(path)?)
    }
}

fn is_image_path(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref(),
        Some("png" | "jpg" | "jpeg" | "bmp" | "tiff")
    )
}
