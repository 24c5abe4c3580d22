//! Center-weighted sharpness scoring.
//!
//! The score is the absolute Laplacian response of a grayscale frame,
//! weighted by a centered Gaussian mask and summed. The Laplacian reacts
//! to high-frequency content (edges, texture) that only survives in
//! regions that are in focus, so the sharper feed produces the larger
//! sum; the mask emphasizes the image center, where the subject is
//! assumed to be, and de-emphasizes edge artifacts.
//!
//! The result is an unbounded relative indicator, only meaningful when
//! compared against another score computed the same way at the same
//! resolution.

use image::GrayImage;

use focuspair_common::error::{FocusError, FocusResult};

/// Gaussian sigma is dimension / 6 along each axis.
const SIGMA_DIVISOR: f64 = 6.0;

/// A fixed spatial weighting mask matching the capture resolution.
///
/// Weights are non-negative and sum to 1.0. Built once at session start
/// and immutable afterwards.
#[derive(Debug, Clone)]
pub struct CenterWeightedMask {
    width: u32,
    height: u32,
    weights: Vec<f64>,
}

impl CenterWeightedMask {
    /// Build a separable 2-D Gaussian mask for the given capture size.
    ///
    /// Fails when either dimension is zero: a degenerate mask would
    /// divide by zero during normalization, so the session must refuse
    /// to start instead of scoring with it.
    pub fn new(width: u32, height: u32) -> FocusResult<Self> {
        if width == 0 || height == 0 {
            return Err(FocusError::config(format!(
                "cannot build a weight mask for a {width}x{height} capture"
            )));
        }

        let kx = gaussian_kernel(width);
        let ky = gaussian_kernel(height);

        let mut weights = Vec::with_capacity(width as usize * height as usize);
        for wy in &ky {
            for wx in &kx {
                weights.push(wy * wx);
            }
        }

        let sum: f64 = weights.iter().sum();
        if sum <= 0.0 {
            return Err(FocusError::config(
                "weight mask sums to zero; capture dimensions are degenerate",
            ));
        }
        for weight in &mut weights {
            *weight /= sum;
        }

        Ok(Self {
            width,
            height,
            weights,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn weight(&self, x: u32, y: u32) -> f64 {
        self.weights[(y * self.width + x) as usize]
    }
}

/// Unnormalized 1-D Gaussian over `len` taps, centered on the axis.
fn gaussian_kernel(len: u32) -> Vec<f64> {
    let sigma = f64::from(len) / SIGMA_DIVISOR;
    let center = (f64::from(len) - 1.0) / 2.0;
    let denom = 2.0 * sigma * sigma;
    (0..len)
        .map(|i| {
            let d = f64::from(i) - center;
            (-d * d / denom).exp()
        })
        .collect()
}

/// Computes the weighted Laplacian sharpness score for grayscale frames.
///
/// Stateless apart from the mask: the same frame always produces the
/// same score.
#[derive(Debug, Clone)]
pub struct SharpnessScorer {
    mask: CenterWeightedMask,
}

impl SharpnessScorer {
    pub fn new(mask: CenterWeightedMask) -> Self {
        Self { mask }
    }

    pub fn mask(&self) -> &CenterWeightedMask {
        &self.mask
    }

    /// Score a grayscale frame whose dimensions match the mask.
    ///
    /// Applies the 4-neighbor discrete Laplacian (edge pixels replicate
    /// their nearest neighbor), takes the absolute response pointwise,
    /// weights it by the mask, and sums.
    pub fn score(&self, gray: &GrayImage) -> f64 {
        debug_assert_eq!(
            gray.dimensions(),
            (self.mask.width(), self.mask.height()),
            "frame must be normalized to the mask dimensions before scoring"
        );

        let (width, height) = gray.dimensions();
        let data = gray.as_raw();
        let stride = width as usize;

        let sample = |x: i64, y: i64| -> f64 {
            let cx = x.clamp(0, i64::from(width) - 1) as usize;
            let cy = y.clamp(0, i64::from(height) - 1) as usize;
            f64::from(data[cy * stride + cx])
        };

        let mut total = 0.0;
        for y in 0..height {
            for x in 0..width {
                let (xi, yi) = (i64::from(x), i64::from(y));
                let lap = sample(xi, yi - 1)
                    + sample(xi, yi + 1)
                    + sample(xi - 1, yi)
                    + sample(xi + 1, yi)
                    - 4.0 * sample(xi, yi);
                total += lap.abs() * self.mask.weight(x, y);
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use image::Luma;

    use super::*;

    fn edge_frame(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Luma([0])
            } else {
                Luma([255])
            }
        })
    }

    #[test]
    fn mask_rejects_zero_dimensions() {
        assert!(CenterWeightedMask::new(0, 480).is_err());
        assert!(CenterWeightedMask::new(640, 0).is_err());
    }

    #[test]
    fn mask_is_normalized() {
        let mask = CenterWeightedMask::new(64, 48).unwrap();
        let sum: f64 = mask.weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(mask.weights.iter().all(|w| *w >= 0.0));
    }

    #[test]
    fn mask_peaks_at_the_center() {
        let mask = CenterWeightedMask::new(63, 47).unwrap();
        let center = mask.weight(31, 23);
        assert!(center > mask.weight(0, 0));
        assert!(center > mask.weight(62, 0));
        assert!(center > mask.weight(0, 46));
        assert!(center > mask.weight(31, 0));
    }

    #[test]
    fn flat_frame_scores_zero() {
        let scorer = SharpnessScorer::new(CenterWeightedMask::new(32, 32).unwrap());
        let flat = GrayImage::from_pixel(32, 32, Luma([117]));
        assert_eq!(scorer.score(&flat), 0.0);
    }

    #[test]
    fn edge_frame_scores_positive() {
        let scorer = SharpnessScorer::new(CenterWeightedMask::new(32, 32).unwrap());
        assert!(scorer.score(&edge_frame(32, 32)) > 0.0);
    }

    #[test]
    fn score_is_deterministic() {
        let scorer = SharpnessScorer::new(CenterWeightedMask::new(48, 36).unwrap());
        let frame = edge_frame(48, 36);
        let first = scorer.score(&frame);
        let second = scorer.score(&frame);
        assert_eq!(first, second);
    }

    #[test]
    fn sharp_edge_outscores_soft_ramp() {
        let scorer = SharpnessScorer::new(CenterWeightedMask::new(64, 64).unwrap());

        // Same overall brightness sweep, but spread over the full width
        // instead of a single hard transition.
        let ramp = GrayImage::from_fn(64, 64, |x, _| Luma([(x * 4) as u8]));

        assert!(scorer.score(&edge_frame(64, 64)) > scorer.score(&ramp));
    }
}
