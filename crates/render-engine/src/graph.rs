//! Score history chart rasterization.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

use focuspair_analysis::history::{ScoreHistory, MAX_HISTORY};
use focuspair_analysis::score::ScorePair;

const FEED0_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const FEED1_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Rasterize the history as two line plots on a black background.
///
/// The x spacing is fixed at `width / (MAX_HISTORY − 1)` regardless of
/// the current series length, so the chart fills in left to right as
/// samples accumulate instead of rescaling. 0% maps to the bottom edge
/// and 100% to the top. With fewer than two points there is nothing to
/// connect and the image stays blank.
pub fn render_history_graph(history: &ScoreHistory, width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    if history.len() < 2 {
        return img;
    }

    let dx = width as f32 / (MAX_HISTORY - 1) as f32;
    let points: Vec<&ScorePair> = history.iter().collect();

    for i in 1..points.len() {
        let x0 = (i - 1) as f32 * dx;
        let x1 = i as f32 * dx;
        plot(
            &mut img,
            (x0, score_y(points[i - 1].feed0, height)),
            (x1, score_y(points[i].feed0, height)),
            FEED0_COLOR,
        );
        plot(
            &mut img,
            (x0, score_y(points[i - 1].feed1, height)),
            (x1, score_y(points[i].feed1, height)),
            FEED1_COLOR,
        );
    }
    img
}

/// Inverted y mapping: 0% at the bottom edge, 100% at the top.
fn score_y(score: u8, height: u32) -> f32 {
    (height - u32::from(score) * height / 100) as f32
}

/// Segments are drawn twice with a one-pixel vertical offset for a
/// two-pixel stroke.
fn plot(img: &mut RgbImage, start: (f32, f32), end: (f32, f32), color: Rgb<u8>) {
    draw_line_segment_mut(img, start, end, color);
    draw_line_segment_mut(img, (start.0, start.1 + 1.0), (end.0, end.1 + 1.0), color);
}
