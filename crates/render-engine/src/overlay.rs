//! Percentage label overlay.
//!
//! Each feed pane carries its normalized score ("73%") at a fixed
//! top-left anchor. The label is rasterized from a small embedded 5×7
//! glyph table covering exactly the characters a score label can
//! contain, scaled up for legibility — no font asset required.

use image::{Rgb, RgbImage};

/// Top-left anchor for the score label inside each feed pane.
pub const LABEL_ANCHOR: (u32, u32) = (6, 6);

const LABEL_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Integer upscale applied to the 5×7 glyphs.
const GLYPH_SCALE: u32 = 2;
const GLYPH_COLS: u32 = 5;
/// Horizontal advance between glyphs, in unscaled pixels.
const GLYPH_ADVANCE: u32 = 6;

/// 5×7 glyphs for '0'..='9'; each row's low 5 bits are pixels, MSB =
/// leftmost column.
#[rustfmt::skip]
const DIGIT_GLYPHS: [[u8; 7]; 10] = [
    [0x0E,0x11,0x13,0x15,0x19,0x11,0x0E], // 0
    [0x04,0x0C,0x04,0x04,0x04,0x04,0x0E], // 1
    [0x0E,0x11,0x01,0x02,0x04,0x08,0x1F], // 2
    [0x1F,0x02,0x04,0x02,0x01,0x11,0x0E], // 3
    [0x02,0x06,0x0A,0x12,0x1F,0x02,0x02], // 4
    [0x1F,0x10,0x1E,0x01,0x01,0x11,0x0E], // 5
    [0x06,0x08,0x10,0x1E,0x11,0x11,0x0E], // 6
    [0x1F,0x01,0x02,0x04,0x08,0x08,0x08], // 7
    [0x0E,0x11,0x11,0x0E,0x11,0x11,0x0E], // 8
    [0x0E,0x11,0x11,0x0F,0x01,0x02,0x0C], // 9
];

#[rustfmt::skip]
const PERCENT_GLYPH: [u8; 7] = [0x18,0x19,0x02,0x04,0x08,0x13,0x03];

fn glyph_for(ch: char) -> Option<&'static [u8; 7]> {
    match ch {
        '0'..='9' => Some(&DIGIT_GLYPHS[ch as usize - '0' as usize]),
        '%' => Some(&PERCENT_GLYPH),
        _ => None,
    }
}

/// Draw `text` at the label anchor, clipping at the pane edges.
///
/// Characters outside the glyph table are skipped but still advance the
/// pen, so malformed input cannot shift the rest of the label.
pub fn draw_score_label(img: &mut RgbImage, text: &str) {
    let (anchor_x, anchor_y) = LABEL_ANCHOR;
    let mut pen_x = anchor_x;

    for ch in text.chars() {
        if let Some(glyph) = glyph_for(ch) {
            draw_glyph(img, pen_x, anchor_y, glyph);
        }
        pen_x += GLYPH_ADVANCE * GLYPH_SCALE;
    }
}

fn draw_glyph(img: &mut RgbImage, origin_x: u32, origin_y: u32, glyph: &[u8; 7]) {
    for (row, &bits) in glyph.iter().enumerate() {
        for col in 0..GLYPH_COLS {
            if bits & (0x10 >> col) == 0 {
                continue;
            }
            for dy in 0..GLYPH_SCALE {
                for dx in 0..GLYPH_SCALE {
                    let px = origin_x + col * GLYPH_SCALE + dx;
                    let py = origin_y + row as u32 * GLYPH_SCALE + dy;
                    if px < img.width() && py < img.height() {
                        img.put_pixel(px, py, LABEL_COLOR);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_pixel_count(img: &RgbImage) -> usize {
        img.pixels().filter(|p| **p == LABEL_COLOR).count()
    }

    #[test]
    fn label_marks_pixels_near_the_anchor() {
        let mut img = RgbImage::new(100, 40);
        draw_score_label(&mut img, "73%");
        assert!(label_pixel_count(&img) > 0);

        // Nothing is drawn left of or above the anchor.
        for (x, y, pixel) in img.enumerate_pixels() {
            if *pixel == LABEL_COLOR {
                assert!(x >= LABEL_ANCHOR.0);
                assert!(y >= LABEL_ANCHOR.1);
            }
        }
    }

    #[test]
    fn distinct_scores_render_distinct_labels() {
        let mut a = RgbImage::new(100, 40);
        let mut b = RgbImage::new(100, 40);
        draw_score_label(&mut a, "100%");
        draw_score_label(&mut b, "0%");
        assert_ne!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn unknown_characters_are_skipped() {
        let mut img = RgbImage::new(100, 40);
        draw_score_label(&mut img, "x");
        assert_eq!(label_pixel_count(&img), 0);
    }

    #[test]
    fn label_clips_on_tiny_panes() {
        let mut img = RgbImage::new(8, 8);
        // Must not panic even though the text overflows the pane.
        draw_score_label(&mut img, "100%");
    }
}
