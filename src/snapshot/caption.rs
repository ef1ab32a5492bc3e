//! 5x7 bitmap text for image captions.
//!
//! Only the glyphs needed for `Iteration N` are defined. Lowercase letters are
//! drawn as uppercase; anything else is blank.

use image::{GrayImage, Luma};

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
/// Blank rows above and below the text, in glyph pixels.
const PADDING: u32 = 2;
const MAX_SCALE: u32 = 4;

/// Rows of a glyph, top to bottom. Bit 4 is the leftmost column.
fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b10000, 0b11110, 0b00001, 0b00001, 0b11110],
        '6' => [0b01110, 0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b01110],
        _ => [0; 7],
    }
}

/// Glyph scale for images with `cell_pixels`-sized cells.
pub(crate) fn caption_scale(cell_pixels: u32) -> u32 {
    (cell_pixels / 4).clamp(1, MAX_SCALE)
}

/// Height of the caption band above the grid.
pub(crate) fn caption_height(cell_pixels: u32) -> u32 {
    (GLYPH_HEIGHT + 2 * PADDING) * caption_scale(cell_pixels)
}

/// Draw `text` into the caption band of `image`.
///
/// Glyphs that run past the right edge are clipped.
pub(crate) fn draw_caption(image: &mut GrayImage, text: &str, cell_pixels: u32, ink: u8) {
    let scale = caption_scale(cell_pixels);
    let advance = (GLYPH_WIDTH + 1) * scale;
    let top = PADDING * scale;
    let mut x = PADDING * scale;

    for c in text.chars() {
        if x >= image.width() {
            break;
        }
        draw_glyph(image, c, x, top, scale, ink);
        x = x.saturating_add(advance);
    }
}

fn draw_glyph(image: &mut GrayImage, c: char, x0: u32, y0: u32, scale: u32, ink: u8) {
    for (row, bits) in glyph(c).iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (0x10 >> col) == 0 {
                continue;
            }
            let px = x0.saturating_add(col * scale);
            let py = y0 + row as u32 * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    let (x, y) = (px.saturating_add(dx), py + dy);
                    if x < image.width() && y < image.height() {
                        image.put_pixel(x, y, Luma([ink]));
                    }
                }
            }
        }
    }
}
