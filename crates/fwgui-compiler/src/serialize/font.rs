//! Font glyph tables.
//!
//! ```text
//! u8 ascent, u8 descent, u8 first encoding, u8 last encoding
//! offset table: one entry per encoding, u16 BE (1 bpp) or u32 LE (8 bpp)
//! per encoding: i8 dx, u8 width, u8 height, i8 x, i8 y, pixels
//!               or a single 255 for a missing glyph
//! ```
//!
//! Offsets are measured from the start of the font data. Negative metrics are
//! stored as their two's complement byte.

use fwgui_core::Font;

const DEFAULT_START_ENCODING: i32 = 32;
const DEFAULT_END_ENCODING: i32 = 127;
const EMPTY_GLYPH: u8 = 255;

pub fn font_data(font: &Font) -> Vec<u8> {
    let start = font
        .glyphs
        .iter()
        .map(|g| g.encoding)
        .min()
        .unwrap_or(DEFAULT_START_ENCODING);
    let end = font
        .glyphs
        .iter()
        .map(|g| g.encoding)
        .max()
        .unwrap_or(DEFAULT_END_ENCODING);

    let mut data = Vec::new();
    if start > end {
        return data;
    }

    let entry_size = if font.bpp == 8 { 4 } else { 2 };
    let count = (end - start + 1) as usize;

    data.extend([font.ascent as u8, font.descent as u8, start as u8, end as u8]);
    data.resize(4 + count * entry_size, 0);

    for (i, encoding) in (start..=end).enumerate() {
        let entry = 4 + i * entry_size;
        let offset = data.len();
        if entry_size == 4 {
            data[entry..entry + 4].copy_from_slice(&(offset as u32).to_le_bytes());
        } else {
            data[entry..entry + 2].copy_from_slice(&(offset as u16).to_be_bytes());
        }

        let glyph = font.glyphs.iter().find(|g| g.encoding == encoding);
        match glyph.and_then(|g| g.pixels.as_ref().map(|pixels| (g, pixels))) {
            Some((g, pixels)) => {
                data.extend([g.dx as u8, g.width as u8, g.height as u8, g.x as u8, g.y as u8]);
                data.extend_from_slice(pixels);
            }
            None => data.push(EMPTY_GLYPH),
        }
    }

    data
}
