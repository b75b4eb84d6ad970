//! Text measurement in window pixels.
//!
//! Widgets are laid out without a font rasterizer: every display column advances by a fixed
//! fraction of the font size. Backends that do shape glyphs clip to the same rectangles.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::style::Font;

/// Pixels per display column.
pub fn advance(font: &Font) -> u16 {
    (font.size.saturating_mul(3) / 5).max(1)
}

pub fn line_height(font: &Font) -> u16 {
    font.size.saturating_add(font.size / 4).max(1)
}

pub fn text_width(text: &str, font: &Font) -> u16 {
    let columns = u16::try_from(text.width()).unwrap_or(u16::MAX);
    columns.saturating_mul(advance(font))
}

/// Byte offset of the longest grapheme prefix of `s` that fits in `max_width` columns.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    let mut used = 0usize;
    for (idx, g) in s.grapheme_indices(true) {
        let w = g.width();
        if used + w > max_width {
            return idx;
        }
        used += w;
    }
    s.len()
}

/// Longest prefix of `text` whose pixel width fits in `max_px`.
pub fn fit<'a>(text: &'a str, font: &Font, max_px: u16) -> &'a str {
    let columns = usize::from(max_px / advance(font));
    &text[..truncate_to_width(text, columns)]
}

/// Removes the last grapheme cluster; `false` when `s` was already empty.
pub fn pop_grapheme(s: &mut String) -> bool {
    match s.grapheme_indices(true).next_back() {
        Some((idx, _)) => {
            s.truncate(idx);
            true
        }
        None => false,
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/text.rs"]
mod tests;
