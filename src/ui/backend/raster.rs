//! Headless software rasterizer.
//!
//! Keeps an RGB pixel buffer for fills, lines, images and borders. Text is not rasterized; each
//! text command is recorded as a [`TextRun`] so callers can inspect what would be shown.

use std::sync::Arc;

use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{BorderKind, PaintCmd};
use crate::ui::core::style::{Color, Style};
use crate::ui::core::text;
use crate::ui::image::Raster;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    area: Rect,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    pub fn new(area: Rect, fill: Color) -> Self {
        let len = area.w as usize * area.h as usize;
        Self {
            area,
            pixels: vec![fill; len],
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        let idx = self.idx(x, y)?;
        self.pixels.get(idx).copied()
    }

    pub fn pixel_mut(&mut self, x: u16, y: u16) -> Option<&mut Color> {
        let idx = self.idx(x, y)?;
        self.pixels.get_mut(idx)
    }

    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if !self.area.contains(Pos::new(x, y)) {
            return None;
        }
        let rel_x = x - self.area.x;
        let rel_y = y - self.area.y;
        Some(rel_y as usize * self.area.w as usize + rel_x as usize)
    }

    fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if coverage <= 0.0 {
            return;
        }
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        if let Some(px) = self.pixel_mut(x, y) {
            *px = color.blend_over(*px, coverage);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextRun {
    pub pos: Pos,
    pub text: String,
    pub style: Style,
}

#[derive(Debug)]
pub struct RasterBackend {
    buf: PixelBuffer,
    texts: Vec<TextRun>,
}

impl RasterBackend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buf: PixelBuffer::new(Rect::new(0, 0, width, height), Color::WHITE),
            texts: Vec::new(),
        }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buf
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        self.buf.pixel(x, y)
    }

    /// Text runs of the last frame, in paint order.
    pub fn texts(&self) -> &[TextRun] {
        &self.texts
    }

    pub fn find_text(&self, needle: &str) -> Option<&TextRun> {
        self.texts.iter().find(|t| t.text.contains(needle))
    }
}

impl Backend for RasterBackend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        if area != self.buf.area() {
            self.buf = PixelBuffer::new(area, Color::WHITE);
        }
        self.texts.clear();
        for cmd in cmds {
            match cmd {
                PaintCmd::FillRect { rect, color } => fill_rect(&mut self.buf, *rect, *color),
                PaintCmd::Line {
                    from,
                    to,
                    color,
                    smooth,
                } => {
                    if *smooth {
                        draw_line_smooth(&mut self.buf, *from, *to, *color);
                    } else {
                        draw_line_hard(&mut self.buf, *from, *to, *color);
                    }
                }
                PaintCmd::Image { image, rect } => draw_image(&mut self.buf, image, *rect),
                PaintCmd::Text {
                    pos,
                    text,
                    style,
                    clip,
                } => {
                    if let Some(run) = clip_text(*pos, text, *style, *clip) {
                        self.texts.push(run);
                    }
                }
                PaintCmd::Border { rect, style, kind } => {
                    draw_border(&mut self.buf, *rect, *style, *kind)
                }
            }
        }
    }
}

fn fill_rect(buf: &mut PixelBuffer, rect: Rect, color: Color) {
    let clip = rect.intersect(buf.area());
    if clip.is_empty() {
        return;
    }
    for y in clip.y..clip.bottom() {
        for x in clip.x..clip.right() {
            if let Some(px) = buf.pixel_mut(x, y) {
                *px = color;
            }
        }
    }
}

/// Bresenham.
fn draw_line_hard(buf: &mut PixelBuffer, from: Pos, to: Pos, color: Color) {
    let (mut x0, mut y0) = (i32::from(from.x), i32::from(from.y));
    let (x1, y1) = (i32::from(to.x), i32::from(to.y));
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        buf.blend(x0, y0, color, 1.0);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Xiaolin Wu: each step splits coverage between the two pixels straddling the ideal line.
fn draw_line_smooth(buf: &mut PixelBuffer, from: Pos, to: Pos, color: Color) {
    let (mut x0, mut y0) = (f32::from(from.x), f32::from(from.y));
    let (mut x1, mut y1) = (f32::from(to.x), f32::from(to.y));
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }
    let dx = x1 - x0;
    let gradient = if dx == 0.0 { 0.0 } else { (y1 - y0) / dx };

    let mut plot = |major: i32, minor: i32, coverage: f32| {
        if steep {
            buf.blend(minor, major, color, coverage);
        } else {
            buf.blend(major, minor, color, coverage);
        }
    };

    let mut y = y0;
    for x in (x0 as i32)..=(x1 as i32) {
        let base = y.floor();
        let frac = y - base;
        plot(x, base as i32, 1.0 - frac);
        plot(x, base as i32 + 1, frac);
        y += gradient;
    }
}

/// Nearest-neighbour stretch of `image` into `rect`.
fn draw_image(buf: &mut PixelBuffer, image: &Arc<Raster>, rect: Rect) {
    let clip = rect.intersect(buf.area());
    if clip.is_empty() || image.width() == 0 || image.height() == 0 {
        return;
    }
    for y in clip.y..clip.bottom() {
        let sy = u32::from(y - rect.y) * image.height() / u32::from(rect.h);
        for x in clip.x..clip.right() {
            let sx = u32::from(x - rect.x) * image.width() / u32::from(rect.w);
            let Some((color, alpha)) = image.pixel(sx, sy) else {
                continue;
            };
            if let Some(px) = buf.pixel_mut(x, y) {
                *px = if alpha == u8::MAX {
                    color
                } else {
                    color.blend_over(*px, f32::from(alpha) / 255.0)
                };
            }
        }
    }
}

fn clip_text(pos: Pos, s: &str, style: Style, clip: Option<Rect>) -> Option<TextRun> {
    let shown = match clip {
        None => s,
        Some(clip) => {
            if pos.y < clip.y || pos.y >= clip.bottom() || pos.x >= clip.right() {
                return None;
            }
            // One display column per pixel is the most the clip could hold.
            let max = usize::from(clip.right() - pos.x.max(clip.x));
            &s[..text::truncate_to_width(s, max)]
        }
    };
    if shown.is_empty() {
        return None;
    }
    Some(TextRun {
        pos,
        text: shown.to_string(),
        style,
    })
}

fn draw_border(buf: &mut PixelBuffer, rect: Rect, style: Style, kind: BorderKind) {
    let BorderKind::Plain = kind;
    if rect.is_empty() {
        return;
    }
    let color = style.fg.unwrap_or(Color::BLACK);
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    draw_line_hard(buf, Pos::new(rect.x, rect.y), Pos::new(right, rect.y), color);
    draw_line_hard(buf, Pos::new(rect.x, bottom), Pos::new(right, bottom), color);
    draw_line_hard(buf, Pos::new(rect.x, rect.y), Pos::new(rect.x, bottom), color);
    draw_line_hard(buf, Pos::new(right, rect.y), Pos::new(right, bottom), color);
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/raster.rs"]
mod tests;
