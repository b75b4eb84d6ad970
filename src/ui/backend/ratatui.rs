use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{BorderKind, PaintCmd};
use crate::ui::core::style::{Color, Mod, Style};
use crate::ui::image::Raster;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use std::io;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Window pixels covered by one terminal cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellScale {
    pub px_w: u16,
    pub px_h: u16,
}

impl Default for CellScale {
    fn default() -> Self {
        Self { px_w: 8, px_h: 16 }
    }
}

impl CellScale {
    pub fn new(px_w: u16, px_h: u16) -> Self {
        Self {
            px_w: px_w.max(1),
            px_h: px_h.max(1),
        }
    }

    pub fn pos(&self, p: Pos) -> Pos {
        Pos::new(p.x / self.px_w, p.y / self.px_h)
    }

    /// Every cell the pixel rectangle touches.
    pub fn rect(&self, r: Rect) -> Rect {
        if r.is_empty() {
            return Rect::new(r.x / self.px_w, r.y / self.px_h, 0, 0);
        }
        let x0 = r.x / self.px_w;
        let y0 = r.y / self.px_h;
        let x1 = (u32::from(r.x) + u32::from(r.w)).div_ceil(u32::from(self.px_w));
        let y1 = (u32::from(r.y) + u32::from(r.h)).div_ceil(u32::from(self.px_h));
        Rect::new(
            x0,
            y0,
            u16::try_from(x1).unwrap_or(u16::MAX).saturating_sub(x0),
            u16::try_from(y1).unwrap_or(u16::MAX).saturating_sub(y0),
        )
    }

    /// Pixel at the centre of cell `(col, row)`.
    pub fn cell_center(&self, col: u16, row: u16) -> Pos {
        Pos::new(
            col.saturating_mul(self.px_w).saturating_add(self.px_w / 2),
            row.saturating_mul(self.px_h).saturating_add(self.px_h / 2),
        )
    }

    /// Pixel area that fits in a terminal of `cols` x `rows`.
    pub fn pixels(&self, cols: u16, rows: u16) -> (u16, u16) {
        (
            cols.saturating_mul(self.px_w),
            rows.saturating_mul(self.px_h),
        )
    }
}

pub struct RatatuiBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
    scale: CellScale,
}

impl<'a, 'f> RatatuiBackend<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>, scale: CellScale) -> Self {
        Self { frame, scale }
    }
}

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect {
            x: r.x,
            y: r.y,
            width: r.w,
            height: r.h,
        }
    }
}

impl Backend for RatatuiBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        let frame_area = self.frame.area();
        let cells = self.scale.rect(area).intersect(frame_area.into());
        let widget = PaintWidget {
            cmds,
            scale: self.scale,
        };
        self.frame.render_widget(widget, cells.into());
    }
}

/// Opaque terminal wrapper so the rest of the crate does not need to reference `ratatui` types.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    scale: CellScale,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout, scale: CellScale) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal, scale })
    }

    pub fn scale(&self) -> CellScale {
        self.scale
    }

    /// Terminal size in cells.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend),
    {
        let scale = self.scale;
        self.terminal.draw(|frame| {
            let mut backend = RatatuiBackend::new(frame, scale);
            f(&mut backend);
        })?;
        Ok(())
    }
}

struct PaintWidget<'a> {
    cmds: &'a [PaintCmd],
    scale: CellScale,
}

impl Widget for PaintWidget<'_> {
    fn render(self, area: RRect, buf: &mut Buffer) {
        let clip: Rect = area.into();
        let s = self.scale;
        for cmd in self.cmds {
            match cmd {
                PaintCmd::FillRect { rect, color } => {
                    fill_rect(buf, s.rect(*rect).intersect(clip), *color)
                }
                PaintCmd::Line { from, to, color, .. } => {
                    draw_line(buf, s.pos(*from), s.pos(*to), *color, clip)
                }
                PaintCmd::Image { image, rect } => draw_image(buf, image, *rect, s, clip),
                PaintCmd::Text {
                    pos,
                    text,
                    style,
                    clip: text_clip,
                } => {
                    let text_clip = text_clip.map_or(clip, |c| s.rect(c).intersect(clip));
                    draw_text(buf, s.pos(*pos), text, *style, text_clip)
                }
                PaintCmd::Border { rect, style, kind } => {
                    draw_border(buf, s.rect(*rect).intersect(clip), *style, *kind)
                }
            }
        }
    }
}

fn to_ratatui_color(c: Color) -> RColor {
    RColor::Rgb(c.r, c.g, c.b)
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    let mut out = RModifier::empty();
    if m.contains(Mod::BOLD) {
        out |= RModifier::BOLD;
    }
    if m.contains(Mod::DIM) {
        out |= RModifier::DIM;
    }
    if m.contains(Mod::UNDERLINE) {
        out |= RModifier::UNDERLINED;
    }
    if m.contains(Mod::REVERSE) {
        out |= RModifier::REVERSED;
    }
    out
}

/// Unset colours are left alone so text keeps the cell's existing background.
fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out.add_modifier(to_ratatui_mods(s.mods))
}

fn fill_rect(buf: &mut Buffer, rect: Rect, color: Color) {
    if rect.is_empty() {
        return;
    }
    let bg = to_ratatui_color(color);
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ').set_bg(bg);
            }
        }
    }
}

fn draw_line(buf: &mut Buffer, from: Pos, to: Pos, color: Color, clip: Rect) {
    let fg = to_ratatui_color(color);
    let (mut x0, mut y0) = (i32::from(from.x), i32::from(from.y));
    let (x1, y1) = (i32::from(to.x), i32::from(to.y));
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        if let (Ok(x), Ok(y)) = (u16::try_from(x0), u16::try_from(y0)) {
            if clip.contains(Pos::new(x, y)) {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char('█').set_fg(fg);
                }
            }
        }
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

/// One sample per cell, taken at the cell centre.
fn draw_image(buf: &mut Buffer, image: &Raster, rect: Rect, s: CellScale, clip: Rect) {
    let cells = s.rect(rect).intersect(clip);
    if cells.is_empty() || rect.is_empty() {
        return;
    }
    for row in cells.y..cells.bottom() {
        for col in cells.x..cells.right() {
            let center = s.cell_center(col, row);
            if !rect.contains(center) {
                continue;
            }
            let sx = u32::from(center.x - rect.x) * image.width() / u32::from(rect.w);
            let sy = u32::from(center.y - rect.y) * image.height() / u32::from(rect.h);
            let Some((color, alpha)) = image.pixel(sx, sy) else {
                continue;
            };
            if alpha < 128 {
                continue;
            }
            if let Some(cell) = buf.cell_mut((col, row)) {
                cell.set_char(' ').set_bg(to_ratatui_color(color));
            }
        }
    }
}

fn draw_text(buf: &mut Buffer, pos: Pos, text: &str, style: Style, clip: Rect) {
    let style = to_ratatui_style(style);
    let mut x = pos.x;
    let y = pos.y;
    if y < clip.y || y >= clip.bottom() {
        return;
    }
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        if x >= clip.right() {
            break;
        }
        // Do not partially render wide glyphs.
        if w > 1 && x.saturating_add(w).saturating_sub(1) >= clip.right() {
            break;
        }
        if !clip.contains(Pos::new(x, y)) {
            x = x.saturating_add(w);
            continue;
        }

        let Some(cell) = buf.cell_mut((x, y)) else {
            break;
        };
        cell.set_symbol(g).set_style(style);

        for dx in 1..w {
            let xx = x.saturating_add(dx);
            if !clip.contains(Pos::new(xx, y)) {
                break;
            }
            let Some(cell) = buf.cell_mut((xx, y)) else {
                break;
            };
            cell.set_char(' ').set_style(style);
        }
        x = x.saturating_add(w);
    }
}

fn draw_border(buf: &mut Buffer, rect: Rect, style: Style, kind: BorderKind) {
    if rect.w < 2 || rect.h < 2 {
        return;
    }

    let style = to_ratatui_style(style);
    let right = rect.right().saturating_sub(1);
    let bottom = rect.bottom().saturating_sub(1);

    let (tl, tr, bl, br, h, v) = match kind {
        BorderKind::Plain => ('┌', '┐', '└', '┘', '─', '│'),
    };

    let mut put = |x: u16, y: u16, ch: char| {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(ch).set_style(style);
        }
    };

    put(rect.x, rect.y, tl);
    put(right, rect.y, tr);
    put(rect.x, bottom, bl);
    put(right, bottom, br);
    for x in rect.x.saturating_add(1)..right {
        put(x, rect.y, h);
        put(x, bottom, h);
    }
    for y in rect.y.saturating_add(1)..bottom {
        put(rect.x, y, v);
        put(right, y, v);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/ratatui.rs"]
mod tests;
