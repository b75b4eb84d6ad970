use super::*;
use crate::ui::core::painter::Painter;
use std::sync::Arc;

fn render(cols: u16, rows: u16, scale: CellScale, painter: &Painter) -> Buffer {
    let area = RRect::new(0, 0, cols, rows);
    let mut buf = Buffer::empty(area);
    PaintWidget {
        cmds: painter.cmds(),
        scale,
    }
    .render(area, &mut buf);
    buf
}

fn symbol(buf: &Buffer, x: u16, y: u16) -> &str {
    buf.cell((x, y)).map(|c| c.symbol()).unwrap_or("")
}

#[test]
fn cell_scale_covers_every_touched_cell() {
    let s = CellScale::new(8, 16);
    assert_eq!(s.rect(Rect::new(0, 0, 8, 16)), Rect::new(0, 0, 1, 1));
    assert_eq!(s.rect(Rect::new(4, 8, 8, 16)), Rect::new(0, 0, 2, 2));
    assert_eq!(s.rect(Rect::new(16, 32, 1, 1)), Rect::new(2, 2, 1, 1));
    assert_eq!(s.pos(Pos::new(17, 33)), Pos::new(2, 2));
    assert_eq!(s.cell_center(2, 1), Pos::new(20, 24));
    assert_eq!(s.pixels(80, 24), (640, 384));
}

#[test]
fn zero_cell_size_is_clamped() {
    assert_eq!(CellScale::new(0, 0), CellScale { px_w: 1, px_h: 1 });
}

#[test]
fn fill_rect_sets_background() {
    let mut p = Painter::new();
    p.fill_rect(Rect::new(0, 0, 16, 16), Color::RED);
    let buf = render(4, 2, CellScale::new(8, 16), &p);
    assert_eq!(buf[(0, 0)].bg, RColor::Rgb(255, 0, 0));
    assert_eq!(buf[(1, 0)].bg, RColor::Rgb(255, 0, 0));
    assert_eq!(buf[(2, 0)].bg, RColor::Reset);
    assert_eq!(buf[(0, 1)].bg, RColor::Reset);
}

#[test]
fn text_keeps_cell_background() {
    let mut p = Painter::new();
    p.fill_rect(Rect::new(0, 0, 80, 16), Color::BLUE);
    p.text(Pos::new(8, 0), "hi", Style::default().fg(Color::BLACK));
    let buf = render(10, 1, CellScale::new(8, 16), &p);
    assert_eq!(symbol(&buf, 1, 0), "h");
    assert_eq!(symbol(&buf, 2, 0), "i");
    assert_eq!(buf[(1, 0)].fg, RColor::Rgb(0, 0, 0));
    assert_eq!(buf[(1, 0)].bg, RColor::Rgb(0, 0, 255));
}

#[test]
fn text_is_clipped_in_cells() {
    let mut p = Painter::new();
    p.text_clipped(
        Pos::new(0, 0),
        "abcdef",
        Style::default(),
        Rect::new(0, 0, 24, 16),
    );
    let buf = render(10, 1, CellScale::new(8, 16), &p);
    assert_eq!(symbol(&buf, 2, 0), "c");
    assert_eq!(symbol(&buf, 3, 0), " ");
}

#[test]
fn wide_glyphs_are_not_split_at_clip_edge() {
    let mut p = Painter::new();
    p.text_clipped(
        Pos::new(0, 0),
        "a界",
        Style::default(),
        Rect::new(0, 0, 2, 1),
    );
    let buf = render(4, 1, CellScale::new(1, 1), &p);
    assert_eq!(symbol(&buf, 0, 0), "a");
    assert_eq!(symbol(&buf, 1, 0), " ");
}

#[test]
fn lines_are_drawn_in_cell_space() {
    let mut p = Painter::new();
    p.line(Pos::new(0, 0), Pos::new(31, 0), Color::GREEN);
    let buf = render(6, 2, CellScale::new(8, 16), &p);
    for x in 0..4 {
        assert_eq!(symbol(&buf, x, 0), "█");
        assert_eq!(buf[(x, 0)].fg, RColor::Rgb(0, 255, 0));
    }
    assert_eq!(symbol(&buf, 4, 0), " ");
}

#[test]
fn image_is_sampled_per_cell() {
    let mut data = Vec::new();
    for px in [Color::RED, Color::GREEN] {
        data.extend_from_slice(&[px.r, px.g, px.b, 255]);
    }
    let image = Arc::new(Raster::from_rgba(2, 1, data).unwrap());
    let mut p = Painter::new();
    p.image(image, Rect::new(0, 0, 16, 16));
    let buf = render(3, 1, CellScale::new(8, 16), &p);
    assert_eq!(buf[(0, 0)].bg, RColor::Rgb(255, 0, 0));
    assert_eq!(buf[(1, 0)].bg, RColor::Rgb(0, 255, 0));
    assert_eq!(buf[(2, 0)].bg, RColor::Reset);
}

#[test]
fn border_uses_box_drawing() {
    let mut p = Painter::new();
    p.border(Rect::new(0, 0, 3, 3), Style::default(), BorderKind::Plain);
    let buf = render(3, 3, CellScale::new(1, 1), &p);
    assert_eq!(symbol(&buf, 0, 0), "┌");
    assert_eq!(symbol(&buf, 2, 0), "┐");
    assert_eq!(symbol(&buf, 1, 0), "─");
    assert_eq!(symbol(&buf, 0, 1), "│");
    assert_eq!(symbol(&buf, 2, 2), "┘");
    assert_eq!(symbol(&buf, 1, 1), " ");
}
