use super::*;

#[test]
fn painter_collects_commands_and_clears() {
    let mut p = Painter::new();
    assert!(p.cmds().is_empty());

    p.fill_rect(Rect::new(0, 0, 1, 1), Color::BLACK);
    p.line(Pos::new(0, 0), Pos::new(5, 5), Color::RED);
    p.text(Pos::new(0, 0), "hi", Style::default());
    p.border(Rect::new(0, 0, 3, 3), Style::default(), BorderKind::Plain);
    assert_eq!(p.cmds().len(), 4);

    p.clear();
    assert!(p.cmds().is_empty());
}

#[test]
fn lines_are_smoothed_by_default() {
    let mut p = Painter::new();
    p.line(Pos::new(0, 0), Pos::new(1, 1), Color::BLACK);
    assert!(matches!(p.cmds()[0], PaintCmd::Line { smooth: true, .. }));
}
