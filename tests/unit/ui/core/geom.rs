use super::*;

#[test]
fn rect_contains_is_inclusive_exclusive() {
    let r = Rect::new(10, 20, 3, 2); // x:10..13, y:20..22
    assert!(r.contains(Pos::new(10, 20)));
    assert!(r.contains(Pos::new(12, 21)));

    // Right/bottom edges are exclusive.
    assert!(!r.contains(Pos::new(13, 20)));
    assert!(!r.contains(Pos::new(12, 22)));

    // Outside.
    assert!(!r.contains(Pos::new(9, 20)));
    assert!(!r.contains(Pos::new(10, 19)));
}

#[test]
fn rect_empty_never_contains() {
    let r = Rect::new(0, 0, 0, 10);
    assert!(!r.contains(Pos::new(0, 0)));
    let r = Rect::new(0, 0, 10, 0);
    assert!(!r.contains(Pos::new(0, 0)));
}

#[test]
fn rect_center_rounds_down() {
    assert_eq!(Rect::new(0, 240, 800, 120).center(), Pos::new(400, 300));
    assert_eq!(Rect::new(1, 1, 3, 3).center(), Pos::new(2, 2));
}

#[test]
fn rect_intersect_clips_to_overlap() {
    let a = Rect::new(0, 0, 10, 10);
    assert_eq!(a.intersect(Rect::new(5, 5, 10, 10)), Rect::new(5, 5, 5, 5));
    assert_eq!(a.intersect(Rect::new(2, 3, 4, 1)), Rect::new(2, 3, 4, 1));
    assert!(a.intersect(Rect::new(10, 0, 5, 5)).is_empty());
    assert!(a.intersect(Rect::new(20, 20, 5, 5)).is_empty());
}
