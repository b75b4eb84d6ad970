use super::*;
use crate::ui::core::painter::PaintCmd;
use crate::ui::image::Raster;
use crate::ui::registry::ElementKey;
use std::sync::Arc;

fn el(widget: Widget) -> Element {
    Element::new(
        "e",
        Some(Position::new(0, 0)),
        Rect::new(0, 0, 200, 40),
        Font::default(),
        Color::BLACK,
        widget,
    )
}

#[test]
fn text_kinds_round_trip_any_string() {
    for widget in [
        Widget::Label(Label {
            text: String::new(),
            align: TextAlign::Left,
        }),
        Widget::TextField(TextField::default()),
        Widget::Button(Button {
            caption: String::new(),
            icon: None,
        }),
    ] {
        let mut e = el(widget);
        for s in ["", "hello", "multi\nline", "ünïcødé", "true"] {
            assert!(e.set_value(s));
            assert_eq!(e.value().as_deref(), Some(s));
        }
    }
}

#[test]
fn dropdown_splits_options_and_falls_back_to_first() {
    let d = Dropdown::new("red\ngreen\nblue", "purple");
    assert_eq!(d.options(), ["red", "green", "blue"]);
    assert_eq!(d.value(), "red");

    let d = Dropdown::new("red\ngreen\nblue", "blue");
    assert_eq!(d.selected_index(), 2);
}

#[test]
fn dropdown_ignores_unknown_options() {
    let mut e = el(Widget::Dropdown(Dropdown::new("a\nb", "a")));
    assert!(e.set_value("b"));
    assert!(!e.set_value("c"));
    assert_eq!(e.value().as_deref(), Some("b"));
}

#[test]
fn dropdown_click_cycles_with_wrap() {
    let mut w = Widget::Dropdown(Dropdown::new("a\nb", "b"));
    assert_eq!(w.on_primary_click(), ClickOutcome::Changed);
    let Widget::Dropdown(d) = &w else {
        unreachable!()
    };
    assert_eq!(d.value(), "a");
}

#[test]
fn checkbox_click_toggles() {
    let mut e = el(Widget::Checkbox(Checkbox {
        caption: "c".into(),
        checked: false,
    }));
    assert_eq!(e.widget_mut().on_primary_click(), ClickOutcome::Changed);
    assert_eq!(e.value().as_deref(), Some("true"));
    e.widget_mut().on_primary_click();
    assert_eq!(e.value().as_deref(), Some("false"));
}

#[test]
fn boolean_kinds_ignore_other_literals() {
    let mut e = el(Widget::Checkbox(Checkbox {
        caption: "c".into(),
        checked: true,
    }));
    assert!(!e.set_value("yes"));
    assert!(!e.set_value(""));
    assert_eq!(e.value().as_deref(), Some("true"));
}

#[test]
fn radio_group_has_no_own_value_and_owns_nothing() {
    let group = Element::new(
        "g",
        None,
        Rect::default(),
        Font::default(),
        Color::BLACK,
        Widget::RadioGroup(RadioGroup::default()),
    );
    assert_eq!(group.value(), None);
    assert!(!group.owns(group.id()));
}

#[test]
fn labels_are_not_clickable() {
    let label = Widget::Label(Label {
        text: "x".into(),
        align: TextAlign::Center,
    });
    assert_eq!(label.sense(), Sense::NONE);
    assert!(Widget::TextField(TextField::default())
        .sense()
        .contains(Sense::FOCUS));
    let radio = Widget::RadioButton(RadioButton {
        caption: "r".into(),
        selected: false,
        group: ElementKey::default(),
    });
    assert!(radio.sense().contains(Sense::CLICK));
}

#[test]
fn id_is_derived_from_name() {
    let a = el(Widget::TextField(TextField::default()));
    let b = el(Widget::TextField(TextField::default()));
    assert_eq!(a.id(), b.id());
    assert!(a.owns(b.id()));
    assert_eq!(a.id(), element_id("e"));
}

#[test]
fn restyle_and_reposition() {
    let mut e = el(Widget::TextField(TextField::default()));
    e.set_font(Font::new("Arial", 20));
    e.set_text_color(Color::RED);
    e.reposition(Rect::new(5, 5, 50, 20));
    assert_eq!(e.font().size, 20);
    assert_eq!(e.text_color(), Color::RED);
    assert_eq!(e.bounds(), Rect::new(5, 5, 50, 20));
}

#[test]
fn text_field_editing_works_on_graphemes() {
    let mut field = TextField::default();
    field.insert_char('h');
    field.insert_char('é');
    assert_eq!(field.value(), "hé");
    assert!(field.delete_back());
    assert_eq!(field.value(), "h");
}

#[test]
fn label_paints_aligned_text() {
    let mut painter = Painter::new();
    let e = Element::new(
        "l",
        Some(Position::new(0, 0)),
        Rect::new(0, 0, 100, 20),
        Font::new("Arial", 10),
        Color::BLUE,
        Widget::Label(Label {
            text: "abc".into(),
            align: TextAlign::Right,
        }),
    );
    e.paint(&mut painter, false);

    let cmds = painter.cmds();
    assert_eq!(cmds.len(), 1);
    match &cmds[0] {
        PaintCmd::Text { pos, text, style, .. } => {
            // 3 columns * 6 px from the right edge.
            assert_eq!(pos.x, 82);
            assert_eq!(text, "abc");
            assert_eq!(style.fg, Some(Color::BLUE));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn focused_text_field_draws_a_caret() {
    let mut painter = Painter::new();
    let e = el(Widget::TextField(TextField {
        text: "hi".into(),
    }));
    e.paint(&mut painter, true);
    assert!(painter
        .cmds()
        .iter()
        .any(|c| matches!(c, PaintCmd::Line { .. })));

    let mut painter = Painter::new();
    e.paint(&mut painter, false);
    assert!(!painter
        .cmds()
        .iter()
        .any(|c| matches!(c, PaintCmd::Line { .. })));
}

#[test]
fn button_with_icon_paints_image() {
    let mut painter = Painter::new();
    let e = el(Widget::Button(Button {
        caption: "Go".into(),
        icon: Some(Arc::new(Raster::solid(16, 16, Color::GREEN))),
    }));
    e.paint(&mut painter, false);
    let image_rect = painter.cmds().iter().find_map(|c| match c {
        PaintCmd::Image { rect, .. } => Some(*rect),
        _ => None,
    });
    let rect = image_rect.expect("icon painted");
    assert_eq!((rect.w, rect.h), (16, 16));
}
