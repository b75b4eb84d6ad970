use super::*;
use crate::ui::core::style::{Color, Font};
use crate::ui::element::{Button, Checkbox, Label, RadioButton};

fn element(name: &str, row: u16, column: u16, widget: Widget) -> Element {
    Element::new(
        name,
        Some(Position::new(row, column)),
        Rect::new(0, 0, 10, 10),
        Font::default(),
        Color::BLACK,
        widget,
    )
}

fn label(name: &str, row: u16, column: u16) -> Element {
    element(
        name,
        row,
        column,
        Widget::Label(Label {
            text: name.to_string(),
            align: Default::default(),
        }),
    )
}

fn radio(name: &str, row: u16, selected: bool) -> Element {
    element(
        name,
        row,
        0,
        Widget::RadioButton(RadioButton {
            caption: name.to_string(),
            selected,
            group: ElementKey::default(),
        }),
    )
}

#[test]
fn insert_updates_both_indexes() {
    let mut table = ElementTable::new();
    let key = table.insert(label("q", 0, 0)).unwrap();

    assert_eq!(table.key("q"), Some(key));
    assert_eq!(table.at(Position::new(0, 0)).unwrap().name(), "q");
    assert_eq!(table.len(), 1);
}

#[test]
fn position_collision_leaves_first_element_in_place() {
    let mut table = ElementTable::new();
    table.insert(label("a", 1, 1)).unwrap();

    let err = table.insert(label("b", 1, 1)).unwrap_err();
    assert_eq!(
        err,
        ErrorKind::PositionOccupied {
            position: Position::new(1, 1)
        }
    );
    assert!(table.key("b").is_none());
    assert_eq!(table.at(Position::new(1, 1)).unwrap().name(), "a");
    assert_eq!(table.len(), 1);
}

#[test]
fn duplicate_name_keeps_original_position() {
    let mut table = ElementTable::new();
    table.insert(label("a", 0, 0)).unwrap();

    let err = table.insert(label("a", 2, 0)).unwrap_err();
    assert!(matches!(err, ErrorKind::DuplicateName { .. }));
    assert!(table.at(Position::new(2, 0)).is_none());
    assert_eq!(table.by_name("a").unwrap().position(), Some(Position::new(0, 0)));
}

#[test]
fn blank_names_are_rejected() {
    let mut table = ElementTable::new();
    assert!(matches!(
        table.insert(label("  ", 0, 0)),
        Err(ErrorKind::InvalidName { .. })
    ));
    assert!(table.is_empty());
}

#[test]
fn radio_group_is_created_once_and_shared() {
    let mut table = ElementTable::new();
    let a = table.insert_radio("g", radio("a", 0, false)).unwrap();
    let b = table.insert_radio("g", radio("b", 1, false)).unwrap();

    let group = table.key("g").unwrap();
    assert_eq!(table.get(group).unwrap().kind(), ElementKind::RadioGroup);
    assert_eq!(table.get(group).unwrap().position(), None);
    assert_eq!(table.value(group), None);

    assert!(table.set_value(group, "b"));
    assert_eq!(table.value(group).as_deref(), Some("b"));
    assert_eq!(table.value(a).as_deref(), Some("false"));
    assert_eq!(table.value(b).as_deref(), Some("true"));

    assert!(table.set_value(group, "a"));
    assert_eq!(table.value(group).as_deref(), Some("a"));
    assert_eq!(table.value(b).as_deref(), Some("false"));
}

#[test]
fn group_ignores_unknown_member_names() {
    let mut table = ElementTable::new();
    table.insert_radio("g", radio("a", 0, true)).unwrap();
    let group = table.key("g").unwrap();

    assert!(!table.set_value(group, "zzz"));
    assert_eq!(table.value(group).as_deref(), Some("a"));
}

#[test]
fn radio_true_deselects_siblings_and_false_clears() {
    let mut table = ElementTable::new();
    let a = table.insert_radio("g", radio("a", 0, true)).unwrap();
    let b = table.insert_radio("g", radio("b", 1, false)).unwrap();
    let group = table.key("g").unwrap();

    assert!(table.set_value(b, "true"));
    assert_eq!(table.value(a).as_deref(), Some("false"));
    assert_eq!(table.value(group).as_deref(), Some("b"));

    assert!(table.set_value(b, "false"));
    assert_eq!(table.value(group), None);

    assert!(!table.set_value(b, "yes"));
    assert_eq!(table.value(b).as_deref(), Some("false"));
}

#[test]
fn second_preselected_radio_arrives_deselected() {
    let mut table = ElementTable::new();
    table.insert_radio("g", radio("a", 0, true)).unwrap();
    let b = table.insert_radio("g", radio("b", 1, true)).unwrap();

    assert_eq!(table.value(b).as_deref(), Some("false"));
    assert_eq!(table.value(table.key("g").unwrap()).as_deref(), Some("a"));
}

#[test]
fn group_name_bound_to_other_element_conflicts() {
    let mut table = ElementTable::new();
    table.insert(label("g", 0, 0)).unwrap();

    let err = table.insert_radio("g", radio("a", 1, false)).unwrap_err();
    assert!(matches!(err, ErrorKind::GroupNameConflict { .. }));
    assert!(table.key("a").is_none());
    assert!(table.at(Position::new(1, 0)).is_none());
}

#[test]
fn radio_named_like_its_group_is_a_duplicate() {
    let mut table = ElementTable::new();
    let err = table.insert_radio("g", radio("g", 0, false)).unwrap_err();
    assert!(matches!(err, ErrorKind::DuplicateName { .. }));
    assert!(table.is_empty());
}

#[test]
fn failed_radio_insert_does_not_create_group() {
    let mut table = ElementTable::new();
    table.insert(label("x", 0, 0)).unwrap();

    let err = table.insert_radio("g", radio("a", 0, false)).unwrap_err();
    assert!(matches!(err, ErrorKind::PositionOccupied { .. }));
    assert!(table.key("g").is_none());
}

#[test]
fn owner_of_scans_in_insertion_order() {
    let mut table = ElementTable::new();
    table.insert(label("q", 0, 0)).unwrap();
    let ok = table
        .insert(element(
            "ok",
            1,
            0,
            Widget::Button(Button {
                caption: "OK".into(),
                icon: None,
            }),
        ))
        .unwrap();

    let id = table.get(ok).unwrap().id();
    assert_eq!(table.owner_of(id), Some(ok));
    assert_eq!(table.owner_of(Id::raw(42)), None);

    let names: Vec<_> = table.iter().map(|(_, e)| e.name().to_string()).collect();
    assert_eq!(names, ["q", "ok"]);
}

#[test]
fn checkbox_values_follow_literal_rules() {
    let mut table = ElementTable::new();
    let key = table
        .insert(element(
            "c",
            0,
            0,
            Widget::Checkbox(Checkbox {
                caption: "C".into(),
                checked: false,
            }),
        ))
        .unwrap();

    assert!(table.set_value(key, "true"));
    assert_eq!(table.value(key).as_deref(), Some("true"));
    assert!(!table.set_value(key, "TRUE"));
    assert_eq!(table.value(key).as_deref(), Some("true"));
    assert!(table.set_value(key, "false"));
    assert_eq!(table.value(key).as_deref(), Some("false"));
}
