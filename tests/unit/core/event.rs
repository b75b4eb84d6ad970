use super::*;

#[test]
fn key_text_uppercases_letters() {
    assert_eq!(key_text(KeyCode::Char('a')), "A");
    assert_eq!(key_text(KeyCode::Char('Z')), "Z");
}

#[test]
fn key_text_names_special_keys() {
    assert_eq!(key_text(KeyCode::Enter), "Enter");
    assert_eq!(key_text(KeyCode::Char(' ')), "Space");
    assert_eq!(key_text(KeyCode::Esc), "Escape");
    assert_eq!(key_text(KeyCode::PageDown), "Page Down");
    assert_eq!(key_text(KeyCode::F(5)), "F5");
    assert_eq!(key_text(KeyCode::Char('7')), "7");
    assert_eq!(key_text(KeyCode::Char(',')), "Comma");
}

#[test]
fn modifiers_combine() {
    let mods = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
    assert!(mods.contains(KeyModifiers::CONTROL));
    assert!(mods.contains(KeyModifiers::SHIFT));
    assert!(!mods.contains(KeyModifiers::ALT));
    assert!(KeyModifiers::NONE.is_empty());
}

#[test]
fn click_position_parses_canvas_payload() {
    let event = WindowEvent::new(None, WindowAction::LeftClick, Some("12,34".to_string()));
    assert_eq!(event.click_position(), Some((12, 34)));

    let event = WindowEvent::new(None, WindowAction::KeyPress, Some("1,2".to_string()));
    assert_eq!(event.click_position(), None);
}

#[test]
fn action_display_matches_variant_name() {
    assert_eq!(WindowAction::ButtonClick.to_string(), "ButtonClick");
    assert_eq!(WindowAction::Timer.to_string(), "Timer");
}

#[test]
fn event_sender_reports_closed_channel() {
    let (tx, rx) = event_channel();
    assert!(tx.clone().post(NativeEvent::CloseRequested));
    assert_eq!(rx.try_recv().unwrap(), NativeEvent::CloseRequested);
    drop(rx);
    assert!(!tx.post(NativeEvent::Tick { elapsed_ms: 1 }));
}
