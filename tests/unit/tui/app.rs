use super::*;

fn key(code: crossterm::event::KeyCode, mods: crossterm::event::KeyModifiers) -> crossterm::event::Event {
    crossterm::event::Event::Key(crossterm::event::KeyEvent::new(code, mods))
}

#[test]
fn ctrl_q_requests_close() {
    let scale = CellScale::default();
    assert_eq!(
        translate(
            key(
                crossterm::event::KeyCode::Char('q'),
                crossterm::event::KeyModifiers::CONTROL
            ),
            scale
        ),
        Some(NativeEvent::CloseRequested)
    );
}

#[test]
fn plain_q_is_typed() {
    let scale = CellScale::default();
    let Some(NativeEvent::Key(k)) = translate(
        key(
            crossterm::event::KeyCode::Char('q'),
            crossterm::event::KeyModifiers::NONE,
        ),
        scale,
    ) else {
        panic!("expected a key");
    };
    assert_eq!(k.code, KeyCode::Char('q'));
}

#[test]
fn quit_key_ignores_release() {
    let mut k = KeyEvent::press(KeyCode::Char('q')).with_modifiers(KeyModifiers::CONTROL);
    assert!(is_quit_key(&k));
    k.kind = KeyEventKind::Release;
    assert!(!is_quit_key(&k));
}
