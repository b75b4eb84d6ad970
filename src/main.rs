//! Terminal playground: a small form plus a canvas, driven by a 1s timer.
//!
//! Ctrl+Q quits.

use std::io;

use gridwin::settings::{ensure_settings_file, load_settings};
use gridwin::ui::core::style::Color;
use gridwin::{Window, WindowAction, WindowError, WindowOptions};

fn build(window: &mut Window) -> Result<(), WindowError> {
    window.set_margins(2, 8);
    window.add_label("title", "gridwin playground", 0, 0)?;
    window.add_label("clock", "0 s", 0, 1)?;
    window.add_label("name_label", "Name:", 1, 0)?;
    window.add_text_field("name", "", 1, 1)?;
    window.add_dropdown("color", "red\ngreen\nblue", "red", 2, 0)?;
    window.add_checkbox("fill", "Fill", true, 2, 1)?;
    window.add_radio_button("shape", "square", "Square", true, 3, 0)?;
    window.add_radio_button("shape", "line", "Line", false, 3, 1)?;
    window.add_button("greet", "Greet", 4, 0)?;
    window.add_button("clear", "Clear", 4, 1)?;
    window.add_label("status", "", 5, 0)?;

    window.set_listener_with_interval(
        |w, ev| {
            if let Err(e) = on_event(w, ev.action, ev.element(), ev.payload()) {
                tracing::warn!(error = %e, "listener failed");
            }
        },
        1000,
    )
}

fn on_event(
    window: &mut Window,
    action: WindowAction,
    element: Option<&str>,
    payload: Option<&str>,
) -> Result<(), WindowError> {
    match (action, element) {
        (WindowAction::Timer, _) => {
            let secs = payload.and_then(|p| p.parse::<u64>().ok()).unwrap_or(0) / 1000;
            window.set_value("clock", &format!("{secs} s"))?;
        }
        (WindowAction::ButtonClick, Some("greet")) => {
            let name = window.value("name")?.unwrap_or_default();
            let name = if name.is_empty() { "stranger" } else { name.as_str() };
            window.set_value("status", &format!("Hello, {name}!"))?;
        }
        (WindowAction::ButtonClick, Some("clear")) => {
            // Old strokes stay on screen until the next one is drawn.
            window.clear_drawing();
            window.set_value("status", "")?;
        }
        (WindowAction::LeftClick, None) => {
            let Some((x, y)) = payload.and_then(|p| p.split_once(',')) else {
                return Ok(());
            };
            let (Ok(x), Ok(y)) = (x.parse::<u16>(), y.parse::<u16>()) else {
                return Ok(());
            };
            let color = match window.value("color")?.as_deref() {
                Some("green") => Color::GREEN,
                Some("blue") => Color::BLUE,
                _ => Color::RED,
            };
            let filled = window.value("fill")?.as_deref() == Some("true");
            if window.value("shape")?.as_deref() == Some("line") || !filled {
                window.draw_line_colored(x.saturating_sub(16), y, x.saturating_add(16), y, color);
            } else {
                window.draw_rectangle_colored(x.saturating_sub(8), y.saturating_sub(8), 16, 16, color);
            }
        }
        (WindowAction::KeyPress, _) => {
            window.set_value("status", &format!("key: {}", payload.unwrap_or_default()))?;
        }
        _ => {}
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let _logging = gridwin::logging::init();
    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "settings file unavailable; using defaults");
    }
    let settings = load_settings();

    let mut window = Window::new(WindowOptions {
        rows: 8,
        columns: 2,
        ..WindowOptions::from_settings(&settings)
    });
    if let Err(e) = build(&mut window) {
        eprintln!("gridwin: {e}");
        return Err(io::Error::other(e.to_string()));
    }

    gridwin::tui::run(window, &settings.terminal)
}
