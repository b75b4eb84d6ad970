//! Terminal run loop.
//!
//! Owns the window on the calling thread: reads crossterm input, dispatches it, drains events
//! posted by other threads, and repaints only when something changed.

use std::io;
use std::time::Duration;

use crate::core::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, NativeEvent};
use crate::settings::TerminalSettings;
use crate::tui::crossterm::into_native_event;
use crate::tui::terminal_guard::TerminalGuard;
use crate::ui::backend::terminal::{CellScale, RatatuiTerminal};
use crate::ui::window::Window;

/// Ctrl+Q closes the window.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q' | 'Q'))
}

/// Translates one terminal event. Quit keys become `CloseRequested`.
pub fn translate(event: crossterm::event::Event, scale: CellScale) -> Option<NativeEvent> {
    let native = into_native_event(event, scale)?;
    match native {
        NativeEvent::Key(key) if is_quit_key(&key) => Some(NativeEvent::CloseRequested),
        other => Some(other),
    }
}

/// Shows `window` in the terminal until it is closed.
pub fn run(mut window: Window, settings: &TerminalSettings) -> io::Result<()> {
    let scale = CellScale::new(settings.cell_width, settings.cell_height);
    let poll = Duration::from_millis(settings.poll_ms.max(1));

    let guard = TerminalGuard::enter(window.title())?;
    #[cfg(unix)]
    let _signals =
        crate::tui::terminal_guard::close_on_termination(guard.handle(), window.event_sender())?;

    let mut terminal = RatatuiTerminal::new(io::stdout(), scale)?;
    let (cols, rows) = terminal.size()?;
    let (px_w, px_h) = scale.pixels(cols, rows);
    let size = window.size();
    if size.w > px_w || size.h > px_h {
        tracing::warn!(
            window_w = size.w,
            window_h = size.h,
            terminal_w = px_w,
            terminal_h = px_h,
            "window is larger than the terminal; it will be cut off"
        );
    }

    window.show();
    loop {
        window.pump();
        if window.is_closed() {
            break;
        }
        if window.needs_redraw() {
            terminal.draw(|backend| window.render(backend))?;
        }
        if !crossterm::event::poll(poll)? {
            continue;
        }
        let event = crossterm::event::read()?;
        if matches!(event, crossterm::event::Event::Resize(..)) {
            window.canvas().request_repaint();
        }
        if let Some(native) = translate(event, scale) {
            window.dispatch(native);
        }
    }

    drop(terminal);
    drop(guard);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/tui/app.rs"]
mod tests;
