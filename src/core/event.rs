use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::sync::mpsc;

use crate::ui::core::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Esc,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers(u8);

impl KeyModifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1 << 0);
    pub const CONTROL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);
    pub const SUPER: Self = Self(1 << 3);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for KeyModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeyModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Press,
    Release,
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    pub fn press(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    Moved,
}

/// Pointer event in window pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub x: u16,
    pub y: u16,
    pub modifiers: KeyModifiers,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: KeyModifiers::NONE,
        }
    }
}

/// Events fed to a window by its frontend (or posted from other threads).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// A toolkit reported an action on one of its widgets (e.g. a button was activated).
    Action { widget: Id },
    Tick { elapsed_ms: u64 },
    CloseRequested,
}

/// Posts native events to a window from any thread; the window drains them in `pump`.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::Sender<NativeEvent>,
}

impl EventSender {
    /// `false` once the window is gone.
    pub fn post(&self, event: NativeEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

pub fn event_channel() -> (EventSender, mpsc::Receiver<NativeEvent>) {
    let (tx, rx) = mpsc::channel();
    (EventSender { tx }, rx)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowAction {
    ButtonClick,
    KeyPress,
    LeftClick,
    RightClick,
    Timer,
}

impl fmt::Display for WindowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WindowAction::ButtonClick => "ButtonClick",
            WindowAction::KeyPress => "KeyPress",
            WindowAction::LeftClick => "LeftClick",
            WindowAction::RightClick => "RightClick",
            WindowAction::Timer => "Timer",
        };
        f.write_str(name)
    }
}

/// What a listener receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowEvent {
    /// Originating element, `None` for window-level events (keys, canvas clicks, ticks).
    pub element: Option<String>,
    pub action: WindowAction,
    pub payload: Option<String>,
}

impl WindowEvent {
    pub fn new(element: Option<String>, action: WindowAction, payload: Option<String>) -> Self {
        Self {
            element,
            action,
            payload,
        }
    }

    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Parses the `"x,y"` payload of a canvas click.
    pub fn click_position(&self) -> Option<(u16, u16)> {
        if !matches!(
            self.action,
            WindowAction::LeftClick | WindowAction::RightClick
        ) {
            return None;
        }
        let (x, y) = self.payload.as_deref()?.split_once(',')?;
        Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
    }
}

/// Symbolic key name reported with `KeyPress` events.
pub fn key_text(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(ch) if ch.is_alphabetic() => ch.to_uppercase().collect(),
        KeyCode::Char(',') => "Comma".to_string(),
        KeyCode::Char('.') => "Period".to_string(),
        KeyCode::Char('-') => "Minus".to_string(),
        KeyCode::Char('=') => "Equals".to_string(),
        KeyCode::Char('/') => "Slash".to_string(),
        KeyCode::Char(';') => "Semicolon".to_string(),
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "Page Up".to_string(),
        KeyCode::PageDown => "Page Down".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Unknown => "Unknown".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
