use super::geom::Pos;
use super::id::Id;
use super::tree::{Sense, UiTree};
use crate::core::event::{MouseButton, MouseEvent, MouseEventKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// Press and release landed on the same clickable widget.
    Click {
        id: Id,
        button: MouseButton,
        pos: Pos,
    },
    /// Press and release both landed outside every clickable widget.
    CanvasClick { button: MouseButton, pos: Pos },
}

#[derive(Debug, Clone, Copy)]
struct PressedState {
    button: MouseButton,
    click: Option<Id>,
}

/// Pointer state machine turning raw press/release pairs into clicks.
#[derive(Debug, Default)]
pub struct UiRuntime {
    pressed: Option<PressedState>,
    last_pos: Option<Pos>,
}

impl UiRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    pub fn last_pos(&self) -> Option<Pos> {
        self.last_pos
    }

    pub fn reset_pointer_state(&mut self) {
        self.pressed = None;
    }

    pub fn on_mouse(&mut self, me: &MouseEvent, tree: &UiTree) -> Option<UiEvent> {
        let pos = Pos::new(me.x, me.y);
        self.last_pos = Some(pos);

        match me.kind {
            MouseEventKind::Down(button) => {
                let click = tree.hit_test_with_sense(pos, Sense::CLICK).map(|n| n.id);
                self.pressed = Some(PressedState { button, click });
                None
            }
            MouseEventKind::Up(button) => {
                let pressed = self.pressed.take()?;
                if pressed.button != button {
                    return None;
                }
                let released_on = tree.hit_test_with_sense(pos, Sense::CLICK).map(|n| n.id);
                match (pressed.click, released_on) {
                    (Some(id), Some(now)) if id == now => Some(UiEvent::Click { id, button, pos }),
                    (None, None) => Some(UiEvent::CanvasClick { button, pos }),
                    // Dragged off (or onto) a widget: not a click.
                    _ => None,
                }
            }
            MouseEventKind::Moved => None,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/runtime.rs"]
mod tests;
