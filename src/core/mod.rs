//! Core types shared by the window controller and its frontends:
//! - event: native input events and the events delivered to listeners
//! - error: configuration and lookup errors

pub mod error;
pub mod event;

pub use error::{ErrorKind, WindowError};
pub use event::{
    event_channel, EventSender, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind, NativeEvent, WindowAction, WindowEvent,
};
