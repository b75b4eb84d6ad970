//! gridwin - grid-based window library
//!
//! Modules:
//! - core: native input events, window events, errors
//! - ui: geometry, elements, canvas, window controller, timer bridge, backends
//! - settings: persisted defaults (window, theme, terminal)
//! - logging: tracing setup
//! - tui: terminal frontend (crossterm + ratatui)

pub mod core;
pub mod logging;
pub mod settings;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;

pub use crate::core::error::{ErrorKind, WindowError};
pub use crate::core::event::{NativeEvent, WindowAction, WindowEvent};
pub use crate::ui::element::{ElementKind, Position, TextAlign};
pub use crate::ui::window::{Window, WindowOptions};
