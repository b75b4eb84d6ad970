//! Rendering backends.
//!
//! The window only produces `PaintCmd`s in window pixels; a backend turns them into something
//! visible. `raster` keeps an off-screen pixel buffer, `terminal` maps pixels onto ratatui cells.

use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);
}

pub mod raster;

// The concrete terminal backend lives in `ratatui.rs`, but we keep the module name generic so the
// rest of the codebase does not need to mention ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
