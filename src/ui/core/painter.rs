use std::sync::Arc;

use super::geom::{Pos, Rect};
use super::style::{Color, Style};
use crate::ui::image::Raster;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderKind {
    Plain,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PaintCmd {
    /// Opaque fill.
    FillRect { rect: Rect, color: Color },
    Line {
        from: Pos,
        to: Pos,
        color: Color,
        /// Edge smoothing (anti-aliasing) when the backend supports it.
        smooth: bool,
    },
    /// Draws `image` stretched into `rect`.
    Image { image: Arc<Raster>, rect: Rect },
    Text {
        pos: Pos,
        text: String,
        style: Style,
        clip: Option<Rect>,
    },
    Border {
        rect: Rect,
        style: Style,
        kind: BorderKind,
    },
}

#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.cmds.push(PaintCmd::FillRect { rect, color });
    }

    pub fn line(&mut self, from: Pos, to: Pos, color: Color) {
        self.cmds.push(PaintCmd::Line {
            from,
            to,
            color,
            smooth: true,
        });
    }

    pub fn image(&mut self, image: Arc<Raster>, rect: Rect) {
        self.cmds.push(PaintCmd::Image { image, rect });
    }

    pub fn text(&mut self, pos: Pos, text: impl Into<String>, style: Style) {
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            style,
            clip: None,
        });
    }

    pub fn text_clipped(
        &mut self,
        pos: Pos,
        text: impl Into<String>,
        style: Style,
        clip: Rect,
    ) {
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            style,
            clip: Some(clip),
        });
    }

    pub fn border(&mut self, rect: Rect, style: Style, kind: BorderKind) {
        self.cmds.push(PaintCmd::Border { rect, style, kind });
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
