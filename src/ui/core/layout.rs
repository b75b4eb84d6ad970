use std::fmt;

use super::geom::{Rect, Size};

pub const MIN_WINDOW_WIDTH: u16 = 160;
pub const MIN_WINDOW_HEIGHT: u16 = 120;
/// A grid track (row or column) is never thinner than this many pixels.
pub const MIN_TRACK_PIXELS: u16 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

impl Insets {
    pub const fn all(v: u16) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }

    pub const fn xy(x: u16, y: u16) -> Self {
        Self {
            left: x,
            right: x,
            top: y,
            bottom: y,
        }
    }
}

impl Rect {
    pub fn inset(self, insets: Insets) -> Self {
        let x = self.x.saturating_add(insets.left);
        let y = self.y.saturating_add(insets.top);
        let w = self
            .w
            .saturating_sub(insets.left.saturating_add(insets.right));
        let h = self
            .h
            .saturating_sub(insets.top.saturating_add(insets.bottom));
        Rect::new(x, y, w, h)
    }

    pub fn intersect(self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        Rect::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1))
    }

    pub fn split_left(self, w: u16) -> (Rect, Rect) {
        let left_w = w.min(self.w);
        let left = Rect::new(self.x, self.y, left_w, self.h);
        let rest = Rect::new(
            self.x.saturating_add(left_w),
            self.y,
            self.w.saturating_sub(left_w),
            self.h,
        );
        (left, rest)
    }

    pub fn centered(self, w: u16, h: u16) -> Rect {
        let w = w.min(self.w);
        let h = h.min(self.h);
        let x = self.x.saturating_add(self.w.saturating_sub(w) / 2);
        let y = self.y.saturating_add(self.h.saturating_sub(h) / 2);
        Rect::new(x, y, w, h)
    }
}

/// A grid cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u16,
    pub column: u16,
}

impl Position {
    pub const fn new(row: u16, column: u16) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[row = {}, column = {}]", self.row, self.column)
    }
}

/// Pixel rectangle of a cell once its margins are removed.
///
/// Integer division only: when the window size is not a multiple of the track count, the
/// remainder pixels past the last row/column are simply not covered by any cell.
pub fn cell_rect(
    position: Position,
    rows: u16,
    columns: u16,
    width: u16,
    height: u16,
    v_margin: u16,
    h_margin: u16,
) -> Rect {
    let cell_w = width / columns.max(1);
    let cell_h = height / rows.max(1);
    let cell = Rect::new(
        position.column.saturating_mul(cell_w),
        position.row.saturating_mul(cell_h),
        cell_w,
        cell_h,
    );
    cell.inset(Insets::xy(h_margin, v_margin))
}

/// `[160, screen]` x `[120, screen]`; the screen wins when it is smaller than the minimum.
pub fn clamp_window_size(requested: Size, screen: Size) -> Size {
    Size::new(
        requested.w.max(MIN_WINDOW_WIDTH).min(screen.w),
        requested.h.max(MIN_WINDOW_HEIGHT).min(screen.h),
    )
}

/// Track count within `[1, pixels / 10]`, never zero.
pub fn clamp_tracks(requested: u16, pixels: u16) -> u16 {
    requested.max(1).min(pixels / MIN_TRACK_PIXELS).max(1)
}

/// Fixed rectangular grid laid over the window surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    size: Size,
    rows: u16,
    columns: u16,
    v_margin: u16,
    h_margin: u16,
}

impl Grid {
    pub fn new(size: Size, rows: u16, columns: u16) -> Self {
        Self {
            size,
            rows: clamp_tracks(rows, size.h),
            columns: clamp_tracks(columns, size.w),
            v_margin: 0,
            h_margin: 0,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn cell_size(&self) -> Size {
        Size::new(self.size.w / self.columns, self.size.h / self.rows)
    }

    /// `(vertical, horizontal)`.
    pub fn margins(&self) -> (u16, u16) {
        (self.v_margin, self.h_margin)
    }

    /// Stores margins clamped to half the cell height/width.
    pub fn set_margins(&mut self, vertical: u16, horizontal: u16) {
        let cell = self.cell_size();
        self.v_margin = vertical.min(cell.h / 2);
        self.h_margin = horizontal.min(cell.w / 2);
    }

    pub fn contains_row(&self, row: u16) -> bool {
        row < self.rows
    }

    pub fn contains_column(&self, column: u16) -> bool {
        column < self.columns
    }

    pub fn cell_rect(&self, position: Position) -> Rect {
        cell_rect(
            position,
            self.rows,
            self.columns,
            self.size.w,
            self.size.h,
            self.v_margin,
            self.h_margin,
        )
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/layout.rs"]
mod tests;
