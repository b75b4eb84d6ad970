//! Draw surface underneath the widgets.
//!
//! Each primitive kind keeps a working list that producers append to and a published snapshot
//! that painting reads. Publishing swaps in a fresh `Arc<[T]>`, so a snapshot already handed to
//! a painter is never touched again.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Color;
use crate::ui::image::Raster;

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedImage {
    pub image: Arc<Raster>,
    pub pos: Pos,
    /// Target size; the image's own size when absent.
    pub size: Option<Size>,
}

impl PlacedImage {
    pub fn rect(&self) -> Rect {
        let size = self.size.unwrap_or_else(|| {
            Size::new(
                u16::try_from(self.image.width()).unwrap_or(u16::MAX),
                u16::try_from(self.image.height()).unwrap_or(u16::MAX),
            )
        });
        Rect::new(self.pos.x, self.pos.y, size.w, size.h)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub color: Color,
    pub from: Pos,
    pub to: Pos,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilledRect {
    pub color: Color,
    pub pos: Pos,
    pub width: u16,
    pub height: u16,
}

impl FilledRect {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

#[derive(Debug)]
struct Layer<T> {
    working: Mutex<Vec<T>>,
    published: RwLock<Arc<[T]>>,
}

impl<T: Clone> Layer<T> {
    fn new() -> Self {
        Self {
            working: Mutex::new(Vec::new()),
            published: RwLock::new(Arc::from(Vec::new())),
        }
    }

    fn push(&self, item: T) {
        self.working
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item);
    }

    /// Caller holds `working`. Lock order is `working` then `published`.
    fn publish_locked(&self, working: &[T]) {
        let fresh: Arc<[T]> = Arc::from(working);
        *self
            .published
            .write()
            .unwrap_or_else(PoisonError::into_inner) = fresh;
    }

    fn publish(&self) {
        let working = self.working.lock().unwrap_or_else(PoisonError::into_inner);
        self.publish_locked(&working);
    }

    fn push_and_publish(&self, item: T) {
        let mut working = self.working.lock().unwrap_or_else(PoisonError::into_inner);
        working.push(item);
        self.publish_locked(&working);
    }

    fn snapshot(&self) -> Arc<[T]> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear(&self) {
        self.working
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn pending(&self) -> usize {
        self.working
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Shared through `Arc<Canvas>`; every method takes `&self`.
#[derive(Debug)]
pub struct Canvas {
    images: Layer<PlacedImage>,
    lines: Layer<Line>,
    rects: Layer<FilledRect>,
    repaint: AtomicBool,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            images: Layer::new(),
            lines: Layer::new(),
            rects: Layer::new(),
            repaint: AtomicBool::new(false),
        }
    }

    /// Queues an image; it becomes visible with the next `draw_images`.
    pub fn prepare_image(&self, image: Arc<Raster>, pos: Pos, size: Option<Size>) {
        self.images.push(PlacedImage { image, pos, size });
    }

    pub fn draw_images(&self) {
        self.images.publish();
        self.request_repaint();
    }

    pub fn draw_line(&self, from: Pos, to: Pos, color: Color) {
        self.lines.push_and_publish(Line { color, from, to });
        self.request_repaint();
    }

    pub fn draw_rectangle(&self, pos: Pos, width: u16, height: u16, color: Color) {
        self.rects.push_and_publish(FilledRect {
            color,
            pos,
            width,
            height,
        });
        self.request_repaint();
    }

    /// Empties the working lists. What is on screen stays until the next publish.
    pub fn clear(&self) {
        self.images.clear();
        self.lines.clear();
        self.rects.clear();
    }

    pub fn images(&self) -> Arc<[PlacedImage]> {
        self.images.snapshot()
    }

    pub fn lines(&self) -> Arc<[Line]> {
        self.lines.snapshot()
    }

    pub fn rects(&self) -> Arc<[FilledRect]> {
        self.rects.snapshot()
    }

    /// Number of queued (working) primitives per layer: `(images, lines, rects)`.
    pub fn pending(&self) -> (usize, usize, usize) {
        (
            self.images.pending(),
            self.lines.pending(),
            self.rects.pending(),
        )
    }

    pub fn request_repaint(&self) {
        self.repaint.store(true, Ordering::Release);
    }

    pub fn needs_repaint(&self) -> bool {
        self.repaint.load(Ordering::Acquire)
    }

    /// Returns and resets the repaint flag.
    pub fn take_repaint(&self) -> bool {
        self.repaint.swap(false, Ordering::AcqRel)
    }

    /// Emits the published primitives: images, then lines, then rectangles.
    pub fn paint(&self, painter: &mut Painter, clip: Rect) {
        for placed in self.images().iter() {
            let rect = placed.rect();
            if rect.intersect(clip).is_empty() {
                continue;
            }
            painter.image(placed.image.clone(), rect);
        }
        for line in self.lines().iter() {
            painter.line(line.from, line.to, line.color);
        }
        for filled in self.rects().iter() {
            let rect = filled.rect().intersect(clip);
            if rect.is_empty() {
                continue;
            }
            painter.fill_rect(rect, filled.color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/canvas.rs"]
mod tests;
