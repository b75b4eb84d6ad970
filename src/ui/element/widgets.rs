use std::sync::Arc;

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::layout::Insets;
use crate::ui::core::painter::{BorderKind, Painter};
use crate::ui::core::style::{Color, Font, Style, TextAlign};
use crate::ui::core::text;
use crate::ui::image::Raster;
use crate::ui::registry::ElementKey;

const FIELD_BG: Color = Color::WHITE;
const BUTTON_BG: Color = Color::rgb(225, 225, 225);
const FRAME: Color = Color::rgb(122, 122, 122);
const FOCUS_FRAME: Color = Color::rgb(0, 120, 215);
const PADDING: u16 = 4;

/// String projection of a widget's state.
pub trait WidgetValue {
    fn value(&self) -> String;

    /// Returns `false` and leaves the state alone when `value` means nothing to this widget.
    fn set_value(&mut self, value: &str) -> bool;
}

/// What the widget needs from its element to paint itself.
#[derive(Clone, Copy, Debug)]
pub struct WidgetFrame<'a> {
    pub bounds: Rect,
    pub font: &'a Font,
    pub text_color: Color,
    pub focused: bool,
}

impl WidgetFrame<'_> {
    fn style(&self) -> Style {
        Style::default().fg(self.text_color)
    }

    /// Top edge of a single text line centred vertically in `rect`.
    fn baseline(&self, rect: Rect) -> u16 {
        let lh = text::line_height(self.font);
        rect.y.saturating_add(rect.h.saturating_sub(lh) / 2)
    }

    fn text(&self, p: &mut Painter, rect: Rect, s: &str, align: TextAlign) {
        if rect.is_empty() || s.is_empty() {
            return;
        }
        let shown = text::fit(s, self.font, rect.w);
        let w = text::text_width(shown, self.font);
        let x = match align {
            TextAlign::Left => rect.x,
            TextAlign::Center => rect.x.saturating_add(rect.w.saturating_sub(w) / 2),
            TextAlign::Right => rect.x.saturating_add(rect.w.saturating_sub(w)),
        };
        p.text_clipped(Pos::new(x, self.baseline(rect)), shown, self.style(), rect);
    }

    /// Square indicator box at the left edge plus the caption area to its right.
    fn indicator(&self) -> (Rect, Rect) {
        let side = self.font.size.min(self.bounds.h).min(self.bounds.w);
        let y = self
            .bounds
            .y
            .saturating_add(self.bounds.h.saturating_sub(side) / 2);
        let mark = Rect::new(self.bounds.x, y, side, side);
        let (_, rest) = self.bounds.split_left(side.saturating_add(PADDING));
        (mark, rest)
    }
}

fn boxed(p: &mut Painter, rect: Rect, fill: Color, frame: Color) {
    p.fill_rect(rect, fill);
    p.border(rect, Style::default().fg(frame), BorderKind::Plain);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub align: TextAlign,
}

impl WidgetValue for Label {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn set_value(&mut self, value: &str) -> bool {
        self.text = value.to_string();
        true
    }
}

impl Label {
    pub fn paint(&self, p: &mut Painter, frame: &WidgetFrame<'_>) {
        frame.text(p, frame.bounds, &self.text, self.align);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextField {
    pub text: String,
}

impl WidgetValue for TextField {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn set_value(&mut self, value: &str) -> bool {
        self.text = value.to_string();
        true
    }
}

impl TextField {
    pub fn insert_char(&mut self, ch: char) {
        self.text.push(ch);
    }

    pub fn delete_back(&mut self) -> bool {
        text::pop_grapheme(&mut self.text)
    }

    pub fn paint(&self, p: &mut Painter, frame: &WidgetFrame<'_>) {
        let outline = if frame.focused { FOCUS_FRAME } else { FRAME };
        boxed(p, frame.bounds, FIELD_BG, outline);

        let inner = frame.bounds.inset(Insets::xy(PADDING, 1));
        // Keep the tail visible: the caret sits at the end.
        let max_cols = usize::from(inner.w / text::advance(frame.font));
        let start = tail_start(&self.text, max_cols.saturating_sub(1));
        frame.text(p, inner, &self.text[start..], TextAlign::Left);

        if frame.focused && !inner.is_empty() {
            let caret_x = inner
                .x
                .saturating_add(text::text_width(&self.text[start..], frame.font))
                .min(inner.right().saturating_sub(1));
            let top = frame.baseline(inner);
            let bottom = top
                .saturating_add(text::line_height(frame.font))
                .min(inner.bottom().saturating_sub(1));
            p.line(
                Pos::new(caret_x, top),
                Pos::new(caret_x, bottom),
                frame.text_color,
            );
        }
    }
}

/// Byte offset where the last `max_cols` columns of `s` begin.
fn tail_start(s: &str, max_cols: usize) -> usize {
    let width = unicode_width::UnicodeWidthStr::width(s);
    if width <= max_cols {
        return 0;
    }
    let skip = width - max_cols;
    let mut used = 0usize;
    for (idx, ch) in s.char_indices() {
        if used >= skip {
            return idx;
        }
        used += unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
    }
    s.len()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dropdown {
    options: Vec<String>,
    selected: usize,
}

impl Dropdown {
    /// `options` is newline separated; an `initial` that is not an option selects the first one.
    pub fn new(options: &str, initial: &str) -> Self {
        let options: Vec<String> = options.split('\n').map(str::to_string).collect();
        let selected = options.iter().position(|o| o == initial).unwrap_or(0);
        Self { options, selected }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Advances to the next option, wrapping around.
    pub fn cycle(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn paint(&self, p: &mut Painter, frame: &WidgetFrame<'_>) {
        boxed(p, frame.bounds, FIELD_BG, FRAME);
        let arrow_w = text::advance(frame.font).saturating_add(PADDING * 2);
        let inner = frame.bounds.inset(Insets::xy(PADDING, 1));
        let (label, _) = inner.split_left(inner.w.saturating_sub(arrow_w));
        frame.text(p, label, &self.value(), TextAlign::Left);
        frame.text(p, inner, "▾", TextAlign::Right);
    }
}

impl WidgetValue for Dropdown {
    fn value(&self) -> String {
        self.options.get(self.selected).cloned().unwrap_or_default()
    }

    fn set_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o == value) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub caption: String,
    /// Pre-scaled icon shown left of the caption.
    pub icon: Option<Arc<Raster>>,
}

impl WidgetValue for Button {
    fn value(&self) -> String {
        self.caption.clone()
    }

    fn set_value(&mut self, value: &str) -> bool {
        self.caption = value.to_string();
        true
    }
}

impl Button {
    pub fn paint(&self, p: &mut Painter, frame: &WidgetFrame<'_>) {
        boxed(p, frame.bounds, BUTTON_BG, FRAME);
        let inner = frame.bounds.inset(Insets::all(1));

        let Some(icon) = &self.icon else {
            frame.text(p, inner, &self.caption, TextAlign::Center);
            return;
        };

        let icon_w = u16::try_from(icon.width()).unwrap_or(u16::MAX);
        let icon_h = u16::try_from(icon.height()).unwrap_or(u16::MAX);
        let caption_w = if self.caption.is_empty() {
            0
        } else {
            text::text_width(&self.caption, frame.font).saturating_add(PADDING)
        };
        let content = inner.centered(icon_w.saturating_add(caption_w), inner.h);
        let slot = Rect::new(content.x, content.y, icon_w.min(content.w), content.h);
        p.image(icon.clone(), slot.centered(icon_w, icon_h));

        let (_, rest) = content.split_left(icon_w.saturating_add(PADDING));
        frame.text(p, rest, &self.caption, TextAlign::Left);
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkbox {
    pub caption: String,
    pub checked: bool,
}

impl WidgetValue for Checkbox {
    fn value(&self) -> String {
        self.checked.to_string()
    }

    fn set_value(&mut self, value: &str) -> bool {
        match parse_flag(value) {
            Some(flag) => {
                self.checked = flag;
                true
            }
            None => false,
        }
    }
}

impl Checkbox {
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    pub fn paint(&self, p: &mut Painter, frame: &WidgetFrame<'_>) {
        let (mark, rest) = frame.indicator();
        boxed(p, mark, FIELD_BG, FRAME);
        if self.checked {
            let inner = mark.inset(Insets::all(mark.w / 4));
            p.line(
                Pos::new(inner.x, inner.center().y),
                Pos::new(inner.center().x, inner.bottom().saturating_sub(1)),
                frame.text_color,
            );
            p.line(
                Pos::new(inner.center().x, inner.bottom().saturating_sub(1)),
                Pos::new(inner.right().saturating_sub(1), inner.y),
                frame.text_color,
            );
        }
        frame.text(p, rest, &self.caption, TextAlign::Left);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadioButton {
    pub caption: String,
    pub selected: bool,
    pub group: ElementKey,
}

impl WidgetValue for RadioButton {
    fn value(&self) -> String {
        self.selected.to_string()
    }

    fn set_value(&mut self, value: &str) -> bool {
        match parse_flag(value) {
            Some(flag) => {
                self.selected = flag;
                true
            }
            None => false,
        }
    }
}

impl RadioButton {
    pub fn paint(&self, p: &mut Painter, frame: &WidgetFrame<'_>) {
        let (mark, rest) = frame.indicator();
        boxed(p, mark, FIELD_BG, FRAME);
        if self.selected {
            let dot = mark.inset(Insets::all(mark.w / 3));
            p.fill_rect(dot, frame.text_color);
        }
        frame.text(p, rest, &self.caption, TextAlign::Left);
    }
}

/// Mutual-exclusion domain over radio buttons; holds no cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RadioGroup {
    pub members: Vec<ElementKey>,
}
