//! Named elements placed on the window grid.
//!
//! An element owns exactly one widget. The set of widget kinds is closed, so dispatch is a plain
//! `match` over [`Widget`] rather than a trait object.

use std::fmt;

mod widgets;

pub use crate::ui::core::layout::Position;
pub use crate::ui::core::style::TextAlign;
pub use widgets::{
    Button, Checkbox, Dropdown, Label, RadioButton, RadioGroup, TextField, WidgetFrame,
    WidgetValue,
};

use crate::ui::core::geom::Rect;
use crate::ui::core::id::{element_id, Id};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Color, Font};
use crate::ui::core::tree::Sense;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Label,
    TextField,
    Dropdown,
    Button,
    Checkbox,
    RadioButton,
    RadioGroup,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Label => "label",
            ElementKind::TextField => "text field",
            ElementKind::Dropdown => "dropdown",
            ElementKind::Button => "button",
            ElementKind::Checkbox => "checkbox",
            ElementKind::RadioButton => "radio button",
            ElementKind::RadioGroup => "radio group",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Widget {
    Label(Label),
    TextField(TextField),
    Dropdown(Dropdown),
    Button(Button),
    Checkbox(Checkbox),
    RadioButton(RadioButton),
    RadioGroup(RadioGroup),
}

/// Result of a primary click on a widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Raise `ButtonClick`.
    Activated,
    /// State changed locally (toggle, cycle); no event.
    Changed,
    /// A radio button became selected; its siblings must be cleared.
    Selected,
    Focused,
    Ignored,
}

impl Widget {
    pub fn kind(&self) -> ElementKind {
        match self {
            Widget::Label(_) => ElementKind::Label,
            Widget::TextField(_) => ElementKind::TextField,
            Widget::Dropdown(_) => ElementKind::Dropdown,
            Widget::Button(_) => ElementKind::Button,
            Widget::Checkbox(_) => ElementKind::Checkbox,
            Widget::RadioButton(_) => ElementKind::RadioButton,
            Widget::RadioGroup(_) => ElementKind::RadioGroup,
        }
    }

    fn as_value(&self) -> Option<&dyn WidgetValue> {
        match self {
            Widget::Label(w) => Some(w),
            Widget::TextField(w) => Some(w),
            Widget::Dropdown(w) => Some(w),
            Widget::Button(w) => Some(w),
            Widget::Checkbox(w) => Some(w),
            Widget::RadioButton(w) => Some(w),
            Widget::RadioGroup(_) => None,
        }
    }

    fn as_value_mut(&mut self) -> Option<&mut dyn WidgetValue> {
        match self {
            Widget::Label(w) => Some(w),
            Widget::TextField(w) => Some(w),
            Widget::Dropdown(w) => Some(w),
            Widget::Button(w) => Some(w),
            Widget::Checkbox(w) => Some(w),
            Widget::RadioButton(w) => Some(w),
            Widget::RadioGroup(_) => None,
        }
    }

    /// Hit senses of the widget; labels let clicks through to the canvas.
    pub fn sense(&self) -> Sense {
        match self {
            Widget::Label(_) | Widget::RadioGroup(_) => Sense::NONE,
            Widget::TextField(_) => Sense::CLICK | Sense::CONTEXT_MENU | Sense::FOCUS,
            Widget::Dropdown(_) | Widget::Button(_) | Widget::Checkbox(_) | Widget::RadioButton(_) => {
                Sense::CLICK | Sense::CONTEXT_MENU
            }
        }
    }

    pub fn on_primary_click(&mut self) -> ClickOutcome {
        match self {
            Widget::Button(_) => ClickOutcome::Activated,
            Widget::Checkbox(c) => {
                c.toggle();
                ClickOutcome::Changed
            }
            Widget::Dropdown(d) => {
                d.cycle();
                ClickOutcome::Changed
            }
            Widget::RadioButton(r) => {
                r.selected = true;
                ClickOutcome::Selected
            }
            Widget::TextField(_) => ClickOutcome::Focused,
            Widget::Label(_) | Widget::RadioGroup(_) => ClickOutcome::Ignored,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    name: String,
    id: Id,
    position: Option<Position>,
    bounds: Rect,
    font: Font,
    text_color: Color,
    widget: Widget,
}

impl Element {
    pub fn new(
        name: impl Into<String>,
        position: Option<Position>,
        bounds: Rect,
        font: Font,
        text_color: Color,
        widget: Widget,
    ) -> Self {
        let name = name.into();
        Self {
            id: element_id(&name),
            name,
            position,
            bounds,
            font,
            text_color,
            widget,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.widget.kind()
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut Widget {
        &mut self.widget
    }

    /// Own value of the widget. Radio groups have none here; the table resolves them.
    pub fn value(&self) -> Option<String> {
        self.widget.as_value().map(|w| w.value())
    }

    /// `false` when the value was not understood and nothing changed.
    pub fn set_value(&mut self, value: &str) -> bool {
        self.widget
            .as_value_mut()
            .map(|w| w.set_value(value))
            .unwrap_or(false)
    }

    pub fn reposition(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Identity check against a native widget handle.
    pub fn owns(&self, id: Id) -> bool {
        self.widget.kind() != ElementKind::RadioGroup && self.id == id
    }

    pub fn paint(&self, painter: &mut Painter, focused: bool) {
        let frame = WidgetFrame {
            bounds: self.bounds,
            font: &self.font,
            text_color: self.text_color,
            focused,
        };
        match &self.widget {
            Widget::Label(w) => w.paint(painter, &frame),
            Widget::TextField(w) => w.paint(painter, &frame),
            Widget::Dropdown(w) => w.paint(painter, &frame),
            Widget::Button(w) => w.paint(painter, &frame),
            Widget::Checkbox(w) => w.paint(painter, &frame),
            Widget::RadioButton(w) => w.paint(painter, &frame),
            Widget::RadioGroup(_) => {}
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/element.rs"]
mod tests;
