//! Window controller.
//!
//! A `Window` lives on the dispatch thread. Frontends feed it native events through
//! [`Window::dispatch`]; other threads post through an [`EventSender`] and the frontend drains
//! those with [`Window::pump`]. The listener always runs on the dispatch thread, with mutable
//! access to the window.

use std::path::Path;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

use crate::core::error::{ErrorKind, WindowError};
use crate::core::event::{
    event_channel, key_text, EventSender, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, NativeEvent, WindowAction, WindowEvent,
};
use crate::settings::Settings;
use crate::ui::backend::Backend;
use crate::ui::canvas::Canvas;
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::Id;
use crate::ui::core::layout::{clamp_window_size, Grid};
use crate::ui::core::painter::Painter;
use crate::ui::core::runtime::{UiEvent, UiRuntime};
use crate::ui::core::style::Color;
use crate::ui::core::theme::Theme;
use crate::ui::core::tree::{Node, UiTree};
use crate::ui::element::{
    Button, Checkbox, ClickOutcome, Dropdown, Element, ElementKind, Label, Position,
    RadioButton, TextAlign, TextField, Widget,
};
use crate::ui::image::{FsImageLoader, ImageCache, ImageLoader, Raster};
use crate::ui::registry::{ElementKey, ElementTable};
use crate::ui::timer::{millis, Clock, PeriodicTimer, SystemClock};

pub type Listener = Box<dyn FnMut(&mut Window, &WindowEvent)>;

/// Space kept free around a button icon, in pixels.
const ICON_PADDING: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowOptions {
    pub title: String,
    pub width: u16,
    pub height: u16,
    pub columns: u16,
    pub rows: u16,
    /// Bounds the window size.
    pub screen: Size,
    pub theme: Theme,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            width: 640,
            height: 480,
            columns: 5,
            rows: 10,
            screen: Size::new(1920, 1080),
            theme: Theme::default(),
        }
    }
}

impl WindowOptions {
    pub fn new(title: impl Into<String>, width: u16, height: u16, columns: u16, rows: u16) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            columns,
            rows,
            ..Self::default()
        }
    }

    /// Single-cell window, used as a plain drawing surface.
    pub fn canvas(title: impl Into<String>, width: u16, height: u16) -> Self {
        Self::new(title, width, height, 1, 1)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let w = &settings.window;
        Self {
            title: w.title.clone(),
            width: w.width,
            height: w.height,
            columns: w.columns,
            rows: w.rows,
            screen: Size::new(w.screen_width, w.screen_height),
            theme: Theme::from_settings(&settings.theme),
        }
    }

    pub fn with_screen(mut self, screen: Size) -> Self {
        self.screen = screen;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

#[track_caller]
fn lift<T>(result: Result<T, ErrorKind>) -> Result<T, WindowError> {
    match result {
        Ok(v) => Ok(v),
        Err(kind) => Err(WindowError::new(kind)),
    }
}

pub struct Window {
    title: String,
    grid: Grid,
    table: ElementTable,
    theme: Theme,
    listener: Option<Listener>,
    listener_generation: u64,
    in_listener: bool,
    canvas: Arc<Canvas>,
    images: ImageCache,
    clock: Arc<dyn Clock>,
    timer: Option<PeriodicTimer>,
    events_tx: EventSender,
    events_rx: Receiver<NativeEvent>,
    tree: UiTree,
    pointer: UiRuntime,
    focus: Option<ElementKey>,
    visible: bool,
    closed: bool,
    dirty: bool,
}

impl Window {
    pub fn new(options: WindowOptions) -> Self {
        Self::with_parts(
            options,
            Arc::new(SystemClock::new()),
            Box::new(FsImageLoader),
        )
    }

    /// Window with an explicit time source and image loader.
    pub fn with_parts(
        options: WindowOptions,
        clock: Arc<dyn Clock>,
        loader: Box<dyn ImageLoader>,
    ) -> Self {
        let size = clamp_window_size(Size::new(options.width, options.height), options.screen);
        let grid = Grid::new(size, options.rows, options.columns);
        let (events_tx, events_rx) = event_channel();
        tracing::info!(
            title = %options.title,
            width = size.w,
            height = size.h,
            rows = grid.rows(),
            columns = grid.columns(),
            "window created"
        );
        Self {
            title: options.title,
            grid,
            table: ElementTable::new(),
            theme: options.theme,
            listener: None,
            listener_generation: 0,
            in_listener: false,
            canvas: Arc::new(Canvas::new()),
            images: ImageCache::new(loader),
            clock,
            timer: None,
            events_tx,
            events_rx,
            tree: UiTree::new(),
            pointer: UiRuntime::new(),
            focus: None,
            visible: false,
            closed: false,
            dirty: true,
        }
    }

    // ---- elements ----

    #[track_caller]
    fn place(&self, name: &str, row: u16, column: u16) -> Result<(Position, Rect), WindowError> {
        lift(self.table.check_name(name))?;
        if !self.grid.contains_row(row) {
            return Err(WindowError::new(ErrorKind::RowOutOfRange {
                row,
                rows: self.grid.rows(),
            }));
        }
        if !self.grid.contains_column(column) {
            return Err(WindowError::new(ErrorKind::ColumnOutOfRange {
                column,
                columns: self.grid.columns(),
            }));
        }
        let position = Position::new(row, column);
        lift(self.table.check_position(position))?;
        Ok((position, self.grid.cell_rect(position)))
    }

    fn new_element(
        &self,
        name: &str,
        position: Position,
        bounds: Rect,
        widget: Widget,
    ) -> Element {
        Element::new(
            name,
            Some(position),
            bounds,
            self.theme.font.clone(),
            self.theme.text_color,
            widget,
        )
    }

    fn after_insert(&mut self, name: &str, kind: ElementKind) {
        if self.visible {
            tracing::warn!(%name, "element added after show(); layout may not reflow");
        }
        tracing::debug!(%name, %kind, "element added");
        self.rebuild_tree();
        self.dirty = true;
    }

    #[track_caller]
    fn add(&mut self, name: &str, row: u16, column: u16, widget: Widget) -> Result<(), WindowError> {
        let (position, bounds) = self.place(name, row, column)?;
        let kind = widget.kind();
        let element = self.new_element(name, position, bounds, widget);
        lift(self.table.insert(element))?;
        self.after_insert(name, kind);
        Ok(())
    }

    #[track_caller]
    pub fn add_label(&mut self, name: &str, text: &str, row: u16, column: u16) -> Result<(), WindowError> {
        self.add_label_aligned(name, text, TextAlign::Left, row, column)
    }

    #[track_caller]
    pub fn add_label_aligned(
        &mut self,
        name: &str,
        text: &str,
        align: TextAlign,
        row: u16,
        column: u16,
    ) -> Result<(), WindowError> {
        let widget = Widget::Label(Label {
            text: text.to_string(),
            align,
        });
        self.add(name, row, column, widget)
    }

    #[track_caller]
    pub fn add_text_field(&mut self, name: &str, text: &str, row: u16, column: u16) -> Result<(), WindowError> {
        let widget = Widget::TextField(TextField {
            text: text.to_string(),
        });
        self.add(name, row, column, widget)
    }

    /// `options` is newline separated.
    #[track_caller]
    pub fn add_dropdown(
        &mut self,
        name: &str,
        options: &str,
        selected: &str,
        row: u16,
        column: u16,
    ) -> Result<(), WindowError> {
        let widget = Widget::Dropdown(Dropdown::new(options, selected));
        self.add(name, row, column, widget)
    }

    #[track_caller]
    pub fn add_button(&mut self, name: &str, caption: &str, row: u16, column: u16) -> Result<(), WindowError> {
        let widget = Widget::Button(Button {
            caption: caption.to_string(),
            icon: None,
        });
        self.add(name, row, column, widget)
    }

    /// Button with an icon scaled uniformly to fit its cell.
    #[track_caller]
    pub fn add_button_with_image(
        &mut self,
        name: &str,
        caption: &str,
        image: impl AsRef<Path>,
        row: u16,
        column: u16,
    ) -> Result<(), WindowError> {
        let (position, bounds) = self.place(name, row, column)?;
        let raster = self.load_image(image.as_ref())?;
        let icon = self.fit_icon(&raster);
        let widget = Widget::Button(Button {
            caption: caption.to_string(),
            icon: Some(Arc::new(icon)),
        });
        let element = self.new_element(name, position, bounds, widget);
        lift(self.table.insert(element))?;
        self.after_insert(name, ElementKind::Button);
        Ok(())
    }

    fn fit_icon(&self, raster: &Raster) -> Raster {
        let cell = self.grid.cell_size();
        let (v_margin, h_margin) = self.grid.margins();
        let room_w = f64::from(cell.w) - f64::from(h_margin) - ICON_PADDING;
        let room_h = f64::from(cell.h) - f64::from(v_margin) - ICON_PADDING;
        let img_w = f64::from(raster.width().max(1));
        let img_h = f64::from(raster.height().max(1));
        let ratio = (room_w / img_w).min(room_h / img_h).max(0.0);
        let w = (img_w * ratio).round() as u32;
        let h = (img_h * ratio).round() as u32;
        raster.scaled(w, h)
    }

    #[track_caller]
    pub fn add_checkbox(
        &mut self,
        name: &str,
        caption: &str,
        checked: bool,
        row: u16,
        column: u16,
    ) -> Result<(), WindowError> {
        let widget = Widget::Checkbox(Checkbox {
            caption: caption.to_string(),
            checked,
        });
        self.add(name, row, column, widget)
    }

    /// Adds a radio button to `group`, creating the group when it does not exist yet.
    #[track_caller]
    pub fn add_radio_button(
        &mut self,
        group: &str,
        name: &str,
        caption: &str,
        selected: bool,
        row: u16,
        column: u16,
    ) -> Result<(), WindowError> {
        let (position, bounds) = self.place(name, row, column)?;
        let widget = Widget::RadioButton(RadioButton {
            caption: caption.to_string(),
            selected,
            group: ElementKey::default(),
        });
        let element = self.new_element(name, position, bounds, widget);
        lift(self.table.insert_radio(group, element))?;
        self.after_insert(name, ElementKind::RadioButton);
        Ok(())
    }

    // ---- values ----

    #[track_caller]
    fn key(&self, name: &str) -> Result<ElementKey, WindowError> {
        match self.table.key(name) {
            Some(key) => Ok(key),
            None => Err(WindowError::new(ErrorKind::UnknownElement {
                name: name.to_string(),
            })),
        }
    }

    /// Current value; `None` only for a radio group without a selection.
    #[track_caller]
    pub fn value(&self, name: &str) -> Result<Option<String>, WindowError> {
        let key = self.key(name)?;
        Ok(self.table.value(key))
    }

    /// Values a widget cannot interpret are ignored.
    #[track_caller]
    pub fn set_value(&mut self, name: &str, value: &str) -> Result<(), WindowError> {
        let key = self.key(name)?;
        if self.table.set_value(key, value) {
            self.dirty = true;
        } else {
            tracing::debug!(%name, %value, "value ignored");
        }
        Ok(())
    }

    // ---- listener & timer ----

    /// Replaces the listener.
    pub fn set_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&mut Window, &WindowEvent) + 'static,
    {
        self.listener = Some(Box::new(listener));
        self.listener_generation = self.listener_generation.wrapping_add(1);
    }

    /// Replaces the listener and starts a periodic `Timer` event every `interval_ms`.
    ///
    /// Only one timer may run per window; a second registration is rejected and leaves the
    /// current listener and timer in place.
    #[track_caller]
    pub fn set_listener_with_interval<F>(&mut self, listener: F, interval_ms: u64) -> Result<(), WindowError>
    where
        F: FnMut(&mut Window, &WindowEvent) + 'static,
    {
        if interval_ms == 0 {
            return Err(WindowError::new(ErrorKind::InvalidInterval));
        }
        if self.timer.as_ref().is_some_and(PeriodicTimer::is_running) {
            return Err(WindowError::new(ErrorKind::TimerAlreadyRunning));
        }
        if self.closed {
            tracing::warn!("window is closed; timer not started");
            self.set_listener(listener);
            return Ok(());
        }
        let timer = match PeriodicTimer::spawn(
            self.clock.clone(),
            Duration::from_millis(interval_ms),
            self.events_tx.clone(),
        ) {
            Ok(timer) => timer,
            Err(e) => {
                return Err(WindowError::new(ErrorKind::TimerUnavailable {
                    reason: e.to_string(),
                }))
            }
        };
        self.timer = Some(timer);
        self.set_listener(listener);
        Ok(())
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    pub fn timer_running(&self) -> bool {
        self.timer.as_ref().is_some_and(PeriodicTimer::is_running)
    }

    /// Handle for posting events from other threads.
    pub fn event_sender(&self) -> EventSender {
        self.events_tx.clone()
    }

    // ---- layout & styling ----

    pub fn set_margin(&mut self, margin: u16) {
        self.set_margins(margin, margin);
    }

    /// Margins are clamped to half the cell height/width; placed elements move accordingly.
    pub fn set_margins(&mut self, vertical: u16, horizontal: u16) {
        self.grid.set_margins(vertical, horizontal);
        if self.visible {
            tracing::warn!("margins changed after show(); layout may not reflow");
        }
        let grid = self.grid;
        for element in self.table.elements_mut() {
            if let Some(position) = element.position() {
                element.reposition(grid.cell_rect(position));
            }
        }
        self.rebuild_tree();
        self.dirty = true;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.theme.text_color = color;
        for element in self.table.elements_mut() {
            element.set_text_color(color);
        }
        self.dirty = true;
    }

    pub fn set_text_size(&mut self, size: u16) {
        self.theme.font = self.theme.font.with_size(size);
        let font = self.theme.font.clone();
        for element in self.table.elements_mut() {
            element.set_font(font.clone());
        }
        self.dirty = true;
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.theme.background = color;
        self.dirty = true;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.dirty = true;
    }

    // ---- lifecycle ----

    pub fn show(&mut self) {
        if self.closed {
            tracing::warn!(title = %self.title, "show() on a closed window");
            return;
        }
        self.rebuild_tree();
        self.visible = true;
        self.dirty = true;
        tracing::info!(title = %self.title, elements = self.table.len(), "window shown");
    }

    /// Stops the timer (joining its thread), then closes. Pending events are dropped.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        self.closed = true;
        self.visible = false;
        self.focus = None;
        self.pointer.reset_pointer_state();
        let dropped = self.events_rx.try_iter().count();
        tracing::info!(title = %self.title, dropped, "window closed");
    }

    // ---- canvas ----

    pub fn canvas(&self) -> Arc<Canvas> {
        self.canvas.clone()
    }

    pub fn clear_drawing(&self) {
        self.canvas.clear();
    }

    #[track_caller]
    fn load_image(&mut self, path: &Path) -> Result<Arc<Raster>, WindowError> {
        match self.images.get(path) {
            Ok(image) => Ok(image),
            Err(e) => {
                tracing::debug!(error = %e, "image load failed");
                Err(WindowError::new(ErrorKind::FileNotFound {
                    path: e.path().to_path_buf(),
                }))
            }
        }
    }

    /// Queues an image at its natural size; shown after `draw_images`.
    #[track_caller]
    pub fn prepare_image(&mut self, path: impl AsRef<Path>, x: u16, y: u16) -> Result<(), WindowError> {
        let image = self.load_image(path.as_ref())?;
        self.canvas.prepare_image(image, Pos::new(x, y), None);
        Ok(())
    }

    /// Like `prepare_image`, stretched to `width`x`height` when both are positive.
    #[track_caller]
    pub fn prepare_image_scaled(
        &mut self,
        path: impl AsRef<Path>,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    ) -> Result<(), WindowError> {
        let image = self.load_image(path.as_ref())?;
        let size = (width > 0 && height > 0).then(|| Size::new(width, height));
        self.canvas.prepare_image(image, Pos::new(x, y), size);
        Ok(())
    }

    pub fn draw_images(&self) {
        self.canvas.draw_images();
    }

    pub fn draw_line(&self, x1: u16, y1: u16, x2: u16, y2: u16) {
        self.draw_line_colored(x1, y1, x2, y2, Color::BLACK);
    }

    pub fn draw_line_colored(&self, x1: u16, y1: u16, x2: u16, y2: u16, color: Color) {
        self.canvas
            .draw_line(Pos::new(x1, y1), Pos::new(x2, y2), color);
    }

    pub fn draw_rectangle(&self, x: u16, y: u16, width: u16, height: u16) {
        self.draw_rectangle_colored(x, y, width, height, Color::BLACK);
    }

    pub fn draw_rectangle_colored(&self, x: u16, y: u16, width: u16, height: u16, color: Color) {
        self.canvas
            .draw_rectangle(Pos::new(x, y), width, height, color);
    }

    // ---- introspection ----

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> Size {
        self.grid.size()
    }

    pub fn rows(&self) -> u16 {
        self.grid.rows()
    }

    pub fn columns(&self) -> u16 {
        self.grid.columns()
    }

    pub fn cell_size(&self) -> Size {
        self.grid.cell_size()
    }

    /// `(vertical, horizontal)`.
    pub fn margins(&self) -> (u16, u16) {
        self.grid.margins()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn element(&self, name: &str) -> Option<&Element> {
        self.table.by_name(name)
    }

    pub fn element_bounds(&self, name: &str) -> Option<Rect> {
        self.table
            .by_name(name)
            .filter(|e| e.position().is_some())
            .map(Element::bounds)
    }

    pub fn element_at(&self, position: Position) -> Option<&Element> {
        self.table.at(position)
    }

    /// Elements in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.table.iter().map(|(_, e)| e)
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus
            .and_then(|k| self.table.get(k))
            .map(Element::name)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Time since construction, on the window clock.
    pub fn elapsed(&self) -> Duration {
        self.clock.now()
    }

    // ---- event translation ----

    /// Handles one native event on the dispatch thread.
    ///
    /// Called from inside the listener, the event is queued and delivered by the next
    /// [`Window::pump`].
    pub fn dispatch(&mut self, event: NativeEvent) {
        if self.closed {
            return;
        }
        if self.in_listener {
            tracing::trace!(?event, "re-entrant dispatch queued");
            self.events_tx.post(event);
            return;
        }
        match event {
            NativeEvent::Key(key) => self.on_key(key),
            NativeEvent::Mouse(mouse) => self.on_mouse(mouse),
            NativeEvent::Action { widget } => self.on_action(widget),
            NativeEvent::Tick { elapsed_ms } => self.emit(WindowEvent::new(
                None,
                WindowAction::Timer,
                Some(elapsed_ms.to_string()),
            )),
            NativeEvent::CloseRequested => self.close(),
        }
    }

    /// Dispatches every event posted so far. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        if self.in_listener {
            return 0;
        }
        let mut handled = 0;
        while !self.closed {
            let Ok(event) = self.events_rx.try_recv() else {
                break;
            };
            self.dispatch(event);
            handled += 1;
        }
        handled
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if let Some(focus) = self.focus {
            let typing = !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT);
            if let Some(Widget::TextField(field)) =
                self.table.get_mut(focus).map(Element::widget_mut)
            {
                match key.code {
                    KeyCode::Char(ch) if typing => {
                        field.insert_char(ch);
                        self.dirty = true;
                    }
                    KeyCode::Backspace => {
                        self.dirty |= field.delete_back();
                    }
                    KeyCode::Esc => {
                        self.focus = None;
                        self.dirty = true;
                    }
                    _ => {}
                }
            }
        }
        self.emit(WindowEvent::new(
            None,
            WindowAction::KeyPress,
            Some(key_text(key.code)),
        ));
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        let Some(ui_event) = self.pointer.on_mouse(&mouse, &self.tree) else {
            return;
        };
        match ui_event {
            UiEvent::Click { id, button, .. } => self.on_widget_click(id, button),
            UiEvent::CanvasClick { button, pos } => {
                let action = match button {
                    MouseButton::Right => WindowAction::RightClick,
                    MouseButton::Left | MouseButton::Middle => WindowAction::LeftClick,
                };
                self.emit(WindowEvent::new(
                    None,
                    action,
                    Some(format!("{},{}", pos.x, pos.y)),
                ));
            }
        }
    }

    fn on_widget_click(&mut self, id: Id, button: MouseButton) {
        let Some(key) = self.table.owner_of(id) else {
            tracing::debug!(?id, "click on unknown widget");
            return;
        };
        if button != MouseButton::Left {
            return;
        }
        let Some(outcome) = self
            .table
            .get_mut(key)
            .map(|e| e.widget_mut().on_primary_click())
        else {
            return;
        };
        self.dirty = true;
        match outcome {
            ClickOutcome::Focused => self.focus = Some(key),
            ClickOutcome::Selected => {
                self.focus = None;
                self.table.select_radio(key);
            }
            ClickOutcome::Changed | ClickOutcome::Ignored => self.focus = None,
            ClickOutcome::Activated => {
                self.focus = None;
                self.emit_button_click(key);
            }
        }
    }

    fn on_action(&mut self, widget: Id) {
        match self.table.owner_of(widget) {
            Some(key) => self.emit_button_click(key),
            None => tracing::debug!(?widget, "action from unknown widget"),
        }
    }

    fn emit_button_click(&mut self, key: ElementKey) {
        let Some(name) = self.table.get(key).map(|e| e.name().to_string()) else {
            return;
        };
        let payload = self.table.value(key);
        self.emit(WindowEvent::new(
            Some(name),
            WindowAction::ButtonClick,
            payload,
        ));
    }

    fn emit(&mut self, event: WindowEvent) {
        let Some(mut listener) = self.listener.take() else {
            tracing::trace!(action = %event.action, "no listener");
            return;
        };
        let generation = self.listener_generation;
        self.in_listener = true;
        listener(self, &event);
        self.in_listener = false;
        // Keep the listener unless it registered a replacement while running.
        if self.listener_generation == generation {
            self.listener = Some(listener);
        }
    }

    // ---- painting ----

    fn rebuild_tree(&mut self) {
        self.tree.clear();
        for (_, element) in self.table.iter() {
            if element.position().is_none() {
                continue;
            }
            self.tree.push(Node::new(
                element.id(),
                element.bounds(),
                element.widget().sense(),
            ));
        }
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty || self.canvas.needs_repaint()
    }

    /// Background, canvas primitives, then widgets on top.
    pub fn paint(&self, painter: &mut Painter) {
        let area = Rect::from_size(self.grid.size());
        painter.fill_rect(area, self.theme.background);
        self.canvas.paint(painter, area);
        for (key, element) in self.table.iter() {
            element.paint(painter, self.focus == Some(key));
        }
    }

    pub fn render(&mut self, backend: &mut dyn Backend) {
        let mut painter = Painter::new();
        self.paint(&mut painter);
        backend.draw(Rect::from_size(self.grid.size()), painter.cmds());
        self.dirty = false;
        self.canvas.take_repaint();
        tracing::trace!(cmds = painter.cmds().len(), "window rendered");
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("title", &self.title)
            .field("grid", &self.grid)
            .field("elements", &self.table.len())
            .field("visible", &self.visible)
            .field("closed", &self.closed)
            .field("timer", &self.timer.as_ref().map(|t| millis(t.interval())))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/window.rs"]
mod tests;
