//! Paged view with a synchronized button bar.
//!
//! A [`PageView`] stacks a button bar on top of a horizontally paging scroll
//! host. Each page has a button (and, with [`ButtonBarStyle::WithLabel`], a
//! caption); a selection indicator slides along the bar as the pages scroll.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │  ( 1 )  [ 2 ]  ( 3 )          [sw]   │ ← button bar (indicator under 2)
//! ├──────────────────────────────────────┤
//! │                                      │
//! │              page 2                  │ ← page host, one viewport per page
//! │                                      │
//! └──────────────────────────────────────┘
//! ```
//!
//! Content comes from a [`ContentProvider`], styling and notifications go
//! through a [`BehaviorProvider`]. Both are held weakly: the host application
//! owns them, and a provider that is gone simply stops answering.
//!
//! The whole child tree is rebuilt on every [`PageView::reload`]; there is no
//! incremental update.

mod config;
mod error;
mod geometry;
mod provider;
mod style;
mod sync;


pub use config::PageViewConfig;
pub use error::PageViewError;
pub use geometry::{compute_layout, page_frames, BarGeometry};
pub use provider::{BehaviorProvider, ContentProvider};
pub use style::ButtonBarStyle;

use std::rc::{Rc, Weak};

use crate::constants::MAX_PAGES;
use crate::event::{Event, MouseButton};
use crate::layout::{Point, Rectangle, Size};
use crate::renderer::{Color, Renderer, TextAlign};
use crate::widget::Widget;
use crate::widgets::{
    BarButton, ButtonId, Label, PageHost, ScrollPhase, SelectionIndicator, Switch,
};

/// What the current press started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressTarget {
    Button(ButtonId),
    Switch,
    Host,
}

/// Paged view control.
pub struct PageView<M> {
    /// Own size; the position comes from the bounds given when drawing
    size: Size,
    config: PageViewConfig,
    content: Option<Weak<dyn ContentProvider<M>>>,
    behavior: Option<Weak<dyn BehaviorProvider>>,
    attached: bool,
    selected_index: usize,

    // Children, rebuilt by `reload`
    host: PageHost<M>,
    bar_frame: Rectangle,
    bar_color: Color,
    geometry: Option<BarGeometry>,
    buttons: Vec<BarButton>,
    labels: Vec<Label>,
    indicator: Option<SelectionIndicator>,
    control_switch: Option<Switch>,
    pressed: Option<PressTarget>,
}

impl<M> PageView<M> {
    /// Create an empty, unattached page view of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            config: PageViewConfig::default(),
            content: None,
            behavior: None,
            attached: false,
            selected_index: 0,
            host: PageHost::new(Rectangle::ZERO),
            bar_frame: Rectangle::ZERO,
            bar_color: Color::BLACK,
            geometry: None,
            buttons: Vec::new(),
            labels: Vec::new(),
            indicator: None,
            control_switch: None,
            pressed: None,
        }
    }

    /// Set the bar style
    pub fn style(mut self, style: ButtonBarStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Replace all properties
    pub fn config(mut self, config: PageViewConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the content provider. Only a weak reference is kept.
    pub fn with_content_provider<P>(mut self, provider: &Rc<P>) -> Self
    where
        P: ContentProvider<M> + 'static,
    {
        self.set_content_provider(provider);
        self
    }

    /// Set the behavior provider. Only a weak reference is kept.
    pub fn with_behavior_provider<P>(mut self, provider: &Rc<P>) -> Self
    where
        P: BehaviorProvider + 'static,
    {
        self.set_behavior_provider(provider);
        self
    }

    pub fn set_content_provider<P>(&mut self, provider: &Rc<P>)
    where
        P: ContentProvider<M> + 'static,
    {
        let weak: Weak<P> = Rc::downgrade(provider);
        self.content = Some(weak);
    }

    pub fn set_behavior_provider<P>(&mut self, provider: &Rc<P>)
    where
        P: BehaviorProvider + 'static,
    {
        let weak: Weak<P> = Rc::downgrade(provider);
        self.behavior = Some(weak);
    }

    /// Change the bar style; takes effect on the next reload.
    pub fn set_style(&mut self, style: ButtonBarStyle) {
        self.config.style = style;
    }

    /// Current properties.
    pub fn properties(&self) -> &PageViewConfig {
        &self.config
    }

    /// Mutable properties; changes take effect on the next reload.
    pub fn properties_mut(&mut self) -> &mut PageViewConfig {
        &mut self.config
    }

    // === Lifecycle ===

    /// The view was added to a parent: build everything.
    pub fn attach(&mut self) {
        self.attached = true;
        self.reload();
    }

    /// The view was removed from its parent. Children are kept.
    pub fn detach(&mut self) {
        self.attached = false;
        self.pressed = None;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Tear down and rebuild all children from the providers.
    ///
    /// A no-op without a content provider. Afterwards the resolved page is
    /// visible (no animation) and its button painted as selected.
    pub fn reload(&mut self) {
        self.rebuild(None);
    }

    fn rebuild(&mut self, keep_index: Option<usize>) {
        let Some(content) = self.content_provider() else {
            log::debug!("Page view reload skipped: no content provider");
            return;
        };
        let behavior = self.behavior_provider();

        self.pull_properties(content.as_ref(), behavior.as_deref());
        let count = self.config.page_count();

        let requested = keep_index
            .or_else(|| content.selected_index())
            .unwrap_or(self.config.initial_index);
        let resolved = match checked_index(requested, count) {
            Ok(index) => index,
            Err(e) => {
                let clamped = count.saturating_sub(1);
                log::warn!("{e}; using page {clamped}");
                clamped
            }
        };

        self.teardown();

        // Page host below the bar
        let bar_height = self.config.bar_height().min(self.size.height);
        let host_frame = Rectangle::new(
            0.0,
            bar_height,
            self.size.width,
            self.size.height - bar_height,
        );
        let views = (0..count).map(|i| content.view_for_page(i)).collect();
        self.host = PageHost::new(host_frame);
        self.host
            .set_pages(views, &page_frames(host_frame.size(), count));

        // Button bar
        self.bar_frame = Rectangle::new(0.0, 0.0, self.size.width, bar_height);
        self.bar_color = self.config.button_bar_color;
        let geometry = compute_layout(self.config.style, count, self.bar_frame);
        let indicator_color = self.config.selection_indicator_color;

        if let Some(frame) = geometry.switch {
            self.control_switch = Some(Switch::new(frame, self.config.switch_tint_color));
        }
        self.indicator = Some(SelectionIndicator::new(
            geometry.indicator,
            indicator_color,
            geometry.corner_radius,
        ));

        // Button order must match page order: taps resolve the index by position.
        self.buttons = geometry
            .buttons
            .iter()
            .enumerate()
            .map(|(i, frame)| {
                BarButton::new(*frame, content.title_for_button(i))
                    .title_color(indicator_color)
                    .font(self.config.button_font.clone())
                    .corner_radius(geometry.corner_radius)
            })
            .collect();
        self.labels = geometry
            .labels
            .iter()
            .enumerate()
            .map(|(i, frame)| {
                Label::new(*frame, content.title_for_label(i).unwrap_or_default())
                    .color(indicator_color)
                    .font(self.config.label_font.clone())
                    .align(TextAlign::Center)
            })
            .collect();
        self.geometry = Some(geometry);

        log::debug!(
            "Page view rebuilt: {} page(s), style {:?}, page {}",
            count,
            self.config.style,
            resolved
        );

        // Buttons exist now; paint the initial selection.
        self.selected_index = resolved;
        self.goto_page(resolved, false);
        self.select_button_at(resolved);
    }

    /// Copy every answer the providers give into the properties.
    fn pull_properties(
        &mut self,
        content: &dyn ContentProvider<M>,
        behavior: Option<&dyn BehaviorProvider>,
    ) {
        if let Some(pages) = content.number_of_pages() {
            if pages > MAX_PAGES {
                log::warn!("Content provider asked for {pages} pages, building {MAX_PAGES}");
            }
            self.config.number_of_pages = pages;
        }
        if let Some(initial) = content.initial_index() {
            self.config.initial_index = initial;
        }

        let Some(behavior) = behavior else {
            return;
        };
        if let Some(height) = behavior.bar_height() {
            self.config.button_bar_height = height;
        }
        if let Some(color) = behavior.bar_color() {
            self.config.button_bar_color = color;
        }
        if let Some(color) = behavior.indicator_color() {
            self.config.selection_indicator_color = color;
        }
        if self.config.style.has_switch() {
            if let Some(color) = behavior.switch_tint_color() {
                self.config.switch_tint_color = color;
            }
        }
        if let Some(font) = behavior.button_font() {
            self.config.button_font = font;
        }
        if self.config.style.has_labels() {
            if let Some(font) = behavior.label_font() {
                self.config.label_font = font;
            }
        }
    }

    fn teardown(&mut self) {
        self.host = PageHost::new(Rectangle::ZERO);
        self.geometry = None;
        self.buttons.clear();
        self.labels.clear();
        self.indicator = None;
        self.control_switch = None;
        self.pressed = None;
    }

    fn content_provider(&self) -> Option<Rc<dyn ContentProvider<M>>> {
        self.content.as_ref()?.upgrade()
    }

    fn behavior_provider(&self) -> Option<Rc<dyn BehaviorProvider>> {
        self.behavior.as_ref()?.upgrade()
    }

    // === Read-only state ===

    /// Currently selected page.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Number of pages built by the last reload.
    pub fn number_of_pages(&self) -> usize {
        self.host.page_count()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The control switch; only present with [`ButtonBarStyle::WithRightSwitch`].
    pub fn control_switch(&self) -> Option<&Switch> {
        self.control_switch.as_ref()
    }

    /// Mutable control switch, for silent programmatic changes.
    pub fn control_switch_mut(&mut self) -> Option<&mut Switch> {
        self.control_switch.as_mut()
    }

    pub fn buttons(&self) -> &[BarButton] {
        &self.buttons
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn selection_indicator(&self) -> Option<&SelectionIndicator> {
        self.indicator.as_ref()
    }

    /// Bar layout from the last reload.
    pub fn geometry(&self) -> Option<&BarGeometry> {
        self.geometry.as_ref()
    }

    pub fn bar_frame(&self) -> Rectangle {
        self.bar_frame
    }

    pub fn page_host(&self) -> &PageHost<M> {
        &self.host
    }

    /// Horizontal scroll offset of the pages.
    pub fn content_offset(&self) -> f32 {
        self.host.offset()
    }

    /// Whether a drag or page animation is in progress.
    pub fn is_scrolling(&self) -> bool {
        self.host.is_scrolling()
    }

    // === Switch ===

    /// Flip the control switch as a user would, notifying the behavior
    /// provider. Returns the new value, or `None` without a switch.
    pub fn toggle_switch(&mut self) -> Option<bool> {
        let value = self.control_switch.as_mut()?.toggle();
        log::debug!("Control switch toggled to {value}");
        if let Some(behavior) = self.behavior_provider() {
            behavior.on_switch_changed(value);
        }
        Some(value)
    }

    // === Events ===

    fn handle_press(&mut self, event: &Event, local: Point, origin: Point) -> Option<M> {
        if self.bar_frame.contains(local) {
            if self.control_switch.is_some_and(|sw| sw.contains(local)) {
                self.pressed = Some(PressTarget::Switch);
            } else if let Some(button) = self.buttons.iter_mut().find(|b| b.contains(local)) {
                button.set_pressed(true);
                self.pressed = Some(PressTarget::Button(button.id()));
            }
            return None;
        }

        if self.host.frame().contains(local) {
            self.host.begin_drag(local.x);
            self.pressed = Some(PressTarget::Host);
            return self.host.forward_event(event, origin);
        }
        None
    }

    fn handle_move(&mut self, event: &Event, local: Point, origin: Point) -> Option<M> {
        match self.pressed {
            Some(PressTarget::Button(id)) => {
                if let Some(button) = self.buttons.iter_mut().find(|b| b.id() == id) {
                    let inside = button.contains(local);
                    button.set_pressed(inside);
                }
                None
            }
            Some(PressTarget::Host) => {
                if let Some(offset) = self.host.drag_to(local.x) {
                    self.on_scroll_position_changed(offset);
                }
                self.host.forward_event(event, origin)
            }
            Some(PressTarget::Switch) => None,
            None => self.host.forward_event(event, origin),
        }
    }

    fn handle_release(&mut self, event: &Event, local: Point, origin: Point) -> Option<M> {
        match self.pressed.take()? {
            PressTarget::Button(id) => {
                let Some(button) = self.buttons.iter_mut().find(|b| b.id() == id) else {
                    log::error!("Released {id}, which no longer exists");
                    return None;
                };
                button.set_pressed(false);
                if button.contains(local) {
                    if let Err(e) = self.select_page(id) {
                        log::error!("Ignoring tap: {e}");
                    }
                }
                None
            }
            PressTarget::Switch => {
                if self.control_switch.is_some_and(|sw| sw.contains(local)) {
                    self.toggle_switch();
                }
                None
            }
            PressTarget::Host => {
                if self.host.end_drag() {
                    None
                } else {
                    self.host.forward_event(event, origin)
                }
            }
        }
    }

    fn handle_wheel(&mut self, delta: f32, local: Point) {
        if !self.host.frame().contains(local) || delta == 0.0 {
            return;
        }
        let count = self.host.page_count();
        let page_width = self.host.page_width();
        // Step from where a running settle is heading, not from where it is.
        let current = match self.host.phase() {
            ScrollPhase::Settling { to, .. } if page_width > 0.0 => {
                (to / page_width).round() as usize
            }
            _ => self.selected_index,
        };
        let target = if delta > 0.0 {
            current.saturating_sub(1)
        } else {
            (current + 1).min(count.saturating_sub(1))
        };
        if target != current {
            self.goto_page(target, true);
        }
    }
}

/// Validate a page index against the page count. Zero pages accepts only 0.
fn checked_index(index: usize, count: usize) -> Result<usize, PageViewError> {
    if index < count || (count == 0 && index == 0) {
        Ok(index)
    } else {
        Err(PageViewError::IndexOutOfRange { index, count })
    }
}

impl<M> Widget<M> for PageView<M> {
    fn layout(&mut self, available: Size) -> Size {
        if available != self.size {
            self.size = available;
            if self.attached {
                log::debug!("Page view resized to {available:?}, rebuilding");
                self.rebuild(Some(self.selected_index));
            }
        }
        self.size
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Rectangle) {
        let origin = bounds.position();

        self.host.draw(renderer, origin);

        if self.geometry.is_none() {
            return;
        }
        renderer.fill_rect(self.bar_frame.translate(origin.x, origin.y), self.bar_color);
        if let Some(sw) = &self.control_switch {
            sw.draw(renderer, origin);
        }
        if let Some(indicator) = &self.indicator {
            indicator.draw(renderer, origin);
        }
        for label in &self.labels {
            label.draw(renderer, origin);
        }
        for button in &self.buttons {
            button.draw(renderer, origin);
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Rectangle) -> Option<M> {
        if !self.attached {
            return None;
        }
        let origin = bounds.position();
        let position = event.position();
        let local = Point::new(position.x - origin.x, position.y - origin.y);

        match event {
            Event::MousePressed {
                button: MouseButton::Left,
                ..
            } => self.handle_press(event, local, origin),
            Event::MouseMoved { .. } => self.handle_move(event, local, origin),
            Event::MouseReleased {
                button: MouseButton::Left,
                ..
            } => self.handle_release(event, local, origin),
            Event::MouseWheel { delta, .. } => {
                self.handle_wheel(*delta, local);
                None
            }
            _ => None,
        }
    }
}

impl<M> std::fmt::Debug for PageView<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageView")
            .field("size", &self.size)
            .field("style", &self.config.style)
            .field("attached", &self.attached)
            .field("selected_index", &self.selected_index)
            .field("buttons", &self.buttons.len())
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}
