//! Type-erased widget wrapper
//!
//! Parents position children by assigning them a frame; the element keeps
//! that frame next to the boxed widget so drawing and hit testing agree.

use crate::event::Event;
use crate::layout::{Point, Rectangle, Size};
use crate::renderer::Renderer;
use crate::widget::Widget;

/// A type-erased widget with the frame its parent gave it.
pub struct Element<M> {
    widget: Box<dyn Widget<M>>,
    /// Position and size in the parent's coordinate space
    frame: Rectangle,
}

impl<M> Element<M> {
    /// Create a new element from a widget. The frame starts empty.
    pub fn new<W: Widget<M> + 'static>(widget: W) -> Self {
        Self {
            widget: Box::new(widget),
            frame: Rectangle::ZERO,
        }
    }

    /// Frame in the parent's coordinate space.
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Position the element and lay the widget out at the frame's size.
    pub fn set_frame(&mut self, frame: Rectangle) {
        let size = self.widget.layout(frame.size());
        self.frame = Rectangle::new(frame.x, frame.y, size.width, size.height);
    }

    /// Ask the widget for its size without moving it.
    pub fn layout(&mut self, available: Size) -> Size {
        self.widget.layout(available)
    }

    /// Draw at the frame, shifted by the parent's origin.
    pub fn draw(&self, renderer: &mut Renderer, origin: Point) {
        self.widget
            .draw(renderer, self.frame.translate(origin.x, origin.y));
    }

    /// Deliver an event whose position is in the same space as `origin`.
    pub fn on_event(&mut self, event: &Event, origin: Point) -> Option<M> {
        let bounds = self.frame.translate(origin.x, origin.y);
        self.widget.on_event(event, bounds)
    }
}

impl<M> std::fmt::Debug for Element<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}
