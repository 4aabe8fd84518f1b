//! Widget trait

use crate::event::Event;
use crate::layout::{Rectangle, Size};
use crate::renderer::Renderer;

/// The core widget trait that all UI elements implement.
///
/// `bounds` is always in window coordinates: the parent has already added
/// its own origin and any scroll offset.
pub trait Widget<M> {
    /// Size the widget takes when offered `available`
    fn layout(&mut self, available: Size) -> Size;

    /// Record draw commands for the widget
    fn draw(&self, renderer: &mut Renderer, bounds: Rectangle);

    /// Handle an event, optionally producing a message
    fn on_event(&mut self, event: &Event, bounds: Rectangle) -> Option<M> {
        let _ = (event, bounds);
        None
    }
}
