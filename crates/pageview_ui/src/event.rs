use crate::Point;

/// Pointer events delivered by the host toolkit.
///
/// Positions are in the coordinate space of the `bounds` handed to
/// [`Widget::on_event`](crate::Widget::on_event).
#[derive(Debug, Clone)]
pub enum Event {
    /// Mouse button (or touch) pressed.
    MousePressed {
        button: MouseButton,
        position: Point,
    },
    /// Mouse button (or touch) released.
    MouseReleased {
        button: MouseButton,
        position: Point,
    },
    /// Pointer moved.
    MouseMoved { position: Point },
    /// Mouse wheel scrolled. Positive delta scrolls back.
    MouseWheel { delta: f32, position: Point },
}

impl Event {
    /// Pointer position carried by the event.
    pub fn position(&self) -> Point {
        match self {
            Event::MousePressed { position, .. }
            | Event::MouseReleased { position, .. }
            | Event::MouseMoved { position }
            | Event::MouseWheel { position, .. } => *position,
        }
    }

    /// Same event with its position shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Event {
        let shift = |p: &Point| Point::new(p.x + dx, p.y + dy);
        match self {
            Event::MousePressed { button, position } => Event::MousePressed {
                button: *button,
                position: shift(position),
            },
            Event::MouseReleased { button, position } => Event::MouseReleased {
                button: *button,
                position: shift(position),
            },
            Event::MouseMoved { position } => Event::MouseMoved {
                position: shift(position),
            },
            Event::MouseWheel { delta, position } => Event::MouseWheel {
                delta: *delta,
                position: shift(position),
            },
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}
