//! Solid color view

use crate::layout::{Rectangle, Size};
use crate::renderer::{Color, Renderer};
use crate::widget::Widget;

/// A view that fills its whole frame with one color.
///
/// Used for plain page backgrounds; it takes all the space it is offered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solid {
    color: Color,
    corner_radius: f32,
}

impl Solid {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            corner_radius: 0.0,
        }
    }

    /// Round the corners.
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Shorthand for [`Solid::new`].
pub fn solid(color: Color) -> Solid {
    Solid::new(color)
}

impl<M> Widget<M> for Solid {
    fn layout(&mut self, available: Size) -> Size {
        available
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Rectangle) {
        renderer.fill_rounded_rect(bounds, self.color, self.corner_radius);
    }
}
