//! Selection indicator

use crate::layout::{Point, Rectangle};
use crate::renderer::{Color, Renderer};

/// Rounded square sliding along the button bar under the selected button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionIndicator {
    frame: Rectangle,
    color: Color,
    corner_radius: f32,
}

impl SelectionIndicator {
    pub fn new(frame: Rectangle, color: Color, corner_radius: f32) -> Self {
        Self {
            frame,
            color,
            corner_radius,
        }
    }

    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Slide horizontally; y and size never change.
    pub fn set_x(&mut self, x: f32) {
        self.frame.x = x;
    }

    pub fn draw(&self, renderer: &mut Renderer, origin: Point) {
        renderer.fill_rounded_rect(
            self.frame.translate(origin.x, origin.y),
            self.color,
            self.corner_radius,
        );
    }
}
