//! Caption label

use crate::font::Font;
use crate::layout::{Point, Rectangle};
use crate::renderer::{Color, Renderer, TextAlign};

/// Non-interactive, single-line text placed at a fixed frame
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    frame: Rectangle,
    text: String,
    color: Color,
    font: Font,
    align: TextAlign,
}

impl Label {
    pub fn new(frame: Rectangle, text: impl Into<String>) -> Self {
        Self {
            frame,
            text: text.into(),
            color: Color::WHITE,
            font: Font::label_default(),
            align: TextAlign::Center,
        }
    }

    /// Set the text color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the font
    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Set the horizontal alignment
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_color(&self) -> Color {
        self.color
    }

    pub fn current_font(&self) -> &Font {
        &self.font
    }

    pub fn draw(&self, renderer: &mut Renderer, origin: Point) {
        let bounds = self.frame.translate(origin.x, origin.y);
        renderer.draw_text(&self.text, bounds, self.color, &self.font, self.align);
    }
}
