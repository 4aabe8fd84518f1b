//! Draw command recording.
//!
//! Widgets describe what they look like by pushing [`DrawCommand`]s into a
//! [`Renderer`]. Rasterizing the recorded commands (shapes, glyphs, clipping)
//! is the host toolkit's job; the renderer only keeps them in paint order.

use serde::{Deserialize, Serialize};

use crate::font::Font;
use crate::{Point, Rectangle, Size};

/// Horizontal alignment of text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// A draw command to be executed by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rectangle,
        color: Color,
    },
    FillRoundedRect {
        rect: Rectangle,
        color: Color,
        radius: f32,
    },
    DrawText {
        text: String,
        bounds: Rectangle,
        color: Color,
        font: Font,
        align: TextAlign,
    },
    /// Restrict subsequent commands to `rect` until the matching `PopClip`.
    PushClip {
        rect: Rectangle,
    },
    PopClip,
}

/// Collects draw commands for one frame.
#[derive(Debug, Default)]
pub struct Renderer {
    size: Size,
    draw_commands: Vec<DrawCommand>,
    clip_depth: usize,
}

impl Renderer {
    /// Create a renderer for a surface of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            draw_commands: Vec::new(),
            clip_depth: 0,
        }
    }

    /// Surface size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Commands recorded so far, in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.draw_commands
    }

    /// Take the recorded commands, leaving the renderer empty for the next frame.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        if self.clip_depth != 0 {
            log::warn!("Frame ended with {} unbalanced clip(s)", self.clip_depth);
            self.clip_depth = 0;
        }
        std::mem::take(&mut self.draw_commands)
    }

    // Drawing primitives that widgets can use

    /// Draw a filled rectangle.
    pub fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        if color.a <= 0.0 {
            return;
        }
        self.draw_commands.push(DrawCommand::FillRect { rect, color });
    }

    /// Draw a filled rectangle with rounded corners.
    pub fn fill_rounded_rect(&mut self, rect: Rectangle, color: Color, radius: f32) {
        if color.a <= 0.0 {
            return;
        }
        if radius <= 0.0 {
            self.fill_rect(rect, color);
            return;
        }
        self.draw_commands.push(DrawCommand::FillRoundedRect {
            rect,
            color,
            radius: radius.min(rect.width.min(rect.height) / 2.0),
        });
    }

    /// Draw text inside `bounds`, vertically centered.
    pub fn draw_text(
        &mut self,
        text: &str,
        bounds: Rectangle,
        color: Color,
        font: &Font,
        align: TextAlign,
    ) {
        if text.is_empty() {
            return;
        }
        self.draw_commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            bounds,
            color,
            font: font.clone(),
            align,
        });
    }

    /// Begin clipping to `rect`.
    pub fn push_clip(&mut self, rect: Rectangle) {
        self.clip_depth += 1;
        self.draw_commands.push(DrawCommand::PushClip { rect });
    }

    /// End the innermost clip.
    pub fn pop_clip(&mut self) {
        if self.clip_depth == 0 {
            log::error!("pop_clip without matching push_clip");
            return;
        }
        self.clip_depth -= 1;
        self.draw_commands.push(DrawCommand::PopClip);
    }

    /// Find the topmost text command whose bounds contain `point`.
    pub fn text_at(&self, point: Point) -> Option<&str> {
        self.draw_commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::DrawText { text, bounds, .. } if bounds.contains(point) => {
                Some(text.as_str())
            }
            _ => None,
        })
    }
}

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const YELLOW: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 0.0,
        a: 1.0,
    };
    pub const CYAN: Color = Color {
        r: 0.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const LIGHT_GRAY: Color = Color {
        r: 0.67,
        g: 0.67,
        b: 0.67,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_fills_are_skipped() {
        let mut r = Renderer::new(Size::new(10.0, 10.0));
        r.fill_rect(Rectangle::new(0.0, 0.0, 5.0, 5.0), Color::TRANSPARENT);
        r.fill_rounded_rect(Rectangle::new(0.0, 0.0, 5.0, 5.0), Color::TRANSPARENT, 2.0);
        assert!(r.commands().is_empty());
    }

    #[test]
    fn rounded_radius_is_capped() {
        let mut r = Renderer::new(Size::new(10.0, 10.0));
        r.fill_rounded_rect(Rectangle::new(0.0, 0.0, 10.0, 4.0), Color::WHITE, 8.0);
        match &r.commands()[0] {
            DrawCommand::FillRoundedRect { radius, .. } => assert_eq!(*radius, 2.0),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unbalanced_pop_is_ignored() {
        let mut r = Renderer::new(Size::ZERO);
        r.pop_clip();
        assert!(r.commands().is_empty());
        r.push_clip(Rectangle::ZERO);
        r.pop_clip();
        assert_eq!(r.take_commands().len(), 2);
        assert!(r.commands().is_empty());
    }
}
