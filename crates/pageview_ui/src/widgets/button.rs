//! Bar button widget

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::font::Font;
use crate::layout::{Point, Rectangle};
use crate::renderer::{Color, Renderer, TextAlign};

static NEXT_BUTTON_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a bar button, unique for the lifetime of the process.
///
/// Taps are reported by identity; the page view resolves the identity to a
/// page index by looking the button up in its button list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonId(u64);

impl ButtonId {
    fn next() -> Self {
        Self(NEXT_BUTTON_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "button#{}", self.0)
    }
}

/// Button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ButtonState {
    #[default]
    Normal,
    Pressed,
}

/// Alpha applied to the title while the button is held down
const PRESSED_TITLE_ALPHA: f32 = 0.5;

/// A titled, tappable button in the page view's button bar
#[derive(Debug, Clone)]
pub struct BarButton {
    id: ButtonId,
    frame: Rectangle,
    title: String,
    title_color: Color,
    font: Font,
    background: Color,
    corner_radius: f32,
    state: ButtonState,
}

impl BarButton {
    /// Create a button with a fresh identity.
    pub fn new(frame: Rectangle, title: impl Into<String>) -> Self {
        Self {
            id: ButtonId::next(),
            frame,
            title: title.into(),
            title_color: Color::WHITE,
            font: Font::button_default(),
            background: Color::TRANSPARENT,
            corner_radius: 0.0,
            state: ButtonState::Normal,
        }
    }

    /// Set the title color
    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    /// Set the title font
    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Set the corner radius of the background
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn current_title_color(&self) -> Color {
        self.title_color
    }

    pub fn current_font(&self) -> &Font {
        &self.font
    }

    /// Recolor the title.
    pub fn set_title_color(&mut self, color: Color) {
        self.title_color = color;
    }

    pub fn is_pressed(&self) -> bool {
        self.state == ButtonState::Pressed
    }

    pub(crate) fn set_pressed(&mut self, pressed: bool) {
        self.state = if pressed {
            ButtonState::Pressed
        } else {
            ButtonState::Normal
        };
    }

    pub fn contains(&self, point: Point) -> bool {
        self.frame.contains(point)
    }

    pub fn draw(&self, renderer: &mut Renderer, origin: Point) {
        let bounds = self.frame.translate(origin.x, origin.y);
        renderer.fill_rounded_rect(bounds, self.background, self.corner_radius);

        let mut color = self.title_color;
        if self.state == ButtonState::Pressed {
            color.a *= PRESSED_TITLE_ALPHA;
        }
        renderer.draw_text(&self.title, bounds, color, &self.font, TextAlign::Center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;
    use crate::Size;

    #[test]
    fn ids_are_unique() {
        let a = BarButton::new(Rectangle::ZERO, "1");
        let b = BarButton::new(Rectangle::ZERO, "1");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn pressed_title_is_dimmed() {
        let mut button =
            BarButton::new(Rectangle::new(0.0, 0.0, 20.0, 20.0), "3").title_color(Color::WHITE);
        button.set_pressed(true);

        let mut renderer = Renderer::new(Size::new(100.0, 100.0));
        button.draw(&mut renderer, Point::new(5.0, 5.0));

        match renderer.commands() {
            [DrawCommand::DrawText { text, bounds, color, .. }] => {
                assert_eq!(text, "3");
                assert_eq!(bounds.x, 5.0);
                assert!((color.a - PRESSED_TITLE_ALPHA).abs() < 1e-6);
            }
            other => panic!("unexpected commands {other:?}"),
        }
    }
}
