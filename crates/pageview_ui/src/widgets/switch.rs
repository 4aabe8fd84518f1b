//! Toggle switch

use crate::layout::{Point, Rectangle};
use crate::renderer::{Color, Renderer};

/// Inset of the knob inside the track, as a fraction of the track height
const KNOB_INSET: f32 = 0.1;

/// A binary on/off control.
///
/// The switch only holds its own state. Programmatic changes through
/// [`Switch::set_on`] are silent; user toggles go through the owning view,
/// which reports them to its behavior provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Switch {
    frame: Rectangle,
    on: bool,
    on_tint: Color,
    off_tint: Color,
    knob: Color,
}

impl Switch {
    pub fn new(frame: Rectangle, on_tint: Color) -> Self {
        Self {
            frame,
            on: false,
            on_tint,
            off_tint: Color::LIGHT_GRAY,
            knob: Color::WHITE,
        }
    }

    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Set the state without notifying anyone.
    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    /// Flip the state and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }

    pub fn contains(&self, point: Point) -> bool {
        self.frame.contains(point)
    }

    pub fn draw(&self, renderer: &mut Renderer, origin: Point) {
        let track = self.frame.translate(origin.x, origin.y);
        let radius = track.height / 2.0;
        let tint = if self.on { self.on_tint } else { self.off_tint };
        renderer.fill_rounded_rect(track, tint, radius);

        let inset = track.height * KNOB_INSET;
        let side = track.height - inset * 2.0;
        let knob_x = if self.on {
            track.right() - inset - side
        } else {
            track.x + inset
        };
        let knob = Rectangle::new(knob_x, track.y + inset, side, side);
        renderer.fill_rounded_rect(knob, self.knob, side / 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;
    use crate::Size;

    #[test]
    fn toggle_flips_state() {
        let mut sw = Switch::new(Rectangle::new(0.0, 0.0, 10.0, 10.0), Color::YELLOW);
        assert!(!sw.is_on());
        assert!(sw.toggle());
        assert!(!sw.toggle());
        sw.set_on(true);
        assert!(sw.is_on());
    }

    #[test]
    fn track_uses_tint_only_when_on() {
        let mut sw = Switch::new(Rectangle::new(0.0, 0.0, 20.0, 10.0), Color::YELLOW);
        let track_color = |sw: &Switch| {
            let mut r = Renderer::new(Size::new(50.0, 50.0));
            sw.draw(&mut r, Point::zero());
            match r.commands().first() {
                Some(DrawCommand::FillRoundedRect { color, .. }) => *color,
                other => panic!("unexpected command {other:?}"),
            }
        };
        assert_eq!(track_color(&sw), Color::LIGHT_GRAY);
        sw.set_on(true);
        assert_eq!(track_color(&sw), Color::YELLOW);
    }
}
