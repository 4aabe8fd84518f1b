//! Horizontally paging scroll host.
//!
//! This widget consists of:
//! - A viewport (the host frame) that clips its pages
//! - A row of equally sized pages laid out side by side in content space
//! - A small scroll state machine: idle, following a drag, or settling on a page
//!
//! The host never bounces: the content offset stays within
//! `[0, content_width - page_width]`. Every method that can move the offset
//! returns the new offset when it actually changed, so the owner can react to
//! scroll position changes without the host holding a reference back to it.

use std::time::Duration;

use crate::constants::{DRAG_THRESHOLD, PAGE_ANIMATION_DURATION};
use crate::{Element, Event, Point, Rectangle, Renderer};

/// What the host's scroll offset is currently doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollPhase {
    /// Offset is at rest.
    Idle,
    /// Offset follows the pointer.
    Dragging {
        /// Pointer x when the drag started
        start_pointer_x: f32,
        /// Offset when the drag started
        start_offset: f32,
        /// Whether the pointer travelled past the tap threshold
        moved: bool,
        /// Target of the settle the press interrupted, if any
        resume_to: Option<f32>,
    },
    /// Offset animates towards a page boundary.
    Settling {
        from: f32,
        to: f32,
        elapsed: Duration,
        duration: Duration,
    },
}

/// Paging scroll container holding one element per page.
pub struct PageHost<M> {
    frame: Rectangle,
    pages: Vec<Element<M>>,
    offset_x: f32,
    phase: ScrollPhase,
    paging_enabled: bool,
}

impl<M> PageHost<M> {
    /// Create an empty host occupying `frame` in its parent.
    pub fn new(frame: Rectangle) -> Self {
        Self {
            frame,
            pages: Vec::new(),
            offset_x: 0.0,
            phase: ScrollPhase::Idle,
            paging_enabled: true,
        }
    }

    /// Enable or disable snapping to page boundaries after a drag.
    pub fn paging_enabled(mut self, enabled: bool) -> Self {
        self.paging_enabled = enabled;
        self
    }

    /// Replace the pages, giving page `i` the frame `frames[i]` in content space.
    pub fn set_pages(&mut self, pages: Vec<Element<M>>, frames: &[Rectangle]) {
        debug_assert_eq!(pages.len(), frames.len());
        self.pages = pages;
        for (page, frame) in self.pages.iter_mut().zip(frames) {
            page.set_frame(*frame);
        }
        self.offset_x = self.offset_x.clamp(0.0, self.max_offset());
    }

    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Width of one page, equal to the viewport width.
    pub fn page_width(&self) -> f32 {
        self.frame.width
    }

    /// Total scrollable width: one viewport per page.
    pub fn content_width(&self) -> f32 {
        self.frame.width * self.pages.len() as f32
    }

    /// Largest reachable offset.
    pub fn max_offset(&self) -> f32 {
        (self.content_width() - self.page_width()).max(0.0)
    }

    pub fn offset(&self) -> f32 {
        self.offset_x
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_scrolling(&self) -> bool {
        self.phase != ScrollPhase::Idle
    }

    /// Jump to `offset` (clamped), cancelling any animation.
    pub fn set_offset(&mut self, offset: f32) -> Option<f32> {
        self.phase = ScrollPhase::Idle;
        self.move_to(offset)
    }

    /// Scroll so that `rect` (in content space) is visible.
    ///
    /// Without animation the offset moves immediately and the new offset is
    /// returned. With animation a settle starts and offsets are reported by
    /// [`PageHost::advance`].
    pub fn scroll_rect_to_visible(&mut self, rect: Rectangle, animated: bool) -> Option<f32> {
        let target = rect.x.clamp(0.0, self.max_offset());
        if !animated {
            return self.set_offset(target);
        }
        self.settle_to(target);
        None
    }

    /// Step a running settle animation by `dt`.
    pub fn advance(&mut self, dt: Duration) -> Option<f32> {
        let ScrollPhase::Settling {
            from,
            to,
            elapsed,
            duration,
        } = self.phase
        else {
            return None;
        };

        let elapsed = elapsed + dt;
        if elapsed >= duration {
            self.phase = ScrollPhase::Idle;
            return self.move_to(to);
        }

        let t = elapsed.as_secs_f32() / duration.as_secs_f32();
        let eased = 1.0 - (1.0 - t).powi(3);
        self.phase = ScrollPhase::Settling {
            from,
            to,
            elapsed,
            duration,
        };
        self.move_to(from + (to - from) * eased)
    }

    /// Start following the pointer. Interrupts a running settle where it is;
    /// [`PageHost::end_drag`] resumes it if the pointer never moves.
    pub fn begin_drag(&mut self, pointer_x: f32) {
        let resume_to = match self.phase {
            ScrollPhase::Settling { to, .. } => Some(to),
            ScrollPhase::Dragging { resume_to, .. } => resume_to,
            ScrollPhase::Idle => None,
        };
        self.phase = ScrollPhase::Dragging {
            start_pointer_x: pointer_x,
            start_offset: self.offset_x,
            moved: false,
            resume_to,
        };
    }

    /// Move the drag to `pointer_x`.
    pub fn drag_to(&mut self, pointer_x: f32) -> Option<f32> {
        let ScrollPhase::Dragging {
            start_pointer_x,
            start_offset,
            moved,
            resume_to,
        } = self.phase
        else {
            return None;
        };

        let dx = pointer_x - start_pointer_x;
        let moved = moved || dx.abs() > DRAG_THRESHOLD;
        self.phase = ScrollPhase::Dragging {
            start_pointer_x,
            start_offset,
            moved,
            resume_to,
        };
        if !moved {
            return None;
        }
        self.move_to(start_offset - dx)
    }

    /// Finish a drag. Returns whether the pointer moved far enough to count as
    /// a drag rather than a tap.
    ///
    /// A tap resumes the settle it interrupted. Otherwise, with paging
    /// enabled, a settle to the nearest page starts, so the offset never rests
    /// between pages.
    pub fn end_drag(&mut self) -> bool {
        let ScrollPhase::Dragging {
            moved, resume_to, ..
        } = self.phase
        else {
            return false;
        };
        self.phase = ScrollPhase::Idle;

        match resume_to {
            Some(target) if !moved => self.settle_to(target),
            _ if self.paging_enabled && self.page_width() > 0.0 => {
                let page = (self.offset_x / self.page_width()).round();
                self.settle_to(page * self.page_width());
            }
            _ => {}
        }
        moved
    }

    /// Index of the page under `point` (in the parent's space).
    pub fn page_at(&self, point: Point) -> Option<usize> {
        if !self.frame.contains(point) {
            return None;
        }
        let content = Point::new(point.x - self.frame.x + self.offset_x, point.y - self.frame.y);
        self.pages
            .iter()
            .position(|page| page.frame().contains(content))
    }

    /// Deliver `event` to the page under its position.
    ///
    /// `origin` is the parent's position in window space.
    pub fn forward_event(&mut self, event: &Event, origin: Point) -> Option<M> {
        let local = event.translated(-origin.x, -origin.y);
        let index = self.page_at(local.position())?;
        let content_origin = self.content_origin(origin);
        self.pages[index].on_event(event, content_origin)
    }

    /// Draw the visible pages clipped to the viewport.
    pub fn draw(&self, renderer: &mut Renderer, origin: Point) {
        let viewport = self.frame.translate(origin.x, origin.y);
        let content_origin = self.content_origin(origin);

        renderer.push_clip(viewport);
        for page in &self.pages {
            let on_screen = page.frame().translate(content_origin.x, content_origin.y);
            if viewport.intersect(&on_screen).width > 0.0 {
                page.draw(renderer, content_origin);
            }
        }
        renderer.pop_clip();
    }

    fn content_origin(&self, origin: Point) -> Point {
        Point::new(origin.x + self.frame.x - self.offset_x, origin.y + self.frame.y)
    }

    fn settle_to(&mut self, target: f32) {
        if (target - self.offset_x).abs() <= f32::EPSILON {
            self.phase = ScrollPhase::Idle;
            return;
        }
        self.phase = ScrollPhase::Settling {
            from: self.offset_x,
            to: target,
            elapsed: Duration::ZERO,
            duration: PAGE_ANIMATION_DURATION,
        };
    }

    fn move_to(&mut self, offset: f32) -> Option<f32> {
        if !offset.is_finite() {
            log::warn!("Ignoring non-finite scroll offset {offset}");
            return None;
        }
        let offset = offset.clamp(0.0, self.max_offset());
        if offset == self.offset_x {
            return None;
        }
        self.offset_x = offset;
        Some(offset)
    }
}

impl<M> std::fmt::Debug for PageHost<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageHost")
            .field("frame", &self.frame)
            .field("pages", &self.pages.len())
            .field("offset_x", &self.offset_x)
            .field("phase", &self.phase)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::solid;
    use crate::Color;

    fn host(pages: usize) -> PageHost<()> {
        let mut host = PageHost::new(Rectangle::new(0.0, 50.0, 100.0, 200.0));
        let views = (0..pages).map(|_| Element::new(solid(Color::BLACK))).collect();
        let frames: Vec<_> = (0..pages)
            .map(|i| Rectangle::new(100.0 * i as f32, 0.0, 100.0, 200.0))
            .collect();
        host.set_pages(views, &frames);
        host
    }

    #[test]
    fn offset_is_clamped_without_bounce() {
        let mut h = host(3);
        assert_eq!(h.set_offset(-20.0), None);
        assert_eq!(h.set_offset(500.0), Some(200.0));
        assert_eq!(h.offset(), 200.0);
    }

    #[test]
    fn single_page_cannot_scroll() {
        let mut h = host(1);
        assert_eq!(h.max_offset(), 0.0);
        assert_eq!(h.set_offset(40.0), None);
    }

    #[test]
    fn animated_scroll_settles_on_target() {
        let mut h = host(3);
        assert_eq!(
            h.scroll_rect_to_visible(Rectangle::new(200.0, 0.0, 100.0, 200.0), true),
            None
        );
        assert!(h.is_scrolling());

        let mid = h.advance(Duration::from_millis(100)).unwrap();
        assert!(mid > 0.0 && mid < 200.0);
        assert_eq!(h.advance(Duration::from_secs(1)), Some(200.0));
        assert_eq!(h.phase(), ScrollPhase::Idle);
        assert_eq!(h.advance(Duration::from_millis(16)), None);
    }

    #[test]
    fn small_pointer_travel_is_a_tap() {
        let mut h = host(3);
        h.begin_drag(50.0);
        assert_eq!(h.drag_to(52.0), None);
        assert!(!h.end_drag());
        assert_eq!(h.offset(), 0.0);
    }

    #[test]
    fn drag_snaps_to_nearest_page() {
        let mut h = host(3);
        h.begin_drag(90.0);
        assert_eq!(h.drag_to(20.0), Some(70.0));
        assert!(h.end_drag());
        assert_eq!(h.advance(PAGE_ANIMATION_DURATION), Some(100.0));

        h.begin_drag(90.0);
        assert_eq!(h.drag_to(60.0), Some(130.0));
        assert!(h.end_drag());
        assert_eq!(h.advance(PAGE_ANIMATION_DURATION), Some(100.0));
    }

    #[test]
    fn tap_during_settle_resumes_it() {
        let mut h = host(3);
        h.scroll_rect_to_visible(Rectangle::new(200.0, 0.0, 100.0, 200.0), true);
        let mid = h.advance(Duration::from_millis(48)).unwrap();
        assert!(mid > 0.0 && mid < 200.0);

        h.begin_drag(50.0);
        assert!(!h.end_drag());
        assert!(h.is_scrolling());
        assert_eq!(h.advance(PAGE_ANIMATION_DURATION), Some(200.0));
        assert!(!h.is_scrolling());
    }

    #[test]
    fn tap_between_pages_snaps() {
        let mut h = host(3);
        h.set_offset(130.0);
        h.begin_drag(50.0);
        assert!(!h.end_drag());
        assert_eq!(h.advance(PAGE_ANIMATION_DURATION), Some(100.0));
    }

    #[test]
    fn non_finite_offsets_are_ignored() {
        let mut h = host(3);
        h.set_offset(100.0);
        assert_eq!(h.set_offset(f32::NAN), None);
        assert_eq!(h.set_offset(f32::INFINITY), None);
        assert_eq!(h.offset(), 100.0);
    }

    #[test]
    fn free_scrolling_stays_where_released() {
        let mut h = host(3).paging_enabled(false);
        h.begin_drag(90.0);
        assert_eq!(h.drag_to(20.0), Some(70.0));
        assert!(h.end_drag());
        assert!(!h.is_scrolling());
        assert_eq!(h.offset(), 70.0);
    }

    #[test]
    fn page_at_accounts_for_offset() {
        let mut h = host(3);
        assert_eq!(h.page_at(Point::new(10.0, 60.0)), Some(0));
        assert_eq!(h.page_at(Point::new(10.0, 10.0)), None);
        h.set_offset(150.0);
        assert_eq!(h.page_at(Point::new(10.0, 60.0)), Some(1));
        assert_eq!(h.page_at(Point::new(60.0, 60.0)), Some(2));
    }

    #[test]
    fn draw_skips_offscreen_pages() {
        let h = host(3);
        let mut r = Renderer::new(crate::Size::new(100.0, 250.0));
        h.draw(&mut r, Point::zero());
        // clip, one visible page, unclip
        assert_eq!(r.commands().len(), 3);
    }
}
