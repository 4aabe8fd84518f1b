//! Keeps the scroll offset, the selected index and the indicator in step.
//!
//! The flow is one-directional per trigger:
//! - programmatic moves (`goto_page`, taps) only move the scroll offset;
//! - every offset change lands in `on_scroll_position_changed`, which slides
//!   the indicator and, when the page under the viewport changes, updates the
//!   selection and notifies the behavior provider.

use std::time::Duration;

use super::{PageView, PageViewError};
use crate::layout::Rectangle;
use crate::widgets::ButtonId;

impl<M> PageView<M> {
    /// Scroll so page `index` fills the viewport.
    ///
    /// Does not touch the selection directly; the selection follows from the
    /// resulting scroll position. Animated moves progress through
    /// [`PageView::advance`].
    pub fn goto_page(&mut self, index: usize, animated: bool) {
        let page_width = self.host.page_width();
        let target = Rectangle::new(
            page_width * index as f32,
            0.0,
            page_width,
            self.host.frame().height,
        );
        if let Some(offset) = self.host.scroll_rect_to_visible(target, animated) {
            self.on_scroll_position_changed(offset);
        }
    }

    /// Step page animations by `dt`. Hosts call this once per frame.
    pub fn advance(&mut self, dt: Duration) {
        if let Some(offset) = self.host.advance(dt) {
            self.on_scroll_position_changed(offset);
        }
    }

    /// Move the pages to `offset_x` (clamped) immediately, as a host-driven
    /// scroll would.
    pub fn set_content_offset(&mut self, offset_x: f32) {
        if let Some(offset) = self.host.set_offset(offset_x) {
            self.on_scroll_position_changed(offset);
        }
    }

    /// React to the pages being scrolled to `offset_x`.
    ///
    /// Slides the indicator proportionally between the first and last button
    /// and selects the page whose center half is under the viewport. Nothing
    /// happens when there is nothing to scroll (fewer than two pages).
    pub fn on_scroll_position_changed(&mut self, offset_x: f32) {
        let page_width = self.host.page_width();
        let scroll_range = self.host.content_width() - page_width;
        if scroll_range <= 0.0 || page_width <= 0.0 {
            return;
        }

        let fraction = offset_x / scroll_range;
        if let (Some(first), Some(last), Some(indicator)) =
            (self.buttons.first(), self.buttons.last(), self.indicator.as_mut())
        {
            let first_x = first.frame().x;
            let span = last.frame().x - first_x;
            indicator.set_x(first_x + fraction * span);
        }

        let last_page = self.host.page_count().saturating_sub(1);
        let candidate = ((offset_x - page_width / 2.0) / page_width).floor() + 1.0;
        let index = (candidate.max(0.0) as usize).min(last_page);

        if index != self.selected_index {
            self.set_selected_index(index);
            log::debug!("Moved to page {index}");
            if let Some(behavior) = self.behavior_provider() {
                behavior.on_page_changed(index);
            }
        }
    }

    /// A bar button was tapped: scroll to its page.
    ///
    /// Returns the page index, or [`PageViewError::UnknownButton`] when the
    /// button is not in the current bar (for example after a reload).
    pub fn select_page(&mut self, button: ButtonId) -> Result<usize, PageViewError> {
        let index = self
            .buttons
            .iter()
            .position(|b| b.id() == button)
            .ok_or(PageViewError::UnknownButton(button))?;
        self.goto_page(index, true);
        Ok(index)
    }

    /// Change the selection, repainting the old and the new button.
    fn set_selected_index(&mut self, index: usize) {
        let old = self.selected_index;
        self.selected_index = index;
        self.deselect_button_at(old);
        self.select_button_at(index);
    }

    /// Paint the button at `index` as selected. The color is asked for anew
    /// every time so providers can change it between selections.
    pub(super) fn select_button_at(&mut self, index: usize) {
        if let Some(color) = self.behavior_provider().and_then(|b| b.bar_color()) {
            self.config.button_bar_color = color;
        }
        let color = self.config.button_bar_color;
        if let Some(button) = self.buttons.get_mut(index) {
            button.set_title_color(color);
        }
    }

    /// Paint the button at `index` as unselected.
    pub(super) fn deselect_button_at(&mut self, index: usize) {
        if let Some(color) = self.behavior_provider().and_then(|b| b.indicator_color()) {
            self.config.selection_indicator_color = color;
        }
        let color = self.config.selection_indicator_color;
        if let Some(button) = self.buttons.get_mut(index) {
            button.set_title_color(color);
        }
    }
}
