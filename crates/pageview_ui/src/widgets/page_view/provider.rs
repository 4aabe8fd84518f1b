//! The two roles a page view is driven by.
//!
//! Both traits follow the same convention: required methods have no default,
//! optional queries return `Option` and default to `None`, meaning "declines".
//! When a provider declines, the page view falls back to its own property
//! (see [`PageViewConfig`](super::PageViewConfig)).
//!
//! Providers are queried synchronously on every reload and on every
//! selection change, so answers should be cheap. Methods take `&self`;
//! providers that record notifications use interior mutability. A provider
//! must not borrow the page view from inside a notification.

use crate::font::Font;
use crate::renderer::Color;
use crate::Element;

/// Supplies the pages and their button titles.
pub trait ContentProvider<M> {
    /// Title of the button for the page at `index`.
    fn title_for_button(&self, index: usize) -> String;

    /// View shown on the page at `index`. The page view positions it.
    fn view_for_page(&self, index: usize) -> Element<M>;

    /// Number of pages, at most [`MAX_PAGES`](crate::constants::MAX_PAGES).
    fn number_of_pages(&self) -> Option<usize> {
        None
    }

    /// Page shown after a reload.
    fn initial_index(&self) -> Option<usize> {
        None
    }

    /// Page selected after a reload; takes precedence over the initial index.
    fn selected_index(&self) -> Option<usize> {
        None
    }

    /// Caption above the button at `index`. Only used by
    /// [`ButtonBarStyle::WithLabel`](super::ButtonBarStyle::WithLabel).
    fn title_for_label(&self, index: usize) -> Option<String> {
        let _ = index;
        None
    }
}

/// Supplies styling and receives change notifications.
pub trait BehaviorProvider {
    /// Height of the button bar (default 50).
    fn bar_height(&self) -> Option<f32> {
        None
    }

    /// Bar background, also the title color of the selected button (default black).
    fn bar_color(&self) -> Option<Color> {
        None
    }

    /// Selection indicator color, also the title color of unselected buttons
    /// and of labels (default white).
    fn indicator_color(&self) -> Option<Color> {
        None
    }

    /// Tint of the control switch when on (default yellow).
    fn switch_tint_color(&self) -> Option<Color> {
        None
    }

    /// Button title font (default Helvetica-Bold 14).
    fn button_font(&self) -> Option<Font> {
        None
    }

    /// Label font (default Helvetica 10).
    fn label_font(&self) -> Option<Font> {
        None
    }

    /// The user flipped the control switch.
    fn on_switch_changed(&self, value: bool) {
        let _ = value;
    }

    /// The selected page changed to `index`.
    fn on_page_changed(&self, index: usize) {
        let _ = index;
    }
}
