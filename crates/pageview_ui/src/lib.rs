//! pageview_ui - a paged view control with a synchronized button bar
//!
//! The crate carries the small retained-mode widget kit the control is built
//! from: geometry, pointer events, a draw-command recording renderer, and
//! the [`Widget`] trait. Rasterizing the recorded commands and delivering
//! input are left to the host toolkit.

pub mod constants;
mod element;
mod event;
mod font;
mod layout;
mod renderer;
mod widget;
pub mod widgets;

pub use element::Element;
pub use event::{Event, MouseButton};
pub use font::Font;
pub use layout::{Point, Rectangle, Size};
pub use renderer::{Color, DrawCommand, Renderer, TextAlign};
pub use widget::Widget;

// Re-export the page view API
pub use widgets::page_view::{compute_layout, page_frames, BarGeometry};
pub use widgets::{
    solid, BarButton, BehaviorProvider, ButtonBarStyle, ButtonId, ContentProvider, Label,
    PageHost, PageView, PageViewConfig, PageViewError, ScrollPhase, SelectionIndicator, Solid,
    Switch,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::Element;
    pub use crate::event::{Event, MouseButton};
    pub use crate::font::Font;
    pub use crate::layout::{Point, Rectangle, Size};
    pub use crate::renderer::{Color, Renderer};
    pub use crate::widget::Widget;
    pub use crate::widgets::{
        solid, BehaviorProvider, ButtonBarStyle, ContentProvider, PageView, PageViewConfig,
    };
}
