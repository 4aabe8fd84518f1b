//! Directly assignable page view properties.
//!
//! The embedding application sets these; on every reload a behavior or
//! content provider that answers the matching query overwrites them.

use serde::{Deserialize, Serialize};

use super::ButtonBarStyle;
use crate::constants::{DEFAULT_BAR_HEIGHT, MAX_PAGES};
use crate::font::Font;
use crate::renderer::Color;

/// Properties of a page view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageViewConfig {
    /// Layout of the button bar
    pub style: ButtonBarStyle,

    /// Number of pages, clamped to `MAX_PAGES` when the view is built
    pub number_of_pages: usize,

    /// Page selected after a reload
    pub initial_index: usize,

    /// Height of the button bar
    pub button_bar_height: f32,

    /// Bar background and selected button title color
    pub button_bar_color: Color,

    /// Indicator, label and unselected button title color
    pub selection_indicator_color: Color,

    /// Tint of the control switch when on
    pub switch_tint_color: Color,

    /// Button title font
    pub button_font: Font,

    /// Caption font, only used with labels
    pub label_font: Font,
}

impl Default for PageViewConfig {
    fn default() -> Self {
        Self {
            style: ButtonBarStyle::Default,
            number_of_pages: 0,
            initial_index: 0,
            button_bar_height: DEFAULT_BAR_HEIGHT,
            button_bar_color: Color::BLACK,
            selection_indicator_color: Color::WHITE,
            switch_tint_color: Color::YELLOW,
            button_font: Font::button_default(),
            label_font: Font::label_default(),
        }
    }
}

impl PageViewConfig {
    /// Page count actually built: `number_of_pages` capped at `MAX_PAGES`.
    pub fn page_count(&self) -> usize {
        self.number_of_pages.min(MAX_PAGES)
    }

    /// Bar height usable for layout: finite and non-negative.
    pub fn bar_height(&self) -> f32 {
        if self.button_bar_height.is_finite() {
            self.button_bar_height.max(0.0)
        } else {
            DEFAULT_BAR_HEIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = PageViewConfig::default();
        assert_eq!(config.button_bar_height, 50.0);
        assert_eq!(config.button_bar_color, Color::BLACK);
        assert_eq!(config.selection_indicator_color, Color::WHITE);
        assert_eq!(config.switch_tint_color, Color::YELLOW);
        assert_eq!(config.button_font, Font::new("Helvetica-Bold", 14.0));
        assert_eq!(config.label_font, Font::new("Helvetica", 10.0));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: PageViewConfig =
            serde_json::from_str(r#"{ "style": "with_label", "number_of_pages": 9 }"#).unwrap();
        assert_eq!(config.style, ButtonBarStyle::WithLabel);
        assert_eq!(config.page_count(), MAX_PAGES);
        assert_eq!(config.button_bar_height, DEFAULT_BAR_HEIGHT);
    }

    #[test]
    fn bad_bar_height_is_sanitized() {
        let negative = PageViewConfig {
            button_bar_height: -3.0,
            ..Default::default()
        };
        assert_eq!(negative.bar_height(), 0.0);

        let nan = PageViewConfig {
            button_bar_height: f32::NAN,
            ..Default::default()
        };
        assert_eq!(nan.bar_height(), DEFAULT_BAR_HEIGHT);
    }
}
