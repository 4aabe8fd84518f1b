//! Font descriptions handed to the host's text renderer.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BUTTON_FONT_FAMILY, DEFAULT_BUTTON_FONT_SIZE, DEFAULT_LABEL_FONT_FAMILY,
    DEFAULT_LABEL_FONT_SIZE,
};

/// A named font at a point size.
///
/// Only describes the font; resolving the family to glyphs belongs to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: f32,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// Helvetica-Bold 14, used for bar buttons.
    pub fn button_default() -> Self {
        Self::new(DEFAULT_BUTTON_FONT_FAMILY, DEFAULT_BUTTON_FONT_SIZE)
    }

    /// Helvetica 10, used for bar labels.
    pub fn label_default() -> Self {
        Self::new(DEFAULT_LABEL_FONT_FAMILY, DEFAULT_LABEL_FONT_SIZE)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::button_default()
    }
}
