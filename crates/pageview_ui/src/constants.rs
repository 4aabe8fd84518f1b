//! Centralized constants for pageview_ui
//!
//! All magic numbers and repeated constants are defined here for consistency
//! and easy maintenance.

use std::time::Duration;

// =============================================================================
// Page view
// =============================================================================

/// Maximum number of pages a page view will build
pub const MAX_PAGES: usize = 6;

/// Button bar height when neither the property nor the behavior provider sets one
pub const DEFAULT_BAR_HEIGHT: f32 = 50.0;

/// Fraction of the bar width left of the control switch
pub const SWITCH_X_FRACTION: f32 = 0.75;

/// Side of the control switch frame
pub const SWITCH_SIZE: f32 = 10.0;

// =============================================================================
// Typography
// =============================================================================

pub const DEFAULT_BUTTON_FONT_FAMILY: &str = "Helvetica-Bold";
pub const DEFAULT_BUTTON_FONT_SIZE: f32 = 14.0;

pub const DEFAULT_LABEL_FONT_FAMILY: &str = "Helvetica";
pub const DEFAULT_LABEL_FONT_SIZE: f32 = 10.0;

// =============================================================================
// Scrolling
// =============================================================================

/// Duration of an animated page change
pub const PAGE_ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Pointer travel below which a press in the page host still counts as a tap
pub const DRAG_THRESHOLD: f32 = 4.0;
