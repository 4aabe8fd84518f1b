//! Button bar and page geometry.
//!
//! Everything here is a pure function of the bar style, the page count and
//! the bar bounds; a page view recomputes it on every rebuild.
//!
//! All bar measurements derive from a vertical unit `gap_v`, a fraction of
//! the bar height:
//!
//! ```text
//! Default / WithRightSwitch (height = 6 gap_v)   WithLabel (height = 7 gap_v)
//! ┌──────────────────────────────┐               ┌──────────────────────────────┐
//! │   ┌────┐  ┌────┐  ┌────┐     │               │   Mon     Tue     Wed        │ ← labels, 1.5 gap_v
//! │   │ 1  │  │ 2  │  │ 3  │     │               │   ┌────┐  ┌────┐  ┌────┐     │
//! │   └────┘  └────┘  └────┘     │               │   │ 1  │  │ 2  │  │ 3  │     │
//! └──────────────────────────────┘               │   └────┘  └────┘  └────┘     │
//!  gap_h  4gv  2gv                               └──────────────────────────────┘
//! ```

use crate::constants::{SWITCH_SIZE, SWITCH_X_FRACTION};
use crate::layout::{Rectangle, Size};

use super::ButtonBarStyle;

/// Snapshot of the bar layout.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    /// Vertical unit all other measurements derive from
    pub gap_v: f32,
    /// Horizontal margin (or spacing, with a switch) around the buttons
    pub gap_h: f32,
    /// Side of a button and of the selection indicator
    pub button_width: f32,
    /// Height of a caption label, zero without labels
    pub label_width: f32,
    /// Top of the selection indicator
    pub indicator_y: f32,
    /// Corner radius of buttons and indicator
    pub corner_radius: f32,
    /// Button frames, index `i` belongs to page `i`
    pub buttons: Vec<Rectangle>,
    /// Label frames, empty unless the style has labels
    pub labels: Vec<Rectangle>,
    /// Indicator frame at the first button slot
    pub indicator: Rectangle,
    /// Control switch frame, only for the switch style
    pub switch: Option<Rectangle>,
}

/// Lay out the button bar for `pages` pages inside `bar`.
pub fn compute_layout(style: ButtonBarStyle, pages: usize, bar: Rectangle) -> BarGeometry {
    let n = pages as f32;
    // Gaps between buttons; zero pages has no gaps rather than a negative count.
    let inner_gaps = pages.saturating_sub(1) as f32;

    let (gap_v, label_width, indicator_y, gap_h, stride, button_y, switch) = match style {
        ButtonBarStyle::Default => {
            let gap_v = bar.height / 6.0;
            let button_width = 4.0 * gap_v;
            let gap_h = (bar.width - n * button_width - inner_gaps * 2.0 * gap_v) / 2.0;
            (gap_v, 0.0, gap_v, gap_h, 6.0 * gap_v, 2.0 * gap_v, None)
        }
        ButtonBarStyle::WithLabel => {
            let gap_v = bar.height / 7.0;
            let button_width = 4.0 * gap_v;
            let gap_h = (bar.width - n * button_width - inner_gaps * 2.0 * gap_v) / 2.0;
            (gap_v, 1.5 * gap_v, 2.0 * gap_v, gap_h, 6.0 * gap_v, 2.0 * gap_v, None)
        }
        ButtonBarStyle::WithRightSwitch => {
            let switch_x = bar.width * SWITCH_X_FRACTION;
            let switch = Rectangle::new(
                bar.x + switch_x,
                bar.y + (bar.height - SWITCH_SIZE) / 2.0,
                SWITCH_SIZE,
                SWITCH_SIZE,
            );

            let content_width = switch_x;
            let gap_v = bar.height / 6.0;
            let button_width = 4.0 * gap_v;
            let gap_h = (content_width - n * button_width) / (n + 1.0);
            (
                gap_v,
                0.0,
                gap_v,
                gap_h,
                gap_h.max(0.0) + button_width,
                gap_v,
                Some(switch),
            )
        }
    };

    let button_width = 4.0 * gap_v;
    let gap_h = gap_h.max(0.0);

    let buttons: Vec<Rectangle> = (0..pages)
        .map(|i| {
            Rectangle::new(
                bar.x + gap_h + i as f32 * stride,
                bar.y + button_y,
                button_width,
                button_width,
            )
        })
        .collect();

    let labels = if style.has_labels() {
        buttons
            .iter()
            .map(|b| Rectangle::new(b.x, bar.y, button_width, label_width))
            .collect()
    } else {
        Vec::new()
    };

    BarGeometry {
        gap_v,
        gap_h,
        button_width,
        label_width,
        indicator_y,
        corner_radius: 2.0 * gap_v,
        buttons,
        labels,
        indicator: Rectangle::new(
            bar.x + gap_h,
            bar.y + indicator_y,
            button_width,
            button_width,
        ),
        switch,
    }
}

/// Frames of the pages in the host's content space: page `i` starts at
/// `i * host.width`.
pub fn page_frames(host: Size, pages: usize) -> Vec<Rectangle> {
    (0..pages)
        .map(|i| Rectangle::new(host.width * i as f32, 0.0, host.width, host.height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_PAGES;

    const EPS: f32 = 1e-3;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn default_style_formulas() {
        let g = compute_layout(ButtonBarStyle::Default, 3, Rectangle::new(0.0, 0.0, 300.0, 60.0));
        assert!(approx(g.gap_v, 10.0));
        assert!(approx(g.button_width, 40.0));
        assert!(approx(g.gap_h, 70.0));
        assert!(approx(g.indicator_y, 10.0));
        let xs: Vec<f32> = g.buttons.iter().map(|b| b.x).collect();
        assert!(approx(xs[0], 70.0) && approx(xs[1], 130.0) && approx(xs[2], 190.0));
        assert!(g.buttons.iter().all(|b| approx(b.y, 20.0)));
        assert!(g.labels.is_empty());
        assert!(g.switch.is_none());
        assert_eq!(g.indicator, Rectangle::new(70.0, 10.0, 40.0, 40.0));
        assert!(approx(g.corner_radius, 20.0));
    }

    #[test]
    fn label_style_places_labels_above_buttons() {
        let g = compute_layout(ButtonBarStyle::WithLabel, 2, Rectangle::new(0.0, 0.0, 300.0, 70.0));
        assert!(approx(g.gap_v, 10.0));
        assert!(approx(g.label_width, 15.0));
        assert!(approx(g.gap_h, 100.0));
        assert!(approx(g.indicator_y, 20.0));
        assert_eq!(g.labels.len(), 2);
        for (label, button) in g.labels.iter().zip(&g.buttons) {
            assert!(approx(label.x, button.x));
            assert!(approx(label.y, 0.0));
            assert!(approx(label.height, 15.0));
            assert!(approx(label.width, button.width));
            assert!(approx(button.y, 20.0));
        }
        assert!(approx(g.buttons[1].x, 160.0));
    }

    #[test]
    fn switch_style_reserves_right_quarter() {
        let g = compute_layout(
            ButtonBarStyle::WithRightSwitch,
            2,
            Rectangle::new(0.0, 0.0, 400.0, 60.0),
        );
        let switch = g.switch.unwrap();
        assert!(approx(switch.x, 300.0));
        assert!(approx(switch.center().y, 30.0));
        assert!(approx(switch.width, SWITCH_SIZE));

        assert!(approx(g.gap_h, 220.0 / 3.0));
        assert!(approx(g.buttons[0].x, 220.0 / 3.0));
        assert!(approx(g.buttons[1].x, 220.0 / 3.0 * 2.0 + 40.0));
        assert!(g.buttons.iter().all(|b| approx(b.y, 10.0)));
        assert!(g.buttons.iter().all(|b| b.right() <= switch.x));
    }

    #[test]
    fn zero_pages_builds_nothing() {
        for &style in ButtonBarStyle::all() {
            let g = compute_layout(style, 0, Rectangle::new(0.0, 0.0, 320.0, 50.0));
            assert!(g.buttons.is_empty());
            assert!(g.labels.is_empty());
            assert!(g.gap_h >= 0.0);
        }
        let g = compute_layout(ButtonBarStyle::Default, 0, Rectangle::new(0.0, 0.0, 300.0, 60.0));
        assert!(approx(g.gap_h, 150.0));
    }

    #[test]
    fn every_layout_fits_the_bar() {
        for width in [320.0, 375.0, 414.0] {
            let bar = Rectangle::new(0.0, 0.0, width, 50.0);
            for &style in ButtonBarStyle::all() {
                for pages in 0..=MAX_PAGES {
                    let g = compute_layout(style, pages, bar);
                    assert!(g.gap_v >= 0.0 && g.gap_h >= 0.0, "{style:?} {pages}");
                    assert!(g.button_width >= 0.0 && g.label_width >= 0.0);
                    assert_eq!(g.buttons.len(), pages);
                    for b in &g.buttons {
                        assert!(b.x >= 0.0 && b.right() <= width, "{style:?} {pages} {b:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn page_frames_tile_horizontally() {
        let frames = page_frames(Size::new(320.0, 400.0), 3);
        assert_eq!(frames[2], Rectangle::new(640.0, 0.0, 320.0, 400.0));
        assert!(page_frames(Size::new(320.0, 400.0), 0).is_empty());
    }
}
