//! Week planner: the demo's content and behavior providers.

use std::cell::{Cell, RefCell};

use pageview_ui::prelude::*;
use pageview_ui::{Solid, TextAlign};

use crate::config::{DemoConfig, ThemeConfig};

/// Messages produced by planner pages.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerMessage {
    /// The page of the given day was tapped
    DayTapped(usize),
}

/// Supplies one page per configured day.
#[derive(Debug, Clone)]
pub struct WeekPlanner {
    days: Vec<String>,
    page_colors: Vec<Color>,
    initial_page: usize,
}

impl WeekPlanner {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            days: config.days.clone(),
            page_colors: config.page_colors.clone(),
            initial_page: config.initial_page,
        }
    }

    /// Background of page `index`, cycling through the configured colors.
    pub fn page_color(&self, index: usize) -> Color {
        if self.page_colors.is_empty() {
            return Color::BLACK;
        }
        self.page_colors[index % self.page_colors.len()]
    }
}

impl ContentProvider<PlannerMessage> for WeekPlanner {
    fn title_for_button(&self, index: usize) -> String {
        (index + 1).to_string()
    }

    fn view_for_page(&self, index: usize) -> Element<PlannerMessage> {
        let day = self.days.get(index).cloned().unwrap_or_default();
        Element::new(DayPage::new(index, day, self.page_color(index)))
    }

    fn number_of_pages(&self) -> Option<usize> {
        Some(self.days.len())
    }

    fn initial_index(&self) -> Option<usize> {
        Some(self.initial_page)
    }

    fn title_for_label(&self, index: usize) -> Option<String> {
        self.days.get(index).cloned()
    }
}

/// A full-page day view: a colored background with the day's name.
struct DayPage {
    index: usize,
    day: String,
    background: Solid,
}

impl DayPage {
    fn new(index: usize, day: String, color: Color) -> Self {
        Self {
            index,
            day,
            background: solid(color),
        }
    }

    /// Title color readable on the page background.
    fn title_color(&self) -> Color {
        let c = self.background.color();
        if 0.299 * c.r + 0.587 * c.g + 0.114 * c.b > 0.5 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}

impl Widget<PlannerMessage> for DayPage {
    fn layout(&mut self, available: Size) -> Size {
        available
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Rectangle) {
        Widget::<PlannerMessage>::draw(&self.background, renderer, bounds);
        renderer.draw_text(
            &self.day,
            bounds,
            self.title_color(),
            &Font::new("Helvetica-Bold", 24.0),
            TextAlign::Center,
        );
    }

    fn on_event(&mut self, event: &Event, bounds: Rectangle) -> Option<PlannerMessage> {
        match event {
            Event::MouseReleased {
                button: MouseButton::Left,
                position,
            } if bounds.contains(*position) => Some(PlannerMessage::DayTapped(self.index)),
            _ => None,
        }
    }
}

/// Answers styling from the theme and records notifications.
#[derive(Debug, Default)]
pub struct PlannerBehavior {
    theme: ThemeConfig,
    current_page: Cell<Option<usize>>,
    page_changes: RefCell<Vec<usize>>,
    switch_changes: RefCell<Vec<bool>>,
}

impl PlannerBehavior {
    pub fn new(theme: ThemeConfig) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    /// Last page reported by the page view, if any.
    pub fn current_page(&self) -> Option<usize> {
        self.current_page.get()
    }

    /// Every page change notification received so far.
    pub fn page_changes(&self) -> Vec<usize> {
        self.page_changes.borrow().clone()
    }

    /// Every switch notification received so far.
    pub fn switch_changes(&self) -> Vec<bool> {
        self.switch_changes.borrow().clone()
    }
}

impl BehaviorProvider for PlannerBehavior {
    fn bar_height(&self) -> Option<f32> {
        self.theme.bar_height
    }

    fn bar_color(&self) -> Option<Color> {
        self.theme.bar_color
    }

    fn indicator_color(&self) -> Option<Color> {
        self.theme.indicator_color
    }

    fn switch_tint_color(&self) -> Option<Color> {
        self.theme.switch_tint_color
    }

    fn button_font(&self) -> Option<Font> {
        self.theme.button_font.clone()
    }

    fn label_font(&self) -> Option<Font> {
        self.theme.label_font.clone()
    }

    fn on_switch_changed(&self, value: bool) {
        log::info!("Planner switch turned {}", if value { "on" } else { "off" });
        self.switch_changes.borrow_mut().push(value);
    }

    fn on_page_changed(&self, index: usize) {
        log::info!("Planner moved to page {index}");
        self.current_page.set(Some(index));
        self.page_changes.borrow_mut().push(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planner_answers_week_content() {
        let planner = WeekPlanner::new(&DemoConfig::default());
        assert_eq!(planner.number_of_pages(), Some(6));
        assert_eq!(planner.initial_index(), Some(1));
        assert_eq!(planner.selected_index(), None);
        assert_eq!(planner.title_for_button(0), "1");
        assert_eq!(planner.title_for_button(5), "6");
        assert_eq!(planner.title_for_label(1).as_deref(), Some("Tue"));
        assert_eq!(planner.title_for_label(6), None);
    }

    #[test]
    fn pages_alternate_black_and_cyan() {
        let planner = WeekPlanner::new(&DemoConfig::default());
        let colors: Vec<Color> = (0..4).map(|i| planner.page_color(i)).collect();
        assert_eq!(colors, vec![Color::BLACK, Color::CYAN, Color::BLACK, Color::CYAN]);
    }

    #[test]
    fn day_page_draws_background_and_name() {
        let planner = WeekPlanner::new(&DemoConfig::default());
        let mut page = planner.view_for_page(2);
        page.set_frame(Rectangle::new(0.0, 0.0, 320.0, 400.0));
        let mut renderer = Renderer::new(Size::new(320.0, 400.0));
        page.draw(&mut renderer, Point::zero());

        assert_eq!(renderer.text_at(Point::new(160.0, 200.0)), Some("Wed"));
        assert!(renderer.commands().iter().any(|c| matches!(
            c,
            pageview_ui::DrawCommand::FillRect { color, .. } if *color == Color::BLACK
        )));
    }

    #[test]
    fn day_page_reports_taps() {
        let mut page = DayPage::new(3, "Thu".into(), Color::CYAN);
        let bounds = Rectangle::new(0.0, 50.0, 320.0, 400.0);
        let inside = Event::MouseReleased {
            button: MouseButton::Left,
            position: Point::new(10.0, 60.0),
        };
        let outside = Event::MouseReleased {
            button: MouseButton::Left,
            position: Point::new(10.0, 10.0),
        };
        assert_eq!(page.on_event(&inside, bounds), Some(PlannerMessage::DayTapped(3)));
        assert_eq!(page.on_event(&outside, bounds), None);
        assert_eq!(page.title_color(), Color::BLACK);
    }

    #[test]
    fn behavior_declines_unset_theme_entries() {
        let behavior = PlannerBehavior::new(ThemeConfig {
            bar_height: Some(64.0),
            ..Default::default()
        });
        assert_eq!(behavior.bar_height(), Some(64.0));
        assert_eq!(behavior.bar_color(), None);
        assert_eq!(behavior.label_font(), None);
    }

    #[test]
    fn behavior_records_notifications() {
        let behavior = PlannerBehavior::default();
        behavior.on_page_changed(2);
        behavior.on_page_changed(3);
        behavior.on_switch_changed(true);
        assert_eq!(behavior.current_page(), Some(3));
        assert_eq!(behavior.page_changes(), vec![2, 3]);
        assert_eq!(behavior.switch_changes(), vec![true]);
    }
}
