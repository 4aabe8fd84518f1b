//! Headless interaction session.
//!
//! Plays the role of the host toolkit: delivers pointer events in window
//! coordinates, steps animations frame by frame and renders into a recording
//! [`Renderer`].

use std::rc::Rc;
use std::time::Duration;

use pageview_ui::prelude::*;
use pageview_ui::{ButtonBarStyle, DrawCommand};

use crate::config::DemoConfig;
use crate::planner::{PlannerBehavior, PlannerMessage, WeekPlanner};

/// Simulated frame interval.
pub const FRAME: Duration = Duration::from_millis(16);

/// Upper bound on frames spent waiting for an animation to settle.
const MAX_SETTLE_FRAMES: usize = 120;

/// Number of pointer moves a swipe is split into.
const SWIPE_MOVES: usize = 4;

/// One scripted user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Tap the bar button of page `index`
    TapButton(usize),
    /// Tap the middle of the visible page
    TapPage,
    /// Drag horizontally across the pages; negative moves forward
    Swipe { dx: f32 },
    /// Scroll wheel over the pages; positive moves back
    Wheel(f32),
    /// Tap the control switch
    ToggleSwitch,
    /// Let time pass
    Wait(Duration),
    /// Resize the window
    Resize(Size),
    /// Rebuild the page view from its providers
    Reload,
    /// Switch the bar style and rebuild
    Restyle(ButtonBarStyle),
    /// Change the bar color property and rebuild
    Recolor(Color),
}

/// Outcome of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub selected_index: usize,
    pub page_changes: Vec<usize>,
    pub switch_changes: Vec<bool>,
    pub messages: Vec<PlannerMessage>,
    /// Commands of the final frame
    pub draw_commands: usize,
    /// Texts of the final frame, in paint order
    pub texts: Vec<String>,
}

/// A page view wired to the week planner.
#[derive(Debug)]
pub struct Session {
    size: Size,
    view: PageView<PlannerMessage>,
    // The view only holds weak references; the session owns the providers.
    _planner: Rc<WeekPlanner>,
    behavior: Rc<PlannerBehavior>,
    messages: Vec<PlannerMessage>,
}

impl Session {
    /// Build and attach the planner page view.
    pub fn new(config: &DemoConfig) -> Self {
        let planner = Rc::new(WeekPlanner::new(config));
        let behavior = Rc::new(PlannerBehavior::new(config.theme.clone()));

        let mut view = PageView::new(config.window)
            .config(config.page_view_config())
            .with_content_provider(&planner)
            .with_behavior_provider(&behavior);
        view.attach();

        log::info!(
            "Planner ready: {} page(s), style {}, page {}",
            view.number_of_pages(),
            config.style.name(),
            view.selected_index()
        );

        Self {
            size: config.window,
            view,
            _planner: planner,
            behavior,
            messages: Vec::new(),
        }
    }

    /// The script the demo binary runs.
    pub fn default_script() -> Vec<Step> {
        vec![
            Step::TapButton(4),
            Step::Swipe { dx: -200.0 },
            Step::Wheel(1.0),
            Step::TapPage,
            Step::ToggleSwitch,
            Step::Resize(Size::new(375.0, 667.0)),
            Step::TapButton(0),
            Step::Wait(Duration::from_millis(100)),
        ]
    }

    pub fn view(&self) -> &PageView<PlannerMessage> {
        &self.view
    }

    pub fn behavior(&self) -> &PlannerBehavior {
        &self.behavior
    }

    /// Play all steps and report.
    pub fn run(&mut self, steps: &[Step]) -> Report {
        for step in steps {
            self.step(step);
        }
        self.report()
    }

    /// Play a single step, then let any animation it started finish.
    pub fn step(&mut self, step: &Step) {
        log::debug!("Step: {step:?}");
        match step {
            Step::TapButton(index) => match self.view.buttons().get(*index) {
                Some(button) => {
                    let at = button.frame().center();
                    self.tap(at);
                }
                None => log::warn!("No button for page {index}, skipping tap"),
            },
            Step::TapPage => {
                let at = self.view.page_host().frame().center();
                self.tap(at);
            }
            Step::Swipe { dx } => self.swipe(*dx),
            Step::Wheel(delta) => {
                let position = self.view.page_host().frame().center();
                self.send(Event::MouseWheel {
                    delta: *delta,
                    position,
                });
            }
            Step::ToggleSwitch => match self.view.control_switch() {
                Some(switch) => {
                    let at = switch.frame().center();
                    self.tap(at);
                }
                None => log::warn!("Style has no control switch, skipping toggle"),
            },
            Step::Wait(duration) => self.wait(*duration),
            Step::Resize(size) => {
                self.size = *size;
                self.view.layout(*size);
            }
            Step::Reload => self.view.reload(),
            Step::Restyle(style) => {
                self.view.set_style(*style);
                self.view.reload();
                log::info!("Restyled to {}", self.view.properties().style.name());
            }
            Step::Recolor(color) => {
                self.view.properties_mut().button_bar_color = *color;
                self.view.reload();
            }
        }
        self.settle();
    }

    /// Draw the current state.
    pub fn render(&self) -> Renderer {
        let mut renderer = Renderer::new(self.size);
        self.view.draw(&mut renderer, Rectangle::from_size(self.size));
        renderer
    }

    pub fn report(&self) -> Report {
        let mut renderer = self.render();
        let commands = renderer.take_commands();
        let texts = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::DrawText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();

        Report {
            selected_index: self.view.selected_index(),
            page_changes: self.behavior.page_changes(),
            switch_changes: self.behavior.switch_changes(),
            messages: self.messages.clone(),
            draw_commands: commands.len(),
            texts,
        }
    }

    fn send(&mut self, event: Event) {
        let bounds = Rectangle::from_size(self.size);
        if let Some(message) = self.view.on_event(&event, bounds) {
            log::info!("Page message: {message:?}");
            self.messages.push(message);
        }
    }

    fn tap(&mut self, position: Point) {
        self.send(Event::MousePressed {
            button: MouseButton::Left,
            position,
        });
        self.send(Event::MouseReleased {
            button: MouseButton::Left,
            position,
        });
    }

    fn swipe(&mut self, dx: f32) {
        let start = self.view.page_host().frame().center();
        self.send(Event::MousePressed {
            button: MouseButton::Left,
            position: start,
        });
        let mut position = start;
        for i in 1..=SWIPE_MOVES {
            position = Point::new(start.x + dx * i as f32 / SWIPE_MOVES as f32, start.y);
            self.send(Event::MouseMoved { position });
        }
        self.send(Event::MouseReleased {
            button: MouseButton::Left,
            position,
        });
    }

    fn wait(&mut self, duration: Duration) {
        let mut elapsed = Duration::ZERO;
        while elapsed < duration {
            self.view.advance(FRAME);
            elapsed += FRAME;
        }
    }

    fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_FRAMES {
            if !self.view.is_scrolling() {
                return;
            }
            self.view.advance(FRAME);
        }
        log::warn!("Animation still running after {MAX_SETTLE_FRAMES} frames");
    }
}
