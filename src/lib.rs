//! pageview - week planner demo for the `pageview_ui` paged view
//!
//! Builds a six page planner with captioned buttons and drives it through a
//! scripted, headless session.

pub mod config;
pub mod planner;
pub mod session;

pub use config::{ConfigError, DemoConfig, LogLevel, ThemeConfig};
pub use planner::{PlannerBehavior, PlannerMessage, WeekPlanner};
pub use session::{Report, Session, Step};
