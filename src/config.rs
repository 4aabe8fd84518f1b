//! Configuration file support for the demo.
//!
//! Every field has a default, so a config file only needs the settings it
//! changes. An empty object `{}` is a valid configuration.

use std::path::Path;

use pageview_ui::{ButtonBarStyle, Color, Font, PageViewConfig, Size};
use serde::{Deserialize, Serialize};

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Log level setting for the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Log verbosity level
    pub log_level: LogLevel,

    /// Size of the simulated window
    pub window: Size,

    /// Bar style of the planner
    pub style: ButtonBarStyle,

    /// Page shown first
    pub initial_page: usize,

    /// One entry per page; the name is used as the label caption
    pub days: Vec<String>,

    /// Page backgrounds, cycled through
    pub page_colors: Vec<Color>,

    /// Styling answered by the behavior provider; unset entries decline
    pub theme: ThemeConfig,
}

/// Styling overrides the demo's behavior provider answers with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub bar_height: Option<f32>,
    pub bar_color: Option<Color>,
    pub indicator_color: Option<Color>,
    pub switch_tint_color: Option<Color>,
    pub button_font: Option<Font>,
    pub label_font: Option<Font>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            window: Size::new(320.0, 568.0),
            style: ButtonBarStyle::WithLabel,
            initial_page: 1,
            days: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            page_colors: vec![Color::BLACK, Color::CYAN],
            theme: ThemeConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check values serde cannot check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Size { width, height } = self.window;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "window size {width}x{height} must be positive"
            )));
        }
        if self.days.is_empty() {
            return Err(ConfigError::Invalid("at least one day is required".into()));
        }
        if self.page_colors.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one page color is required".into(),
            ));
        }
        if self.initial_page >= self.days.len() {
            return Err(ConfigError::Invalid(format!(
                "initial page {} out of range for {} day(s)",
                self.initial_page,
                self.days.len()
            )));
        }
        if let Some(height) = self.theme.bar_height {
            if !height.is_finite() || height < 0.0 || height > self.window.height {
                return Err(ConfigError::Invalid(format!(
                    "bar height {height} does not fit the window"
                )));
            }
        }
        Ok(())
    }

    /// Page view properties matching this configuration.
    ///
    /// The planner's providers answer most of these anyway; the properties
    /// are the fallback for whatever they decline.
    pub fn page_view_config(&self) -> PageViewConfig {
        PageViewConfig {
            style: self.style,
            number_of_pages: self.days.len(),
            initial_index: self.initial_page,
            ..Default::default()
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error when reading the config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = DemoConfig::from_json("{}").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.days.len(), 6);
        assert_eq!(config.style, ButtonBarStyle::WithLabel);
    }

    #[test]
    fn default_round_trips() {
        let json = DemoConfig::default().to_json().unwrap();
        assert_eq!(DemoConfig::from_json(&json).unwrap(), DemoConfig::default());
    }

    #[test]
    fn partial_config_overrides() {
        let json = r#"{
            "log_level": "debug",
            "style": "with_right_switch",
            "initial_page": 0,
            "days": ["Sun", "Mon"],
            "theme": { "bar_height": 60.0, "bar_color": { "r": 0.2, "g": 0.2, "b": 0.2 } }
        }"#;
        let config = DemoConfig::from_json(json).unwrap();
        assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.style, ButtonBarStyle::WithRightSwitch);
        assert_eq!(config.theme.bar_height, Some(60.0));
        assert_eq!(config.theme.bar_color, Some(Color::rgb(0.2, 0.2, 0.2)));
        assert_eq!(config.theme.indicator_color, None);
        assert_eq!(config.page_colors, DemoConfig::default().page_colors);

        let props = config.page_view_config();
        assert_eq!(props.number_of_pages, 2);
        assert_eq!(props.initial_index, 0);
    }

    #[test]
    fn newer_version_is_rejected() {
        let result = DemoConfig::from_json(r#"{ "version": 99 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::VersionTooNew {
                file_version: 99,
                ..
            })
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        for json in [
            r#"{ "window": { "width": 0.0, "height": 400.0 } }"#,
            r#"{ "days": [] }"#,
            r#"{ "page_colors": [] }"#,
            r#"{ "initial_page": 6 }"#,
            r#"{ "theme": { "bar_height": 10000.0 } }"#,
        ] {
            assert!(
                matches!(DemoConfig::from_json(json), Err(ConfigError::Invalid(_))),
                "{json}"
            );
        }
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            DemoConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = DemoConfig::load(Path::new("/nonexistent/pageview-demo.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
