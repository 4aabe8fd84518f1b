use serde::{Deserialize, Serialize};

/// Layout of the button bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonBarStyle {
    /// Buttons only
    #[default]
    Default,
    /// A caption label above every button
    WithLabel,
    /// Buttons on the left three quarters, a toggle switch on the right
    WithRightSwitch,
}

impl ButtonBarStyle {
    /// Get the display name for this style.
    pub fn name(&self) -> &'static str {
        match self {
            ButtonBarStyle::Default => "Default",
            ButtonBarStyle::WithLabel => "With label",
            ButtonBarStyle::WithRightSwitch => "With right switch",
        }
    }

    /// Get all styles.
    pub fn all() -> &'static [ButtonBarStyle] {
        &[
            ButtonBarStyle::Default,
            ButtonBarStyle::WithLabel,
            ButtonBarStyle::WithRightSwitch,
        ]
    }

    pub fn has_labels(&self) -> bool {
        matches!(self, ButtonBarStyle::WithLabel)
    }

    pub fn has_switch(&self) -> bool {
        matches!(self, ButtonBarStyle::WithRightSwitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&ButtonBarStyle::WithRightSwitch).unwrap();
        assert_eq!(json, "\"with_right_switch\"");
        let style: ButtonBarStyle = serde_json::from_str("\"with_label\"").unwrap();
        assert_eq!(style, ButtonBarStyle::WithLabel);
    }

    #[test]
    fn only_one_style_gets_labels_or_switch() {
        assert_eq!(ButtonBarStyle::all().iter().filter(|s| s.has_labels()).count(), 1);
        assert_eq!(ButtonBarStyle::all().iter().filter(|s| s.has_switch()).count(), 1);
    }
}
