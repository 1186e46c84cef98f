use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml in the data directory. Everything is
/// optional; an absent file means all defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color overrides by theme key, as `#RRGGBB` strings
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_on_empty_document() {
        let config: PlannerConfig = toml::from_str("").unwrap();
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn parses_color_overrides() {
        let config: PlannerConfig = toml::from_str(
            r##"[ui.colors]
background = "#000000"
highlight = "#FF8800"
"##,
        )
        .unwrap();
        assert_eq!(
            config.ui.colors.get("background").map(String::as_str),
            Some("#000000")
        );
        assert_eq!(
            config.ui.colors.get("highlight").map(String::as_str),
            Some("#FF8800")
        );
    }
}
