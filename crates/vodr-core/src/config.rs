use serde::{Deserialize, Serialize};

use crate::error::VodrError;

/// Default structural paths into the YouTube Studio upload dialog. Brittle by
/// nature; overridable at install time when the host layout drifts.
const FILENAME_SELECTOR: &str = "#original-filename";
const TITLE_SELECTOR: &str = "#title-textarea > ytcp-form-input-container:nth-child(1) > div:nth-child(1) > div:nth-child(3) > div:nth-child(1) > ytcp-social-suggestion-input:nth-child(1) > div:nth-child(1)";
const DESCRIPTION_SELECTOR: &str = "#description-textarea > ytcp-form-input-container:nth-child(1) > div:nth-child(1) > div:nth-child(3) > div:nth-child(1) > ytcp-social-suggestion-input:nth-child(1) > div:nth-child(1)";

/// Tool configuration: hotkey binding and page selectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    pub hotkey: HotkeyConfig,
    pub selectors: SelectorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    /// `KeyboardEvent.key` value that triggers the tool. Ctrl plus this key
    /// opens the import prompt instead of filling.
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Element whose trimmed text is the uploaded file's original name.
    pub filename: String,
    /// Editable container backing the title field.
    pub title: String,
    /// Editable container backing the description field.
    pub description: String,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self { key: "F8".into() }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            filename: FILENAME_SELECTOR.into(),
            title: TITLE_SELECTOR.into(),
            description: DESCRIPTION_SELECTOR.into(),
        }
    }
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            hotkey: HotkeyConfig::default(),
            selectors: SelectorConfig::default(),
        }
    }
}

impl FillConfig {
    /// Parse config from a JSON string; omitted sections fall back to the
    /// built-in defaults. There is no filesystem in the page environment, so
    /// overrides travel as a string through `install()`.
    pub fn from_json(json: &str) -> Result<Self, VodrError> {
        serde_json::from_str(json).map_err(|e| VodrError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FillConfig::default();
        assert_eq!(config.hotkey.key, "F8");
        assert_eq!(config.selectors.filename, "#original-filename");
        assert!(config.selectors.title.starts_with("#title-textarea"));
        assert!(config
            .selectors
            .description
            .starts_with("#description-textarea"));
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = FillConfig::from_json(r#"{"hotkey": {"key": "F9"}}"#).unwrap();
        assert_eq!(config.hotkey.key, "F9");
        assert_eq!(config.selectors.filename, "#original-filename");
    }

    #[test]
    fn test_selector_override() {
        let config =
            FillConfig::from_json(r##"{"selectors": {"filename": "#file-name-label"}}"##).unwrap();
        assert_eq!(config.selectors.filename, "#file-name-label");
        // Untouched selectors keep their defaults.
        assert!(config.selectors.title.starts_with("#title-textarea"));
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        assert!(matches!(
            FillConfig::from_json("{nope").unwrap_err(),
            VodrError::Config(_)
        ));
    }
}
