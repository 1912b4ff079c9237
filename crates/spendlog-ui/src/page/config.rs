//! Page configuration: element ids, storage key, captions and the sweep delay.
//!
//! Pages may override any field through an inline JSON block
//! (`<script type="application/json" id="spendlog-ui-config">`); anything
//! omitted keeps its default.

use crate::page::error::ConfigError;
use crate::page::theme::ThemeLabels;
use serde::Deserialize;
use std::time::Duration;

/// Id of the optional inline configuration block.
pub const CONFIG_ELEMENT_ID: &str = "spendlog-ui-config";
/// Default storage key for the theme preference.
pub const DEFAULT_STORAGE_KEY: &str = "darkMode";
/// Default body class applied for the dark theme.
pub const DEFAULT_DARK_CLASS: &str = "dark-mode";
/// Default id of the toggle control.
pub const DEFAULT_TOGGLE_ID: &str = "darkModeToggle";
/// Default selector matching notice banners.
pub const DEFAULT_NOTICE_SELECTOR: &str = ".alert";
/// Default delay before notices are dismissed.
pub const DEFAULT_DISMISS_DELAY_MS: u64 = 5_000;
/// Largest delay `setTimeout` accepts without wrapping (`i32::MAX`).
pub const MAX_DISMISS_DELAY_MS: u64 = 2_147_483_647;

/// Runtime settings for the page glue.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Storage key holding `enabled` / `disabled`.
    pub storage_key: String,
    /// Class toggled on the document body.
    pub dark_class: String,
    /// Id of the toggle control.
    pub toggle_id: String,
    /// Selector for notice banners.
    pub notice_selector: String,
    /// Milliseconds between initialization and the notice sweep.
    pub dismiss_delay_ms: u64,
    /// Toggle captions.
    pub labels: ThemeLabels,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
            toggle_id: DEFAULT_TOGGLE_ID.to_string(),
            notice_selector: DEFAULT_NOTICE_SELECTOR.to_string(),
            dismiss_delay_ms: DEFAULT_DISMISS_DELAY_MS,
            labels: ThemeLabels::default(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON override block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::InvalidField`] when a value fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable against the DOM.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty("storage_key", &self.storage_key)?;
        require_non_empty("dark_class", &self.dark_class)?;
        require_non_empty("toggle_id", &self.toggle_id)?;
        require_non_empty("notice_selector", &self.notice_selector)?;
        if self.dark_class.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidField {
                field: "dark_class",
                reason: "contains_whitespace",
            });
        }
        if self.dismiss_delay_ms > MAX_DISMISS_DELAY_MS {
            return Err(ConfigError::InvalidField {
                field: "dismiss_delay_ms",
                reason: "too_large",
            });
        }
        Ok(())
    }

    /// Sweep delay as a [`Duration`].
    #[must_use]
    pub const fn dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.dismiss_delay_ms)
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            field,
            reason: "empty",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_contract() {
        let config = PageConfig::default();
        assert_eq!(config.storage_key, "darkMode");
        assert_eq!(config.dark_class, "dark-mode");
        assert_eq!(config.toggle_id, "darkModeToggle");
        assert_eq!(config.notice_selector, ".alert");
        assert_eq!(config.dismiss_delay(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_override_keeps_other_defaults() -> Result<(), ConfigError> {
        let config = PageConfig::from_json(
            r#"{"dismiss_delay_ms": 0, "labels": {"dark_mode": "Dark"}}"#,
        )?;
        assert_eq!(config.dismiss_delay(), Duration::ZERO);
        assert_eq!(config.labels.dark_mode, "Dark");
        assert_eq!(config.labels.light_mode, "☀️ Light Mode");
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = PageConfig::from_json(r#"{"storageKey": "x"}"#);
        assert!(matches!(err, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn delays_beyond_timer_range_are_rejected() -> Result<(), ConfigError> {
        assert_eq!(
            PageConfig::from_json(r#"{"dismiss_delay_ms": 3000000000}"#),
            Err(ConfigError::InvalidField {
                field: "dismiss_delay_ms",
                reason: "too_large",
            })
        );
        let edge = PageConfig::from_json(r#"{"dismiss_delay_ms": 2147483647}"#)?;
        assert_eq!(edge.dismiss_delay_ms, MAX_DISMISS_DELAY_MS);
        Ok(())
    }

    #[test]
    fn empty_or_spaced_values_fail_validation() {
        assert_eq!(
            PageConfig::from_json(r#"{"toggle_id": " "}"#),
            Err(ConfigError::InvalidField {
                field: "toggle_id",
                reason: "empty",
            })
        );
        assert_eq!(
            PageConfig::from_json(r#"{"dark_class": "dark mode"}"#),
            Err(ConfigError::InvalidField {
                field: "dark_class",
                reason: "contains_whitespace",
            })
        );
    }
}
