//! Theme preference model and the pure mapping from preference to page state.

use serde::Deserialize;

/// Stored value for the dark theme.
pub const ENABLED: &str = "enabled";
/// Stored value for the light theme.
pub const DISABLED: &str = "disabled";

/// Persisted dark-theme choice. Defaults to [`ThemePreference::Disabled`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    /// Dark theme applied.
    Enabled,
    /// Light theme applied.
    #[default]
    Disabled,
}

/// Result of interpreting a raw stored value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredPreference {
    /// A recognised value was stored.
    Known(ThemePreference),
    /// Nothing was stored under the key.
    Missing,
    /// Something other than `enabled`/`disabled` was stored.
    Unrecognized(String),
}

impl StoredPreference {
    /// Effective preference; anything but `enabled` means disabled.
    #[must_use]
    pub const fn preference(&self) -> ThemePreference {
        match self {
            Self::Known(pref) => *pref,
            Self::Missing | Self::Unrecognized(_) => ThemePreference::Disabled,
        }
    }
}

impl ThemePreference {
    /// Interpret the raw value read from storage.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> StoredPreference {
        match value {
            None => StoredPreference::Missing,
            Some(ENABLED) => StoredPreference::Known(Self::Enabled),
            Some(DISABLED) => StoredPreference::Known(Self::Disabled),
            Some(other) => StoredPreference::Unrecognized(other.to_string()),
        }
    }

    /// Preference implied by the presence of the dark class.
    #[must_use]
    pub const fn from_class_present(present: bool) -> Self {
        if present { Self::Enabled } else { Self::Disabled }
    }

    /// String written to storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => ENABLED,
            Self::Disabled => DISABLED,
        }
    }

    /// The opposite preference.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Enabled => Self::Disabled,
            Self::Disabled => Self::Enabled,
        }
    }

    /// Whether the dark theme is on.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Captions shown on the toggle control.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeLabels {
    /// Shown while light, inviting a switch to dark.
    pub dark_mode: String,
    /// Shown while dark, inviting a switch to light.
    pub light_mode: String,
}

impl Default for ThemeLabels {
    fn default() -> Self {
        Self {
            dark_mode: "🌙 Dark Mode".to_string(),
            light_mode: "☀️ Light Mode".to_string(),
        }
    }
}

/// Visual state the page must show for a preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeView<'a> {
    /// Whether the dark class belongs on the body.
    pub dark_class: bool,
    /// Toggle caption.
    pub label: &'a str,
    /// Value for `aria-pressed` on the toggle.
    pub pressed: bool,
}

impl<'a> ThemeView<'a> {
    /// Compute the page state for `pref`.
    #[must_use]
    pub fn for_preference(pref: ThemePreference, labels: &'a ThemeLabels) -> Self {
        let dark = pref.is_enabled();
        Self {
            dark_class: dark,
            label: if dark {
                &labels.light_mode
            } else {
                &labels.dark_mode
            },
            pressed: dark,
        }
    }
}
