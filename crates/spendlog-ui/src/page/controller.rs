//! Theme controller: applies the stored preference on load and flips it on demand.

use crate::page::error::UiError;
use crate::page::ports::{PreferenceStore, ThemeSurface};
use crate::page::theme::{StoredPreference, ThemeLabels, ThemePreference, ThemeView};

/// What happened while applying the stored preference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitReport {
    /// Preference now displayed.
    pub preference: ThemePreference,
    /// How the stored value was interpreted.
    pub stored: StoredPreference,
    /// Read failure, when storage could not be consulted.
    pub load_error: Option<UiError>,
}

/// What happened on a toggle activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Preference now displayed.
    pub preference: ThemePreference,
    /// Write failure; the page is toggled regardless.
    pub save_error: Option<UiError>,
}

impl ToggleOutcome {
    /// Whether the new preference reached storage.
    #[must_use]
    pub const fn persisted(&self) -> bool {
        self.save_error.is_none()
    }
}

/// Keeps the body class, toggle caption and stored preference in step.
#[derive(Debug)]
pub struct ThemeController<S, D> {
    store: S,
    surface: D,
    key: String,
    labels: ThemeLabels,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeController<S, D> {
    /// Build a controller writing `key` in `store` and rendering onto `surface`.
    #[must_use]
    pub fn new(store: S, surface: D, key: impl Into<String>, labels: ThemeLabels) -> Self {
        Self {
            store,
            surface,
            key: key.into(),
            labels,
        }
    }

    /// Read the stored preference and render it. Never writes storage.
    #[must_use]
    pub fn initialize(&self) -> InitReport {
        let (stored, load_error) = match self.store.load(&self.key) {
            Ok(value) => (ThemePreference::from_stored(value.as_deref()), None),
            Err(err) => (StoredPreference::Missing, Some(err)),
        };
        let preference = stored.preference();
        self.render(preference);
        InitReport {
            preference,
            stored,
            load_error,
        }
    }

    /// Flip the dark class as currently displayed, then re-render and persist.
    #[must_use]
    pub fn toggle(&self) -> ToggleOutcome {
        self.surface.set_dark_class(!self.surface.has_dark_class());
        let preference = ThemePreference::from_class_present(self.surface.has_dark_class());
        self.render(preference);
        let save_error = self.store.save(&self.key, preference.as_str()).err();
        ToggleOutcome {
            preference,
            save_error,
        }
    }

    /// Borrow the rendering surface.
    #[must_use]
    pub const fn surface(&self) -> &D {
        &self.surface
    }

    /// Borrow the preference store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn render(&self, preference: ThemePreference) {
        let view = ThemeView::for_preference(preference, &self.labels);
        self.surface.set_dark_class(view.dark_class);
        self.surface.set_label(view.label);
        self.surface.set_pressed(view.pressed);
    }
}
