//! Body class and toggle control bindings.

use crate::page::error::{UiError, UiResult};
use crate::page::ports::ThemeSurface;
use gloo::console;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Renders the theme onto `document.body` and the toggle control.
pub(crate) struct BodyThemeSurface {
    body: HtmlElement,
    toggle: HtmlElement,
    dark_class: String,
}

impl BodyThemeSurface {
    /// Resolve the body and the toggle element by id.
    pub(crate) fn locate(document: &Document, toggle_id: &str, dark_class: &str) -> UiResult<Self> {
        let body = document.body().ok_or_else(|| UiError::MissingElement {
            id: "body".to_string(),
        })?;
        let toggle = document
            .get_element_by_id(toggle_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| UiError::MissingElement {
                id: toggle_id.to_string(),
            })?;
        Ok(Self {
            body,
            toggle,
            dark_class: dark_class.to_string(),
        })
    }

    pub(crate) const fn toggle(&self) -> &HtmlElement {
        &self.toggle
    }
}

impl ThemeSurface for BodyThemeSurface {
    fn has_dark_class(&self) -> bool {
        self.body.class_list().contains(&self.dark_class)
    }

    fn set_dark_class(&self, present: bool) {
        let classes = self.body.class_list();
        let result = if present {
            classes.add_1(&self.dark_class)
        } else {
            classes.remove_1(&self.dark_class)
        };
        if let Err(err) = result {
            console::warn!("theme class update failed", err);
        }
    }

    fn set_label(&self, label: &str) {
        self.toggle.set_inner_text(label);
    }

    fn set_pressed(&self, pressed: bool) {
        let value = if pressed { "true" } else { "false" };
        if let Err(err) = self.toggle.set_attribute("aria-pressed", value) {
            console::warn!("aria-pressed update failed", err);
        }
    }
}
