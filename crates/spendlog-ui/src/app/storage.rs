//! `localStorage`-backed preference store.

use crate::app::describe_js;
use crate::page::error::{UiError, UiResult};
use crate::page::ports::PreferenceStore;
use gloo::utils::window;
use web_sys::Storage;

/// Raw string access to `window.localStorage`.
///
/// Values are stored verbatim (no JSON encoding) so other scripts reading
/// the key see plain `enabled` / `disabled`.
pub(crate) struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    /// Attach to local storage, or stay detached when the browser blocks it.
    pub(crate) fn local() -> Self {
        Self {
            storage: window().local_storage().ok().flatten(),
        }
    }

    pub(crate) const fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> UiResult<Option<String>> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        storage.get_item(key).map_err(|err| UiError::Storage {
            operation: "get",
            key: key.to_string(),
            detail: describe_js(&err),
        })
    }

    fn save(&self, key: &str, value: &str) -> UiResult<()> {
        let Some(storage) = &self.storage else {
            return Err(UiError::StorageUnavailable);
        };
        storage.set_item(key, value).map_err(|err| UiError::Storage {
            operation: "set",
            key: key.to_string(),
            detail: describe_js(&err),
        })
    }
}
