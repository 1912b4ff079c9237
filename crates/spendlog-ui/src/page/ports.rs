//! Seams between the page controllers and the browser.
//!
//! The wasm build implements these over `localStorage`, the DOM, the
//! Bootstrap alert plugin and `setTimeout`; tests substitute in-memory fakes.

use crate::page::error::UiResult;
use std::time::Duration;

/// Key/value storage that survives page loads.
pub trait PreferenceStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be read.
    fn load(&self, key: &str) -> UiResult<Option<String>>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage rejects the write.
    fn save(&self, key: &str, value: &str) -> UiResult<()>;
}

/// The document body class flag plus the toggle control.
pub trait ThemeSurface {
    /// Whether the dark class is currently on the body.
    fn has_dark_class(&self) -> bool;
    /// Add or remove the dark class.
    fn set_dark_class(&self, present: bool);
    /// Replace the toggle's visible text.
    fn set_label(&self, label: &str);
    /// Reflect the state on the toggle's `aria-pressed`.
    fn set_pressed(&self, pressed: bool);
}

/// A banner that can be closed via the UI toolkit.
pub trait DismissibleNotice {
    /// Run the toolkit's close behaviour on this notice.
    ///
    /// # Errors
    ///
    /// Returns an error when the toolkit refuses to close the element.
    fn close(&self) -> UiResult<()>;
}

/// Finds the notices present in the document right now.
pub trait NoticeSource {
    /// Notice handle type.
    type Notice: DismissibleNotice;

    /// Enumerate notices at call time.
    ///
    /// # Errors
    ///
    /// Returns an error when the lookup itself fails.
    fn collect(&self) -> UiResult<Vec<Self::Notice>>;
}

/// One-shot deferred execution.
pub trait Scheduler {
    /// Run `task` once after `delay`. Scheduled tasks cannot be cancelled.
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>);
}
