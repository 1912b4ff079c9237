//! Error types shared by the page controllers and their browser bindings.

use thiserror::Error;

/// Convenience alias for results produced by the UI glue.
pub type UiResult<T> = Result<T, UiError>;

/// Failures raised while touching the page or its storage.
///
/// None of these reach the user; the browser layer logs them and carries on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UiError {
    /// `window.document` was not available.
    #[error("document is not available")]
    MissingDocument,
    /// An element the page contract requires was not found.
    #[error("element '{id}' not found")]
    MissingElement {
        /// Identifier that was looked up.
        id: String,
    },
    /// Local storage is disabled or blocked for this origin.
    #[error("local storage is unavailable")]
    StorageUnavailable,
    /// A storage read or write failed.
    #[error("storage {operation} failed for '{key}': {detail}")]
    Storage {
        /// Operation that failed (`get` or `set`).
        operation: &'static str,
        /// Storage key involved.
        key: String,
        /// Detail reported by the browser.
        detail: String,
    },
    /// Closing a notice element failed.
    #[error("failed to close notice: {detail}")]
    NoticeClose {
        /// Detail reported by the toolkit.
        detail: String,
    },
    /// A CSS selector was rejected by the document.
    #[error("invalid selector '{selector}': {detail}")]
    Selector {
        /// Selector that was rejected.
        selector: String,
        /// Detail reported by the browser.
        detail: String,
    },
}

/// Errors raised while loading the page configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Payload was not valid JSON for [`crate::page::config::PageConfig`].
    #[error("failed to parse page configuration: {detail}")]
    Parse {
        /// Parser detail.
        detail: String,
    },
    /// Field contained an invalid value.
    #[error("invalid configuration field '{field}': {reason}")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            detail: err.to_string(),
        }
    }
}
