#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Spendlog page glue.
//! Persists the dark/light theme choice and auto-dismisses flash notices on
//! the server-rendered expense pages.

pub mod page;

pub use crate::page::config::PageConfig;
pub use crate::page::controller::{InitReport, ThemeController, ToggleOutcome};
pub use crate::page::dismiss::{NoticeDismisser, SweepReport};
pub use crate::page::error::{ConfigError, UiError, UiResult};
pub use crate::page::ports::{
    DismissibleNotice, NoticeSource, PreferenceStore, Scheduler, ThemeSurface,
};
pub use crate::page::theme::{StoredPreference, ThemeLabels, ThemePreference, ThemeView};

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
