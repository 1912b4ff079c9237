//! Browser wiring: waits for the document, then starts the theme toggle and
//! the notice sweep.

mod dom;
mod notices;
mod storage;
mod timer;

use crate::page::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::page::controller::{InitReport, ThemeController};
use crate::page::dismiss::{NoticeDismisser, SweepReport};
use crate::page::error::UiError;
use crate::page::theme::StoredPreference;
use dom::BodyThemeSurface;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::window;
use notices::DocumentNotices;
use storage::BrowserStore;
use timer::TimeoutScheduler;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let Some(document) = window().document() else {
        console::error!("spendlog-ui: document unavailable");
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| start()).forget();
    } else {
        start();
    }
}

fn start() {
    let Some(document) = window().document() else {
        console::error!("spendlog-ui: document unavailable");
        return;
    };
    let config = load_config(&document);
    start_theme(&document, &config);
    start_dismisser(document, &config);
}

fn load_config(document: &Document) -> PageConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::warn!("page configuration ignored", err.to_string());
            PageConfig::default()
        }
    }
}

fn start_theme(document: &Document, config: &PageConfig) {
    let surface =
        match BodyThemeSurface::locate(document, &config.toggle_id, &config.dark_class) {
            Ok(surface) => surface,
            Err(err) => {
                console::warn!("theme toggle disabled", err.to_string());
                return;
            }
        };
    let store = BrowserStore::local();
    if !store.is_available() {
        console::warn!("local storage unavailable; theme choice will not persist");
    }
    let toggle = surface.toggle().clone();
    let controller = ThemeController::new(
        store,
        surface,
        config.storage_key.clone(),
        config.labels.clone(),
    );
    log_init(&controller.initialize(), &config.storage_key);

    // Lives as long as the page.
    EventListener::new(&toggle, "click", move |_| {
        if let Some(err) = controller.toggle().save_error {
            log_ui_error("theme preference not saved", &err);
        }
    })
    .forget();
}

fn start_dismisser(document: Document, config: &PageConfig) {
    let source = DocumentNotices::new(document, config.notice_selector.clone());
    NoticeDismisser::new(config.dismiss_delay()).schedule(
        &TimeoutScheduler,
        source,
        log_sweep,
    );
}

fn log_init(report: &InitReport, key: &str) {
    if let Some(err) = &report.load_error {
        log_ui_error("theme preference not loaded", err);
    }
    if let StoredPreference::Unrecognized(value) = &report.stored {
        console::warn!("unrecognized theme preference treated as disabled", key, value.as_str());
    }
}

fn log_sweep(result: Result<SweepReport, UiError>) {
    match result {
        Ok(report) => {
            for err in &report.failures {
                log_ui_error("notice close failed", err);
            }
            if report.found > 0 {
                console::debug!(format!(
                    "dismissed {} of {} notices",
                    report.closed, report.found
                ));
            }
        }
        Err(err) => log_ui_error("notice sweep failed", &err),
    }
}

fn log_ui_error(message: &'static str, err: &UiError) {
    console::error!(message, err.to_string());
}

/// Readable text for a thrown JS value.
pub(crate) fn describe_js(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
