use spendlog_ui::{
    DismissibleNotice, NoticeDismisser, NoticeSource, PageConfig, PreferenceStore, Scheduler,
    SweepReport, ThemeController, ThemePreference, ThemeSurface, UiError, UiResult,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Default)]
struct SharedStorage(Rc<RefCell<HashMap<String, String>>>);

impl SharedStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }
}

impl PreferenceStore for SharedStorage {
    fn load(&self, key: &str) -> UiResult<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> UiResult<()> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct Body {
    dark: Cell<bool>,
    label: RefCell<String>,
    pressed: Cell<bool>,
}

impl ThemeSurface for Body {
    fn has_dark_class(&self) -> bool {
        self.dark.get()
    }

    fn set_dark_class(&self, present: bool) {
        self.dark.set(present);
    }

    fn set_label(&self, label: &str) {
        label.clone_into(&mut self.label.borrow_mut());
    }

    fn set_pressed(&self, pressed: bool) {
        self.pressed.set(pressed);
    }
}

#[derive(Clone)]
struct Alert {
    open: Rc<Cell<bool>>,
}

impl DismissibleNotice for Alert {
    fn close(&self) -> UiResult<()> {
        self.open.set(false);
        Ok(())
    }
}

struct Document {
    alerts: Vec<Alert>,
}

impl NoticeSource for Document {
    type Notice = Alert;

    fn collect(&self) -> UiResult<Vec<Alert>> {
        Ok(self.alerts.iter().filter(|a| a.open.get()).cloned().collect())
    }
}

struct Immediate;

impl Scheduler for Immediate {
    fn schedule_once(&self, _delay: Duration, task: Box<dyn FnOnce()>) {
        task();
    }
}

fn page(storage: &SharedStorage, config: &PageConfig) -> ThemeController<SharedStorage, Body> {
    ThemeController::new(
        storage.clone(),
        Body::default(),
        config.storage_key.clone(),
        config.labels.clone(),
    )
}

#[test]
fn toggle_parity_matches_initial_state() {
    let config = PageConfig::default();
    let storage = SharedStorage::default();
    let ctrl = page(&storage, &config);
    let _ = ctrl.initialize();

    for clicks in 1..=6 {
        let outcome = ctrl.toggle();
        let odd = clicks % 2 == 1;
        assert_eq!(outcome.preference.is_enabled(), odd);
        assert_eq!(ctrl.surface().dark.get(), odd);
        let expected_label = if odd {
            &config.labels.light_mode
        } else {
            &config.labels.dark_mode
        };
        assert_eq!(&*ctrl.surface().label.borrow(), expected_label);
        assert_eq!(
            storage.get("darkMode").as_deref() == Some("enabled"),
            ctrl.surface().dark.get()
        );
    }
}

#[test]
fn preference_survives_reload() {
    let config = PageConfig::default();
    let storage = SharedStorage::default();

    let first_load = page(&storage, &config);
    let _ = first_load.initialize();
    let _ = first_load.toggle();

    let second_load = page(&storage, &config);
    let report = second_load.initialize();
    assert_eq!(report.preference, ThemePreference::Enabled);
    assert!(second_load.surface().dark.get());
    assert_eq!(*second_load.surface().label.borrow(), "☀️ Light Mode");
}

#[test]
fn custom_storage_key_and_labels_are_honoured() -> Result<(), spendlog_ui::ConfigError> {
    let config = PageConfig::from_json(
        r#"{"storage_key": "theme", "labels": {"dark_mode": "Dark", "light_mode": "Light"}}"#,
    )?;
    let storage = SharedStorage::default();
    let ctrl = page(&storage, &config);
    let _ = ctrl.initialize();
    assert_eq!(*ctrl.surface().label.borrow(), "Dark");

    let _ = ctrl.toggle();
    assert_eq!(storage.get("theme").as_deref(), Some("enabled"));
    assert_eq!(storage.get("darkMode"), None);
    assert_eq!(*ctrl.surface().label.borrow(), "Light");
    Ok(())
}

#[test]
fn three_alerts_are_closed_after_delay() {
    let alerts: Vec<Alert> = (0..3)
        .map(|_| Alert {
            open: Rc::new(Cell::new(true)),
        })
        .collect();
    let seen: Rc<RefCell<Option<Result<SweepReport, UiError>>>> = Rc::default();
    let sink = Rc::clone(&seen);

    NoticeDismisser::new(Duration::ZERO).schedule(
        &Immediate,
        Document {
            alerts: alerts.clone(),
        },
        move |result| *sink.borrow_mut() = Some(result),
    );

    assert!(alerts.iter().all(|alert| !alert.open.get()));
    let report = seen.borrow_mut().take();
    assert!(matches!(
        report,
        Some(Ok(SweepReport {
            found: 3,
            closed: 3,
            ..
        }))
    ));
}

#[test]
fn empty_page_sweep_is_quiet() -> UiResult<()> {
    let report = NoticeDismisser::sweep(&Document { alerts: Vec::new() })?;
    assert_eq!(report.found, 0);
    assert!(report.failures.is_empty());
    Ok(())
}
