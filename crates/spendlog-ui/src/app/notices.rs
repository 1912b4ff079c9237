//! Notice banners closed through the global Bootstrap alert plugin.

use crate::app::describe_js;
use crate::page::error::{UiError, UiResult};
use crate::page::ports::{DismissibleNotice, NoticeSource};
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// Queries the document for notices each time it is asked.
pub(crate) struct DocumentNotices {
    document: Document,
    selector: String,
}

impl DocumentNotices {
    pub(crate) const fn new(document: Document, selector: String) -> Self {
        Self { document, selector }
    }
}

impl NoticeSource for DocumentNotices {
    type Notice = BootstrapAlert;

    fn collect(&self) -> UiResult<Vec<BootstrapAlert>> {
        let nodes = self
            .document
            .query_selector_all(&self.selector)
            .map_err(|err| UiError::Selector {
                selector: self.selector.clone(),
                detail: describe_js(&err),
            })?;
        Ok((0..nodes.length())
            .filter_map(|idx| nodes.item(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| BootstrapAlert { element })
            .collect())
    }
}

/// One notice element.
pub(crate) struct BootstrapAlert {
    element: Element,
}

impl DismissibleNotice for BootstrapAlert {
    fn close(&self) -> UiResult<()> {
        // Without the toolkit loaded, drop the element outright.
        let Some(ctor) = alert_constructor() else {
            self.element.remove();
            return Ok(());
        };
        close_with(&ctor, &self.element).map_err(|err| UiError::NoticeClose {
            detail: describe_js(&err),
        })
    }
}

/// `bootstrap.Alert`, when the toolkit is present on the page.
fn alert_constructor() -> Option<Function> {
    let toolkit = Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap")).ok()?;
    if toolkit.is_undefined() || toolkit.is_null() {
        return None;
    }
    Reflect::get(&toolkit, &JsValue::from_str("Alert"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn close_with(ctor: &Function, element: &Element) -> Result<(), JsValue> {
    let alert = Reflect::construct(ctor, &Array::of1(element))?;
    let close = Reflect::get(&alert, &JsValue::from_str("close"))?.dyn_into::<Function>()?;
    close.call0(&alert)?;
    Ok(())
}
