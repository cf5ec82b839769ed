use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use vodr_core::config::{FillConfig, SelectorConfig};
use vodr_core::dispatcher::{self, TriggerOutcome};
use vodr_core::error::VodrError;
use vodr_core::page::{FormField, UploadPage, UserPrompt};
use vodr_core::store::ImportStore;

/// DOM-backed implementation of the upload page seam.
struct DomPage {
    document: web_sys::Document,
    selectors: SelectorConfig,
}

impl DomPage {
    fn locate(&self, selector: &str) -> Result<web_sys::Element, VodrError> {
        self.document
            .query_selector(selector)
            .map_err(|e| VodrError::Injection(js_err(e)))?
            .ok_or_else(|| VodrError::ElementNotFound(selector.to_string()))
    }
}

impl UploadPage for DomPage {
    fn current_filename(&self) -> Result<String, VodrError> {
        let el = self.locate(&self.selectors.filename)?;
        Ok(el.text_content().unwrap_or_default().trim().to_string())
    }

    fn inject(&mut self, field: FormField, value: &str) -> Result<(), VodrError> {
        let selector = match field {
            FormField::Title => &self.selectors.title,
            FormField::Description => &self.selectors.description,
        };
        let el = self.locate(selector)?;

        // Mutating the text alone does not wake the host's reactive
        // listeners; a synthetic bubbling `input` event is required.
        el.set_text_content(Some(value));
        if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html.focus();
        }
        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        let event = web_sys::Event::new_with_event_init_dict("input", &init)
            .map_err(|e| VodrError::Injection(js_err(e)))?;
        el.dispatch_event(&event)
            .map_err(|e| VodrError::Injection(js_err(e)))?;
        Ok(())
    }
}

/// Modal dialogs via `window.prompt` / `window.alert`.
struct DomPrompt {
    window: web_sys::Window,
}

impl UserPrompt for DomPrompt {
    fn prompt_text(&self, message: &str) -> Option<String> {
        self.window.prompt_with_message(message).ok().flatten()
    }

    fn notify(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}

/// Install the hotkey handler on the current page.
///
/// `config_json` may override the hotkey or selectors; `None` uses the
/// built-in YouTube Studio defaults. The handler lives for the rest of the
/// page's lifetime.
#[wasm_bindgen]
pub fn install(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json.as_deref() {
        Some(json) => {
            FillConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?
        }
        None => FillConfig::default(),
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let store = Rc::new(RefCell::new(ImportStore::new()));
    let hotkey = config.hotkey.key;
    let selectors = config.selectors;
    let prompt_window = window.clone();

    let handler = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |event: web_sys::KeyboardEvent| {
            if event.key() != hotkey {
                return;
            }

            let mut page = DomPage {
                document: document.clone(),
                selectors: selectors.clone(),
            };
            let ui = DomPrompt {
                window: prompt_window.clone(),
            };
            let mut store = store.borrow_mut();
            let outcome = dispatcher::handle_trigger(event.ctrl_key(), &mut store, &mut page, &ui);
            report(&outcome);

            // Consume the key on every path so the host page never sees it.
            event.prevent_default();
            event.stop_propagation();
        },
    );

    window.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())?;
    // Page-lifetime handler; leak the closure so it stays callable.
    handler.forget();
    Ok(())
}

/// Mirror outcomes to the browser console; no tracing subscriber runs here.
fn report(outcome: &TriggerOutcome) {
    match outcome {
        TriggerOutcome::Imported { records } => {
            console_log(&format!("vodr: imported {records} records"));
        }
        TriggerOutcome::ImportCancelled => {}
        TriggerOutcome::ImportFailed => {
            console_error("vodr: export payload did not parse; store unchanged");
        }
        TriggerOutcome::Filled { filename } => {
            console_log(&format!("vodr: filled fields for {filename}"));
        }
        TriggerOutcome::PartialFill { filename, failed } => {
            for field in failed {
                console_error(&format!("vodr: could not fill {field} for {filename}"));
            }
        }
        TriggerOutcome::Miss { filename } => {
            console_log(&format!("vodr: no record for {filename}"));
        }
        TriggerOutcome::FilenameUnavailable => {
            console_error("vodr: filename element not found on page");
        }
    }
}

fn console_log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

fn console_error(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| "unknown js error".into())
}
