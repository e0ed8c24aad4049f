//! DOM plumbing for the form controller. Every page-state side effect
//! funnels through here.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlButtonElement, HtmlInputElement};

pub const ERROR_INPUT_CLASS: &str = "error-input";
pub const ERROR_TEXT_CLASS: &str = "error-text";
pub const SUCCESS_TEXT_CLASS: &str = "success-text";

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn input(document: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an input")))
}

pub fn submit_button(document: &Document) -> Result<HtmlButtonElement, JsValue> {
    document
        .get_element_by_id("submit_button")
        .ok_or_else(|| JsValue::from_str("missing #submit_button"))?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| JsValue::from_str("#submit_button is not a button"))
}

pub fn show_field_error(document: &Document, id: &str, message: &str) {
    if let Ok(input) = input(document, id) {
        let _ = input.class_list().add_1(ERROR_INPUT_CLASS);
    }
    if let Some(el) = document.get_element_by_id(&format!("{id}_error")) {
        let _ = el.class_list().add_1(ERROR_TEXT_CLASS);
        el.set_text_content(Some(message));
    }
}

pub fn clear_field_error(id: &str) {
    let Ok(document) = document() else { return };
    if let Ok(input) = input(&document, id) {
        let _ = input.class_list().remove_1(ERROR_INPUT_CLASS);
    }
    if let Some(el) = document.get_element_by_id(&format!("{id}_error")) {
        el.set_text_content(Some(""));
        let _ = el.class_list().remove_1(ERROR_TEXT_CLASS);
    }
}

pub fn focus_field(document: &Document, id: &str) {
    if let Ok(input) = input(document, id) {
        let _ = input.focus();
    }
}

pub fn show_message(document: &Document, text: &str, class: &str) {
    if let Some(el) = document.get_element_by_id("messages") {
        el.set_text_content(Some(text));
        el.set_class_name(class);
    }
}

/// Disables the submit button for the lifetime of one network
/// exchange. Dropping the guard re-enables the button, so every exit
/// path — acceptance, rejection, transport failure — releases it.
pub struct SubmitGuard {
    button: HtmlButtonElement,
}

impl SubmitGuard {
    pub fn engage(button: HtmlButtonElement) -> Self {
        button.set_disabled(true);
        Self { button }
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.button.set_disabled(false);
    }
}
