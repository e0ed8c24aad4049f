//! Browser form controller, compiled to WebAssembly.
//!
//! Binds to the host page's form and runs the same rule set as the
//! server endpoint before anything goes over the wire.

mod controller;
mod dom;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlFormElement};

use intake_validation::FIELD_ORDER;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = dom::document()?;

    let form: HtmlFormElement = document
        .get_element_by_id("userForm")
        .ok_or_else(|| JsValue::from_str("missing #userForm"))?
        .dyn_into()?;

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        spawn_local(async {
            if let Err(err) = controller::handle_submit().await {
                web_sys::console::error_1(&err);
            }
        });
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    // Editing a field clears its error state
    for id in FIELD_ORDER {
        let on_edit = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            dom::clear_field_error(id);
        });
        let input = dom::input(&document, id)?;
        input.add_event_listener_with_callback("input", on_edit.as_ref().unchecked_ref())?;
        input.add_event_listener_with_callback("blur", on_edit.as_ref().unchecked_ref())?;
        on_edit.forget();
    }

    Ok(())
}
