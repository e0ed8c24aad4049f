//! Submission flow: validate locally, then post to the server and
//! render the outcome.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Document, HtmlFormElement, Request, RequestInit, Response};

use intake_types::api::{FieldError, SubmitRequest, SubmitResponse, ValidationFailure};
use intake_validation::{FIELD_ORDER, Submission};

use crate::dom::{self, SubmitGuard};

const SUBMIT_TIMEOUT_MS: i32 = 10_000;

enum Outcome {
    Accepted(SubmitResponse),
    Rejected(Vec<FieldError>),
    Failed,
}

pub async fn handle_submit() -> Result<(), JsValue> {
    let document = dom::document()?;

    dom::show_message(&document, "", "");
    for id in FIELD_ORDER {
        dom::clear_field_error(id);
    }

    let submission = read_form(&document)?;

    let errors = submission.validate();
    if !errors.is_empty() {
        render_field_errors(&document, &errors);
        dom::show_message(
            &document,
            "Please fix the highlighted fields.",
            dom::ERROR_TEXT_CLASS,
        );
        return Ok(());
    }

    // One submission in flight at a time; the guard re-enables the
    // button whichever way the exchange ends.
    let _guard = SubmitGuard::engage(dom::submit_button(&document)?);

    match post_submission(&submission).await {
        Ok(Outcome::Accepted(accepted)) => {
            dom::show_message(
                &document,
                &format!("{} (record #{})", accepted.message, accepted.id),
                dom::SUCCESS_TEXT_CLASS,
            );
            reset_form(&document);
        }
        Ok(Outcome::Rejected(errors)) => {
            // The server is authoritative; it can flag fields the
            // local pass considered fine.
            render_field_errors(&document, &errors);
            dom::show_message(
                &document,
                "Please fix the highlighted fields.",
                dom::ERROR_TEXT_CLASS,
            );
        }
        Ok(Outcome::Failed) => {
            dom::show_message(
                &document,
                "Something went wrong. Please try again.",
                dom::ERROR_TEXT_CLASS,
            );
        }
        Err(err) => {
            web_sys::console::error_1(&err);
            dom::show_message(
                &document,
                "Something went wrong. Please try again.",
                dom::ERROR_TEXT_CLASS,
            );
        }
    }

    Ok(())
}

fn read_form(document: &Document) -> Result<Submission, JsValue> {
    let value = |id: &str| -> Result<String, JsValue> { Ok(dom::input(document, id)?.value()) };

    Ok(Submission::from_raw(
        &value("first_name")?,
        &value("last_name")?,
        &value("email")?,
        &value("phone_number")?,
        &value("eircode")?,
    ))
}

fn render_field_errors(document: &Document, errors: &[FieldError]) {
    for err in errors {
        dom::show_field_error(document, &err.field, &err.message);
    }
    if let Some(first) = errors.first() {
        dom::focus_field(document, &first.field);
    }
}

fn reset_form(document: &Document) {
    if let Some(form) = document
        .get_element_by_id("userForm")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    {
        form.reset();
    }
    dom::focus_field(document, FIELD_ORDER[0]);
}

async fn post_submission(submission: &Submission) -> Result<Outcome, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let payload = SubmitRequest {
        first_name: submission.first_name.clone(),
        last_name: submission.last_name.clone(),
        email: submission.email.clone(),
        phone_number: submission.phone_number.clone(),
        eircode: submission.eircode.clone(),
    };
    let body =
        serde_json::to_string(&payload).map_err(|e| JsValue::from_str(&e.to_string()))?;

    // Abort the exchange if the server does not answer in time;
    // otherwise a hung request would pin the submit button disabled.
    let controller = AbortController::new()?;
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));
    opts.set_signal(Some(&controller.signal()));

    let request = Request::new_with_str_and_init("/submit", &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let abort = Closure::once_into_js(move || controller.abort());
    let timeout = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        abort.unchecked_ref(),
        SUBMIT_TIMEOUT_MS,
    )?;

    let fetched = JsFuture::from(window.fetch_with_request(&request)).await;
    window.clear_timeout_with_handle(timeout);

    let response: Response = fetched?.dyn_into()?;

    if response.ok() {
        let body = JsFuture::from(response.json()?).await?;
        let accepted: SubmitResponse =
            serde_wasm_bindgen::from_value(body).map_err(JsValue::from)?;
        return Ok(Outcome::Accepted(accepted));
    }

    if response.status() == 400 {
        let body = JsFuture::from(response.json()?).await?;
        let rejected: ValidationFailure =
            serde_wasm_bindgen::from_value(body).map_err(JsValue::from)?;
        return Ok(Outcome::Rejected(rejected.errors));
    }

    Ok(Outcome::Failed)
}
