//! Browser implementations of the form seams: `HtmlFormElement` as the
//! [`FormView`], `fetch()` as the [`Transport`].

use super::{Endpoint, FormView, Reply, StatusMessage, Transport, run_submission};
use crate::error::{DomError, TransportError};
use crate::markers;
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Document, Element, Event, FormData, Headers, HtmlButtonElement, HtmlFormElement, Request,
    RequestInit, Response,
};

/// Bind the submission handler to every known form id present on the page.
/// Returns how many forms were bound.
pub(crate) fn attach(document: &Document) -> usize {
    let mut bound = 0;
    for id in markers::form::IDS {
        let Some(element) = document.get_element_by_id(id) else {
            continue;
        };
        match element.dyn_into::<HtmlFormElement>() {
            Ok(form) => {
                bind(form);
                bound += 1;
            }
            Err(_) => warn!(id, "element is not a form, skipped"),
        }
    }
    bound
}

/// Intercept native submission and run the state machine instead.
fn bind(form: HtmlFormElement) {
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let form = form.clone();
        spawn_local(async move {
            match DomFormView::new(form) {
                Ok(mut view) => {
                    run_submission(&mut view, &FetchTransport).await;
                }
                Err(err) => warn!(%err, "form is missing required markup"),
            }
        });
    });
    form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())
        .ok();
    handler.forget();
}

// ============================================================================
// View
// ============================================================================

/// One submission attempt's view over a live form element.
pub(crate) struct DomFormView {
    form: HtmlFormElement,
    submit: HtmlButtonElement,
    status: Element,
    /// Submit label as it read before the sending swap.
    original_label: String,
}

impl DomFormView {
    pub(crate) fn new(form: HtmlFormElement) -> Result<Self, DomError> {
        let submit = form
            .query_selector(markers::form::SUBMIT_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
            .ok_or(DomError::MissingElement(markers::form::SUBMIT_SELECTOR))?;

        let status = status_element(&form)?;
        let original_label = submit.text_content().unwrap_or_default();

        Ok(Self {
            form,
            submit,
            status,
            original_label,
        })
    }
}

/// Find the status element, creating and appending it on first use. The
/// element is reused across attempts after that.
fn status_element(form: &HtmlFormElement) -> Result<Element, DomError> {
    let selector = format!(".{}", markers::form::STATUS_CLASS);
    if let Some(existing) = form.query_selector(&selector).ok().flatten() {
        return Ok(existing);
    }

    let document = form
        .owner_document()
        .ok_or(DomError::MissingElement("owner document"))?;
    let created = document
        .create_element("p")
        .map_err(DomError::platform)?;
    created.set_class_name(markers::form::STATUS_CLASS);
    form.append_child(&created).map_err(DomError::platform)?;
    Ok(created)
}

impl FormView for DomFormView {
    type Payload = FormData;

    fn check_validity(&self) -> bool {
        self.form.check_validity()
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint {
            url: self.form.action(),
            method: self.form.method(),
        }
    }

    fn payload(&self) -> FormData {
        // A form with file inputs serializes as multipart automatically.
        FormData::new_with_form(&self.form).unwrap_or_else(|_| {
            debug!("form serialization failed, sending an empty field set");
            FormData::new().unwrap_throw()
        })
    }

    fn set_sending(&mut self, sending: bool) {
        if sending {
            self.submit
                .set_text_content(Some(markers::form::MSG_SENDING));
            self.submit.set_disabled(true);
        } else {
            self.submit.set_text_content(Some(&self.original_label));
            self.submit.set_disabled(false);
        }
    }

    fn show_status(&mut self, status: &StatusMessage) {
        self.status.set_text_content(Some(&status.text));
        self.status.set_class_name(status.kind.css_class());
    }

    fn reset_fields(&mut self) {
        self.form.reset();
    }
}

// ============================================================================
// Transport
// ============================================================================

/// `fetch()` with a `FormData` body and a JSON-capable `Accept` header.
pub(crate) struct FetchTransport;

impl Transport<FormData> for FetchTransport {
    async fn send(&self, endpoint: &Endpoint, payload: FormData) -> Result<Reply, TransportError> {
        let headers = Headers::new().map_err(TransportError::request)?;
        headers
            .append("Accept", "application/json")
            .map_err(TransportError::request)?;

        let init = RequestInit::new();
        init.set_method(&endpoint.method);
        init.set_body(payload.as_ref());
        init.set_headers(headers.as_ref());

        let request =
            Request::new_with_str_and_init(&endpoint.url, &init).map_err(TransportError::request)?;
        let window = web_sys::window()
            .ok_or_else(|| TransportError::Request("no window".to_string()))?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(TransportError::request)?
            .unchecked_into();

        let ok = response.ok();
        // Success replies never have their body inspected.
        let body = if ok {
            String::new()
        } else {
            let text = JsFuture::from(response.text().map_err(TransportError::body)?)
                .await
                .map_err(TransportError::body)?;
            text.as_string().unwrap_or_default()
        };

        Ok(Reply { ok, body })
    }
}
