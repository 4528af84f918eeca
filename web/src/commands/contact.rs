//! Contact message delivery.
use crate::{Error, Result};
use portfolio_core::contact::ContactDraft;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response, UrlSearchParams};

/// Posts a validated draft to the form ingestion endpoint
/// as `application/x-www-form-urlencoded`.
#[tracing::instrument(skip(draft))]
pub async fn submit_contact(endpoint: &str, draft: &ContactDraft) -> Result {
    let body = UrlSearchParams::new()?;
    for (name, value) in draft.fields() {
        body.append(name, value);
    }

    let headers = Headers::new()?;
    headers.set("Accept", "application/json")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&body);

    let request = Request::new_with_str_and_init(endpoint, &init)?;
    let window = web_sys::window().ok_or_else(|| Error::Binding("window not found".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    let response = response.dyn_into::<Response>()?;
    if !response.ok() {
        return Err(Error::Request(response.status()));
    }

    Ok(())
}
