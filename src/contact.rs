//! Contact form: local validation, then delivery through the EmailJS REST API.

use crate::constants::{CONTACT_FORM_SELECTOR, EMAIL_FIELD_ID, MESSAGE_FIELD_ID, NAME_FIELD_ID};
use crate::dom::{self, js_err};
use folio_core::{
    ContactForm, MailConfig, TemplateParams, SEND_FAILURE_MESSAGE, SEND_SUCCESS_MESSAGE,
};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn wire_contact_form(document: &web::Document, config: MailConfig) {
    let Some(form) = dom::query(document, CONTACT_FORM_SELECTOR)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::warn!("[contact] no form at {:?}", CONTACT_FORM_SELECTOR);
        return;
    };

    let config = Rc::new(config);
    let doc = document.clone();
    let target = form.clone();
    dom::on(&target, "submit", move |ev: web::Event| {
        ev.prevent_default();

        let valid = match read_form(&doc).validate() {
            Ok(v) => v,
            Err(e) => {
                log::info!("[contact] rejected: {:?}", e);
                dom::alert(&e.to_string());
                return;
            }
        };
        let params = valid.into_params(submission_time());

        let (config, form) = (config.clone(), form.clone());
        spawn_local(async move {
            match send(&config, params).await {
                Ok(()) => {
                    log::info!("[contact] message sent");
                    dom::alert(SEND_SUCCESS_MESSAGE);
                    form.reset();
                }
                Err(e) => {
                    log::error!("[contact] EmailJS error: {:#}", e);
                    dom::alert(SEND_FAILURE_MESSAGE);
                }
            }
        });
    });
}

fn read_form(document: &web::Document) -> ContactForm {
    ContactForm::new(
        &field_value(document, NAME_FIELD_ID),
        &field_value(document, EMAIL_FIELD_ID),
        &field_value(document, MESSAGE_FIELD_ID),
    )
}

/// Value of an `<input>` or `<textarea>`; empty if the field is missing.
fn field_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn submission_time() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}

async fn send(config: &MailConfig, params: TemplateParams) -> anyhow::Result<()> {
    let body = serde_json::to_string(&config.request(params))?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web::RequestMode::Cors);
    init.set_body(&JsValue::from_str(&body));
    let request = web::Request::new_with_str_and_init(&config.endpoint, &init).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;

    if !response.ok() {
        let detail = match response.text() {
            Ok(p) => JsFuture::from(p)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        anyhow::bail!("status {}: {}", response.status(), detail);
    }
    Ok(())
}
