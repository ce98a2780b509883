#![cfg(target_arch = "wasm32")]
use crate::background::Background;
use crate::constants::CANVAS_ID;
use folio_core::MailConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod background;
mod constants;
mod contact;
mod dom;
mod events;
mod frame;
mod loader;
mod overlay;
mod panels;
mod timers;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        dom::on(&document, "DOMContentLoaded", |_: web::Event| run());
    } else {
        run();
    }
    Ok(())
}

fn run() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The background is decorative; the rest of the page works without it.
    if let Err(e) = start_background(&document) {
        log::error!("[background] disabled: {:?}", e);
    }

    events::wire_navigation(&document);
    events::wire_scroll(&document);

    if let Err(e) = loader::start(&document) {
        log::warn!("[loader] not started: {:#}", e);
    }

    let journey = panels::wire_journey_panels(&document);
    let projects = panels::wire_project_panels(&document);
    log::info!(
        "[panel] wired {} journey and {} project panels",
        journey.len(),
        projects.len()
    );

    ui::wire_other_experience(&document);
    contact::wire_contact_form(&document, MailConfig::default());
    Ok(())
}

fn start_background(document: &web::Document) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let background = Rc::new(RefCell::new(Background::new(canvas)?));
    events::wire_background(background.clone());
    frame::start_loop(background);
    Ok(())
}
