use crate::constants::{BACK_TO_TOP_ID, SCROLL_CUE_SELECTOR};
use crate::dom;
use folio_core::{back_to_top_visible, ScrollCue};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Back-to-top button visibility and the one-way scroll cue fade.
pub fn wire_scroll(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };

    let back_to_top = dom::html_element_by_id(document, BACK_TO_TOP_ID);
    if let Some(btn) = &back_to_top {
        dom::set_style(btn, "display", "none");
        dom::add_click_listener(btn, || {
            if let Some(w) = web::window() {
                let opts = web::ScrollToOptions::new();
                opts.set_top(0.0);
                opts.set_behavior(web::ScrollBehavior::Smooth);
                w.scroll_to_with_scroll_to_options(&opts);
            }
        });
    } else {
        log::warn!("[scroll] missing #{}", BACK_TO_TOP_ID);
    }

    let scroll_cue = dom::query(document, SCROLL_CUE_SELECTOR)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    let mut cue = ScrollCue::default();

    let win = window.clone();
    dom::on(&window, "scroll", move |_: web::Event| {
        let y = win.page_y_offset().unwrap_or(0.0);
        if let Some(btn) = &back_to_top {
            let display = if back_to_top_visible(y) { "block" } else { "none" };
            dom::set_style(btn, "display", display);
        }
        if let Some(el) = &scroll_cue {
            if cue.observe(y) {
                dom::set_style(el, "opacity", "0");
            }
        }
    });
}
