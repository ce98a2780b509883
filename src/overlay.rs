use crate::constants::{
    HINT_ANIMATION, HINT_ID, LOADER_FADE_TRANSITION, LOADER_ID, LOADING_TEXT_ID, MODEL_ID,
    PROGRESS_RING_SELECTOR, VISIBLE_CLASS,
};
use crate::dom;
use folio_core::{ring_circumference, ring_dash_offset};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM handles for the model loader overlay and the model it covers.
pub struct LoaderView {
    pub model: web::HtmlElement,
    loader: web::HtmlElement,
    text: Option<web::Element>,
    ring: Option<web::SvgElement>,
    hint: Option<web::HtmlElement>,
}

impl LoaderView {
    pub fn find(document: &web::Document) -> anyhow::Result<Self> {
        let model = dom::html_element_by_id(document, MODEL_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", MODEL_ID))?;
        let loader = dom::html_element_by_id(document, LOADER_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", LOADER_ID))?;
        let ring = dom::query(document, PROGRESS_RING_SELECTOR)
            .and_then(|el| el.dyn_into::<web::SvgElement>().ok());
        if ring.is_none() {
            log::warn!("[loader] no progress ring; showing text only");
        }
        Ok(Self {
            model,
            loader,
            text: document.get_element_by_id(LOADING_TEXT_ID),
            ring,
            hint: dom::html_element_by_id(document, HINT_ID),
        })
    }

    pub fn init_ring(&self) {
        if let Some(ring) = &self.ring {
            let c = ring_circumference().to_string();
            _ = ring.style().set_property("stroke-dasharray", &c);
            _ = ring.style().set_property("stroke-dashoffset", &c);
        }
    }

    pub fn set_progress(&self, percent: u32) {
        if let Some(ring) = &self.ring {
            let offset = ring_dash_offset(percent).to_string();
            _ = ring.style().set_property("stroke-dashoffset", &offset);
        }
        if let Some(text) = &self.text {
            text.set_text_content(Some(&format!("{}%", percent)));
        }
    }

    pub fn show_model(&self) {
        dom::set_style(&self.model, "display", "block");
    }

    pub fn fade_out(&self) {
        dom::set_style(&self.loader, "transition", LOADER_FADE_TRANSITION);
        dom::set_style(&self.loader, "opacity", "0");
    }

    /// Drop the overlay and let the model's own reveal transition run.
    pub fn remove(&self) {
        dom::set_style(&self.loader, "opacity", "0");
        dom::set_style(&self.loader, "display", "none");
        _ = self.model.class_list().add_1(VISIBLE_CLASS);
    }

    pub fn show_hint(&self) {
        if let Some(hint) = &self.hint {
            dom::set_style(hint, "animation", HINT_ANIMATION);
        }
    }
}
