use crate::constants::{
    project_panel_id, ACTIVE_CLASS, JOURNEY_PANELS, PROJECT_ATTR, PROJECT_CARD_SELECTOR,
    PROJECT_CLOSE_SELECTOR,
};
use crate::dom;
use crate::timers;
use folio_core::{PanelState, Transition, Visibility};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A fullscreen panel opened by a trigger card and closed by a control inside it.
pub struct Panel {
    name: String,
    element: web::HtmlElement,
    state: RefCell<PanelState>,
}

impl Panel {
    /// Wire `trigger` and `close` to a new controller for `element`.
    pub fn bind(
        name: impl Into<String>,
        trigger: &web::Element,
        element: web::HtmlElement,
        close: &web::Element,
    ) -> Rc<Self> {
        let panel = Rc::new(Self {
            name: name.into(),
            element,
            state: RefCell::new(PanelState::default()),
        });
        let p = panel.clone();
        dom::add_click_listener(trigger, move || p.open());
        let p = panel.clone();
        dom::add_click_listener(close, move || p.close());
        panel
    }

    pub fn open(self: &Rc<Self>) {
        let Some(t) = self.state.borrow_mut().open() else {
            return;
        };
        log::debug!("[panel] open {}", self.name);
        dom::set_style(&self.element, "display", "flex");
        self.defer(t);
    }

    pub fn close(self: &Rc<Self>) {
        let Some(t) = self.state.borrow_mut().close() else {
            return;
        };
        log::debug!("[panel] close {}", self.name);
        _ = self.element.class_list().remove_1(ACTIVE_CLASS);
        self.defer(t);
    }

    fn defer(self: &Rc<Self>, t: Transition) {
        let this = self.clone();
        timers::after(t.deferred_delay_ms(), move || this.settle(t));
    }

    fn settle(&self, t: Transition) {
        if !self.state.borrow().is_current(t) {
            log::debug!("[panel] {} dropped stale {:?}", self.name, t);
            return;
        }
        match t.to {
            Visibility::Shown => {
                _ = self.element.class_list().add_1(ACTIVE_CLASS);
            }
            Visibility::Hidden => dom::set_style(&self.element, "display", "none"),
        }
    }
}

/// Education, experience and achievements panels.
pub fn wire_journey_panels(document: &web::Document) -> Vec<Rc<Panel>> {
    JOURNEY_PANELS
        .iter()
        .filter_map(|&(card_selector, panel_id, close_id)| {
            let card = dom::query(document, card_selector);
            let panel = dom::html_element_by_id(document, panel_id);
            let close = document.get_element_by_id(close_id);
            match (card, panel, close) {
                (Some(card), Some(panel), Some(close)) => {
                    Some(Panel::bind(panel_id, &card, panel, &close))
                }
                _ => {
                    log::warn!("[panel] skipping #{}: markup incomplete", panel_id);
                    None
                }
            }
        })
        .collect()
}

/// One panel per `.project-card[data-project=ID]`, shown as `#project-ID`.
pub fn wire_project_panels(document: &web::Document) -> Vec<Rc<Panel>> {
    dom::query_all(document, PROJECT_CARD_SELECTOR)
        .into_iter()
        .filter_map(|card| {
            let project = card.get_attribute(PROJECT_ATTR)?;
            let id = project_panel_id(&project);
            let panel = document
                .get_element_by_id(&id)?
                .dyn_into::<web::HtmlElement>()
                .ok()?;
            let Some(close) = panel.query_selector(PROJECT_CLOSE_SELECTOR).ok().flatten() else {
                log::warn!("[panel] #{} has no {}", id, PROJECT_CLOSE_SELECTOR);
                return None;
            };
            Some(Panel::bind(id, &card, panel, &close))
        })
        .collect()
}
