use crate::constants::{ACTIVE_CLASS, MENU_TOGGLE_ID, NAV_LINKS_ID, NAV_LINK_SELECTOR};
use crate::dom;
use folio_core::anchor_target;
use web_sys as web;

/// Mobile menu toggle plus smooth in-page scrolling for the nav links.
pub fn wire_navigation(document: &web::Document) {
    let Some(nav_links) = document.get_element_by_id(NAV_LINKS_ID) else {
        log::warn!("[nav] missing #{}", NAV_LINKS_ID);
        return;
    };

    if let Some(toggle) = document.get_element_by_id(MENU_TOGGLE_ID) {
        let nav = nav_links.clone();
        dom::add_click_listener(&toggle, move || {
            _ = nav.class_list().toggle(ACTIVE_CLASS);
        });
    }

    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let Some(target_id) = link
            .get_attribute("href")
            .and_then(|href| anchor_target(&href).map(str::to_owned))
        else {
            continue;
        };
        let nav = nav_links.clone();
        let doc = document.clone();
        dom::on(&link, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            _ = nav.class_list().remove_1(ACTIVE_CLASS);
            match doc.get_element_by_id(&target_id) {
                Some(section) => scroll_smoothly_to(&section),
                None => log::warn!("[nav] no section #{}", target_id),
            }
        });
    }
}

fn scroll_smoothly_to(section: &web::Element) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&opts);
}
