use crate::constants::{OTHER_EXP_ID, TOGGLE_OTHER_EXP_ID};
use crate::dom;
use folio_core::other_experience_label;
use web_sys as web;

/// Show/hide the "other work experience" section from its toggle button.
pub fn wire_other_experience(document: &web::Document) {
    let (Some(button), Some(section)) = (
        dom::html_element_by_id(document, TOGGLE_OTHER_EXP_ID),
        dom::html_element_by_id(document, OTHER_EXP_ID),
    ) else {
        log::warn!("[ui] other-experience toggle not present");
        return;
    };

    let label_target = button.clone();
    dom::add_click_listener(&button, move || {
        let expand = dom::style_value(&section, "display") == "none";
        dom::set_style(&section, "display", if expand { "block" } else { "none" });
        label_target.set_text_content(Some(other_experience_label(expand)));
    });
}
