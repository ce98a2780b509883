// DOM hooks and drawing styles used by the web front-end.
// Tuning numbers (speeds, delays, thresholds) live in folio_core::constants.

// Background canvas
pub const CANVAS_ID: &str = "bg-network";
pub const PARTICLE_COUNT_ATTR: &str = "data-particle-count"; // optional population override
pub const PARTICLE_COLOR: &str = "#2c98f0";
pub const LINK_RGB: &str = "102,217,232"; // alpha is appended per link

// Navigation
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const NAV_LINKS_ID: &str = "nav-links";
pub const NAV_LINK_SELECTOR: &str = "ul.nav-links a";
pub const ACTIVE_CLASS: &str = "active";

// Scroll-driven widgets
pub const BACK_TO_TOP_ID: &str = "back-to-top";
pub const SCROLL_CUE_SELECTOR: &str = ".scroll-cue";

// Model loader
pub const MODEL_ID: &str = "brain-model";
pub const LOADER_ID: &str = "model-loader";
pub const LOADING_TEXT_ID: &str = "loading-text";
pub const PROGRESS_RING_SELECTOR: &str = ".progress-ring-circle";
pub const HINT_ID: &str = "interaction-hint";
pub const VISIBLE_CLASS: &str = "visible";
pub const LOADER_FADE_TRANSITION: &str = "opacity 0.6s ease";
pub const HINT_ANIMATION: &str = "fadeInHint 1s ease forwards";

// Fullscreen panels: (trigger card selector, panel id, close control id)
pub const JOURNEY_PANELS: [(&str, &str, &str); 3] = [
    (".journey-card.education", "education-fullscreen", "close-education"),
    (".journey-card.experience", "experience-fullscreen", "close-experience"),
    (".journey-card.awards", "achievements-fullscreen", "close-achievements"),
];
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const PROJECT_ATTR: &str = "data-project";
pub const PROJECT_PANEL_PREFIX: &str = "project-";
pub const PROJECT_CLOSE_SELECTOR: &str = ".back-btn";

// Other work experience disclosure
pub const TOGGLE_OTHER_EXP_ID: &str = "toggle-other-exp";
pub const OTHER_EXP_ID: &str = "other-experience";

// Contact form
pub const CONTACT_FORM_SELECTOR: &str = "#contact form";
pub const NAME_FIELD_ID: &str = "name";
pub const EMAIL_FIELD_ID: &str = "email";
pub const MESSAGE_FIELD_ID: &str = "message";

#[inline]
pub fn link_stroke_style(alpha: f32) -> String {
    format!("rgba({},{})", LINK_RGB, alpha)
}

#[inline]
pub fn project_panel_id(project: &str) -> String {
    format!("{}{}", PROJECT_PANEL_PREFIX, project)
}
