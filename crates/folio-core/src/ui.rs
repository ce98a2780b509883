use crate::constants::{BACK_TO_TOP_THRESHOLD, SCROLL_CUE_THRESHOLD};

pub const OTHER_EXPERIENCE_HIDE_LABEL: &str = "⬆ Hide Other Work Experience";
pub const OTHER_EXPERIENCE_SHOW_LABEL: &str = "👥 View Other Work Experience";

#[inline]
pub fn back_to_top_visible(page_y_offset: f64) -> bool {
    page_y_offset > BACK_TO_TOP_THRESHOLD
}

/// One-way latch for the "scroll down" cue: once the page has scrolled past
/// the threshold the cue stays hidden.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollCue {
    hidden: bool,
}

impl ScrollCue {
    /// Returns `true` only on the call that hides the cue.
    pub fn observe(&mut self, scroll_y: f64) -> bool {
        if self.hidden || scroll_y <= SCROLL_CUE_THRESHOLD {
            return false;
        }
        self.hidden = true;
        true
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Element id targeted by an in-page link (`"#about"` -> `"about"`).
#[inline]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Button label for the other-experience section after a toggle.
#[inline]
pub fn other_experience_label(expanded: bool) -> &'static str {
    if expanded {
        OTHER_EXPERIENCE_HIDE_LABEL
    } else {
        OTHER_EXPERIENCE_SHOW_LABEL
    }
}
