//! Two-state controller for the fullscreen content panels.
//!
//! Each transition has an immediate half (set `display`, drop `active`) and a
//! deferred half (add `active`, set `display:none`) that waits for the CSS
//! transition. Deferred halves carry the generation they were issued under and
//! are dropped if another transition happened in between.

use crate::constants::{PANEL_ACTIVATE_DELAY_MS, PANEL_HIDE_DELAY_MS};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub to: Visibility,
    pub generation: u64,
}

impl Transition {
    /// Delay before the deferred half should run.
    pub fn deferred_delay_ms(&self) -> i32 {
        match self.to {
            Visibility::Shown => PANEL_ACTIVATE_DELAY_MS,
            Visibility::Hidden => PANEL_HIDE_DELAY_MS,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PanelState {
    visibility: Visibility,
    generation: u64,
}

impl PanelState {
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn open(&mut self) -> Option<Transition> {
        self.transition(Visibility::Shown)
    }

    pub fn close(&mut self) -> Option<Transition> {
        self.transition(Visibility::Hidden)
    }

    /// Whether a deferred half issued under `t` may still run.
    pub fn is_current(&self, t: Transition) -> bool {
        t.generation == self.generation && t.to == self.visibility
    }

    fn transition(&mut self, to: Visibility) -> Option<Transition> {
        if self.visibility == to {
            return None;
        }
        self.visibility = to;
        self.generation = self.generation.wrapping_add(1);
        Some(Transition {
            to,
            generation: self.generation,
        })
    }
}
