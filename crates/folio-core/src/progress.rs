//! Fake loading progress for the 3D model embed.
//!
//! The model element only reports "ready", so the loader shows randomized
//! progress up to [`PROGRESS_FAKE_CAP`] and finishes the last stretch once the
//! real signal arrives. A safety timeout forces completion if it never does.
//! Whichever of ready/timeout arrives first decides how loading completes;
//! the other is ignored.

use crate::constants::{FINISH_STEP, PROGRESS_FAKE_CAP, PROGRESS_MAX_STEP, RING_RADIUS};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    /// Randomized progress, capped below 100.
    Loading,
    /// Ready signal received; counting up to 100.
    Finishing,
    /// Progress is 100 and the overlay can go.
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Ready,
    TimedOut,
}

#[derive(Clone, Debug)]
pub struct LoadProgress {
    raw: f32,
    displayed: u32,
    phase: LoadPhase,
    completion: Option<Completion>,
}

impl Default for LoadProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadProgress {
    pub fn new() -> Self {
        Self {
            raw: 0.0,
            displayed: 0,
            phase: LoadPhase::Loading,
            completion: None,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Percentage currently shown to the user.
    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn completion(&self) -> Option<Completion> {
        self.completion
    }

    /// One fake-progress tick. Returns the new displayed percentage, or `None`
    /// once the cap is hit or loading has moved on.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Option<u32> {
        if self.phase != LoadPhase::Loading || self.raw >= PROGRESS_FAKE_CAP as f32 {
            return None;
        }
        self.raw += rng.gen::<f32>() * PROGRESS_MAX_STEP;
        let shown = (self.raw.round() as u32).min(PROGRESS_FAKE_CAP);
        self.displayed = self.displayed.max(shown);
        Some(self.displayed)
    }

    /// The model reported ready. Returns `false` if loading already completed.
    pub fn ready(&mut self) -> bool {
        if self.phase != LoadPhase::Loading {
            log::debug!("[loader] ready ignored in phase {:?}", self.phase);
            return false;
        }
        self.phase = LoadPhase::Finishing;
        self.completion = Some(Completion::Ready);
        true
    }

    /// One finishing tick after ready. Counts from the cap in [`FINISH_STEP`]
    /// increments and enters [`LoadPhase::Revealed`] at exactly 100.
    pub fn finish_tick(&mut self) -> Option<u32> {
        if self.phase != LoadPhase::Finishing {
            return None;
        }
        let next = (self.displayed.max(PROGRESS_FAKE_CAP) + FINISH_STEP).min(100);
        self.displayed = next;
        if next == 100 {
            self.phase = LoadPhase::Revealed;
        }
        Some(next)
    }

    /// The safety timeout fired. Only takes effect while still loading; a
    /// ready signal that already arrived finishes on its own.
    pub fn timeout(&mut self) -> bool {
        if self.phase != LoadPhase::Loading {
            return false;
        }
        self.displayed = 100;
        self.phase = LoadPhase::Revealed;
        self.completion = Some(Completion::TimedOut);
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == LoadPhase::Revealed
    }
}

/// Circumference of the progress ring, used as its `stroke-dasharray`.
#[inline]
pub fn ring_circumference() -> f64 {
    2.0 * std::f64::consts::PI * RING_RADIUS
}

/// `stroke-dashoffset` that reveals `percent` of the ring.
#[inline]
pub fn ring_dash_offset(percent: u32) -> f64 {
    let c = ring_circumference();
    c - (percent.min(100) as f64 / 100.0) * c
}
