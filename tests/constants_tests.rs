// Host-side tests for constants and their relationships.
// The front-end crate is wasm-only, so its pure constants module is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::constants as tuning;

#[test]
fn link_style_appends_alpha() {
    assert_eq!(link_stroke_style(0.5), "rgba(102,217,232,0.5)");
    assert_eq!(link_stroke_style(1.0), "rgba(102,217,232,1)");
}

#[test]
fn project_panels_are_prefixed() {
    assert_eq!(project_panel_id("ml-pipeline"), "project-ml-pipeline");
}

#[test]
fn journey_panels_have_distinct_ids() {
    for (i, a) in JOURNEY_PANELS.iter().enumerate() {
        for b in &JOURNEY_PANELS[i + 1..] {
            assert_ne!(a.1, b.1);
            assert_ne!(a.2, b.2);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_have_logical_relationships() {
    // default population is inside the clamp
    assert!(tuning::DEFAULT_PARTICLE_COUNT <= tuning::MAX_PARTICLE_COUNT);
    assert!(tuning::LINK_DISTANCE > 0.0);

    // smoothing and damping are fractions
    assert!(tuning::PARALLAX_SMOOTHING > 0.0 && tuning::PARALLAX_SMOOTHING < 1.0);
    assert!(tuning::PARALLAX_DAMPING > 0.0 && tuning::PARALLAX_DAMPING < 1.0);

    // finishing lands exactly on 100
    assert!(tuning::PROGRESS_FAKE_CAP < 100);
    assert_eq!((100 - tuning::PROGRESS_FAKE_CAP) % tuning::FINISH_STEP, 0);

    // the safety net fires well after a normal fake run
    assert!(tuning::LOAD_TIMEOUT_MS > tuning::PROGRESS_TICK_MS * 20);

    assert!(tuning::PANEL_HIDE_DELAY_MS > tuning::PANEL_ACTIVATE_DELAY_MS);
    assert!(tuning::BACK_TO_TOP_THRESHOLD > tuning::SCROLL_CUE_THRESHOLD);
}
