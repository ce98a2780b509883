// Host-side tests for parallax smoothing and the scroll/nav helpers.

use folio_core::*;
use glam::Vec2;

#[test]
fn parallax_moves_two_percent_toward_pointer() {
    let mut parallax = Parallax::default();
    let viewport = Vec2::new(800.0, 600.0);
    parallax.observe(Vec2::new(500.0, 400.0), viewport);
    assert!((parallax.smoothed() - Vec2::new(2.0, 2.0)).length() < 1e-5);
    assert!((parallax.render_offset() - Vec2::new(0.1, 0.1)).length() < 1e-6);
}

#[test]
fn parallax_converges_geometrically() {
    let mut parallax = Parallax::default();
    let viewport = Vec2::new(1000.0, 1000.0);
    let pointer = Vec2::new(700.0, 300.0); // raw offset (200, -200)
    let target = Vec2::new(200.0, -200.0);

    let mut prev_err = target.length();
    for _ in 0..200 {
        parallax.observe(pointer, viewport);
        let err = (target - parallax.smoothed()).length();
        let ratio = err / prev_err;
        assert!((ratio - 0.98).abs() < 1e-3, "ratio {ratio}");
        prev_err = err;
    }
    assert!(prev_err < target.length() * 0.02);
}

#[test]
fn parallax_at_viewport_center_stays_put() {
    let mut parallax = Parallax::default();
    for _ in 0..10 {
        parallax.observe(Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0));
    }
    assert_eq!(parallax.smoothed(), Vec2::ZERO);
}

#[test]
fn back_to_top_appears_past_threshold() {
    assert!(!back_to_top_visible(0.0));
    assert!(!back_to_top_visible(300.0));
    assert!(back_to_top_visible(300.5));
}

#[test]
fn scroll_cue_hides_once_and_stays_hidden() {
    let mut cue = ScrollCue::default();
    assert!(!cue.observe(50.0));
    assert!(!cue.observe(120.0));
    assert!(cue.observe(121.0));
    assert!(cue.is_hidden());
    assert!(!cue.observe(500.0), "only reported once");
    assert!(!cue.observe(0.0));
    assert!(cue.is_hidden(), "scrolling back up does not restore it");
}

#[test]
fn anchor_target_only_accepts_in_page_links() {
    assert_eq!(anchor_target("#about"), Some("about"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("https://example.com/#about"), None);
    assert_eq!(anchor_target("projects.html"), None);
}

#[test]
fn other_experience_label_reflects_next_action() {
    assert_eq!(other_experience_label(true), OTHER_EXPERIENCE_HIDE_LABEL);
    assert_eq!(other_experience_label(false), OTHER_EXPERIENCE_SHOW_LABEL);
}
