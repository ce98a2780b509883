// Host-side tests for the fullscreen panel controller.

use folio_core::*;

#[test]
fn starts_hidden_and_opens_once() {
    let mut panel = PanelState::default();
    assert_eq!(panel.visibility(), Visibility::Hidden);

    let t = panel.open().expect("hidden panel opens");
    assert_eq!(t.to, Visibility::Shown);
    assert_eq!(t.deferred_delay_ms(), PANEL_ACTIVATE_DELAY_MS);
    assert!(panel.is_current(t));

    assert_eq!(panel.open(), None, "opening twice is a no-op");
}

#[test]
fn close_waits_for_the_transition() {
    let mut panel = PanelState::default();
    assert_eq!(panel.close(), None, "closing a hidden panel is a no-op");

    panel.open();
    let t = panel.close().expect("shown panel closes");
    assert_eq!(t.to, Visibility::Hidden);
    assert_eq!(t.deferred_delay_ms(), PANEL_HIDE_DELAY_MS);
    assert_eq!(panel.visibility(), Visibility::Hidden);
}

#[test]
fn reopening_during_close_drops_the_pending_hide() {
    let mut panel = PanelState::default();
    let opened = panel.open().unwrap();
    let closing = panel.close().unwrap();
    let reopened = panel.open().unwrap();

    assert!(!panel.is_current(opened));
    assert!(!panel.is_current(closing), "stale hide must not run");
    assert!(panel.is_current(reopened));
    assert_ne!(closing.generation, reopened.generation);
}

#[test]
fn closing_before_activation_drops_the_pending_activate() {
    let mut panel = PanelState::default();
    let opened = panel.open().unwrap();
    let closing = panel.close().unwrap();
    assert!(!panel.is_current(opened));
    assert!(panel.is_current(closing));
}
