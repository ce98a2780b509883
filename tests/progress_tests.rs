// Host-side tests for the model loader's progress state machine.

use folio_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn run_to_cap(progress: &mut LoadProgress, rng: &mut StdRng) -> Vec<u32> {
    let mut shown = Vec::new();
    for _ in 0..500 {
        match progress.tick(rng) {
            Some(p) => shown.push(p),
            None => break,
        }
    }
    shown
}

#[test]
fn fake_progress_is_monotonic_and_capped() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut progress = LoadProgress::new();
    let shown = run_to_cap(&mut progress, &mut rng);

    assert!(!shown.is_empty());
    for w in shown.windows(2) {
        assert!(w[1] >= w[0], "progress went backwards: {:?}", w);
    }
    assert!(shown.iter().all(|&p| p <= PROGRESS_FAKE_CAP));
    assert_eq!(progress.displayed(), PROGRESS_FAKE_CAP);
    assert_eq!(progress.phase(), LoadPhase::Loading);
    assert_eq!(progress.tick(&mut rng), None);
}

#[test]
fn ready_finishes_to_exactly_one_hundred() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut progress = LoadProgress::new();
    run_to_cap(&mut progress, &mut rng);

    assert!(progress.ready());
    assert_eq!(progress.phase(), LoadPhase::Finishing);
    assert_eq!(progress.tick(&mut rng), None, "fake ticks stop after ready");

    let mut steps = Vec::new();
    while let Some(p) = progress.finish_tick() {
        steps.push(p);
    }
    assert_eq!(steps, vec![92, 94, 96, 98, 100]);
    assert!(progress.is_revealed());
    assert_eq!(progress.completion(), Some(Completion::Ready));
}

#[test]
fn early_ready_never_moves_backwards() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut progress = LoadProgress::new();
    progress.tick(&mut rng);
    progress.tick(&mut rng);
    let before = progress.displayed();
    assert!(before < PROGRESS_FAKE_CAP);

    assert!(progress.ready());
    let first = progress.finish_tick().unwrap();
    assert!(first > before);
    while progress.finish_tick().is_some() {}
    assert_eq!(progress.displayed(), 100);
}

#[test]
fn timeout_forces_completion_while_loading() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut progress = LoadProgress::new();
    progress.tick(&mut rng);

    assert!(progress.timeout());
    assert_eq!(progress.displayed(), 100);
    assert!(progress.is_revealed());
    assert_eq!(progress.completion(), Some(Completion::TimedOut));

    // a late ready signal changes nothing
    assert!(!progress.ready());
    assert_eq!(progress.finish_tick(), None);
    assert_eq!(progress.tick(&mut rng), None);
    assert_eq!(progress.displayed(), 100);
}

#[test]
fn timeout_after_ready_is_ignored() {
    let mut progress = LoadProgress::new();
    assert!(progress.ready());
    progress.finish_tick();

    assert!(!progress.timeout());
    assert_eq!(progress.phase(), LoadPhase::Finishing);
    assert_eq!(progress.completion(), Some(Completion::Ready));
    while progress.finish_tick().is_some() {}
    assert_eq!(progress.displayed(), 100);
}

#[test]
fn second_ready_is_a_no_op() {
    let mut progress = LoadProgress::new();
    assert!(progress.ready());
    assert!(!progress.ready());
}

#[test]
fn ready_at_startup_then_load_event_finishes_once() {
    // already-loaded model detected before any fake tick, then the listener fires too
    let mut progress = LoadProgress::new();
    assert!(progress.ready());
    assert_eq!(progress.finish_tick(), Some(92));

    assert!(!progress.ready());
    let mut rest = Vec::new();
    while let Some(p) = progress.finish_tick() {
        rest.push(p);
    }
    assert_eq!(rest, vec![94, 96, 98, 100]);
    assert_eq!(progress.completion(), Some(Completion::Ready));
    assert!(!progress.timeout());
}

#[test]
fn ring_offset_tracks_percentage() {
    let c = ring_circumference();
    assert!((c - 2.0 * std::f64::consts::PI * 50.0).abs() < 1e-9);
    assert!((ring_dash_offset(0) - c).abs() < 1e-9);
    assert!((ring_dash_offset(50) - c / 2.0).abs() < 1e-9);
    assert!(ring_dash_offset(100).abs() < 1e-9);
    assert!(ring_dash_offset(250).abs() < 1e-9);
}
