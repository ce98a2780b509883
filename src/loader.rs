//! Drives the fake progress indicator over the 3D model embed.
//!
//! All decisions go through [`LoadProgress`]; this module only owns the timers
//! and turns state changes into DOM updates.

use crate::dom;
use crate::overlay::LoaderView;
use crate::timers::{self, Interval};
use folio_core::{
    Completion, LoadProgress, FINISH_TICK_MS, HINT_DELAY_MS, LOAD_TIMEOUT_MS, PROGRESS_TICK_MS,
    REVEAL_FADE_DELAY_MS, REVEAL_REMOVE_DELAY_MS,
};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

struct LoaderState {
    progress: LoadProgress,
    rng: StdRng,
    fake: Option<Interval>,
    finish: Option<Interval>,
    started: Instant,
}

type Shared = (Rc<LoaderView>, Rc<RefCell<LoaderState>>);

pub fn start(document: &web::Document) -> anyhow::Result<()> {
    let view = Rc::new(LoaderView::find(document)?);
    view.init_ring();
    let state = Rc::new(RefCell::new(LoaderState {
        progress: LoadProgress::new(),
        rng: StdRng::from_entropy(),
        fake: None,
        finish: None,
        started: Instant::now(),
    }));

    let fake = {
        let (view, state) = (view.clone(), state.clone());
        Interval::new(PROGRESS_TICK_MS, move || {
            let mut s = state.borrow_mut();
            let s = &mut *s;
            if let Some(percent) = s.progress.tick(&mut s.rng) {
                view.set_progress(percent);
            }
        })?
    };
    state.borrow_mut().fake = Some(fake);

    let shared: Shared = (view.clone(), state.clone());
    dom::on(&view.model, "load", move |_: web::Event| on_ready(&shared));

    let shared: Shared = (view, state);
    // the model may have finished loading before this module started
    if model_loaded(&shared.0.model) {
        log::info!("[loader] model already loaded");
        on_ready(&shared);
    } else {
        log::info!("[loader] waiting for model");
    }

    timers::after(LOAD_TIMEOUT_MS, move || on_timeout(&shared));
    Ok(())
}

fn on_ready((view, state): &Shared) {
    {
        let mut s = state.borrow_mut();
        if !s.progress.ready() {
            return;
        }
        s.fake = None;
    }
    log::info!("[loader] model ready; finishing");

    let finish = {
        let (view, state) = (view.clone(), state.clone());
        Interval::new(FINISH_TICK_MS, move || {
            let mut s = state.borrow_mut();
            if let Some(percent) = s.progress.finish_tick() {
                view.set_progress(percent);
            }
            if s.progress.is_revealed() {
                log_completion(&s);
                s.finish = None;
            }
        })
    };
    match finish {
        Ok(interval) => state.borrow_mut().finish = Some(interval),
        Err(e) => {
            log::error!("[loader] finish timer: {:#}", e);
            view.set_progress(100);
        }
    }

    view.show_model();
    let view = view.clone();
    timers::next_frame(move || {
        timers::after(REVEAL_FADE_DELAY_MS, move || {
            view.fade_out();
            timers::after(REVEAL_REMOVE_DELAY_MS, move || {
                view.remove();
                timers::after(HINT_DELAY_MS, move || view.show_hint());
            });
        });
    });
}

fn on_timeout((view, state): &Shared) {
    let mut s = state.borrow_mut();
    if !s.progress.timeout() {
        return;
    }
    s.fake = None;
    log_completion(&s);
    drop(s);

    view.set_progress(100);
    view.remove();
    view.show_model();
}

/// `<model-viewer>` exposes a `loaded` flag once its `load` event has fired.
fn model_loaded(model: &web::HtmlElement) -> bool {
    js_sys::Reflect::get(model, &JsValue::from_str("loaded"))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

fn log_completion(s: &LoaderState) {
    let elapsed = s.started.elapsed().as_secs_f32();
    match s.progress.completion() {
        Some(Completion::TimedOut) => {
            log::warn!("[loader] no ready signal after {:.1}s; forcing reveal", elapsed)
        }
        _ => log::info!("[loader] revealed after {:.2}s", elapsed),
    }
}
