use crate::background::Background;
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window listeners feeding the background; kept so teardown can detach them.
struct BackgroundListeners {
    window: web::Window,
    resize: Closure<dyn FnMut()>,
    mousemove: Closure<dyn FnMut(web::MouseEvent)>,
}

impl BackgroundListeners {
    fn attach(window: web::Window, background: &Rc<RefCell<Background>>) -> Self {
        let bg = background.clone();
        let resize = Closure::wrap(Box::new(move || {
            bg.borrow_mut().resize();
        }) as Box<dyn FnMut()>);

        let bg = background.clone();
        let mousemove = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            bg.borrow_mut().pointer_moved(client);
        }) as Box<dyn FnMut(_)>);

        _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        _ = window
            .add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref());
        Self {
            window,
            resize,
            mousemove,
        }
    }

    fn detach(self) {
        _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        _ = self.window.remove_event_listener_with_callback(
            "mousemove",
            self.mousemove.as_ref().unchecked_ref(),
        );
    }
}

/// Wire resize and pointer input into the background, and tear it all down
/// when the page is discarded (not when it goes into the back/forward cache).
pub fn wire_background(background: Rc<RefCell<Background>>) {
    let Some(window) = web::window() else {
        return;
    };
    let listeners = RefCell::new(Some(BackgroundListeners::attach(
        window.clone(),
        &background,
    )));

    dom::on(&window, "pagehide", move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            return;
        }
        background.borrow_mut().teardown();
        if let Some(l) = listeners.borrow_mut().take() {
            l.detach();
        }
    });
}
