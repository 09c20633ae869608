mod dom_app;
mod page;

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom_app::GalleryApp;

thread_local! {
    static APP: RefCell<Option<Rc<GalleryApp>>> = RefCell::new(None);
}

fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let app = GalleryApp::attach(&document);
    APP.with(|slot| {
        *slot.borrow_mut() = Some(app);
    });
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo::events::EventListener;
        use web_sys::Event;

        console_error_panic_hook::set_once();
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        if document.ready_state() == "loading" {
            EventListener::once(&document, "DOMContentLoaded", |_event: &Event| start())
                .forget();
        } else {
            start();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("mozaiku only runs in the browser on wasm32 targets");
    }
}
