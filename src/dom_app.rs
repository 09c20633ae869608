use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use mozaiku_core::{
    apply_action, ActionEffects, GalleryAction, GalleryState, LayoutTrigger, RelayoutCause,
    RelayoutScheduler, TileId, TileState,
};

use crate::page::{button_tag, image_ready, GalleryPage, FILTER_BTN_CLASS};

/// Browser half of the gallery. Owns the page handles, the gallery
/// state, and the single timer that defers full-grid relayouts.
///
/// Every DOM event is translated into a [`GalleryAction`], folded into
/// the state, and followed by whatever render or measurement work the
/// fold requested. The page is only ever written from [`render`],
/// so what the user sees is always a projection of one state value.
///
/// [`render`]: GalleryApp::render
pub(crate) struct GalleryApp {
    page: GalleryPage,
    state: RefCell<GalleryState>,
    scheduler: RefCell<RelayoutScheduler>,
    relayout_timer: RefCell<Option<Timeout>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl GalleryApp {
    pub(crate) fn attach(document: &Document) -> Rc<Self> {
        let page = GalleryPage::locate(document);
        let tiles = page
            .tiles
            .iter()
            .map(|handle| TileState::new(handle.category.clone()))
            .collect();
        let filter_tags = page.filter_buttons.iter().map(button_tag).collect();
        let app = Rc::new(Self {
            page,
            state: RefCell::new(GalleryState::new(tiles, filter_tags)),
            scheduler: RefCell::new(RelayoutScheduler::new()),
            relayout_timer: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        app.render();
        app.schedule_relayout(RelayoutCause::VisibilityChange);
        app.install_listeners();
        app.prime_loaded_images();
        app
    }

    pub(crate) fn dispatch(self: &Rc<Self>, action: GalleryAction) {
        let effects = apply_action(&mut self.state.borrow_mut(), &action);
        self.run_effects(effects);
    }

    fn run_effects(self: &Rc<Self>, effects: ActionEffects) {
        if effects.render {
            self.render();
        }
        match effects.layout {
            LayoutTrigger::None => {}
            LayoutTrigger::Settle => self.schedule_relayout(RelayoutCause::VisibilityChange),
            LayoutTrigger::Debounce => self.schedule_relayout(RelayoutCause::Resize),
            LayoutTrigger::MeasureTile(tile) => self.measure_tiles(&[tile]),
        }
    }

    fn render(&self) {
        let view = self.state.borrow().view();
        self.page.apply_view(&view);
    }

    /// Measures the given tiles and folds the heights back in as one
    /// action. Without a grid there is no row gap to size against and
    /// the whole pass is skipped.
    fn measure_tiles(self: &Rc<Self>, tiles: &[TileId]) {
        let Some(row_gap) = self.page.row_gap() else {
            return;
        };
        let heights: Vec<(TileId, f64)> = tiles
            .iter()
            .filter_map(|&tile| self.page.measure_tile(tile).map(|height| (tile, height)))
            .collect();
        if heights.is_empty() {
            return;
        }
        self.dispatch(GalleryAction::HeightsMeasured { heights, row_gap });
    }

    fn relayout_visible(self: &Rc<Self>) {
        let shown: Vec<TileId> = self.state.borrow().shown_tiles().collect();
        self.measure_tiles(&shown);
    }

    /// Arms the deferred relayout. Replacing the stored [`Timeout`]
    /// drops the previous one, which cancels it, so the browser never
    /// holds more than one pending callback.
    fn schedule_relayout(self: &Rc<Self>, cause: RelayoutCause) {
        let delay = self.scheduler.borrow_mut().arm(cause);
        let app = Rc::clone(self);
        let timer = Timeout::new(delay, move || {
            app.relayout_timer.borrow_mut().take();
            let fired = app.scheduler.borrow_mut().fire();
            if fired.is_some() {
                app.relayout_visible();
            }
        });
        *self.relayout_timer.borrow_mut() = Some(timer);
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        if let Some(bar) = self.page.filter_bar.as_ref() {
            let app = Rc::clone(self);
            let listener = EventListener::new(bar, "click", move |event: &Event| {
                let Some(target) = event.target() else {
                    return;
                };
                let Some(button) = target.dyn_ref::<Element>() else {
                    return;
                };
                if !button.class_list().contains(FILTER_BTN_CLASS) {
                    return;
                }
                app.dispatch(GalleryAction::FilterSelected {
                    tag: button_tag(button),
                });
            });
            listeners.push(listener);
        }

        if let Some(btn) = self.page.view_more_btn.as_ref() {
            let app = Rc::clone(self);
            let listener = EventListener::new(btn, "click", move |_event| {
                app.dispatch(GalleryAction::ViewMoreActivated);
            });
            listeners.push(listener);
        }

        for (tile, handle) in self.page.tiles.iter().enumerate() {
            let Some(img) = handle.img.as_ref() else {
                continue;
            };
            if image_ready(img) {
                continue;
            }
            let app = Rc::clone(self);
            let listener = EventListener::once(img, "load", move |_event| {
                app.dispatch(GalleryAction::ImageLoaded { tile });
            });
            listeners.push(listener);

            let app = Rc::clone(self);
            let failed = img.clone();
            let listener = EventListener::once(img, "error", move |_event| {
                gloo::console::warn!("failed to load image", failed.src());
                app.dispatch(GalleryAction::ImageFailed { tile });
            });
            listeners.push(listener);
        }

        let window = web_sys::window().expect("window available");
        let app = Rc::clone(self);
        let listener = EventListener::new(&window, "resize", move |_event| {
            app.dispatch(GalleryAction::ViewportResized);
        });
        listeners.push(listener);

        *self.listeners.borrow_mut() = listeners;
    }

    /// Images that decoded before startup never fire a load event, so
    /// their measurement is kicked off here instead.
    fn prime_loaded_images(self: &Rc<Self>) {
        for (tile, handle) in self.page.tiles.iter().enumerate() {
            let Some(img) = handle.img.as_ref() else {
                continue;
            };
            if image_ready(img) {
                self.dispatch(GalleryAction::ImageLoaded { tile });
            }
        }
    }
}
