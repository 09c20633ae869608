use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use mozaiku_core::{gap_from_style, FilterTag, GalleryView, TileId};

pub(crate) const GRID_SELECTOR: &str = ".gallery-grid";
pub(crate) const TILE_SELECTOR: &str = ".gallery-item";
pub(crate) const IMAGE_SELECTOR: &str = "img";
pub(crate) const FILTER_BAR_ID: &str = "filterBtnContainer";
pub(crate) const FILTER_BTN_SELECTOR: &str = ".filter-btn";
pub(crate) const FILTER_BTN_CLASS: &str = "filter-btn";
pub(crate) const VIEW_MORE_BTN_ID: &str = "viewMoreBtn";
pub(crate) const VIEW_MORE_WRAP_ID: &str = "viewMoreContainer";
pub(crate) const CATEGORY_ATTR: &str = "data-category";
pub(crate) const FILTER_ATTR: &str = "data-filter";
pub(crate) const ACTIVE_CLASS: &str = "active";

/// One gallery tile as found in the document: the tile element itself,
/// its image (if the markup carries one) and its category tag.
pub(crate) struct TileHandle {
    pub root: HtmlElement,
    pub img: Option<HtmlImageElement>,
    pub category: String,
}

/// Handles to every gallery element the page offers, captured once at
/// startup. All of them are optional; behavior tied to a missing
/// element is skipped rather than treated as an error.
pub(crate) struct GalleryPage {
    pub grid: Option<Element>,
    pub tiles: Vec<TileHandle>,
    pub filter_bar: Option<Element>,
    pub filter_buttons: Vec<Element>,
    pub view_more_btn: Option<Element>,
    pub view_more_wrap: Option<HtmlElement>,
}

impl GalleryPage {
    pub(crate) fn locate(document: &Document) -> Self {
        let grid = document.query_selector(GRID_SELECTOR).ok().flatten();
        let tiles = select_all(document, TILE_SELECTOR)
            .into_iter()
            .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
            .map(|root| {
                let img = root
                    .query_selector(IMAGE_SELECTOR)
                    .ok()
                    .flatten()
                    .and_then(|element| element.dyn_into::<HtmlImageElement>().ok());
                let category = root.get_attribute(CATEGORY_ATTR).unwrap_or_default();
                TileHandle { root, img, category }
            })
            .collect();
        let filter_bar = document.get_element_by_id(FILTER_BAR_ID);
        let filter_buttons = select_all(document, FILTER_BTN_SELECTOR);
        let view_more_btn = document.get_element_by_id(VIEW_MORE_BTN_ID);
        let view_more_wrap = document
            .get_element_by_id(VIEW_MORE_WRAP_ID)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        Self {
            grid,
            tiles,
            filter_bar,
            filter_buttons,
            view_more_btn,
            view_more_wrap,
        }
    }

    /// Row gap from the grid's computed style, `None` when the page has
    /// no grid. Styles that carry no pixel quantity fall back to the
    /// stylesheet default.
    pub(crate) fn row_gap(&self) -> Option<f64> {
        let grid = self.grid.as_ref()?;
        let gap = web_sys::window()
            .and_then(|window| window.get_computed_style(grid).ok().flatten())
            .and_then(|style| style.get_property_value("gap").ok());
        Some(gap_from_style(gap.as_deref()))
    }

    /// Rendered height of the tile's image. Tiles whose image has not
    /// finished decoding (or failed to) measure as `None`.
    pub(crate) fn measure_tile(&self, tile: TileId) -> Option<f64> {
        let handle = self.tiles.get(tile)?;
        let img = handle.img.as_ref()?;
        if !image_ready(img) {
            return None;
        }
        Some(img.get_bounding_client_rect().height())
    }

    /// Writes a view snapshot onto the page: tile visibility and spans,
    /// the active marker on the filter buttons, and the view-more
    /// control. Always writes the full snapshot so the page never
    /// drifts from the state it projects.
    pub(crate) fn apply_view(&self, view: &GalleryView) {
        for (handle, tile) in self.tiles.iter().zip(view.tiles.iter()) {
            let style = handle.root.style();
            let display = if tile.shown { "block" } else { "none" };
            let _ = style.set_property("display", display);
            if let Some(span) = tile.span {
                let _ = style.set_property("grid-row-end", &format!("span {span}"));
            }
        }
        for (button, filter) in self.filter_buttons.iter().zip(view.filters.iter()) {
            let class_list = button.class_list();
            if filter.active {
                let _ = class_list.add_1(ACTIVE_CLASS);
            } else {
                let _ = class_list.remove_1(ACTIVE_CLASS);
            }
        }
        if let Some(wrap) = self.view_more_wrap.as_ref() {
            let display = if view.view_more_visible { "block" } else { "none" };
            let _ = wrap.style().set_property("display", display);
        }
    }
}

/// Filter tag carried by a button. A button without the attribute gets
/// the empty tag, which matches tiles that lack a category of their own.
pub(crate) fn button_tag(button: &Element) -> FilterTag {
    FilterTag::parse(button.get_attribute(FILTER_ATTR).as_deref().unwrap_or(""))
}

/// An image is measurable once it has decoded to a nonzero height.
/// A broken image reports `complete` with zero natural height and is
/// never measured.
pub(crate) fn image_ready(img: &HtmlImageElement) -> bool {
    img.complete() && img.natural_height() > 0
}

fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut elements = Vec::with_capacity(list.length() as usize);
    for idx in 0..list.length() {
        let Some(node) = list.get(idx) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<Element>() {
            elements.push(element);
        }
    }
    elements
}
