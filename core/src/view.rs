use crate::model::FilterTag;
use crate::state::GalleryState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileView {
    pub shown: bool,
    pub span: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterView {
    pub tag: FilterTag,
    pub active: bool,
}

/// Everything the render step projects onto the page, in tile and button
/// document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryView {
    pub tiles: Vec<TileView>,
    pub filters: Vec<FilterView>,
    pub view_more_visible: bool,
}

impl GalleryState {
    pub fn view(&self) -> GalleryView {
        let tiles = self
            .tiles
            .iter()
            .map(|tile| TileView {
                shown: tile.shown,
                span: tile.span,
            })
            .collect();
        // The active marker follows the selection; the first matching button
        // wins so duplicate tags never mark two buttons.
        let mut marked = false;
        let filters = self
            .filter_tags
            .iter()
            .map(|tag| {
                let active = !marked && *tag == self.filter;
                if active {
                    marked = true;
                }
                FilterView {
                    tag: tag.clone(),
                    active,
                }
            })
            .collect();
        GalleryView {
            tiles,
            filters,
            view_more_visible: self.more_available(),
        }
    }
}
