use crate::layout::row_span;
use crate::model::{FilterTag, ImagePhase, TileId, TileState};

pub const IMAGES_PER_PAGE: usize = 12;

#[derive(Clone, Debug)]
pub struct GalleryState {
    pub tiles: Vec<TileState>,
    pub filter_tags: Vec<FilterTag>,
    pub filter: FilterTag,
    pub visible_count: usize,
    pub page_size: usize,
}

impl GalleryState {
    pub fn new(tiles: Vec<TileState>, filter_tags: Vec<FilterTag>) -> Self {
        let mut state = Self {
            tiles,
            filter_tags,
            filter: FilterTag::All,
            visible_count: IMAGES_PER_PAGE,
            page_size: IMAGES_PER_PAGE,
        };
        state.recompute_visibility();
        state
    }

    /// Switches the active filter and resets the pagination cursor.
    /// Selecting the filter that is already active changes nothing.
    pub fn select_filter(&mut self, tag: FilterTag) -> bool {
        if self.filter == tag {
            return false;
        }
        self.filter = tag;
        self.visible_count = self.page_size;
        self.recompute_visibility();
        true
    }

    pub fn view_more(&mut self) {
        self.visible_count += self.page_size;
        self.recompute_visibility();
    }

    /// Marks the first `visible_count` filter matches as shown, everything
    /// else as hidden, preserving document order.
    pub fn recompute_visibility(&mut self) {
        let filter = self.filter.clone();
        let limit = self.visible_count;
        let mut shown = 0usize;
        for tile in &mut self.tiles {
            tile.shown = shown < limit && filter.matches(&tile.category);
            if tile.shown {
                shown += 1;
            }
        }
    }

    pub fn set_phase(&mut self, tile: TileId, phase: ImagePhase) -> bool {
        let Some(entry) = self.tiles.get_mut(tile) else {
            return false;
        };
        if entry.phase == phase {
            return false;
        }
        entry.phase = phase;
        true
    }

    /// Stores row spans for the measured tiles; heights of tiles whose image
    /// has not loaded are ignored. Returns whether any span changed.
    pub fn apply_spans(&mut self, heights: &[(TileId, f64)], row_gap: f64) -> bool {
        let mut changed = false;
        for (tile, height) in heights {
            let Some(entry) = self.tiles.get_mut(*tile) else {
                continue;
            };
            if entry.phase != ImagePhase::Loaded {
                continue;
            }
            let span = row_span(*height, row_gap);
            if entry.span != Some(span) {
                entry.span = Some(span);
                changed = true;
            }
        }
        changed
    }

    pub fn filtered_total(&self) -> usize {
        self.tiles
            .iter()
            .filter(|tile| self.filter.matches(&tile.category))
            .count()
    }

    pub fn more_available(&self) -> bool {
        self.filtered_total() > self.visible_count
    }

    pub fn shown_tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.shown)
            .map(|(tile, _)| tile)
    }
}
