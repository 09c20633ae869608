use crate::model::{FilterTag, ImagePhase, TileId};
use crate::state::GalleryState;

#[derive(Clone, Debug)]
pub enum GalleryAction {
    FilterSelected { tag: FilterTag },
    ViewMoreActivated,
    ImageLoaded { tile: TileId },
    ImageFailed { tile: TileId },
    ViewportResized,
    HeightsMeasured {
        heights: Vec<(TileId, f64)>,
        row_gap: f64,
    },
}

/// Follow-up layout work the host must run after an action is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTrigger {
    None,
    Settle,
    Debounce,
    MeasureTile(TileId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionEffects {
    pub render: bool,
    pub layout: LayoutTrigger,
}

pub fn apply_action(state: &mut GalleryState, action: &GalleryAction) -> ActionEffects {
    match action {
        GalleryAction::FilterSelected { tag } => {
            if !state.select_filter(tag.clone()) {
                return ActionEffects {
                    render: false,
                    layout: LayoutTrigger::None,
                };
            }
            ActionEffects {
                render: true,
                layout: LayoutTrigger::Settle,
            }
        }
        GalleryAction::ViewMoreActivated => {
            state.view_more();
            ActionEffects {
                render: true,
                layout: LayoutTrigger::Settle,
            }
        }
        GalleryAction::ImageLoaded { tile } => {
            let layout = if state.set_phase(*tile, ImagePhase::Loaded) {
                LayoutTrigger::MeasureTile(*tile)
            } else {
                LayoutTrigger::None
            };
            ActionEffects {
                render: false,
                layout,
            }
        }
        GalleryAction::ImageFailed { tile } => {
            state.set_phase(*tile, ImagePhase::Failed);
            ActionEffects {
                render: false,
                layout: LayoutTrigger::None,
            }
        }
        GalleryAction::ViewportResized => ActionEffects {
            render: false,
            layout: LayoutTrigger::Debounce,
        },
        GalleryAction::HeightsMeasured { heights, row_gap } => {
            let changed = state.apply_spans(heights, *row_gap);
            ActionEffects {
                render: changed,
                layout: LayoutTrigger::None,
            }
        }
    }
}
