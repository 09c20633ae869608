pub mod action;
pub mod layout;
pub mod model;
pub mod schedule;
pub mod state;
pub mod view;

pub use action::{apply_action, ActionEffects, GalleryAction, LayoutTrigger};
pub use layout::{gap_from_style, parse_gap_px, row_span, ROW_GAP_FALLBACK_PX, ROW_UNIT_PX};
pub use model::{FilterTag, ImagePhase, TileId, TileState, WILDCARD_TAG};
pub use schedule::{RelayoutCause, RelayoutScheduler, RESIZE_DEBOUNCE_MS, SETTLE_DELAY_MS};
pub use state::{GalleryState, IMAGES_PER_PAGE};
pub use view::{FilterView, GalleryView, TileView};
