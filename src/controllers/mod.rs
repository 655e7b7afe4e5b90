pub mod slide_panel;
pub mod snapshot;

pub use slide_panel::{FrameState, GestureDirection, SlidePanelController, classify_scroll};
pub use snapshot::SnapshotController;
