mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;
mod storage;

pub use controllers::slide_panel::{
    FrameState, GestureDirection, SlidePanelController, classify_scroll,
};
pub use controllers::snapshot::SnapshotController;
pub use core::data::clip_rect::ClipRect;
pub use core::data::colour::Rgb;
pub use core::data::pixel_image::{PixelImage, PixelImageError};
pub use core::frost::box_blur::{box_blur, box_blur_rayon};
pub use core::frost::frost_layer::build_frost_layer;
pub use core::scene::compositor::{ComposeError, compose_frame, compose_into};
pub use core::slide::limits::SlideLimits;
pub use core::slide::panel::{SlidePanel, SlidePhase};
pub use storage::background::{BackgroundError, load_background};

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
