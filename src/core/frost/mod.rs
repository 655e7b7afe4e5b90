pub mod box_blur;
pub mod frost_layer;

pub use box_blur::{box_blur, box_blur_rayon};
pub use frost_layer::build_frost_layer;
