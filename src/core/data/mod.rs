pub mod clip_rect;
pub mod colour;
pub mod pixel_image;
