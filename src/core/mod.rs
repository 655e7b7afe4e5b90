pub mod data;
pub mod frost;
pub mod scene;
pub mod slide;
