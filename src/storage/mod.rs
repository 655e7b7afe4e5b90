pub mod background;
pub mod write_ppm;

pub use background::{BackgroundError, load_background};
pub use write_ppm::write_ppm;
