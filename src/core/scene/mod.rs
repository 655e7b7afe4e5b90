pub mod compositor;

pub use compositor::{ComposeError, compose_frame, compose_into};
