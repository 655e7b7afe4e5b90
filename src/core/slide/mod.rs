pub mod limits;
pub mod panel;
pub mod timeline;

pub use limits::SlideLimits;
pub use panel::{SlidePanel, SlidePhase, SlideTickReport};
pub use timeline::{SlideTimeline, TimelineUpdate};
