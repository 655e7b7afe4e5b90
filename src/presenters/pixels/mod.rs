mod presenter;

pub use presenter::FramePresenter;
