pub mod canvas;
pub mod placement;
