pub mod canvas;
pub mod color;
pub mod coords;
pub mod error;
pub mod quota;
pub mod write;
