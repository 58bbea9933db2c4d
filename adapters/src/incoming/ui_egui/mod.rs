pub(crate) mod snapshot;
pub(crate) mod texture;

pub mod app;
