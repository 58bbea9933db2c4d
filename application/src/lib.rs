#[cfg(any(feature = "adapters", feature = "eframe", feature = "reqwest"))]
compile_error!("application must not depend on adapters/framework crates");

pub mod canvas;
pub mod error;
pub mod infrastructure_config;
pub mod ports;
pub mod queue;
