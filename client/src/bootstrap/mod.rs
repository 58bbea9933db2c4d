pub mod loops;
pub mod state;
