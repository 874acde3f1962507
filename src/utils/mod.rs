// Shared helpers

pub mod constants;

pub use constants::*;
