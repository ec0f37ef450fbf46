//! Error types

mod engine;

pub use engine::*;
