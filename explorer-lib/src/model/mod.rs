//! Data model

mod topic;

pub use topic::*;
