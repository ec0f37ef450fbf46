//! Topic explorer core library
//!
//! The tabular data engine behind the topic explorer: deterministic
//! search, sort, and pagination over an in-memory topic collection,
//! with debounced query input and a derived pending flag. Presentation
//! layers supply the records and render the engine's [`TableView`].

pub mod engine;
pub mod error;
pub mod model;

pub use engine::{SortDirection, SortField, TableEngine, TableView, PAGE_SIZE_OPTIONS};
pub use error::EngineError;
pub use model::Topic;
