//! Engine error types

/// Errors that can occur when driving the table engine.
///
/// The engine is total over almost all of its inputs: empty queries,
/// empty collections, and out-of-range page numbers are all valid and
/// handled internally. The only rejectable input is a page size outside
/// the enumerated options. Sort fields are a closed enum, so an
/// out-of-set sort key is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A page size outside the enumerated options was requested.
    ///
    /// The engine state is left unchanged when this is returned.
    #[error("invalid page size {0}, expected one of 10, 20, 30, 40, 50")]
    InvalidPageSize(usize),
}
