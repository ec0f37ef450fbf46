//! Topic record type

use serde::{Deserialize, Serialize};

/// One topic entity, shown as a single table row.
///
/// Topics are immutable once produced by a record source; the engine
/// never mutates them, only filters and reorders views over them.
///
/// # Example
///
/// ```
/// use explorer_lib::Topic;
///
/// let topic = Topic::new(1, "Luxury Hotels", 50, "Mar 15, 2024");
/// assert_eq!(topic.brands_discovered, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique, stable identity of the topic.
    pub id: u64,
    /// Display name of the topic.
    pub name: String,
    /// Count of brands discovered for this topic.
    pub brands_discovered: u64,
    /// Human-formatted last-updated label (e.g. `"Mar 15, 2024"`).
    pub last_updated: String,
}

impl Topic {
    /// Creates a new topic record.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        brands_discovered: u64,
        last_updated: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            brands_discovered,
            last_updated: last_updated.into(),
        }
    }
}
