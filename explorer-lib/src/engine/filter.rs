//! Query filtering over topic collections.

use crate::model::Topic;

/// Filters topics by a free-text query.
///
/// The query is trimmed and matched case-insensitively. A topic matches
/// if any of the following succeed:
///
/// 1. the name contains the query as a substring,
/// 2. the query parses as an integer and either equals the
///    brands-discovered count exactly or is a substring of its decimal
///    representation,
/// 3. the last-updated label contains the query as a substring.
///
/// An empty (or whitespace-only) query is the identity: the input is
/// returned unchanged, preserving original order.
pub fn filter_topics(topics: &[Topic], query: &str) -> Vec<Topic> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return topics.to_vec();
    }

    let numeric_query: Option<u64> = query.parse().ok();

    topics
        .iter()
        .filter(|topic| matches_query(topic, &query, numeric_query))
        .cloned()
        .collect()
}

/// Checks one topic against an already-normalized (trimmed, lowercase)
/// query.
fn matches_query(topic: &Topic, query: &str, numeric_query: Option<u64>) -> bool {
    if topic.name.to_lowercase().contains(query) {
        return true;
    }

    if let Some(n) = numeric_query
        && (topic.brands_discovered == n || topic.brands_discovered.to_string().contains(query))
    {
        return true;
    }

    topic.last_updated.to_lowercase().contains(query)
}
