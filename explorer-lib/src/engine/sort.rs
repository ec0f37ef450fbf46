//! Sorting of topic collections.

use std::cmp::Ordering;
use std::sync::OnceLock;

use chrono::NaiveDate;
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use serde::{Deserialize, Serialize};

use crate::model::Topic;

/// Column a topic collection can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortField {
    /// Topic name, locale-aware collation.
    #[default]
    Name,
    /// Brands-discovered count, numeric.
    BrandsDiscovered,
    /// Last-updated label, compared as calendar dates.
    LastUpdated,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9, oldest first).
    #[default]
    Ascending,
    /// Descending order (Z-A, 9-0, newest first).
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Stable sort of a topic collection by the given field and direction.
///
/// Descending reverses the comparator rather than the output list, so
/// records with equal keys keep their original relative order in both
/// directions.
pub fn sort_topics(
    mut topics: Vec<Topic>,
    field: SortField,
    direction: SortDirection,
) -> Vec<Topic> {
    topics.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    topics
}

fn compare(a: &Topic, b: &Topic, field: SortField) -> Ordering {
    match field {
        SortField::Name => collate(&a.name, &b.name),
        SortField::BrandsDiscovered => a.brands_discovered.cmp(&b.brands_discovered),
        SortField::LastUpdated => {
            // None < Some, so unparsable labels sort earliest.
            parse_updated_label(&a.last_updated).cmp(&parse_updated_label(&b.last_updated))
        }
    }
}

/// Parses a last-updated label back to a calendar date.
///
/// Labels use the fixed `"Mon D, YYYY"` format the record source
/// produces (e.g. `"Mar 15, 2024"`). Anything else yields `None`.
pub fn parse_updated_label(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(label.trim(), "%b %d, %Y").ok()
}

/// Locale-aware string comparison for topic names.
///
/// Plain code-point ordering misplaces names with diacritics or mixed
/// case, so names go through an ICU collator (root locale, default
/// strength). If collation data is unavailable the comparison falls
/// back to case-folded code-point order.
fn collate(a: &str, b: &str) -> Ordering {
    static COLLATOR: OnceLock<Option<CollatorBorrowed<'static>>> = OnceLock::new();

    let collator = COLLATOR.get_or_init(|| {
        Collator::try_new(CollatorPreferences::default(), CollatorOptions::default()).ok()
    });

    match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
    }
}
