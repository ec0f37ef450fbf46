//! Seeded mock topic generation.
//!
//! Stand-in record source until a real backend exists. Deterministic
//! for a fixed seed so the table contents are stable across runs.

use chrono::{Days, Local};
use explorer_lib::Topic;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 12345;

const WORDS: &[&str] = &[
    "Luxury",
    "Budget",
    "Modern",
    "Traditional",
    "Urban",
    "Rural",
    "beach",
    "mountain",
    "city",
    "forest",
    "desert",
    "lake",
    "resorts",
    "hotels",
    "retreats",
    "lodges",
    "villas",
    "apartments",
    "in",
    "near",
    "around",
    "by",
    "Thailand",
    "Vietnam",
    "Singapore",
    "Malaysia",
    "Indonesia",
    "Philippines",
    "with",
    "featuring",
    "including",
    "spa",
    "pool",
    "garden",
    "view",
    "beach access",
    "water sports",
];

/// Generates `count` deterministic topics: word-salad names, brand
/// counts in 20..=119, last-updated dates within the past 30 days.
pub fn generate_topics(count: usize) -> Vec<Topic> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let today = Local::now().date_naive();

    (1..=count as u64)
        .map(|id| {
            let word_count = rng.random_range(2..=4);
            let name = (0..word_count)
                .map(|_| WORDS[rng.random_range(0..WORDS.len())])
                .collect::<Vec<_>>()
                .join(" ");

            let brands_discovered = rng.random_range(20..120);
            let days_ago = rng.random_range(0..30);
            let date = today
                .checked_sub_days(Days::new(days_ago))
                .unwrap_or(today);

            Topic::new(id, name, brands_discovered, format_date(date))
        })
        .collect()
}

/// Formats a date the way the table displays it, e.g. `"Mar 15, 2024"`.
fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_lib::engine::parse_updated_label;

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_topics(50), generate_topics(50));
    }

    #[test]
    fn test_ids_are_unique_and_sequential() {
        let topics = generate_topics(10);
        let ids: Vec<u64> = topics.iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
    }

    #[test]
    fn test_labels_round_trip_through_the_sort_parser() {
        for topic in generate_topics(100) {
            assert!(
                parse_updated_label(&topic.last_updated).is_some(),
                "unparsable label: {}",
                topic.last_updated
            );
        }
    }

    #[test]
    fn test_brand_counts_in_range() {
        for topic in generate_topics(100) {
            assert!((20..120).contains(&topic.brands_discovered));
        }
    }
}
