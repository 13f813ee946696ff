//! Debate entity and derived country statistics

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::value_objects::{ReactionSnapshot, VoteSnapshot};

/// Debate entity
#[derive(Debug, Clone, PartialEq)]
pub struct Debate {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub comment_count: u32,
    pub vote: VoteSnapshot,
    pub reactions: ReactionSnapshot,
    pub country_stats: Vec<CountryStat>,
}

impl Debate {
    /// Create a new Debate with empty vote/reaction state
    pub fn new(
        id: i64,
        title: String,
        content: String,
        author_id: i64,
        author_name: String,
    ) -> Self {
        Self {
            id,
            title,
            content,
            author_id,
            author_name,
            created_at: Utc::now(),
            comment_count: 0,
            vote: VoteSnapshot::default(),
            reactions: ReactionSnapshot::default(),
            country_stats: Vec::new(),
        }
    }
}

/// Per-country vote share, derived from a server percentage map
///
/// Read-only display aggregate; recomputed wholesale whenever the server
/// sends a fresh `nationPercent` map, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryStat {
    pub code: String,
    pub name: String,
    pub count: u32,
    pub percentage: f64,
}

impl CountryStat {
    /// Derive country rows from a code -> percentage map and the total vote
    /// count. Counts are `percentage x total`, rounded. Rows are ordered by
    /// count descending, code ascending for ties.
    #[must_use]
    pub fn from_percent_map(percent_by_code: &HashMap<String, f64>, total_votes: u32) -> Vec<Self> {
        let mut stats: Vec<Self> = percent_by_code
            .iter()
            .map(|(code, &percentage)| Self {
                code: code.clone(),
                name: country_name(code).unwrap_or(code).to_string(),
                count: ((percentage / 100.0) * f64::from(total_votes)).round() as u32,
                percentage,
            })
            .collect();
        stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.code.cmp(&b.code)));
        stats
    }
}

/// English display name for an ISO 3166-1 alpha-2 country code
#[must_use]
pub fn country_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "KR" => "South Korea",
        "US" => "United States",
        "JP" => "Japan",
        "CN" => "China",
        "GB" => "United Kingdom",
        "DE" => "Germany",
        "FR" => "France",
        "IN" => "India",
        "BR" => "Brazil",
        "CA" => "Canada",
        "AU" => "Australia",
        "ES" => "Spain",
        "IT" => "Italy",
        "MX" => "Mexico",
        "RU" => "Russia",
        "VN" => "Vietnam",
        "TH" => "Thailand",
        "ID" => "Indonesia",
        "PH" => "Philippines",
        "SG" => "Singapore",
        _ => return None,
    };
    Some(name)
}
