//! Filtering, ordering, and pagination over a lead collection.
//!
//! Stages always run in the same order: search and tier filters, then a
//! stable sort, then pagination. Statistics describe the filtered set before
//! pagination.

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{Lead, Urgency};
use super::scoring::TierThresholds;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Field used to order the listing. Unknown values fall back to `Score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SortKey {
    #[default]
    Score,
    Name,
    Date,
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Self::Name,
            "date" => Self::Date,
            _ => Self::Score,
        }
    }
}

/// Listing direction. Unknown values fall back to `Desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl From<String> for SortOrder {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Self::Asc,
            _ => Self::Desc,
        }
    }
}

/// Listing parameters as accepted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub sort_order: SortOrder,
    /// Blank or non-numeric values read as absent, like the other parameters.
    #[serde(default, deserialize_with = "deserialize_page_number")]
    pub page: Option<usize>,
    #[serde(default, deserialize_with = "deserialize_page_number")]
    pub page_size: Option<usize>,
    /// Restricts the listing to one tier; "all" or unknown values disable it.
    #[serde(default, deserialize_with = "deserialize_tier")]
    pub urgency: Option<Urgency>,
}

impl LeadQuery {
    pub fn sorted(sort_by: SortKey, sort_order: SortOrder) -> Self {
        Self {
            sort_by,
            sort_order,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }

    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|value| !value.is_empty())
            .map(str::to_lowercase)
    }

    fn effective_page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    fn effective_page_size(&self, default_page_size: usize) -> usize {
        self.page_size.unwrap_or(default_page_size).max(1)
    }
}

fn deserialize_tier<'de, D>(deserializer: D) -> Result<Option<Urgency>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Urgency::parse))
}

/// Query strings carry every value as text; JSON callers may send numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum PageNumber {
    Number(usize),
    Text(String),
}

fn deserialize_page_number<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<PageNumber>::deserialize(deserializer)?;
    Ok(match raw {
        Some(PageNumber::Number(value)) => Some(value),
        Some(PageNumber::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

/// Tier counts and mean score for a lead set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadStats {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub average_score: f64,
}

impl LeadStats {
    pub fn from_leads(leads: &[Lead], thresholds: TierThresholds) -> Self {
        let mut stats = Self {
            total: leads.len(),
            high: 0,
            medium: 0,
            low: 0,
            average_score: 0.0,
        };

        let mut score_sum = 0u64;
        for lead in leads {
            score_sum += u64::from(lead.score);
            match thresholds.urgency_for(lead.score) {
                Urgency::High => stats.high += 1,
                Urgency::Medium => stats.medium += 1,
                Urgency::Low => stats.low += 1,
            }
        }

        if !leads.is_empty() {
            let mean = score_sum as f64 / leads.len() as f64;
            stats.average_score = (mean * 10.0).round() / 10.0;
        }

        stats
    }
}

/// One page of the processed listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPage {
    pub items: Vec<Lead>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub stats: LeadStats,
}

/// Applies the search and tier filters, then sorts the survivors.
pub fn filter_and_sort(leads: Vec<Lead>, params: &LeadQuery) -> Vec<Lead> {
    let needle = params.needle();
    let thresholds = TierThresholds::STANDARD;

    let mut matching: Vec<Lead> = leads
        .into_iter()
        .filter(|lead| match &needle {
            Some(needle) => matches_search(lead, needle),
            None => true,
        })
        .filter(|lead| match params.urgency {
            Some(tier) => thresholds.urgency_for(lead.score) == tier,
            None => true,
        })
        .collect();

    // `sort_by` is stable; ties keep the order of the previous stage.
    matching.sort_by(|a, b| {
        let ordering = compare(a, b, params.sort_by);
        match params.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    matching
}

/// Runs the full pipeline with the default page size.
pub fn query(leads: Vec<Lead>, params: &LeadQuery) -> LeadPage {
    query_with_page_size(leads, params, DEFAULT_PAGE_SIZE)
}

/// Runs the full pipeline, using `default_page_size` when the query has none.
pub fn query_with_page_size(
    leads: Vec<Lead>,
    params: &LeadQuery,
    default_page_size: usize,
) -> LeadPage {
    let matching = filter_and_sort(leads, params);
    let stats = LeadStats::from_leads(&matching, TierThresholds::STANDARD);

    let total = matching.len();
    let page = params.effective_page();
    let page_size = params.effective_page_size(default_page_size);
    let total_pages = total.div_ceil(page_size);

    let items = if page > total_pages {
        Vec::new()
    } else {
        matching
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .collect()
    };

    LeadPage {
        items,
        total,
        page,
        page_size,
        total_pages,
        stats,
    }
}

fn matches_search(lead: &Lead, needle: &str) -> bool {
    [&lead.name, &lead.email, &lead.location]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn compare(a: &Lead, b: &Lead, key: SortKey) -> Ordering {
    match key {
        SortKey::Score => a.score.cmp(&b.score),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Date => a.timestamp.cmp(&b.timestamp),
    }
}
