use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::leads::domain::{Lead, LeadId, Platform};
use crate::leads::factory::MockLeadFactory;
use crate::leads::scoring::TierThresholds;
use crate::leads::service::{LeadService, LeadServiceConfig};
use crate::leads::store::{InMemoryLeadStore, LeadStore, StoreError};

pub(super) fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, day, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Lead with a fixed score, bypassing the scorer so listing tests can pin values.
pub(super) fn lead(name: &str, score: u8, day: u32) -> Lead {
    Lead {
        id: LeadId(format!("lead-{}", name.to_lowercase())),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        location: "Chicago, IL".to_string(),
        platform: Platform::Mock,
        signals: vec!["Posted moving timeline".to_string()],
        score,
        urgency: TierThresholds::STANDARD.urgency_for(score),
        profile_url: format!("https://mock.com/{}", name.to_lowercase()),
        timestamp: at(day),
    }
}

pub(super) fn bob_and_amy() -> Vec<Lead> {
    vec![lead("Bob", 70, 1), lead("Amy", 40, 2)]
}

pub(super) fn names(leads: &[Lead]) -> Vec<&str> {
    leads.iter().map(|lead| lead.name.as_str()).collect()
}

pub(super) fn service_config(seed_on_empty: usize) -> LeadServiceConfig {
    LeadServiceConfig {
        seed_on_empty,
        ..LeadServiceConfig::default()
    }
}

pub(super) fn build_service(
    seed_on_empty: usize,
) -> (LeadService<InMemoryLeadStore>, Arc<InMemoryLeadStore>) {
    let store = Arc::new(InMemoryLeadStore::new());
    let service = LeadService::new(
        store.clone(),
        MockLeadFactory::seeded(2024),
        service_config(seed_on_empty),
    );
    (service, store)
}

pub(super) struct UnavailableStore;

impl LeadStore for UnavailableStore {
    fn append(&self, _lead: Lead) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn delete(&self, _id: &LeadId) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Lead>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn len(&self) -> Result<usize, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}
