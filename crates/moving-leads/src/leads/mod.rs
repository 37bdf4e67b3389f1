//! Mock moving-intent leads: generation, scoring, storage, and listing.

pub mod catalog;
pub mod domain;
pub mod export;
pub mod factory;
pub mod query;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use catalog::SignalCatalog;
pub use domain::{Lead, LeadId, LeadIdentity, Platform, Urgency};
pub use export::{export_csv, parse_csv, ExportError, ExportRow};
pub use factory::MockLeadFactory;
pub use query::{query, LeadPage, LeadQuery, LeadStats, SortKey, SortOrder};
pub use router::{lead_router, AnalyzeRequest};
pub use scoring::{score, LeadScorer, ScoreComponent, ScoreOutcome, TierThresholds};
pub use service::{
    AnalysisOutcome, HealthSnapshot, LeadMode, LeadService, LeadServiceConfig, LeadServiceError,
};
pub use store::{InMemoryLeadStore, LeadStore, StoreError};
