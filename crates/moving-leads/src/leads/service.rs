use std::io::Write;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use super::domain::{Lead, LeadId};
use super::export::{export_csv, ExportError};
use super::factory::MockLeadFactory;
use super::query::{
    filter_and_sort, query_with_page_size, LeadPage, LeadQuery, DEFAULT_PAGE_SIZE,
};
use super::store::{LeadStore, StoreError};

/// How leads reach the service. Only mock generation is implemented; the
/// flag mirrors whether platform credentials were configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadMode {
    #[default]
    Mock,
    Facebook,
}

impl LeadMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Facebook => "facebook",
        }
    }
}

/// Tunables for the lead service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadServiceConfig {
    pub mode: LeadMode,
    /// Number of mock leads generated when a listing finds the store empty.
    pub seed_on_empty: usize,
    pub default_page_size: usize,
}

impl Default for LeadServiceConfig {
    fn default() -> Self {
        Self {
            mode: LeadMode::Mock,
            seed_on_empty: 5,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Result of analyzing an access token.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub lead: Lead,
    pub message: String,
    pub guidance: &'static str,
    pub mode: LeadMode,
}

/// Liveness snapshot exposed on `/health`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    pub status: &'static str,
    pub mode: LeadMode,
    pub leads_count: usize,
    pub timestamp: DateTime<Utc>,
}

/// Service composing the mock factory, store, and list processor.
pub struct LeadService<S> {
    store: Arc<S>,
    factory: Mutex<MockLeadFactory>,
    config: LeadServiceConfig,
}

impl<S> LeadService<S>
where
    S: LeadStore + 'static,
{
    pub fn new(store: Arc<S>, factory: MockLeadFactory, config: LeadServiceConfig) -> Self {
        Self {
            store,
            factory: Mutex::new(factory),
            config,
        }
    }

    /// Generates a mock lead for `access_token` and stores it.
    pub fn analyze(
        &self,
        access_token: Option<&str>,
    ) -> Result<AnalysisOutcome, LeadServiceError> {
        let token = access_token.map(str::trim).unwrap_or_default();
        if token.is_empty() {
            return Err(LeadServiceError::InvalidInput(
                "access token required".to_string(),
            ));
        }

        let lead = self.with_factory(|factory| factory.generate())?;
        self.store.append(lead.clone())?;

        info!(
            lead_id = %lead.id,
            score = lead.score,
            urgency = %lead.urgency,
            "mock lead analyzed"
        );

        Ok(AnalysisOutcome {
            message: format!(
                "Mock lead analyzed: {}/100 ({} priority)",
                lead.score, lead.urgency
            ),
            guidance: lead.urgency.guidance(),
            lead,
            mode: LeadMode::Mock,
        })
    }

    /// Filters, sorts, and paginates the stored leads.
    pub fn list(&self, query: &LeadQuery) -> Result<LeadPage, LeadServiceError> {
        self.seed_if_empty()?;
        let leads = self.store.list()?;
        Ok(query_with_page_size(leads, query, self.config.default_page_size))
    }

    /// Writes every lead matching `query` as CSV, ignoring pagination.
    pub fn export<W: Write>(
        &self,
        query: &LeadQuery,
        writer: W,
    ) -> Result<usize, LeadServiceError> {
        let leads = filter_and_sort(self.store.list()?, query);
        export_csv(&leads, writer)?;
        debug!(rows = leads.len(), "exported leads");
        Ok(leads.len())
    }

    /// Removes a lead; unknown ids are not an error.
    pub fn delete(&self, id: &LeadId) -> Result<bool, LeadServiceError> {
        let removed = self.store.delete(id)?;
        if removed {
            info!(lead_id = %id, "lead deleted");
        } else {
            debug!(lead_id = %id, "delete requested for unknown lead");
        }
        Ok(removed)
    }

    pub fn health(&self) -> Result<HealthSnapshot, LeadServiceError> {
        Ok(HealthSnapshot {
            status: "OK",
            mode: self.config.mode,
            leads_count: self.store.len()?,
            timestamp: Utc::now(),
        })
    }

    fn seed_if_empty(&self) -> Result<(), LeadServiceError> {
        if self.config.seed_on_empty == 0 {
            return Ok(());
        }

        // The factory lock also serializes concurrent seeding attempts.
        self.with_factory(|factory| -> Result<(), LeadServiceError> {
            if !self.store.is_empty()? {
                return Ok(());
            }
            for _ in 0..self.config.seed_on_empty {
                self.store.append(factory.generate())?;
            }
            info!(count = self.config.seed_on_empty, "seeded empty lead store");
            Ok(())
        })?
    }

    fn with_factory<T>(
        &self,
        f: impl FnOnce(&mut MockLeadFactory) -> T,
    ) -> Result<T, LeadServiceError> {
        let mut guard = self
            .factory
            .lock()
            .map_err(|_| LeadServiceError::FactoryUnavailable)?;
        Ok(f(&mut guard))
    }
}

/// Error raised by the lead service.
#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("lead factory unavailable")]
    FactoryUnavailable,
}
