use metrics_exporter_prometheus::PrometheusHandle;
use moving_leads::config::LeadsConfig;
use moving_leads::leads::{InMemoryLeadStore, LeadService, MockLeadFactory};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn lead_factory(config: &LeadsConfig) -> MockLeadFactory {
    match config.seed {
        Some(seed) => {
            info!(seed, "using deterministic lead factory");
            MockLeadFactory::seeded(seed)
        }
        None => MockLeadFactory::from_os_rng(),
    }
}

pub(crate) fn lead_service(config: &LeadsConfig) -> Arc<LeadService<InMemoryLeadStore>> {
    let store = Arc::new(InMemoryLeadStore::new());
    Arc::new(LeadService::new(
        store,
        lead_factory(config),
        config.service_config(),
    ))
}
