use std::sync::{Arc, RwLock};

use super::domain::{Lead, LeadId};

/// Storage abstraction so the service can be exercised without process-wide state.
pub trait LeadStore: Send + Sync {
    fn append(&self, lead: Lead) -> Result<(), StoreError>;
    /// Removes the lead with `id`, reporting whether one was present.
    fn delete(&self, id: &LeadId) -> Result<bool, StoreError>;
    /// Snapshot of every stored lead in insertion order.
    fn list(&self) -> Result<Vec<Lead>, StoreError>;
    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("lead store unavailable: {0}")]
    Unavailable(String),
}

/// Process-lifetime store. Writers take the lock exclusively, so every
/// mutation is atomic with respect to readers.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLeadStore {
    leads: Arc<RwLock<Vec<Lead>>>,
}

impl InMemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("lead store lock poisoned".to_string())
}

impl LeadStore for InMemoryLeadStore {
    fn append(&self, lead: Lead) -> Result<(), StoreError> {
        self.leads.write().map_err(poisoned)?.push(lead);
        Ok(())
    }

    fn delete(&self, id: &LeadId) -> Result<bool, StoreError> {
        let mut guard = self.leads.write().map_err(poisoned)?;
        let before = guard.len();
        guard.retain(|lead| &lead.id != id);
        Ok(guard.len() != before)
    }

    fn list(&self) -> Result<Vec<Lead>, StoreError> {
        Ok(self.leads.read().map_err(poisoned)?.clone())
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.leads.read().map_err(poisoned)?.len())
    }
}
