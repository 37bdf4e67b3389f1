use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::catalog::SignalCatalog;
use super::domain::{Lead, LeadId, LeadIdentity};

/// Inclusive bounds on the number of signals drawn per lead.
pub const MIN_SIGNALS: usize = 3;
pub const MAX_SIGNALS: usize = 6;

const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Builds synthetic leads from the catalogs using an injected random source.
pub struct MockLeadFactory<R = StdRng> {
    catalog: SignalCatalog,
    rng: R,
}

impl MockLeadFactory<StdRng> {
    /// Deterministic factory for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SignalCatalog::standard(), StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(SignalCatalog::standard(), StdRng::from_os_rng())
    }
}

impl<R: Rng> MockLeadFactory<R> {
    pub fn new(catalog: SignalCatalog, rng: R) -> Self {
        Self { catalog, rng }
    }

    pub fn generate(&mut self) -> Lead {
        self.generate_at(Utc::now())
    }

    pub fn generate_at(&mut self, now: DateTime<Utc>) -> Lead {
        let name = pick(&mut self.rng, self.catalog.names()).to_string();
        let location = pick(&mut self.rng, self.catalog.cities()).to_string();
        let platform = *pick(&mut self.rng, self.catalog.platforms());

        let wanted = self.rng.random_range(MIN_SIGNALS..=MAX_SIGNALS);
        let signals = self.draw_signals(wanted);
        let id = self.next_id(now);

        let lead = Lead::scored(
            LeadIdentity {
                id,
                name,
                location,
                platform,
                timestamp: now,
            },
            signals,
        );

        debug!(
            lead_id = %lead.id,
            score = lead.score,
            urgency = %lead.urgency,
            signals = lead.signals.len(),
            "generated mock lead"
        );

        lead
    }

    /// Draws up to `wanted` distinct signals without replacement.
    fn draw_signals(&mut self, wanted: usize) -> Vec<String> {
        let pool = self.catalog.signals();
        let take = wanted.min(pool.len());
        let mut indices: Vec<usize> = (0..pool.len()).collect();

        // Partial Fisher-Yates: the first `take` slots end up a uniform sample.
        for slot in 0..take {
            let swap_with = self.rng.random_range(slot..indices.len());
            indices.swap(slot, swap_with);
        }

        indices[..take]
            .iter()
            .map(|&index| pool[index].to_string())
            .collect()
    }

    fn next_id(&mut self, now: DateTime<Utc>) -> LeadId {
        let suffix: String = (0..ID_SUFFIX_LEN)
            .map(|_| char::from(BASE36[self.rng.random_range(0..BASE36.len())]))
            .collect();
        LeadId(format!("lead-{}-{suffix}", now.timestamp_millis()))
    }
}

fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}
