use serde::{Deserialize, Serialize};

use super::super::domain::Urgency;

/// Score boundaries separating the urgency tiers.
///
/// A score strictly above `high_above` is HIGH, strictly above `medium_above`
/// is MEDIUM, anything else is LOW. Scoring and list statistics both read
/// [`TierThresholds::STANDARD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub high_above: u8,
    pub medium_above: u8,
}

impl TierThresholds {
    pub const STANDARD: Self = Self {
        high_above: 60,
        medium_above: 30,
    };

    pub const fn urgency_for(&self, score: u8) -> Urgency {
        if score > self.high_above {
            Urgency::High
        } else if score > self.medium_above {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_exclusive() {
        let thresholds = TierThresholds::STANDARD;
        assert_eq!(thresholds.urgency_for(0), Urgency::Low);
        assert_eq!(thresholds.urgency_for(30), Urgency::Low);
        assert_eq!(thresholds.urgency_for(31), Urgency::Medium);
        assert_eq!(thresholds.urgency_for(60), Urgency::Medium);
        assert_eq!(thresholds.urgency_for(61), Urgency::High);
        assert_eq!(thresholds.urgency_for(100), Urgency::High);
    }
}
