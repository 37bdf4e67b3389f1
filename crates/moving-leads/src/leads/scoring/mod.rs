mod rules;
mod thresholds;

pub use rules::KeywordBonus;
pub use thresholds::TierThresholds;

use super::domain::Urgency;
use rules::{bonus_applies, distinct_signals, KEYWORD_BONUSES, MAX_SCORE, POINTS_PER_SIGNAL};
use serde::Serialize;

/// Discrete contribution to a lead score, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub label: String,
    pub points: u32,
}

/// Scorer output: the clamped score, its tier, and the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreOutcome {
    pub score: u8,
    pub urgency: Urgency,
    pub components: Vec<ScoreComponent>,
}

/// Scores a signal set with the standard tier thresholds.
pub fn score<S: AsRef<str>>(signals: &[S]) -> ScoreOutcome {
    LeadScorer::default().score(signals)
}

/// Stateless scorer mapping textual signals to a 0-100 score.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadScorer {
    thresholds: TierThresholds,
}

impl LeadScorer {
    pub fn score<S: AsRef<str>>(&self, signals: &[S]) -> ScoreOutcome {
        let distinct = distinct_signals(signals);
        let mut components = Vec::new();

        let base = POINTS_PER_SIGNAL * distinct.len() as u32;
        components.push(ScoreComponent {
            label: format!("{} distinct signal(s)", distinct.len()),
            points: base,
        });

        let mut total = base;
        for bonus in KEYWORD_BONUSES.iter() {
            if bonus_applies(bonus, &distinct) {
                total += bonus.points;
                components.push(ScoreComponent {
                    label: format!("mentions \"{}\"", bonus.fragment),
                    points: bonus.points,
                });
            }
        }

        // Clamped to MAX_SCORE, so the cast cannot truncate.
        let score = total.min(MAX_SCORE) as u8;

        ScoreOutcome {
            score,
            urgency: self.thresholds.urgency_for(score),
            components,
        }
    }
}
