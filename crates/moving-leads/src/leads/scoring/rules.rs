use serde::Serialize;

/// Points awarded for every distinct signal.
pub(crate) const POINTS_PER_SIGNAL: u32 = 15;

/// Upper bound of the score scale.
pub(crate) const MAX_SCORE: u32 = 100;

/// Keyword bonus applied once when any signal contains `fragment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordBonus {
    pub fragment: &'static str,
    pub points: u32,
}

pub(crate) const KEYWORD_BONUSES: [KeywordBonus; 3] = [
    KeywordBonus {
        fragment: "Moving to",
        points: 20,
    },
    KeywordBonus {
        fragment: "movers",
        points: 15,
    },
    KeywordBonus {
        fragment: "timeline",
        points: 10,
    },
];

/// Distinct signals in first-seen order.
pub(crate) fn distinct_signals<S: AsRef<str>>(signals: &[S]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::with_capacity(signals.len());
    for signal in signals {
        let signal = signal.as_ref();
        if !seen.contains(&signal) {
            seen.push(signal);
        }
    }
    seen
}

pub(crate) fn bonus_applies(bonus: &KeywordBonus, signals: &[&str]) -> bool {
    signals.iter().any(|signal| signal.contains(bonus.fragment))
}
