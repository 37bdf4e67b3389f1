use crate::leads::catalog::SIGNALS;
use crate::leads::domain::Urgency;
use crate::leads::factory::{MockLeadFactory, MAX_SIGNALS, MIN_SIGNALS};
use crate::leads::scoring::{score, TierThresholds};

const PLAIN_SIGNALS: [&str; 8] = [
    "Joined relocation group",
    "Selling furniture on Marketplace",
    "Researching moving truck rentals",
    "Complained about packing stress",
    "Looking for new neighborhood recommendations",
    "Asked about storage unit prices",
    "Changed location from NYC to Chicago",
    "Listed current apartment for sublet",
];

#[test]
fn empty_signal_set_scores_zero_low() {
    let outcome = score::<&str>(&[]);
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.urgency, Urgency::Low);
}

#[test]
fn worked_example_scores_eighty_high() {
    let outcome = score(&[
        "Posted: Moving to new apartment next month!",
        "Asked: Any good movers in the area?",
        "Joined relocation group",
    ]);
    assert_eq!(outcome.score, 80);
    assert_eq!(outcome.urgency, Urgency::High);
    let points: Vec<u32> = outcome.components.iter().map(|c| c.points).collect();
    assert_eq!(points, vec![45, 20, 15]);
}

#[test]
fn duplicate_signals_count_once() {
    let outcome = score(&["Posted moving timeline", "Posted moving timeline"]);
    assert_eq!(outcome.score, 25);
    assert_eq!(outcome.urgency, Urgency::Low);
}

#[test]
fn keyword_bonuses_are_case_sensitive() {
    let outcome = score(&["posted about moving to a new city"]);
    assert_eq!(outcome.score, 15);
}

#[test]
fn score_is_clamped_to_one_hundred() {
    let outcome = score(&SIGNALS);
    assert_eq!(outcome.score, 100);
    assert_eq!(outcome.urgency, Urgency::High);
}

#[test]
fn plain_signals_score_monotonically() {
    let mut previous = 0;
    for count in 0..=PLAIN_SIGNALS.len() {
        let outcome = score(&PLAIN_SIGNALS[..count]);
        assert!(outcome.score >= previous);
        assert!(outcome.score <= 100);
        previous = outcome.score;
    }
    assert_eq!(previous, 100);
}

#[test]
fn urgency_always_matches_thresholds() {
    let thresholds = TierThresholds::STANDARD;
    for start in 0..SIGNALS.len() {
        for end in start..=SIGNALS.len() {
            let outcome = score(&SIGNALS[start..end]);
            assert_eq!(outcome.urgency, thresholds.urgency_for(outcome.score));
        }
    }
}

#[test]
fn pinned_fixture_leads_share_the_tier_policy() {
    let cases = [(100, Urgency::High), (61, Urgency::High), (60, Urgency::Medium)];
    let more = [(31, Urgency::Medium), (30, Urgency::Low), (0, Urgency::Low)];
    for (score, expected) in cases.into_iter().chain(more) {
        assert_eq!(super::common::lead("Pat", score, 1).urgency, expected);
    }
}

#[test]
fn generated_leads_respect_bounds_and_score_consistency() {
    let mut factory = MockLeadFactory::seeded(99);
    for _ in 0..200 {
        let lead = factory.generate();
        assert!((MIN_SIGNALS..=MAX_SIGNALS).contains(&lead.signals.len()));

        let mut distinct = lead.signals.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), lead.signals.len());
        assert!(lead.signals.iter().all(|s| SIGNALS.contains(&s.as_str())));

        let recomputed = score(&lead.signals);
        assert_eq!(lead.score, recomputed.score);
        assert_eq!(lead.urgency, recomputed.urgency);
        assert!(lead.email.ends_with("@example.com"));
        assert!(!lead.email.contains(' '));
    }
}
