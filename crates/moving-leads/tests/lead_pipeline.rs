//! End-to-end scenarios through the public service facade: analysis, listing,
//! deletion, and export against the in-memory store.

use std::io::Cursor;
use std::sync::Arc;

use moving_leads::leads::{
    parse_csv, InMemoryLeadStore, LeadQuery, LeadService, LeadServiceConfig, LeadStore,
    MockLeadFactory, SortKey, SortOrder, TierThresholds,
};

fn service() -> (LeadService<InMemoryLeadStore>, Arc<InMemoryLeadStore>) {
    let store = Arc::new(InMemoryLeadStore::new());
    let config = LeadServiceConfig {
        seed_on_empty: 0,
        ..LeadServiceConfig::default()
    };
    let service = LeadService::new(store.clone(), MockLeadFactory::seeded(31), config);
    (service, store)
}

#[test]
fn analyzed_leads_are_listed_by_score() {
    let (service, _) = service();
    for token in ["a", "b", "c", "d", "e", "f"] {
        service.analyze(Some(token)).expect("analysis succeeds");
    }

    let page = service
        .list(&LeadQuery::sorted(SortKey::Score, SortOrder::Desc).with_page(1, 4))
        .expect("list succeeds");

    assert_eq!(page.total, 6);
    assert_eq!(page.items.len(), 4);
    assert!(page
        .items
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
    assert_eq!(
        page.stats.high + page.stats.medium + page.stats.low,
        page.stats.total
    );
    for lead in &page.items {
        assert_eq!(
            lead.urgency,
            TierThresholds::STANDARD.urgency_for(lead.score)
        );
    }
}

#[test]
fn deleting_leads_shrinks_the_listing() {
    let (service, store) = service();
    let first = service.analyze(Some("a")).expect("analysis succeeds").lead;
    service.analyze(Some("b")).expect("analysis succeeds");

    assert!(service.delete(&first.id).expect("delete succeeds"));
    assert!(!service.delete(&first.id).expect("repeat delete succeeds"));

    let page = service.list(&LeadQuery::default()).expect("list succeeds");
    assert_eq!(page.total, 1);
    assert_eq!(store.len().expect("len"), 1);
    assert!(page.items.iter().all(|lead| lead.id != first.id));
}

#[test]
fn exported_rows_match_the_filtered_listing() {
    let (service, _) = service();
    for token in 0..10 {
        service
            .analyze(Some(&format!("token-{token}")))
            .expect("analysis succeeds");
    }

    let query = LeadQuery::sorted(SortKey::Name, SortOrder::Asc);
    let listing = service
        .list(&query.clone().with_page(1, 100))
        .expect("list succeeds");

    let mut buffer = Vec::new();
    service.export(&query, &mut buffer).expect("export succeeds");
    let rows = parse_csv(Cursor::new(buffer)).expect("parse succeeds");

    assert_eq!(rows.len(), listing.items.len());
    for (row, lead) in rows.iter().zip(&listing.items) {
        assert_eq!(row.name, lead.name);
        assert_eq!(row.email, lead.email);
        assert_eq!(row.score, lead.score);
        assert_eq!(row.urgency, lead.urgency);
        assert_eq!(row.signal_list(), lead.signals);
        assert_eq!(row.date, lead.timestamp);
    }
}
