//! Integration tests for the store -> signal -> list controller data flow.

use std::sync::Arc;

use parking_lot::Mutex;
use vitrine::prelude::*;

fn jewelry(name: &str, price: f64, materials: &[&str]) -> LuxuryItem {
    LuxuryItemFactory::create_jewelry(
        name,
        price,
        materials.iter().map(|m| m.to_string()).collect(),
    )
    .unwrap()
}

#[test]
fn store_snapshots_drive_the_list_window() {
    let store = Arc::new(LuxuryStore::new());
    for i in 0..25 {
        store
            .add(jewelry(&format!("Piece {i}"), 100.0 + i as f64, &[]))
            .unwrap();
    }

    let list = Arc::new(Mutex::new(
        VirtualList::new(store.items(), |item: &LuxuryItem| item.name.clone())
            .with_key_extractor(|item, _| item.id.clone()),
    ));

    // Rebind the list from every snapshot, the way a rendering surface would.
    let bound = list.clone();
    store.on_store_changed(move |snapshot| {
        bound.lock().set_items(snapshot.clone());
    });

    {
        let mut list = list.lock();
        assert_eq!(list.total_pages(), 3);
        list.go_to_page(2);
        assert_eq!(list.visible_rows().len(), 5);
    }

    // Shrink the collection; the bound list must reset to page 0 and the
    // window must recompute from the new data.
    let doomed: Vec<String> = store
        .filter(|item| item.price >= 110.0)
        .into_iter()
        .map(|item| item.id)
        .collect();
    for id in doomed {
        assert!(store.remove_by_id(&id));
    }

    let list = list.lock();
    assert_eq!(store.len(), 10);
    assert_eq!(list.current_page(), 0);
    assert_eq!(list.total_pages(), 1);
    assert_eq!(list.visible_rows().len(), 10);
}

#[test]
fn two_subscribers_each_see_every_mutation_once() {
    let store = LuxuryStore::new();
    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));

    let recv = first.clone();
    store.on_store_changed(move |snapshot| recv.lock().push(snapshot.len()));
    let recv = second.clone();
    store.on_store_changed(move |snapshot| recv.lock().push(snapshot.len()));

    let ring = jewelry("Ring", 1_000.0, &[]);
    let ring_id = ring.id.clone();
    store.add(ring).unwrap();
    store.update(&ring_id, |item| item.price = 1_250.0);
    store.remove_by_id(&ring_id);

    assert_eq!(*first.lock(), vec![1, 1, 0]);
    assert_eq!(*second.lock(), vec![1, 1, 0]);
}

#[test]
fn factory_classification_flows_into_filters() {
    let store = LuxuryStore::new();
    store
        .add(jewelry("Necklace", 20_000.0, &["gold", "diamond"]))
        .unwrap();
    store.add(jewelry("Band", 900.0, &["silver"])).unwrap();
    store
        .add(LuxuryItemFactory::create_watch("Chronograph", 15_000.0, "Vacheron").unwrap())
        .unwrap();

    let exclusive = store.filter(|item| item.exclusivity == Exclusivity::Exclusive);
    assert_eq!(exclusive.len(), 1);
    assert_eq!(exclusive[0].name, "Necklace");

    let limited = store.filter(|item| item.exclusivity == Exclusivity::Limited);
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].category, "watches");
}

#[test]
fn validation_failures_never_reach_the_store() {
    let store: LuxuryStore<LuxuryItem> = LuxuryStore::new();
    let notified = Arc::new(Mutex::new(0));
    let recv = notified.clone();
    store.on_store_changed(move |_| *recv.lock() += 1);

    let err = LuxuryItemBuilder::new()
        .with_price(1_000.0)
        .with_category("jewelry")
        .build()
        .unwrap_err();
    assert_eq!(err, ValidationError::MissingField("name"));

    assert!(store.is_empty());
    assert_eq!(*notified.lock(), 0);
}

#[test]
fn paginator_from_store_matches_sequence_order() {
    let store = LuxuryStore::new();
    for name in ["Tiara", "Ring", "Brooch", "Cufflinks"] {
        store.add(jewelry(name, 500.0, &[])).unwrap();
    }

    let pages = Paginator::from_store(&store, 3);
    assert_eq!(pages.total_pages(), 2);
    let names: Vec<_> = pages.visible_items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Tiara", "Ring", "Brooch"]);
}
