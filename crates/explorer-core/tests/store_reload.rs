use explorer_core::prelude::*;

const PAGE: &str = "https://demo.test/url-params";

fn dataset() -> Dataset {
    explorer_core::loader::from_json_str(
        r#"[
        {"cca3":"DEU","name":{"common":"Germany","official":"Federal Republic of Germany"},"region":"Europe","population":83240525},
        {"cca3":"GHA","name":{"common":"Ghana","official":"Republic of Ghana"},"region":"Africa","population":31072945},
        {"cca3":"GAB","name":{"common":"Gabon","official":"Gabonese Republic"},"region":"Africa","population":2225728}
    ]"#,
    )
    .unwrap()
}

/// Every store gets the same treatment through the trait.
fn type_and_pick<S: FilterStore>(store: &mut S) {
    for prefix in ["G", "Gh", "Gha"] {
        store.set_search_text(prefix);
    }
    store.set_region_filter("africa");
}

#[test]
fn ephemeral_state_is_lost_on_reload() {
    let mut store = EphemeralStore::new();
    type_and_pick(&mut store);
    assert_eq!(store.search_text(), "Gha");

    // A reload tears the view down and builds a new one.
    drop(store);
    let store = EphemeralStore::new();
    assert_eq!(store.state(), FilterState::default());
}

#[test]
fn url_state_survives_reload() {
    let mut store = UrlStore::open(PAGE).unwrap();
    type_and_pick(&mut store);
    let address = store.url().to_string();

    let mut history = store.into_history();
    history.reload();
    let store = UrlStore::new(history);
    assert_eq!(store.state(), FilterState::new("Gha", "africa"));

    // Opening the shared link in a fresh tab yields the same state.
    let shared = UrlStore::open(&address).unwrap();
    assert_eq!(shared.state(), store.state());
}

#[test]
fn typing_does_not_grow_history() {
    let mut store = UrlStore::open(PAGE).unwrap();
    type_and_pick(&mut store);
    assert_eq!(store.history().len(), 1);
    assert_eq!(store.url().query(), Some("search=Gha&region=africa"));
}

#[test]
fn reset_is_idempotent_for_both_stores() {
    let mut a = EphemeralStore::new();
    let mut b = UrlStore::open(PAGE).unwrap();
    type_and_pick(&mut a);
    type_and_pick(&mut b);

    a.reset();
    b.reset();
    let once = (a.state(), b.state());
    a.reset();
    b.reset();
    assert_eq!((a.state(), b.state()), once);
    assert_eq!(once.0, FilterState::default());
    assert_eq!(once.1, FilterState::default());
    assert_eq!(b.url().as_str(), PAGE);
}

#[test]
fn url_round_trip() {
    let mut store = UrlStore::open(PAGE).unwrap();
    store.set_search_text("Ger");
    assert_eq!(store.search_text(), "Ger");
    store.set_search_text("");
    assert!(store.url().query_pairs().all(|(k, _)| k != "search"));
}

#[test]
fn same_view_code_runs_on_both_stores() {
    let data = std::sync::Arc::new(dataset());
    let mut a = ExplorerView::with_dataset(EphemeralStore::new(), data.clone());
    let mut b = ExplorerView::with_dataset(UrlStore::open(PAGE).unwrap(), data);

    a.set_region_filter("AFRICA");
    b.set_region_filter("AFRICA");
    assert_eq!(a.match_count(), 2);
    assert_eq!(b.match_count(), 2);
    assert_eq!(b.store().url().query(), Some("region=AFRICA"));
    assert_eq!(a.regions(), b.regions());
    assert_eq!(a.regions().len(), 2);
}

#[test]
fn back_button_restores_state_before_reset() {
    let mut view = ExplorerView::with_dataset(UrlStore::open(PAGE).unwrap(), dataset());
    view.set_search_text("ga");
    assert_eq!(view.summary(), "Found 1 country");
    view.reset();
    assert_eq!(view.summary(), "Found 3 countries");

    assert!(view.store_mut().history_mut().back());
    view.sync();
    assert_eq!(view.filter_state().search_text, "ga");
    assert_eq!(view.summary(), "Found 1 country");

    assert!(view.store_mut().history_mut().forward());
    view.sync();
    assert!(!view.filter_state().is_active());
}
