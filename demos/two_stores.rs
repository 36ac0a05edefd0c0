//! Two stores example for country-explorer
//!
//! This example demonstrates how to:
//! - Run the same filtering view over in-memory and URL-backed state
//! - See typing replace the current history entry while reset pushes one
//! - Compare what survives a reload on each store

use explorer_core::prelude::*;
use std::sync::Arc;

const COUNTRIES: &str = r#"[
  {"cca3":"DEU","name":{"common":"Germany","official":"Federal Republic of Germany"},"region":"Europe","population":83240525,"capital":["Berlin"]},
  {"cca3":"GHA","name":{"common":"Ghana","official":"Republic of Ghana"},"region":"Africa","population":31072945,"capital":["Accra"]},
  {"cca3":"GAB","name":{"common":"Gabon","official":"Gabonese Republic"},"region":"Africa","population":2225728,"capital":["Libreville"]},
  {"cca3":"JPN","name":{"common":"Japan","official":"Japan"},"region":"Asia","population":125836021,"capital":["Tokyo"]}
]"#;

fn show<S: FilterStore>(view: &ExplorerView<S>) {
    let names: Vec<&str> = view.filtered().iter().map(|c| c.name()).collect();
    println!("  {} -> {:?}", view.summary(), names);
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== Country Explorer: Two Stores ===\n");

    let dataset = Arc::new(explorer_core::loader::from_json_str(COUNTRIES)?);
    let regions: Vec<String> = region_options(dataset.countries())
        .into_iter()
        .map(|o| o.label)
        .collect();
    println!("Regions: {}\n", regions.join(", "));

    // Example 1: component state
    println!("--- Example 1: /use-state ---");
    let mut page = ExplorerView::with_dataset(EphemeralStore::new(), Arc::clone(&dataset));
    page.set_region_filter("africa");
    page.set_search_text("g");
    show(&page);

    // A reload mounts a fresh store.
    let page = ExplorerView::with_dataset(EphemeralStore::new(), Arc::clone(&dataset));
    println!("  after reload:");
    show(&page);
    println!();

    // Example 2: URL state
    println!("--- Example 2: /url-params ---");
    let store = UrlStore::open("http://localhost:5173/url-params")?;
    let mut page = ExplorerView::with_dataset(store, Arc::clone(&dataset));
    for prefix in ["g", "gh", "gha"] {
        page.set_search_text(prefix);
    }
    page.set_region_filter("africa");
    println!("  address: {}", page.store().url());
    println!("  history entries: {}", page.store().history().len());
    show(&page);

    // Reload keeps the address, so the filters come back.
    let history = page.into_store().into_history();
    let page = ExplorerView::with_dataset(UrlStore::new(history), Arc::clone(&dataset));
    println!("  after reload:");
    show(&page);
    println!();

    // Example 3: reset and the back button
    println!("--- Example 3: reset, then back ---");
    let mut page = page;
    page.reset();
    println!("  after reset:  {}", page.store().url());
    page.store_mut().history_mut().back();
    page.sync();
    println!("  after back:   {}", page.store().url());
    show(&page);

    Ok(())
}
