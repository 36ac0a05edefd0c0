//! Error handling example for country-explorer
//!
//! This example demonstrates loader failures and how a view reports them

use explorer_core::loader::{from_json_str, DataSource};
use explorer_core::prelude::*;

fn main() -> Result<()> {
    println!("=== Country Explorer: Error Handling ===\n");

    // Example 1: malformed payloads
    println!("--- Example 1: Malformed payloads ---");
    let payloads = [
        ("not json", "<html>rate limited</html>"),
        ("object instead of list", r#"{"message":"Not Found"}"#),
        ("missing code", r#"[{"name":{"common":"Nowhere","official":"Nowhere"}}]"#),
    ];
    for (label, body) in payloads {
        match from_json_str(body) {
            Ok(data) => println!("  {label}: loaded {} countries", data.len()),
            Err(e) => println!("  {label}: {e}"),
        }
    }
    println!();

    // Example 2: duplicate codes
    println!("--- Example 2: Duplicate country codes ---");
    let twice = r#"[
      {"cca3":"GHA","name":{"common":"Ghana","official":"Republic of Ghana"},"region":"Africa"},
      {"cca3":"GHA","name":{"common":"Ghana","official":"Republic of Ghana"},"region":"Africa"}
    ]"#;
    if let Err(e) = from_json_str(twice) {
        println!("  {e}");
    }
    println!();

    // Example 3: missing local dump
    println!("--- Example 3: Missing file ---");
    let source = DataSource::Path("./no-such-dump.json.gz".into());
    match source.load() {
        Ok(data) => println!("  loaded {} countries", data.len()),
        Err(e) => println!("  {source}: {e}"),
    }
    println!();

    // Example 4: what the page shows
    println!("--- Example 4: Page states ---");
    let mut page = ExplorerView::new(EphemeralStore::new());
    println!("  {}", page.summary());
    page.set_load_state(LoadState::from(from_json_str("[")));
    println!("  {}", page.summary());
    page.set_load_state(LoadState::from(from_json_str("[]")));
    println!("  {}", page.summary());
    println!("  region options: {}", page.regions().len());

    Ok(())
}
