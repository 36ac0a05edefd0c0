// crates/explorer-core/src/lib.rs

//! Country filtering with two kinds of filter state.
//!
//! - [`loader`] fetches the country list once.
//! - [`filter`] derives region options and the filtered list.
//! - [`store`] holds the filter fields, either in memory
//!   ([`EphemeralStore`]) or in the address bar ([`UrlStore`]).
//! - [`view`] ties them together with recompute-on-change caching.
//!
//! ```rust
//! use explorer_core::prelude::*;
//!
//! let data = explorer_core::loader::from_json_str(r#"[
//!   {"cca3":"GHA","name":{"common":"Ghana","official":"Republic of Ghana"},"region":"Africa","population":1}
//! ]"#).unwrap();
//!
//! let store = UrlStore::open("https://demo.test/url-params?search=gh").unwrap();
//! let view = ExplorerView::with_dataset(store, data);
//! assert_eq!(view.summary(), "Found 1 country");
//! ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod routes;
pub mod store;
pub mod text;
pub mod view;

// Re-exports
pub use crate::error::{LoadError, Result};
pub use crate::filter::{derive_regions, filter_countries, region_options, FilterState, RegionOption};
pub use crate::model::{Country, Dataset};
pub use crate::routes::Route;
pub use crate::store::{
    EphemeralStore, FilterStore, History, MemoryHistory, NavigationMode, StoreKind, UrlStore,
};
pub use crate::view::{ExplorerView, LoadState};
