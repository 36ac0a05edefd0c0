// crates/explorer-core/src/store/mod.rs

//! # Filter Stores
//!
//! Two owners for the same pair of fields:
//!
//! - [`EphemeralStore`] keeps them in private memory; they die with the view.
//! - [`UrlStore`] keeps them in the query string of the current address, so
//!   they survive a reload and travel with a shared link.
//!
//! Both implement [`FilterStore`]; the view model is written once against it.

use crate::filter::FilterState;
use serde::{Deserialize, Serialize};
use std::fmt;

mod ephemeral;
pub mod history;
mod url_state;

pub use self::ephemeral::EphemeralStore;
pub use self::history::{History, MemoryHistory, NavigationMode};
pub use self::url_state::{UrlStore, REGION_KEY, SEARCH_KEY};

/// Which backing a store uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Ephemeral,
    Url,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Ephemeral => f.write_str("ephemeral"),
            StoreKind::Url => f.write_str("url"),
        }
    }
}

/// Owner of the current filter values and their mutations.
pub trait FilterStore {
    /// Current values, read fresh from the backing.
    fn state(&self) -> FilterState;

    fn set_search_text(&mut self, value: &str);

    fn set_region_filter(&mut self, value: &str);

    /// Clears both fields.
    fn reset(&mut self);

    fn kind(&self) -> StoreKind;

    fn search_text(&self) -> String {
        self.state().search_text
    }

    fn region_filter(&self) -> String {
        self.state().region_filter
    }
}
