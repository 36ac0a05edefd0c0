// crates/explorer-core/src/store/ephemeral.rs
use super::{FilterStore, StoreKind};
use crate::filter::FilterState;

/// Filter state held in private memory.
///
/// Starts empty, is never written anywhere else, and is gone once the
/// instance is dropped: a reload means a fresh, empty store.
#[derive(Debug, Clone, Default)]
pub struct EphemeralStore {
    state: FilterState,
}

impl EphemeralStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FilterStore for EphemeralStore {
    fn state(&self) -> FilterState {
        self.state.clone()
    }

    fn set_search_text(&mut self, value: &str) {
        self.state.search_text = value.to_owned();
    }

    fn set_region_filter(&mut self, value: &str) {
        self.state.region_filter = value.to_owned();
    }

    fn reset(&mut self) {
        self.state = FilterState::default();
    }

    fn kind(&self) -> StoreKind {
        StoreKind::Ephemeral
    }

    fn search_text(&self) -> String {
        self.state.search_text.clone()
    }

    fn region_filter(&self) -> String {
        self.state.region_filter.clone()
    }
}
