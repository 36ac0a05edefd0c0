// crates/explorer-core/src/view.rs
//! # Derived View Model
//!
//! Joins a dataset, a [`FilterStore`] and the filter engine into the values a
//! page renders. Derivations are cached: region options are rebuilt only when
//! the dataset `Arc` changes, the filtered list only when
//! `(dataset, search, region)` changes.

use crate::error::LoadError;
use crate::filter::{filter_indices, region_options, FilterState, RegionOption};
use crate::model::{Country, Dataset};
use crate::store::FilterStore;
use std::sync::Arc;
use tracing::debug;

/// Where the dataset is in its single fetch.
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Ready(Arc<Dataset>),
    Failed(LoadError),
}

impl LoadState {
    pub fn dataset(&self) -> Option<&Arc<Dataset>> {
        match self {
            LoadState::Ready(d) => Some(d),
            _ => None,
        }
    }
}

impl From<crate::error::Result<Dataset>> for LoadState {
    fn from(r: crate::error::Result<Dataset>) -> Self {
        match r {
            Ok(d) => LoadState::Ready(Arc::new(d)),
            Err(e) => LoadState::Failed(e),
        }
    }
}

#[derive(Debug)]
struct Derived {
    dataset: Arc<Dataset>,
    regions: Vec<RegionOption>,
    key: FilterState,
    /// Indices into `dataset.countries()`, source order.
    matches: Vec<usize>,
}

/// One filtering page: the loaded data plus whichever store owns the filters.
#[derive(Debug)]
pub struct ExplorerView<S: FilterStore> {
    store: S,
    load: LoadState,
    derived: Option<Derived>,
    recomputes: usize,
}

impl<S: FilterStore> ExplorerView<S> {
    /// A view whose data has not arrived yet.
    pub fn new(store: S) -> Self {
        Self {
            store,
            load: LoadState::Loading,
            derived: None,
            recomputes: 0,
        }
    }

    pub fn with_dataset(store: S, dataset: impl Into<Arc<Dataset>>) -> Self {
        let mut view = Self::new(store);
        view.set_load_state(LoadState::Ready(dataset.into()));
        view
    }

    /// Installs the outcome of the fetch.
    pub fn set_load_state(&mut self, load: LoadState) {
        if let LoadState::Failed(e) = &load {
            tracing::warn!(error = %e, "dataset unavailable");
        }
        self.load = load;
        self.refresh();
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&LoadError> {
        match &self.load {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access for store-specific operations (e.g. history moves).
    /// Call [`sync`](Self::sync) afterwards.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn filter_state(&self) -> FilterState {
        self.store.state()
    }

    pub fn set_search_text(&mut self, value: &str) {
        self.store.set_search_text(value);
        self.refresh();
    }

    pub fn set_region_filter(&mut self, value: &str) {
        self.store.set_region_filter(value);
        self.refresh();
    }

    pub fn reset(&mut self) {
        self.store.reset();
        self.refresh();
    }

    /// Re-reads the store after something outside the view changed it.
    pub fn sync(&mut self) {
        self.refresh();
    }

    /// Region drop-down entries; empty until data is ready.
    pub fn regions(&self) -> &[RegionOption] {
        match &self.derived {
            Some(d) => &d.regions,
            None => &[],
        }
    }

    /// Matching countries in dataset order; empty until data is ready.
    pub fn filtered(&self) -> Vec<&Country> {
        match &self.derived {
            Some(d) => {
                let all = d.dataset.countries();
                d.matches.iter().map(|&i| &all[i]).collect()
            }
            None => Vec::new(),
        }
    }

    pub fn match_count(&self) -> usize {
        self.derived.as_ref().map_or(0, |d| d.matches.len())
    }

    /// The result line shown above the grid.
    pub fn summary(&self) -> String {
        match &self.load {
            LoadState::Loading => "Loading countries…".to_owned(),
            LoadState::Failed(e) => format!("Could not load countries: {e}"),
            LoadState::Ready(_) => match self.match_count() {
                0 => "No countries match your filters.".to_owned(),
                1 => "Found 1 country".to_owned(),
                n => format!("Found {n} countries"),
            },
        }
    }

    /// Whether a reset control makes sense right now.
    pub fn show_reset(&self) -> bool {
        self.filter_state().is_active()
            || (self.derived.is_some() && self.match_count() == 0)
    }

    /// How many times the filtered list has been rebuilt.
    pub fn recompute_count(&self) -> usize {
        self.recomputes
    }

    fn refresh(&mut self) {
        let Some(dataset) = self.load.dataset().cloned() else {
            self.derived = None;
            return;
        };
        let key = self.store.state();

        let regions = match self.derived.take() {
            Some(d) if Arc::ptr_eq(&d.dataset, &dataset) => {
                if d.key == key {
                    self.derived = Some(d);
                    return;
                }
                d.regions
            }
            _ => region_options(dataset.countries()),
        };

        let matches = filter_indices(dataset.countries(), &key.search_text, &key.region_filter);
        self.recomputes += 1;
        debug!(
            search = %key.search_text,
            region = %key.region_filter,
            recompute = self.recomputes,
            "filtered list rebuilt"
        );
        self.derived = Some(Derived {
            dataset,
            regions,
            key,
            matches,
        });
    }
}
