//! explorer-core prelude: bring common types and traits into scope for demos.

pub use crate::error::{LoadError, Result};
pub use crate::filter::{derive_regions, filter_countries, region_options, FilterState, RegionOption};
pub use crate::loader::DataSource;
pub use crate::model::{Country, Dataset};
pub use crate::routes::Route;
pub use crate::store::{
    EphemeralStore, FilterStore, History, MemoryHistory, NavigationMode, StoreKind, UrlStore,
};
pub use crate::text::NameMatch;
pub use crate::view::{ExplorerView, LoadState};
