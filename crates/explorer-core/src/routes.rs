// crates/explorer-core/src/routes.rs
use crate::store::StoreKind;
use serde::{Deserialize, Serialize};

/// The three pages of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Landing page explaining the two approaches.
    Home,
    /// Filters kept in component memory.
    ComponentState,
    /// Filters kept in the query string.
    UrlParams,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::ComponentState, Route::UrlParams];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::ComponentState => "/use-state",
            Route::UrlParams => "/url-params",
        }
    }

    /// Matches a request path; a trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }

    /// The store a filtering page runs on; `None` for the landing page.
    pub fn store_kind(self) -> Option<StoreKind> {
        match self {
            Route::Home => None,
            Route::ComponentState => Some(StoreKind::Ephemeral),
            Route::UrlParams => Some(StoreKind::Url),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "About This Demo",
            Route::ComponentState => "Component State",
            Route::UrlParams => "URL Search Params",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Route::Home => {
                "Two ways of holding filter state over the same country list."
            }
            Route::ComponentState => {
                "Filtering is held in the page's own memory. It resets when you reload and cannot be shared as a link."
            }
            Route::UrlParams => {
                "Filters are saved in the URL, so they survive a reload and can be shared."
            }
        }
    }
}
