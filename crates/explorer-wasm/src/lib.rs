//! explorer-wasm — WebAssembly bindings for explorer-core
//!
//! Exposes one `Explorer` class per filtering page. The host page does the
//! single `fetch` of the country list and hands the JSON text over; the class
//! then owns filtering and, on the URL page, the address bar.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { Explorer } from 'explorer-wasm';
//!
//! await init();
//! const page = new Explorer(location.pathname); // "/use-state" or "/url-params"
//! try {
//!   const res = await fetch('https://restcountries.com/v3.1/all?fields=cca3,name,region,population,capital,flags');
//!   page.load_json(await res.text());
//! } catch (e) {
//!   page.fail(String(e));
//! }
//! page.set_search('ger');            // URL page: replaceState(...?search=ger)
//! console.log(page.summary(), page.countries());
//! window.addEventListener('popstate', () => page.sync());
//! ```
//!
//! Notes
//! -----
//! - On `/url-params` the filters live in `window.location`; field edits use
//!   `history.replaceState`, reset uses `history.pushState`.
//! - On `/use-state` the filters live in the instance and vanish with it.
use explorer_core::{
    EphemeralStore, ExplorerView, FilterStore, History, LoadError, LoadState, NavigationMode,
    Route, UrlStore,
};
use serde_wasm_bindgen::to_value;
use url::Url;
use wasm_bindgen::prelude::*;
use web_sys::History as WebHistory;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing country explorer WASM module...".into());
}

/* --------------------------------------------------------------------------
   Browser history
-------------------------------------------------------------------------- */

/// [`History`] over `window.history`.
///
/// `current()` answers from the last address read; [`refresh`](Self::refresh)
/// re-reads `window.location`. [`Explorer`] refreshes at the start of every
/// call, so a back/forward the host never reported is still seen. A detached
/// instance has no window and only tracks the address in memory.
#[derive(Debug, Clone)]
pub struct BrowserHistory {
    current: Url,
    window: Option<WebHistory>,
}

impl BrowserHistory {
    /// Binds to the page's window.
    pub fn attach() -> Result<Self, JsError> {
        let window = web_sys::window().ok_or_else(|| JsError::new("no global window"))?;
        let href = window
            .location()
            .href()
            .map_err(|_| JsError::new("cannot read window.location"))?;
        let history = window
            .history()
            .map_err(|_| JsError::new("window.history unavailable"))?;
        Ok(Self {
            current: Url::parse(&href)?,
            window: Some(history),
        })
    }

    /// An address with no window behind it (server rendering, tests).
    pub fn detached(address: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            current: Url::parse(address)?,
            window: None,
        })
    }

    pub fn is_attached(&self) -> bool {
        self.window.is_some()
    }

    /// Picks up the address the browser is showing now.
    pub fn refresh(&mut self) {
        if self.window.is_none() {
            return;
        }
        let href = web_sys::window().and_then(|w| w.location().href().ok());
        if let Some(url) = href.and_then(|h| Url::parse(&h).ok()) {
            self.current = url;
        }
    }
}

impl History for BrowserHistory {
    fn current(&self) -> &Url {
        &self.current
    }

    fn navigate(&mut self, url: Url, mode: NavigationMode) {
        if let Some(history) = &self.window {
            let result = match mode {
                NavigationMode::Push => {
                    history.push_state_with_url(&JsValue::NULL, "", Some(url.as_str()))
                }
                NavigationMode::Replace => {
                    history.replace_state_with_url(&JsValue::NULL, "", Some(url.as_str()))
                }
            };
            if let Err(e) = result {
                web_sys::console::warn_2(&"history update rejected".into(), &e);
            }
        }
        self.current = url;
    }
}

/* --------------------------------------------------------------------------
   Explorer
-------------------------------------------------------------------------- */

enum Page {
    Ephemeral(ExplorerView<EphemeralStore>),
    Url(ExplorerView<UrlStore<BrowserHistory>>),
}

/// Runs the same expression against whichever view is mounted.
macro_rules! with_view {
    ($page:expr, $v:ident => $body:expr) => {
        match $page {
            Page::Ephemeral($v) => $body,
            Page::Url($v) => $body,
        }
    };
}

/// One filtering page.
#[wasm_bindgen]
pub struct Explorer {
    page: Page,
}

impl Explorer {
    fn for_route(
        route: Route,
        history: impl FnOnce() -> Result<BrowserHistory, JsError>,
    ) -> Result<Explorer, JsError> {
        let page = match route {
            Route::ComponentState => Page::Ephemeral(ExplorerView::new(EphemeralStore::new())),
            Route::UrlParams => Page::Url(ExplorerView::new(UrlStore::new(history()?))),
            Route::Home => return Err(JsError::new("the landing page has no filters")),
        };
        Ok(Explorer { page })
    }
}

#[wasm_bindgen]
impl Explorer {
    /// Mounts the page at `path`, reading the live address for the URL page.
    #[wasm_bindgen(constructor)]
    pub fn new(path: &str) -> Result<Explorer, JsError> {
        let route = Route::from_path(path)
            .ok_or_else(|| JsError::new(&format!("unknown page: {path}")))?;
        Self::for_route(route, BrowserHistory::attach)
    }

    /// Mounts the page an absolute address points at, without touching the
    /// window.
    pub fn at_address(address: &str) -> Result<Explorer, JsError> {
        let history = BrowserHistory::detached(address)?;
        let route = Route::from_path(history.current().path())
            .ok_or_else(|| JsError::new(&format!("unknown page: {address}")))?;
        Self::for_route(route, move || Ok(history))
    }

    /// Installs the fetched JSON. A malformed payload leaves the page in the
    /// failed state and is also returned as an error.
    pub fn load_json(&mut self, json: &str) -> Result<(), JsError> {
        match explorer_core::loader::from_json_str(json) {
            Ok(dataset) => {
                self.set_load_state(LoadState::from(Ok(dataset)));
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                self.set_load_state(LoadState::Failed(e));
                Err(JsError::new(&message))
            }
        }
    }

    /// Records that the host's fetch failed.
    pub fn fail(&mut self, message: String) {
        self.set_load_state(LoadState::Failed(LoadError::Request(message)));
    }

    pub fn set_search(&mut self, value: &str) {
        self.follow_location();
        with_view!(&mut self.page, v => v.set_search_text(value))
    }

    pub fn set_region(&mut self, value: &str) {
        self.follow_location();
        with_view!(&mut self.page, v => v.set_region_filter(value))
    }

    pub fn reset(&mut self) {
        self.follow_location();
        with_view!(&mut self.page, v => v.reset())
    }

    /// Re-reads the address. Every other method does this too; call it from
    /// a `popstate` listener to re-render eagerly.
    pub fn sync(&mut self) {
        self.follow_location();
    }

    pub fn search_text(&mut self) -> String {
        self.follow_location();
        with_view!(&self.page, v => v.store().search_text())
    }

    pub fn region_filter(&mut self) -> String {
        self.follow_location();
        with_view!(&self.page, v => v.store().region_filter())
    }

    pub fn store_kind(&self) -> String {
        with_view!(&self.page, v => v.store().kind().to_string())
    }

    /// Current address on the URL page, `undefined` otherwise.
    pub fn address(&mut self) -> Option<String> {
        self.follow_location();
        match &self.page {
            Page::Url(v) => Some(v.store().url().to_string()),
            Page::Ephemeral(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        with_view!(&self.page, v => v.is_loading())
    }

    pub fn match_count(&mut self) -> usize {
        self.follow_location();
        with_view!(&self.page, v => v.match_count())
    }

    pub fn summary(&mut self) -> String {
        self.follow_location();
        with_view!(&self.page, v => v.summary())
    }

    pub fn show_reset(&mut self) -> bool {
        self.follow_location();
        with_view!(&self.page, v => v.show_reset())
    }

    /// `[{ label, value }]` for the region select.
    pub fn regions(&mut self) -> Result<JsValue, JsError> {
        self.follow_location();
        Ok(with_view!(&self.page, v => to_value(v.regions()))?)
    }

    /// Matching countries as plain objects, dataset order.
    pub fn countries(&mut self) -> Result<JsValue, JsError> {
        self.follow_location();
        Ok(with_view!(&self.page, v => to_value(&v.filtered()))?)
    }

    /// Same as `countries()`, serialized to a JSON string.
    pub fn countries_json(&mut self) -> Result<String, JsError> {
        self.follow_location();
        Ok(with_view!(&self.page, v => serde_json::to_string(&v.filtered()))?)
    }
}

impl Explorer {
    fn follow_location(&mut self) {
        if let Page::Url(v) = &mut self.page {
            v.store_mut().history_mut().refresh();
            v.sync();
        }
    }

    fn set_load_state(&mut self, state: LoadState) {
        with_view!(&mut self.page, v => v.set_load_state(state))
    }
}
