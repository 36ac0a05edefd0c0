// crates/explorer-core/src/store/url_state.rs
use super::history::{History, MemoryHistory, NavigationMode};
use super::{FilterStore, StoreKind};
use crate::filter::FilterState;
use tracing::trace;
use url::Url;

/// Query key holding the name search.
pub const SEARCH_KEY: &str = "search";
/// Query key holding the region filter.
pub const REGION_KEY: &str = "region";

/// Filter state whose only home is the query string of the current address.
///
/// The store keeps no copy: every read parses the URL the [`History`]
/// reports, so the same address always yields the same [`FilterState`].
/// Moves made through the history itself ([`MemoryHistory::back`], a reload)
/// are seen by the next read. A history mirroring an outside address bar must
/// be brought up to date before reading.
///
/// Field updates replace the current history entry (typing does not flood
/// the back button); [`reset`](FilterStore::reset) pushes a new one.
#[derive(Debug, Clone)]
pub struct UrlStore<H: History> {
    history: H,
}

impl<H: History> UrlStore<H> {
    pub fn new(history: H) -> Self {
        Self { history }
    }

    pub fn url(&self) -> &Url {
        self.history.current()
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Direct access for back/forward; the store re-reads on the next call.
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn into_history(self) -> H {
        self.history
    }

    fn write(&mut self, key: &str, value: &str) {
        let value = (!value.is_empty()).then_some(value);
        let next = with_param(self.history.current(), key, value);
        trace!(url = %next, "replace");
        self.history.navigate(next, NavigationMode::Replace);
    }
}

impl UrlStore<MemoryHistory> {
    /// Opens an in-memory store on `start`.
    pub fn open(start: &str) -> Result<Self, url::ParseError> {
        MemoryHistory::open(start).map(Self::new)
    }
}

impl<H: History> FilterStore for UrlStore<H> {
    fn state(&self) -> FilterState {
        let url = self.history.current();
        FilterState {
            search_text: first_value(url, SEARCH_KEY),
            region_filter: first_value(url, REGION_KEY),
        }
    }

    fn set_search_text(&mut self, value: &str) {
        self.write(SEARCH_KEY, value);
    }

    fn set_region_filter(&mut self, value: &str) {
        self.write(REGION_KEY, value);
    }

    fn reset(&mut self) {
        let current = self.history.current();
        let next = with_param(&with_param(current, SEARCH_KEY, None), REGION_KEY, None);
        trace!(url = %next, "push");
        self.history.navigate(next, NavigationMode::Push);
    }

    fn kind(&self) -> StoreKind {
        StoreKind::Url
    }
}

/// Decoded value of the first `key` pair, or empty when absent.
pub(crate) fn first_value(url: &Url, key: &str) -> String {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .unwrap_or_default()
}

/// Returns `url` with `key` set to `value`, or removed when `value` is `None`.
///
/// A set replaces the first occurrence in place and drops any repeats; a
/// missing key is appended. Every other pair keeps its position.
pub(crate) fn with_param(url: &Url, key: &str, value: Option<&str>) -> Url {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut placed = false;
    for (k, v) in url.query_pairs() {
        if k != key {
            pairs.push((k.into_owned(), v.into_owned()));
        } else if let (Some(value), false) = (value, placed) {
            pairs.push((key.to_owned(), value.to_owned()));
            placed = true;
        }
    }
    if let (Some(value), false) = (value, placed) {
        pairs.push((key.to_owned(), value.to_owned()));
    }

    let mut next = url.clone();
    if pairs.is_empty() {
        next.set_query(None);
    } else {
        next.query_pairs_mut().clear().extend_pairs(&pairs);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(start: &str) -> UrlStore<MemoryHistory> {
        UrlStore::open(start).unwrap()
    }

    #[test]
    fn absent_keys_read_as_empty() {
        let s = store("https://demo.test/url-params");
        assert_eq!(s.state(), FilterState::default());
    }

    #[test]
    fn set_then_read_back() {
        let mut s = store("https://demo.test/url-params");
        s.set_search_text("Ger");
        assert_eq!(s.search_text(), "Ger");
        assert_eq!(s.url().query(), Some("search=Ger"));
    }

    #[test]
    fn empty_value_removes_the_key() {
        let mut s = store("https://demo.test/url-params?search=Ger&region=europe");
        s.set_search_text("");
        assert_eq!(s.url().query(), Some("region=europe"));
        s.set_region_filter("");
        assert_eq!(s.url().query(), None);
        assert_eq!(s.url().as_str(), "https://demo.test/url-params");
    }

    #[test]
    fn setting_one_key_leaves_the_other() {
        let mut s = store("https://demo.test/url-params?region=asia");
        s.set_search_text("ind");
        assert_eq!(s.state(), FilterState::new("ind", "asia"));
    }

    #[test]
    fn values_are_form_encoded() {
        let mut s = store("https://demo.test/url-params");
        s.set_search_text("South Africa & co");
        assert_eq!(s.url().query(), Some("search=South+Africa+%26+co"));
        assert_eq!(s.search_text(), "South Africa & co");
    }

    #[test]
    fn first_occurrence_wins_and_set_collapses_repeats() {
        let mut s = store("https://demo.test/?search=a&page=2&search=b");
        assert_eq!(s.search_text(), "a");
        s.set_search_text("c");
        assert_eq!(s.url().query(), Some("search=c&page=2"));
    }

    #[test]
    fn field_updates_replace_reset_pushes() {
        let mut s = store("https://demo.test/url-params");
        s.set_search_text("G");
        s.set_search_text("Ge");
        s.set_region_filter("europe");
        assert_eq!(s.history().len(), 1);
        s.reset();
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.state(), FilterState::default());
        assert!(s.history_mut().back());
        assert_eq!(s.state(), FilterState::new("Ge", "europe"));
    }

    #[test]
    fn reset_keeps_foreign_keys_and_fragment() {
        let mut s = store("https://demo.test/url-params?lang=de&search=x&region=y#top");
        s.reset();
        assert_eq!(s.url().as_str(), "https://demo.test/url-params?lang=de#top");
    }

    #[test]
    fn reads_follow_history_moves_without_a_write() {
        let mut s = store("https://demo.test/url-params?search=gh");
        s.reset();
        assert_eq!(s.search_text(), "");
        assert!(s.history_mut().back());
        assert_eq!(s.search_text(), "gh");
        assert!(s.history_mut().forward());
        assert_eq!(s.state(), FilterState::default());
    }
}
