// crates/explorer-core/src/store/history.rs
use url::Url;

/// How a URL change lands in the navigation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// New entry; back returns to the previous address.
    Push,
    /// Overwrite the current entry; back/forward are unaffected.
    Replace,
}

/// The address bar plus its back/forward stack.
///
/// [`UrlStore`](super::UrlStore) reads and writes filter state exclusively
/// through this trait, so the same store runs against a browser window or an
/// in-process stack.
pub trait History {
    /// The current address.
    fn current(&self) -> &Url;

    /// Move to `url`, pushing or replacing the current entry.
    fn navigate(&mut self, url: Url, mode: NavigationMode);
}

/// In-memory history stack.
///
/// Behaves like a browser tab: pushing discards forward entries, replacing
/// overwrites in place, `back`/`forward` move the cursor.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Url>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(start: Url) -> Self {
        Self {
            entries: vec![start],
            index: 0,
        }
    }

    /// Parses `start` and opens a history on it.
    pub fn open(start: &str) -> Result<Self, url::ParseError> {
        Url::parse(start).map(Self::new)
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn entries(&self) -> &[Url] {
        &self.entries
    }

    /// Returns false when already at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Returns false when already at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    /// A reload keeps the address and the stack.
    pub fn reload(&mut self) -> &Url {
        self.current()
    }
}

impl History for MemoryHistory {
    fn current(&self) -> &Url {
        &self.entries[self.index]
    }

    fn navigate(&mut self, url: Url, mode: NavigationMode) {
        match mode {
            NavigationMode::Replace => self.entries[self.index] = url,
            NavigationMode::Push => {
                self.entries.truncate(self.index + 1);
                self.entries.push(url);
                self.index += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn replace_keeps_length() {
        let mut h = MemoryHistory::new(url("http://x/a"));
        h.navigate(url("http://x/b"), NavigationMode::Replace);
        assert_eq!(h.len(), 1);
        assert_eq!(h.current().path(), "/b");
    }

    #[test]
    fn push_drops_forward_entries() {
        let mut h = MemoryHistory::new(url("http://x/a"));
        h.navigate(url("http://x/b"), NavigationMode::Push);
        h.navigate(url("http://x/c"), NavigationMode::Push);
        assert!(h.back());
        assert!(h.back());
        assert!(!h.back());
        h.navigate(url("http://x/d"), NavigationMode::Push);
        assert_eq!(h.len(), 2);
        assert!(!h.forward());
        assert_eq!(h.current().path(), "/d");
    }
}
