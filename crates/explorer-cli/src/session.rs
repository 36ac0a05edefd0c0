//! Line-oriented session that drives one filtering page from stdin.
//!
//! The session plays the browser: `search`/`region`/`reset` are the input
//! events, `reload` tears the page down and builds it again, `back` and
//! `forward` move through history.

use crate::render::render_view;
use explorer_core::{Dataset, EphemeralStore, ExplorerView, MemoryHistory, UrlStore};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::debug;

const HELP: &str = "\
commands:
  search <text>    set the name filter (empty clears it)
  region <name>    set the region filter (empty clears it)
  reset            clear both filters
  show             print the current view
  url              print the current address (URL store only)
  back | forward   move through history (URL store only)
  reload           rebuild the page
  help             this text
  quit             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Search(String),
    Region(String),
    Reset,
    Show,
    Url,
    Back,
    Forward,
    Reload,
    Help,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(|c| c == '\r' || c == '\n').trim_start();
        if line.trim_end().is_empty() {
            return None;
        }
        // Only the separator is dropped; the argument keeps its spaces.
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let arg = rest.to_owned();
        Some(match verb.to_ascii_lowercase().as_str() {
            "search" | "s" => SessionCommand::Search(arg),
            "region" | "r" => SessionCommand::Region(arg),
            "reset" => SessionCommand::Reset,
            "show" | "ls" => SessionCommand::Show,
            "url" => SessionCommand::Url,
            "back" => SessionCommand::Back,
            "forward" => SessionCommand::Forward,
            "reload" => SessionCommand::Reload,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            _ => SessionCommand::Unknown(verb.to_owned()),
        })
    }
}

/// The page currently mounted.
pub enum Page {
    Ephemeral(ExplorerView<EphemeralStore>),
    Url(ExplorerView<UrlStore<MemoryHistory>>),
}

pub struct Session {
    dataset: Arc<Dataset>,
    page: Page,
    limit: Option<usize>,
}

impl Session {
    pub fn ephemeral(dataset: Arc<Dataset>) -> Self {
        let page = Page::Ephemeral(ExplorerView::with_dataset(EphemeralStore::new(), dataset.clone()));
        Self {
            dataset,
            page,
            limit: Some(20),
        }
    }

    pub fn url(dataset: Arc<Dataset>, history: MemoryHistory) -> Self {
        let page = Page::Url(ExplorerView::with_dataset(UrlStore::new(history), dataset.clone()));
        Self {
            dataset,
            page,
            limit: Some(20),
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Applies one command. Returns `false` once the session should end.
    pub fn apply(&mut self, cmd: SessionCommand, out: &mut impl Write) -> io::Result<bool> {
        debug!(?cmd, "session command");
        match cmd {
            SessionCommand::Search(v) => {
                self.each(|p| p.set_search_text(&v), |p| p.set_search_text(&v));
                self.show(out)?;
            }
            SessionCommand::Region(v) => {
                self.each(|p| p.set_region_filter(&v), |p| p.set_region_filter(&v));
                self.show(out)?;
            }
            SessionCommand::Reset => {
                self.each(|p| p.reset(), |p| p.reset());
                self.show(out)?;
            }
            SessionCommand::Show => self.show(out)?,
            SessionCommand::Url => match &self.page {
                Page::Url(v) => writeln!(out, "{}", v.store().url())?,
                Page::Ephemeral(_) => writeln!(out, "ephemeral state has no address")?,
            },
            SessionCommand::Back => self.step(true, out)?,
            SessionCommand::Forward => self.step(false, out)?,
            SessionCommand::Reload => {
                self.reload();
                self.show(out)?;
            }
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => return Ok(false),
            SessionCommand::Unknown(verb) => {
                writeln!(out, "unknown command `{verb}`; try `help`")?
            }
        }
        Ok(true)
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        self.show(out)?;
        for line in input.lines() {
            let Some(cmd) = SessionCommand::parse(&line?) else {
                continue;
            };
            if !self.apply(cmd, out)? {
                break;
            }
        }
        Ok(())
    }

    fn show(&self, out: &mut impl Write) -> io::Result<()> {
        let show_reset = match &self.page {
            Page::Ephemeral(v) => {
                render_view(out, v, self.limit)?;
                v.show_reset()
            }
            Page::Url(v) => {
                render_view(out, v, self.limit)?;
                v.show_reset()
            }
        };
        if show_reset {
            writeln!(out, "(type `reset` to clear filters)")?;
        }
        Ok(())
    }

    fn step(&mut self, back: bool, out: &mut impl Write) -> io::Result<()> {
        let Page::Url(v) = &mut self.page else {
            return writeln!(out, "ephemeral state has no history");
        };
        let history = v.store_mut().history_mut();
        let moved = if back { history.back() } else { history.forward() };
        v.sync();
        if !moved {
            writeln!(out, "no history entry in that direction")?;
        }
        self.show(out)
    }

    fn each(
        &mut self,
        on_ephemeral: impl FnOnce(&mut ExplorerView<EphemeralStore>),
        on_url: impl FnOnce(&mut ExplorerView<UrlStore<MemoryHistory>>),
    ) {
        match &mut self.page {
            Page::Ephemeral(v) => on_ephemeral(v),
            Page::Url(v) => on_url(v),
        }
    }

    /// Memory state is dropped with the old page; URL state is read back
    /// from the address the page was showing.
    fn reload(&mut self) {
        let dataset = self.dataset.clone();
        let page = std::mem::replace(
            &mut self.page,
            Page::Ephemeral(ExplorerView::new(EphemeralStore::new())),
        );
        self.page = match page {
            Page::Ephemeral(_) => {
                Page::Ephemeral(ExplorerView::with_dataset(EphemeralStore::new(), dataset))
            }
            Page::Url(view) => {
                let mut history = view.into_store().into_history();
                history.reload();
                Page::Url(ExplorerView::with_dataset(UrlStore::new(history), dataset))
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_core::FilterStore;

    fn dataset() -> Arc<Dataset> {
        Arc::new(
            explorer_core::loader::from_json_str(
                r#"[
                {"cca3":"DEU","name":{"common":"Germany","official":"Germany"},"region":"Europe","population":1},
                {"cca3":"GHA","name":{"common":"Ghana","official":"Ghana"},"region":"Africa","population":2}
            ]"#,
            )
            .unwrap(),
        )
    }

    fn search_text(session: &Session) -> String {
        match session.page() {
            Page::Ephemeral(v) => v.store().search_text(),
            Page::Url(v) => v.store().search_text(),
        }
    }

    #[test]
    fn parse_commands() {
        assert_eq!(
            SessionCommand::parse("search South Africa"),
            Some(SessionCommand::Search("South Africa".into()))
        );
        assert_eq!(
            SessionCommand::parse("  search South \r\n"),
            Some(SessionCommand::Search("South ".into()))
        );
        assert_eq!(SessionCommand::parse("reset "), Some(SessionCommand::Reset));
        assert_eq!(SessionCommand::parse("region"), Some(SessionCommand::Region(String::new())));
        assert_eq!(SessionCommand::parse("   "), None);
        assert_eq!(
            SessionCommand::parse("fly"),
            Some(SessionCommand::Unknown("fly".into()))
        );
    }

    #[test]
    fn reload_divergence() {
        let mut out = Vec::new();

        let mut a = Session::ephemeral(dataset());
        a.run("search gh\nreload\n".as_bytes(), &mut out).unwrap();
        assert_eq!(search_text(&a), "");

        let history = MemoryHistory::open("http://localhost:5173/url-params").unwrap();
        let mut b = Session::url(dataset(), history);
        b.run("search gh\nreload\n".as_bytes(), &mut out).unwrap();
        assert_eq!(search_text(&b), "gh");
    }

    #[test]
    fn output_mentions_matches() {
        let mut out = Vec::new();
        let mut s = Session::ephemeral(dataset()).with_limit(None);
        s.run("region africa\nquit\nsearch never-read\n".as_bytes(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Found 1 country"));
        assert!(text.contains("Ghana [GHA]"));
        assert_eq!(search_text(&s), "");
    }

    #[test]
    fn search_text_keeps_its_spaces() {
        let data = Arc::new(
            explorer_core::loader::from_json_str(
                r#"[
                {"cca3":"ZAF","name":{"common":"South Africa","official":"Republic of South Africa"},"region":"Africa","population":1},
                {"cca3":"KOR","name":{"common":"South Korea","official":"Republic of Korea"},"region":"Asia","population":2},
                {"cca3":"SSD","name":{"common":"South Sudan","official":"Republic of South Sudan"},"region":"Africa","population":3},
                {"cca3":"GRC","name":{"common":"Greece","official":"Hellenic Republic"},"region":"Europe","population":4}
            ]"#,
            )
            .unwrap(),
        );
        let mut out = Vec::new();
        let history = MemoryHistory::open("http://localhost:5173/url-params").unwrap();
        let mut s = Session::url(data, history);
        s.run("search  Korea\n".as_bytes(), &mut out).unwrap();
        assert_eq!(search_text(&s), " Korea");

        let Page::Url(view) = s.page() else {
            panic!("expected the url page");
        };
        assert_eq!(view.match_count(), 1);
        assert_eq!(view.store().url().query(), Some("search=+Korea"));
    }
}
