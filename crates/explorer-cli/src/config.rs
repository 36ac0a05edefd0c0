use anyhow::{Context, Result};
use explorer_core::loader::DataSource;
use explorer_core::Route;
use url::Url;

/// Settings shared by every subcommand, resolved from flags and environment.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub source: DataSource,
    /// Origin the pages are served under.
    pub base_url: Url,
}

impl ExplorerConfig {
    pub fn new(source: &str, base_url: &str) -> Result<Self> {
        let source = source
            .parse::<DataSource>()
            .unwrap_or_else(|never| match never {});
        let base_url = Url::parse(base_url)
            .with_context(|| format!("--base-url is not a valid URL: {base_url}"))?;
        Ok(Self { source, base_url })
    }

    /// Absolute address of a page under the base URL.
    pub fn page_url(&self, route: Route) -> Result<Url> {
        self.base_url
            .join(route.path())
            .with_context(|| format!("cannot join {} onto {}", route.path(), self.base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_urls_sit_under_the_base() {
        let cfg = ExplorerConfig::new("countries.json", "http://localhost:5173/").unwrap();
        assert_eq!(cfg.source, DataSource::Path("countries.json".into()));
        assert_eq!(
            cfg.page_url(Route::UrlParams).unwrap().as_str(),
            "http://localhost:5173/url-params"
        );
    }

    #[test]
    fn bad_base_url_is_rejected() {
        assert!(ExplorerConfig::new("x.json", "not a url").is_err());
    }
}
