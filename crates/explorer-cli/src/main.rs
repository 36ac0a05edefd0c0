//! country-explorer — filter the REST Countries list from a terminal
//!
//! Usage examples
//! --------------
//!
//! - Which pages exist and what store backs each
//!   $ country-explorer pages
//!
//! - Region options
//!   $ country-explorer regions
//!
//! - One-shot filter (in-memory state)
//!   $ country-explorer list --search ger --region europe
//!
//! - Open a shared link (URL state)
//!   $ country-explorer open "http://localhost:5173/url-params?search=gh"
//!
//! - Interactive session; compare `reload` on both stores
//!   $ country-explorer session --store ephemeral
//!   $ country-explorer session --store url
//!
//! Data source
//! -----------
//!
//! The dataset is fetched once per invocation from `--source` (default: the
//! public REST Countries endpoint). Point it at a local `.json` or
//! `.json.gz` dump to work offline.
mod args;

use crate::args::{CliArgs, Commands, LogFormatArg, StoreArg};
use anyhow::{bail, Context};
use clap::Parser;
use explorer_cli::config::ExplorerConfig;
use explorer_cli::logging::{init_logging, LogConfig, LogFormat};
use explorer_cli::render::render_view;
use explorer_cli::session::Session;
use explorer_core::prelude::*;
use std::io::{self, IsTerminal};
use std::sync::Arc;
use tracing::warn;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let log_config = LogConfig {
        level_filter: args.verbosity.tracing_level_filter(),
        use_env_filter: !args.verbosity.is_present(),
        format: match args.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: io::stderr().is_terminal(),
    };
    init_logging(&log_config).context("failed to initialize logging")?;

    let config = ExplorerConfig::new(&args.source, &args.base_url)?;

    // One fetch per run, and only for commands that show data.
    let load = || -> anyhow::Result<Arc<Dataset>> {
        let dataset = config
            .source
            .load()
            .with_context(|| format!("failed to load countries from {}", config.source))?;
        Ok(Arc::new(dataset))
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Commands::Pages => {
            for route in Route::ALL {
                let store = route
                    .store_kind()
                    .map_or_else(|| "-".to_owned(), |k| k.to_string());
                println!("{:<12} {:<10} {}", route.path(), store, route.title());
                println!("             {}", route.description());
            }
        }

        Commands::Regions => {
            let dataset = load()?;
            let options = region_options(dataset.countries());
            if options.is_empty() {
                println!("No regions (dataset is empty)");
            }
            for opt in options {
                println!("{} ({})", opt.label, opt.value);
            }
        }

        Commands::List {
            search,
            region,
            limit,
        } => {
            let mut view = ExplorerView::with_dataset(EphemeralStore::new(), load()?);
            view.set_search_text(&search);
            view.set_region_filter(&region);
            render_view(&mut out, &view, limit)?;
        }

        Commands::Open { url, limit } => {
            let store = UrlStore::open(&url).with_context(|| format!("not a valid URL: {url}"))?;
            if Route::from_path(store.url().path()) != Some(Route::UrlParams) {
                warn!(path = store.url().path(), "address is not the url-params page");
            }
            let view = ExplorerView::with_dataset(store, load()?);
            render_view(&mut out, &view, limit)?;
        }

        Commands::Session { store, url } => {
            let mut session = match store {
                StoreArg::Ephemeral => {
                    if url.is_some() {
                        bail!("--url only applies to --store url");
                    }
                    Session::ephemeral(load()?)
                }
                StoreArg::Url => {
                    let start = match url {
                        Some(u) => u,
                        None => config.page_url(Route::UrlParams)?.to_string(),
                    };
                    let history = MemoryHistory::open(&start)
                        .with_context(|| format!("not a valid URL: {start}"))?;
                    Session::url(load()?, history)
                }
            };
            session.run(io::stdin().lock(), &mut out)?;
        }
    }

    Ok(())
}
