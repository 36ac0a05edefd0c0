use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use explorer_core::loader::DEFAULT_SOURCE_URL;

/// CLI arguments for country-explorer
#[derive(Debug, Parser)]
#[command(
    name = "country-explorer",
    version,
    about = "Filter the REST Countries list with ephemeral or URL-backed filter state"
)]
pub struct CliArgs {
    /// Dataset location: an http(s) URL or a local .json / .json.gz file
    #[arg(
        short = 's',
        long = "source",
        global = true,
        env = "COUNTRY_EXPLORER_SOURCE",
        default_value = DEFAULT_SOURCE_URL
    )]
    pub source: String,

    /// Origin the demo pages live under; used to build URL-store addresses
    #[arg(
        long = "base-url",
        global = true,
        env = "COUNTRY_EXPLORER_BASE_URL",
        default_value = "http://localhost:5173/"
    )]
    pub base_url: String,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only)
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format
    #[arg(long = "log-format", value_enum, default_value = "compact", global = true)]
    pub log_format: LogFormatArg,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the demo pages and which store each one uses
    Pages,

    /// List the region options derived from the dataset
    Regions,

    /// One-shot filter using in-memory state
    List {
        /// Case-insensitive substring of the country name
        #[arg(long, default_value = "")]
        search: String,

        /// Region to keep (case-insensitive, exact)
        #[arg(long, default_value = "")]
        region: String,

        /// Print at most this many countries
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Open a shared URL-params link and show the view it describes
    Open {
        /// Full address, e.g. http://localhost:5173/url-params?search=ger
        url: String,

        #[arg(long)]
        limit: Option<usize>,
    },

    /// Interactive session on stdin (type `help` for commands)
    Session {
        /// Which store holds the filters
        #[arg(long, value_enum, default_value = "url")]
        store: StoreArg,

        /// Starting address for the URL store (default: <base-url>/url-params)
        #[arg(long)]
        url: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreArg {
    Ephemeral,
    Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
