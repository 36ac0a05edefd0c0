//! explorer-cli
//! ============
//!
//! Command-line front end for [`explorer-core`]: loads the country list once,
//! then filters it through either an in-memory store or a URL store backed by
//! an in-process history stack.
//!
//! ```text
//! country-explorer regions
//! country-explorer list --search ger --region europe
//! country-explorer open "http://localhost:5173/url-params?region=africa&search=gh"
//! country-explorer session --store ephemeral
//! ```
//!
//! The modules are public so the binary's behaviour can be tested without a
//! terminal.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod logging;
pub mod render;
pub mod session;
